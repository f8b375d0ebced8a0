//! Vectorized value model.
//!
//! This crate provides:
//! - [`Value`]: closed sum type over vector, table, code-like and opaque kinds
//! - [`Kind`]: the runtime kind tag, with host-facing kind names
//! - [`Heap`]: shared immutable storage behind every heap payload
//! - [`na`]: missing-value encodings and double canonicalization
//!
//! # Preconditions
//!
//! Strings are vectors of [`CharId`] handles. Every handle in one value graph
//! must come from the same [`vh_ir::CharInterner`], so that handle identity
//! implies text equality. Values are immutable and cannot form cycles.

mod composite;
mod error;
mod heap;
mod kind;
pub mod na;
mod value;
mod vector;

pub use composite::{
    ClosureValue, Complex, NodeKind, NodeValue, OpaqueKind, OpaqueValue, TableValue,
};
pub use error::ValueError;
pub use heap::Heap;
pub use kind::Kind;
pub use value::Value;
pub use vector::Vector;

pub use vh_ir::{CharId, CharInterner, ObjectId};
