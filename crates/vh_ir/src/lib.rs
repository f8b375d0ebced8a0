//! Identity handles for the vh value model.
//!
//! This crate provides:
//! - [`CharId`]: handle of one interned text unit, produced by [`CharInterner`]
//! - [`ObjectId`]: per-instance identity of opaque values
//! - [`Identity`]: the seam the hashing engine uses to hash either by handle
//!
//! Interning happens here, upstream of the engine. The engine's string
//! semantics (hash and compare by handle) are only sound because every
//! `CharId` in a value graph comes from the same interner.

mod char_id;
mod interner;
mod object_id;

pub use char_id::CharId;
pub use interner::{CharInterner, InternError};
pub use object_id::ObjectId;

/// A value identified purely by a stable handle.
///
/// Implementors expose the handle as a 64-bit integer so it can be fed to
/// the 64-bit integer hash.
pub trait Identity: Copy + Eq {
    fn handle(self) -> i64;
}
