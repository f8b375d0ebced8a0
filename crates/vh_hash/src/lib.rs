//! Structural hashing and elementwise equality over vectorized values.
//!
//! This crate provides:
//! - Numeric primitives ([`hash_combine`], [`hash_double`], [`hash_int64`])
//! - Length resolution, per-position hash and equality, whole-value hash
//! - The three entry points: [`vector_hash`], [`whole_value_hash`],
//!   [`vector_equal`]
//! - [`HashEngine`] for running them under a custom [`HashConfig`]
//!
//! # Contract
//!
//! Whenever `equal_scalar(x, i, y, j)` holds, `hash_scalar(x, i)` and
//! `hash_scalar(y, j)` are identical. Missing values and NaNs each collapse
//! to one canonical class under both operations.
//!
//! # Example
//!
//! ```text
//! let x = Value::integer(vec![1, NA_INTEGER, 3]);
//! let hashes = vector_hash(&x)?;                       // three hashes
//! let eq = vector_equal(&x, &Value::integer(vec![NA_INTEGER]))?;
//! assert_eq!(eq, vec![false, true, false]);
//! ```
//!
//! # Recursion
//!
//! Nested lists, tables, node heads and closures are walked recursively
//! under an explicit depth ceiling ([`HashConfig::max_depth`]); stack space
//! is grown on demand. Value graphs are assumed acyclic.

mod config;
mod engine;
mod equal;
mod error;
mod identical;
mod length;
mod object;
mod primitives;
mod scalar;

use std::sync::Once;

use vh_value::Value;

pub use config::{HashConfig, MAX_DEPTH_ENV, PARALLEL_THRESHOLD_ENV};
pub use engine::HashEngine;
pub use error::{HashError, HashErrorKind, HashResult};
pub use primitives::{
    hash_combine, hash_double, hash_fold, hash_identity, hash_int64, COMBINE_CONSTANT,
};

/// One hash per position of `x`, under the default configuration.
pub fn vector_hash(x: &Value) -> HashResult<Vec<i32>> {
    HashEngine::default().vector_hash(x)
}

/// One fingerprint for the whole of `x`, under the default configuration.
pub fn whole_value_hash(x: &Value) -> HashResult<i32> {
    HashEngine::default().whole_value_hash(x)
}

/// Compare every position of `x` with the single position of `y`, under
/// the default configuration.
pub fn vector_equal(x: &Value, y: &Value) -> HashResult<Vec<bool>> {
    HashEngine::default().vector_equal(x, y)
}

pub fn effective_length(x: &Value) -> HashResult<usize> {
    length::effective_length(x)
}

pub fn hash_scalar(x: &Value, i: usize) -> HashResult<i32> {
    HashEngine::default().hash_scalar(x, i)
}

pub fn hash_object(x: &Value) -> HashResult<i32> {
    HashEngine::default().hash_object(x)
}

pub fn equal_scalar(x: &Value, i: usize, y: &Value, j: usize) -> HashResult<bool> {
    HashEngine::default().equal_scalar(x, i, y, j)
}

pub fn identical(a: &Value, b: &Value) -> HashResult<bool> {
    HashEngine::default().identical(a, b)
}

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber for this crate's spans and events.
///
/// Does nothing unless `RUST_LOG` holds a valid filter, and nothing after the
/// first call. `RUST_LOG=vh_hash=debug` shows one span per `vector_hash`,
/// `whole_value_hash` and `vector_equal` call (with `kind` and `len`) plus
/// the parallel dispatch events; `vh_hash::config=warn` is enough to see
/// rejected configuration variables.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        // A host that already installed a subscriber keeps it.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init();
    });
}
