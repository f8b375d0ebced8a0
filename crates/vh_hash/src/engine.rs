//! The configured hashing engine and its entry points.

use rayon::prelude::*;
use vh_stack::Depth;
use vh_value::Value;

use crate::{equal, identical, length, object, scalar};
use crate::{HashConfig, HashError, HashResult};

/// Hashing and equality under one [`HashConfig`].
///
/// Stateless apart from its configuration, so one engine may be shared
/// freely across threads.
#[derive(Clone, Debug, Default)]
pub struct HashEngine {
    config: HashConfig,
}

impl HashEngine {
    pub fn new(config: HashConfig) -> Self {
        HashEngine { config }
    }

    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    #[inline]
    fn depth(&self) -> Depth {
        Depth::new(self.config.max_depth)
    }

    /// Element count used by the vectorized entry points.
    pub fn effective_length(&self, x: &Value) -> HashResult<usize> {
        length::effective_length(x)
    }

    /// Hash of position `i` of `x`.
    pub fn hash_scalar(&self, x: &Value, i: usize) -> HashResult<i32> {
        scalar::hash_scalar(x, i, self.depth())
    }

    /// One fingerprint for the whole of `x`.
    pub fn hash_object(&self, x: &Value) -> HashResult<i32> {
        object::hash_object(x, self.depth())
    }

    /// Whether `x[i]` equals `y[j]`.
    pub fn equal_scalar(&self, x: &Value, i: usize, y: &Value, j: usize) -> HashResult<bool> {
        equal::equal_scalar(x, i, y, j, self.depth())
    }

    /// Deep structural identity of two whole values.
    pub fn identical(&self, a: &Value, b: &Value) -> HashResult<bool> {
        identical::identical(a, b, self.depth())
    }

    /// One hash per position of `x`.
    #[tracing::instrument(level = "debug", skip_all, fields(kind = %x.kind(), len = tracing::field::Empty))]
    pub fn vector_hash(&self, x: &Value) -> HashResult<Vec<i32>> {
        let n = length::effective_length(x)?;
        tracing::Span::current().record("len", n);
        let depth = self.depth();
        self.each_position(n, |i| scalar::hash_scalar(x, i, depth))
    }

    /// One fingerprint for the whole of `x`.
    #[tracing::instrument(level = "debug", skip_all, fields(kind = %x.kind()))]
    pub fn whole_value_hash(&self, x: &Value) -> HashResult<i32> {
        self.hash_object(x)
    }

    /// Compare every position of `x` against the single position of `y`.
    ///
    /// `x` and `y` must have the same kind and `y` must have effective
    /// length 1.
    #[tracing::instrument(level = "debug", skip_all, fields(kind = %x.kind(), len = tracing::field::Empty))]
    pub fn vector_equal(&self, x: &Value, y: &Value) -> HashResult<Vec<bool>> {
        if x.kind() != y.kind() {
            return Err(HashError::TypeMismatch {
                x: x.kind().name(),
                y: y.kind().name(),
            });
        }
        let y_len = length::effective_length(y)?;
        if y_len != 1 {
            return Err(HashError::ArityMismatch { len: y_len });
        }

        let n = length::effective_length(x)?;
        tracing::Span::current().record("len", n);
        let depth = self.depth();
        self.each_position(n, |i| equal::equal_scalar(x, i, y, 0, depth))
    }

    /// Evaluate `f` at every position in `0..n`, in parallel for long inputs.
    ///
    /// Output order matches position order either way. The first error seen
    /// aborts the whole call.
    fn each_position<T, F>(&self, n: usize, f: F) -> HashResult<Vec<T>>
    where
        T: Send,
        F: Fn(usize) -> HashResult<T> + Sync + Send,
    {
        if n >= self.config.parallel_threshold {
            tracing::debug!(n, threads = rayon::current_num_threads(), "parallel dispatch");
            (0..n).into_par_iter().map(f).collect()
        } else {
            (0..n).map(f).collect()
        }
    }
}
