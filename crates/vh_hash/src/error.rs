//! Error types for hashing and equality.
//!
//! Every error is fatal for the call that raised it: the in-flight vectorized
//! operation is abandoned and no partial output is returned.

use thiserror::Error;
use vh_stack::DepthExceeded;
use vh_value::Kind;

pub type HashResult<T> = Result<T, HashError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HashError {
    /// The value kind has no hash or equality defined.
    #[error("Unsupported type {kind}")]
    UnsupportedType { kind: &'static str },

    /// Table row-identity metadata is missing or malformed, or a column is
    /// shorter than the row count.
    #[error("Corrupt data frame: {reason}")]
    CorruptStructure { reason: String },

    /// Equality requested across different kinds.
    #[error("`x` and `y` must have same types, not {x} and {y}")]
    TypeMismatch { x: &'static str, y: &'static str },

    /// Equality comparand does not have exactly one element.
    #[error("`y` must have length 1, not {len}")]
    ArityMismatch { len: usize },

    /// A position past the end of a vector.
    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Nesting deeper than the configured ceiling.
    #[error("maximum recursion depth {max} exceeded")]
    DepthExceeded { max: usize },
}

/// Fieldless error category, for matching without destructuring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashErrorKind {
    UnsupportedType,
    CorruptStructure,
    TypeMismatch,
    ArityMismatch,
    IndexOutOfBounds,
    DepthExceeded,
}

impl HashError {
    pub fn kind(&self) -> HashErrorKind {
        match self {
            HashError::UnsupportedType { .. } => HashErrorKind::UnsupportedType,
            HashError::CorruptStructure { .. } => HashErrorKind::CorruptStructure,
            HashError::TypeMismatch { .. } => HashErrorKind::TypeMismatch,
            HashError::ArityMismatch { .. } => HashErrorKind::ArityMismatch,
            HashError::IndexOutOfBounds { .. } => HashErrorKind::IndexOutOfBounds,
            HashError::DepthExceeded { .. } => HashErrorKind::DepthExceeded,
        }
    }

    #[cold]
    pub(crate) fn unsupported(kind: Kind) -> Self {
        HashError::UnsupportedType { kind: kind.name() }
    }

    #[cold]
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        HashError::CorruptStructure {
            reason: reason.into(),
        }
    }
}

impl From<DepthExceeded> for HashError {
    fn from(err: DepthExceeded) -> Self {
        HashError::DepthExceeded { max: err.max }
    }
}
