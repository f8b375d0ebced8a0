//! Errors raised while building values.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("names must have length {expected}, not {got}")]
    NamesLength { expected: usize, got: usize },

    #[error("cannot attach names to a value of type {kind}")]
    NotAVector { kind: &'static str },
}
