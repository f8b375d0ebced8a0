//! Kind tags.

use std::fmt;

/// Runtime kind of a [`Value`](crate::Value).
///
/// One tag per `Value` variant, except compound nodes and opaque values,
/// which report the finer kind they carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Logical,
    Integer,
    Double,
    Complex,
    String,
    Raw,
    List,
    Table,
    Symbol,
    Pairlist,
    Call,
    Dots,
    Closure,
    Environment,
    ExternalPtr,
    Bytecode,
    Builtin,
    Char,
}

impl Kind {
    /// Name reported to callers, e.g. in "Unsupported type" errors.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Null => "NULL",
            Kind::Logical => "logical",
            Kind::Integer => "integer",
            Kind::Double => "double",
            Kind::Complex => "complex",
            Kind::String => "character",
            Kind::Raw => "raw",
            Kind::List => "list",
            Kind::Table => "data.frame",
            Kind::Symbol => "symbol",
            Kind::Pairlist => "pairlist",
            Kind::Call => "language",
            Kind::Dots => "...",
            Kind::Closure => "closure",
            Kind::Environment => "environment",
            Kind::ExternalPtr => "externalptr",
            Kind::Bytecode => "bytecode",
            Kind::Builtin => "builtin",
            Kind::Char => "char",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
