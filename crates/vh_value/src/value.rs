//! The `Value` sum type and its factory methods.
//!
//! # Heap Enforcement
//!
//! All heap storage goes through factory methods on `Value`. `Heap<T>` has a
//! crate-private constructor, so external code cannot assemble payloads
//! directly:
//!
//! ```text
//! let v = Value::integer(vec![1, 2, 3]);               // OK
//! let t = Value::table(vec![(id, v)], 3);              // OK
//! let v = Value::Integer(Vector::new(vec![1]));        // ERROR: Vector::new is pub(crate)
//! ```
//!
//! # Thread Safety
//!
//! Payloads are `Arc`-shared and immutable, so `Value` is `Send + Sync` and
//! clones are cheap.

use std::fmt;

use vh_ir::{CharId, CharInterner, ObjectId};

use crate::na::{NA_INTEGER, NA_LOGICAL};
use crate::{
    ClosureValue, Complex, Kind, NodeKind, NodeValue, OpaqueKind, OpaqueValue, TableValue,
    ValueError, Vector,
};

/// A vectorized runtime value.
#[derive(Clone)]
pub enum Value {
    /// Zero-length, no content.
    Null,

    // Plain vectors
    /// Logical vector: `1`, `0`, or `NA_LOGICAL`.
    Logical(Vector<i32>),
    /// Integer vector; `NA_INTEGER` marks missing.
    Integer(Vector<i32>),
    /// Double vector; see [`crate::na`] for the missing/NaN encodings.
    Double(Vector<f64>),
    Complex(Vector<Complex>),
    /// Vector of interned text handles; `CharId::NA` marks missing.
    String(Vector<CharId>),
    Raw(Vector<u8>),
    /// Ordered heterogeneous list.
    List(Vector<Value>),

    /// Table of equal-length columns.
    Table(TableValue),

    // Code-like structures
    /// Interned name.
    Symbol(CharId),
    /// Head/tail pair (pairlists, calls, dots).
    Node(NodeValue),
    Closure(ClosureValue),

    // Identity-only
    Opaque(OpaqueValue),
    /// A bare interned text unit.
    Char(CharId),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Logical vector from optional booleans (`None` is missing).
    pub fn logical(values: impl IntoIterator<Item = Option<bool>>) -> Self {
        let raw = values
            .into_iter()
            .map(|v| v.map_or(NA_LOGICAL, i32::from))
            .collect();
        Value::Logical(Vector::new(raw))
    }

    /// Logical vector from raw storage.
    pub fn logical_raw(raw: Vec<i32>) -> Self {
        Value::Logical(Vector::new(raw))
    }

    /// Integer vector from raw storage (`NA_INTEGER` is missing).
    pub fn integer(raw: Vec<i32>) -> Self {
        Value::Integer(Vector::new(raw))
    }

    /// Integer vector from optional values (`None` is missing).
    pub fn integer_opt(values: impl IntoIterator<Item = Option<i32>>) -> Self {
        let raw = values
            .into_iter()
            .map(|v| v.unwrap_or(NA_INTEGER))
            .collect();
        Value::Integer(Vector::new(raw))
    }

    pub fn double(values: Vec<f64>) -> Self {
        Value::Double(Vector::new(values))
    }

    pub fn complex(values: Vec<Complex>) -> Self {
        Value::Complex(Vector::new(values))
    }

    /// String vector from handles.
    pub fn string(handles: Vec<CharId>) -> Self {
        Value::String(Vector::new(handles))
    }

    /// String vector interned through `interner` (`None` is missing).
    ///
    /// ```text
    /// let s = Value::strings(&interner, [Some("a"), None, Some("b")]);
    /// ```
    pub fn strings<'a>(
        interner: &CharInterner,
        values: impl IntoIterator<Item = Option<&'a str>>,
    ) -> Self {
        let handles = values
            .into_iter()
            .map(|v| v.map_or(CharId::NA, |s| interner.intern(s)))
            .collect();
        Value::String(Vector::new(handles))
    }

    pub fn raw(bytes: Vec<u8>) -> Self {
        Value::Raw(Vector::new(bytes))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Vector::new(items))
    }

    /// Table with `nrow` automatic rows.
    ///
    /// Row identity is stored in compact form (see [`Value::compact_row_names`]),
    /// so `nrow` saturates at `i32::MAX`. Columns are expected to have `nrow`
    /// elements each.
    pub fn table(columns: Vec<(CharId, Value)>, nrow: usize) -> Self {
        Value::table_with_row_names(columns, Value::compact_row_names(nrow))
    }

    /// Table with explicit row-identity metadata (an integer or string vector).
    pub fn table_with_row_names(columns: Vec<(CharId, Value)>, row_names: Value) -> Self {
        let (names, columns) = columns.into_iter().unzip();
        Value::Table(TableValue::new(columns, names, Some(row_names)))
    }

    /// Table assembled from raw parts, without any validation.
    ///
    /// Used by adapters that mirror host data verbatim, including tables whose
    /// metadata is absent or of the wrong kind.
    pub fn table_from_parts(
        columns: Vec<Value>,
        names: Vec<CharId>,
        row_names: Option<Value>,
    ) -> Self {
        Value::Table(TableValue::new(columns, names, row_names))
    }

    /// Compact row-identity metadata for `n` automatic rows: `[NA_INTEGER, -n]`.
    ///
    /// The encoding holds a 32-bit count. Any `n` above `i32::MAX` is stored
    /// as `i32::MAX` rows; tables that large need explicit row names.
    pub fn compact_row_names(n: usize) -> Self {
        let n = i32::try_from(n).unwrap_or(i32::MAX);
        Value::integer(vec![NA_INTEGER, -n])
    }

    pub fn symbol(name: CharId) -> Self {
        Value::Symbol(name)
    }

    pub fn node(kind: NodeKind, head: Value, tail: Value) -> Self {
        Value::Node(NodeValue::new(kind, head, tail))
    }

    /// Pairlist chain of `items`, terminated by `Null`. Empty input gives `Null`.
    pub fn pairlist(items: Vec<Value>) -> Self {
        Value::chain(NodeKind::Pairlist, items)
    }

    /// Call node: `fun` applied to the argument pairlist built from `args`.
    pub fn call(fun: Value, args: Vec<Value>) -> Self {
        Value::node(NodeKind::Call, fun, Value::pairlist(args))
    }

    /// Node chain of `kind` over `items`, terminated by `Null`.
    pub fn chain(kind: NodeKind, items: Vec<Value>) -> Self {
        items
            .into_iter()
            .rev()
            .fold(Value::Null, |tail, head| Value::node(kind, head, tail))
    }

    pub fn closure(formals: Value, body: Value, env: Value) -> Self {
        Value::Closure(ClosureValue::new(formals, body, env))
    }

    /// A fresh opaque instance with a new identity.
    pub fn opaque(kind: OpaqueKind) -> Self {
        Value::Opaque(OpaqueValue {
            kind,
            id: ObjectId::fresh(),
        })
    }

    /// A fresh environment.
    pub fn environment() -> Self {
        Value::opaque(OpaqueKind::Environment)
    }

    pub fn char(handle: CharId) -> Self {
        Value::Char(handle)
    }

    /// Attach element names to a plain vector.
    ///
    /// Fails for non-vector kinds and when `names` does not match the
    /// vector's length.
    pub fn with_names(self, names: Vec<CharId>) -> Result<Self, ValueError> {
        fn attach<T>(v: &Vector<T>, names: Vec<CharId>) -> Result<Vector<T>, ValueError> {
            if v.len() == names.len() {
                Ok(v.with_names(names))
            } else {
                Err(ValueError::NamesLength {
                    expected: v.len(),
                    got: names.len(),
                })
            }
        }

        Ok(match &self {
            Value::Logical(v) => Value::Logical(attach(v, names)?),
            Value::Integer(v) => Value::Integer(attach(v, names)?),
            Value::Double(v) => Value::Double(attach(v, names)?),
            Value::Complex(v) => Value::Complex(attach(v, names)?),
            Value::String(v) => Value::String(attach(v, names)?),
            Value::Raw(v) => Value::Raw(attach(v, names)?),
            Value::List(v) => Value::List(attach(v, names)?),
            _ => {
                return Err(ValueError::NotAVector {
                    kind: self.kind().name(),
                })
            }
        })
    }
}

// Queries

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Logical(_) => Kind::Logical,
            Value::Integer(_) => Kind::Integer,
            Value::Double(_) => Kind::Double,
            Value::Complex(_) => Kind::Complex,
            Value::String(_) => Kind::String,
            Value::Raw(_) => Kind::Raw,
            Value::List(_) => Kind::List,
            Value::Table(_) => Kind::Table,
            Value::Symbol(_) => Kind::Symbol,
            Value::Node(n) => n.node_kind().kind(),
            Value::Closure(_) => Kind::Closure,
            Value::Opaque(o) => o.kind.kind(),
            Value::Char(_) => Kind::Char,
        }
    }

    /// Element names of a plain vector, if any.
    pub fn names(&self) -> Option<&[CharId]> {
        match self {
            Value::Logical(v) | Value::Integer(v) => v.names(),
            Value::Double(v) => v.names(),
            Value::Complex(v) => v.names(),
            Value::String(v) => v.names(),
            Value::Raw(v) => v.names(),
            Value::List(v) => v.names(),
            Value::Table(t) => Some(t.names()),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Logical(v) => write!(f, "Logical({v:?})"),
            Value::Integer(v) => write!(f, "Integer({v:?})"),
            Value::Double(v) => write!(f, "Double({v:?})"),
            Value::Complex(v) => write!(f, "Complex({v:?})"),
            Value::String(v) => write!(f, "String({v:?})"),
            Value::Raw(v) => write!(f, "Raw({v:?})"),
            Value::List(v) => write!(f, "List({v:?})"),
            Value::Table(t) => write!(f, "{t:?}"),
            Value::Symbol(s) => write!(f, "Symbol({s:?})"),
            Value::Node(n) => write!(f, "{n:?}"),
            Value::Closure(c) => write!(f, "{c:?}"),
            Value::Opaque(o) => write!(f, "<{} {:?}>", o.kind.kind(), o.id),
            Value::Char(c) => write!(f, "Char({c:?})"),
        }
    }
}
