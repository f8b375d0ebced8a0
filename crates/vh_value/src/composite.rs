//! Composite value payloads: tables, compound nodes, closures, opaque values.

use std::fmt;

use vh_ir::{CharId, ObjectId};

use crate::{Heap, Kind, Value};

/// A complex number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

/// Table of named columns.
///
/// Columns are expected to share one length, given by the row-identity
/// metadata rather than by the column count. The metadata is kept exactly as
/// supplied; the length resolver validates it, so a table with absent or
/// ill-typed metadata is representable and reported as corrupt on use.
#[derive(Clone)]
pub struct TableValue {
    columns: Heap<Vec<Value>>,
    names: Heap<Vec<CharId>>,
    row_names: Option<Heap<Value>>,
}

impl TableValue {
    pub(crate) fn new(columns: Vec<Value>, names: Vec<CharId>, row_names: Option<Value>) -> Self {
        TableValue {
            columns: Heap::new(columns),
            names: Heap::new(names),
            row_names: row_names.map(Heap::new),
        }
    }

    #[inline]
    pub fn columns(&self) -> &[Value] {
        &self.columns
    }

    /// Number of columns (not rows).
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn names(&self) -> &[CharId] {
        &self.names
    }

    /// Row-identity metadata, if any.
    #[inline]
    pub fn row_names(&self) -> Option<&Value> {
        self.row_names.as_deref()
    }
}

impl fmt::Debug for TableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("names", &self.names())
            .field("columns", &self.columns())
            .field("row_names", &self.row_names())
            .finish()
    }
}

/// Flavor of a head/tail node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Argument and parameter chains.
    Pairlist,
    /// A call: the head is the function, the tail its arguments.
    Call,
    /// Variadic argument chain.
    Dots,
}

impl NodeKind {
    pub const fn kind(self) -> Kind {
        match self {
            NodeKind::Pairlist => Kind::Pairlist,
            NodeKind::Call => Kind::Call,
            NodeKind::Dots => Kind::Dots,
        }
    }
}

/// Head/tail pair. Chains end in a tail that is not a node, usually `Null`.
#[derive(Clone)]
pub struct NodeValue {
    kind: NodeKind,
    head: Heap<Value>,
    tail: Heap<Value>,
}

impl NodeValue {
    pub(crate) fn new(kind: NodeKind, head: Value, tail: Value) -> Self {
        NodeValue {
            kind,
            head: Heap::new(head),
            tail: Heap::new(tail),
        }
    }

    #[inline]
    pub fn node_kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn head(&self) -> &Value {
        &self.head
    }

    #[inline]
    pub fn tail(&self) -> &Value {
        &self.tail
    }

    /// Walk the tail chain.
    ///
    /// Yields this node and each node reachable through `tail`, in order.
    /// The first non-node tail is available from the last node yielded.
    pub fn chain(&self) -> impl Iterator<Item = &NodeValue> {
        std::iter::successors(Some(self), |&node| match node.tail() {
            Value::Node(next) => Some(next),
            _ => None,
        })
    }
}

impl fmt::Debug for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind)
            .field("head", self.head())
            .field("tail", self.tail())
            .finish()
    }
}

/// Function value: parameter list, body, and defining environment.
#[derive(Clone)]
pub struct ClosureValue {
    formals: Heap<Value>,
    body: Heap<Value>,
    env: Heap<Value>,
}

impl ClosureValue {
    pub(crate) fn new(formals: Value, body: Value, env: Value) -> Self {
        ClosureValue {
            formals: Heap::new(formals),
            body: Heap::new(body),
            env: Heap::new(env),
        }
    }

    #[inline]
    pub fn formals(&self) -> &Value {
        &self.formals
    }

    #[inline]
    pub fn body(&self) -> &Value {
        &self.body
    }

    #[inline]
    pub fn env(&self) -> &Value {
        &self.env
    }
}

impl fmt::Debug for ClosureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("formals", self.formals())
            .field("body", self.body())
            .field("env", self.env())
            .finish()
    }
}

/// Identity-only kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpaqueKind {
    Environment,
    ExternalPtr,
    Bytecode,
    Builtin,
}

impl OpaqueKind {
    pub const fn kind(self) -> Kind {
        match self {
            OpaqueKind::Environment => Kind::Environment,
            OpaqueKind::ExternalPtr => Kind::ExternalPtr,
            OpaqueKind::Bytecode => Kind::Bytecode,
            OpaqueKind::Builtin => Kind::Builtin,
        }
    }
}

/// An opaque instance: only its kind and identity are visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OpaqueValue {
    pub kind: OpaqueKind,
    pub id: ObjectId,
}
