//! Deep structural identity.
//!
//! Decides equality of whole values, used for list elements. Every rule is
//! at least as strict as the corresponding hash, so identical values always
//! hash alike; names and row metadata are compared even though hashing
//! ignores them.

use vh_stack::{nested, Depth};
use vh_value::{Complex, NodeValue, TableValue, Value, Vector};

use crate::equal::doubles_equal;
use crate::HashResult;

pub(crate) fn identical(a: &Value, b: &Value, depth: Depth) -> HashResult<bool> {
    nested(depth, |depth| -> HashResult<bool> {
        Ok(match (a, b) {
            (Value::Null, Value::Null) => true,
            (Value::Logical(x), Value::Logical(y)) | (Value::Integer(x), Value::Integer(y)) => {
                vectors_equal(x, y, |p, q| p == q)
            }
            (Value::Double(x), Value::Double(y)) => vectors_equal(x, y, |p, q| doubles_equal(*p, *q)),
            (Value::Complex(x), Value::Complex(y)) => vectors_equal(x, y, complex_equal),
            (Value::String(x), Value::String(y)) => vectors_equal(x, y, |p, q| p == q),
            (Value::Raw(x), Value::Raw(y)) => vectors_equal(x, y, |p, q| p == q),
            (Value::List(x), Value::List(y)) => {
                vectors_equal(x, y, |_, _| true)
                    && all_identical(x.as_slice().iter().zip(y.as_slice()), depth)?
            }
            (Value::Table(x), Value::Table(y)) => tables_identical(x, y, depth)?,
            (Value::Symbol(x), Value::Symbol(y)) | (Value::Char(x), Value::Char(y)) => x == y,
            (Value::Node(x), Value::Node(y)) => nodes_identical(x, y, depth)?,
            (Value::Closure(x), Value::Closure(y)) => all_identical(
                [
                    (x.formals(), y.formals()),
                    (x.body(), y.body()),
                    (x.env(), y.env()),
                ]
                .into_iter(),
                depth,
            )?,
            (Value::Opaque(x), Value::Opaque(y)) => x == y,
            _ => false,
        })
    })
}

/// Same length, same names, and `same` at every position.
fn vectors_equal<T>(x: &Vector<T>, y: &Vector<T>, same: impl Fn(&T, &T) -> bool) -> bool {
    x.len() == y.len()
        && x.names() == y.names()
        && x.as_slice().iter().zip(y.as_slice()).all(|(p, q)| same(p, q))
}

fn complex_equal(p: &Complex, q: &Complex) -> bool {
    doubles_equal(p.re, q.re) && doubles_equal(p.im, q.im)
}

fn all_identical<'a>(
    pairs: impl Iterator<Item = (&'a Value, &'a Value)>,
    depth: Depth,
) -> HashResult<bool> {
    for (x, y) in pairs {
        if !identical(x, y, depth)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn tables_identical(x: &TableValue, y: &TableValue, depth: Depth) -> HashResult<bool> {
    if x.names() != y.names() || x.column_count() != y.column_count() {
        return Ok(false);
    }
    let same_rows = match (x.row_names(), y.row_names()) {
        (None, None) => true,
        (Some(p), Some(q)) => identical(p, q, depth)?,
        _ => false,
    };
    Ok(same_rows && all_identical(x.columns().iter().zip(y.columns()), depth)?)
}

/// Walks both tail chains in lockstep; only heads recurse.
fn nodes_identical(x: &NodeValue, y: &NodeValue, depth: Depth) -> HashResult<bool> {
    let (mut x, mut y) = (x, y);
    loop {
        if x.node_kind() != y.node_kind() || !identical(x.head(), y.head(), depth)? {
            return Ok(false);
        }
        match (x.tail(), y.tail()) {
            (Value::Node(next_x), Value::Node(next_y)) => {
                x = next_x;
                y = next_y;
            }
            (tail_x, tail_y) => return identical(tail_x, tail_y, depth),
        }
    }
}
