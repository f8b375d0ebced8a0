//! Whole-value hashing.

use vh_stack::{nested, Depth};
use vh_value::{NodeValue, Value};

use crate::length::effective_length;
use crate::primitives::{hash_combine, hash_fold, hash_identity};
use crate::scalar::hash_scalar;
use crate::{HashError, HashResult};

/// One fingerprint for all of `x`.
///
/// Vectors and tables fold their per-position hashes; code-like values
/// combine the hashes of their parts; identity-only values hash their handle.
pub(crate) fn hash_object(x: &Value, depth: Depth) -> HashResult<i32> {
    nested(depth, |depth| -> HashResult<i32> {
        match x {
            Value::Null => Ok(0),
            Value::Logical(_)
            | Value::Integer(_)
            | Value::Double(_)
            | Value::String(_)
            | Value::List(_)
            | Value::Table(_) => {
                let n = effective_length(x)?;
                (0..n).try_fold(0, |hash, i| -> HashResult<i32> {
                    Ok(hash_combine(hash, hash_scalar(x, i, depth)?))
                })
            }
            // A symbol hashes as its name's text unit.
            Value::Symbol(name) => Ok(hash_identity(*name)),
            Value::Node(node) => hash_node(node, depth),
            Value::Closure(c) => Ok(hash_fold([
                hash_object(c.body(), depth)?,
                hash_object(c.env(), depth)?,
                hash_object(c.formals(), depth)?,
            ])),
            Value::Opaque(o) => Ok(hash_identity(o.id)),
            Value::Char(c) => Ok(hash_identity(*c)),
            Value::Complex(_) | Value::Raw(_) => Err(HashError::unsupported(x.kind())),
        }
    })
}

/// `hash_combine(hash_object(head), hash_object(tail))`, evaluated as a right
/// fold along the tail chain so chain length costs no recursion depth.
fn hash_node(node: &NodeValue, depth: Depth) -> HashResult<i32> {
    let links: Vec<&NodeValue> = node.chain().collect();
    // The last link's tail is the first non-node tail.
    let mut hash = match links.last() {
        Some(last) => hash_object(last.tail(), depth)?,
        None => 0,
    };
    for link in links.iter().rev() {
        hash = hash_combine(hash_object(link.head(), depth)?, hash);
    }
    Ok(hash)
}
