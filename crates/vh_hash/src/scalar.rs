//! Per-position hashing.

use vh_stack::{nested, Depth};
use vh_value::na::canonical_double;
use vh_value::{TableValue, Value, Vector};

use crate::length::row_count;
use crate::object::hash_object;
use crate::primitives::{hash_combine, hash_double, hash_identity};
use crate::{HashError, HashResult};

/// Hash of the element at position `i`.
///
/// List elements are whole values and get a full [`hash_object`]; table rows
/// fold the hashes of each column at `i`.
pub(crate) fn hash_scalar(x: &Value, i: usize, depth: Depth) -> HashResult<i32> {
    match x {
        Value::Logical(v) | Value::Integer(v) => element(v, i).copied(),
        Value::Double(v) => Ok(hash_double(canonical_double(*element(v, i)?))),
        Value::String(v) => Ok(hash_identity(*element(v, i)?)),
        Value::List(v) => hash_object(element(v, i)?, depth),
        Value::Table(t) => hash_row(t, i, depth),
        _ => Err(HashError::unsupported(x.kind())),
    }
}

fn hash_row(t: &TableValue, i: usize, depth: Depth) -> HashResult<i32> {
    check_row(t, i)?;
    nested(depth, |depth| -> HashResult<i32> {
        t.columns()
            .iter()
            .enumerate()
            .try_fold(0, |hash, (k, col)| -> HashResult<i32> {
                let h = hash_scalar(col, i, depth).map_err(|e| short_column(e, k))?;
                Ok(hash_combine(hash, h))
            })
    })
}

/// Element `i` of `v`, or an out-of-bounds error.
#[inline]
pub(crate) fn element<T>(v: &Vector<T>, i: usize) -> HashResult<&T> {
    v.get(i).ok_or(HashError::IndexOutOfBounds {
        index: i,
        len: v.len(),
    })
}

/// Row `i` must exist according to the table's row-identity metadata.
///
/// Checked before any column is read, so a bad position is the caller's
/// `IndexOutOfBounds` and only a column shorter than the row count is
/// reported as corrupt.
pub(crate) fn check_row(t: &TableValue, i: usize) -> HashResult<()> {
    let rows = row_count(t)?;
    if i < rows {
        Ok(())
    } else {
        Err(HashError::IndexOutOfBounds { index: i, len: rows })
    }
}

/// A column indexed past its end means the table itself is malformed.
pub(crate) fn short_column(err: HashError, k: usize) -> HashError {
    match err {
        HashError::IndexOutOfBounds { index, len } => HashError::corrupt(format!(
            "column {} has {len} rows, row {} requested",
            k + 1,
            index + 1
        )),
        other => other,
    }
}
