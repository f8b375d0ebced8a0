//! Effective length resolution.

use vh_value::na::NA_INTEGER;
use vh_value::{TableValue, Value};

use crate::{HashError, HashResult};

/// Element count used by the vectorized entry points.
///
/// Plain vectors report their storage length, tables their row count, and
/// every other kind counts as a single element.
pub(crate) fn effective_length(x: &Value) -> HashResult<usize> {
    Ok(match x {
        Value::Null => 0,
        Value::Logical(v) | Value::Integer(v) => v.len(),
        Value::Double(v) => v.len(),
        Value::Complex(v) => v.len(),
        Value::String(v) => v.len(),
        Value::Raw(v) => v.len(),
        Value::List(v) => v.len(),
        Value::Table(t) => row_count(t)?,
        Value::Symbol(_)
        | Value::Node(_)
        | Value::Closure(_)
        | Value::Opaque(_)
        | Value::Char(_) => 1,
    })
}

/// Row count of a table, from its row-identity metadata.
///
/// Integer metadata of the form `[NA, n]` is the compact encoding of `|n|`
/// automatic rows.
pub(crate) fn row_count(t: &TableValue) -> HashResult<usize> {
    match t.row_names() {
        Some(Value::Integer(rn)) => match rn.as_slice() {
            &[NA_INTEGER, n] => usize::try_from(n.unsigned_abs())
                .map_err(|_| HashError::corrupt("invalid row names")),
            ids => Ok(ids.len()),
        },
        Some(Value::String(rn)) => Ok(rn.len()),
        _ => Err(HashError::corrupt("invalid row names")),
    }
}
