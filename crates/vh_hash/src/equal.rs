//! Per-position equality.

use vh_stack::{nested, Depth};
use vh_value::na::DoubleClass;
use vh_value::{TableValue, Value};

use crate::identical::identical;
use crate::scalar::{check_row, element, short_column};
use crate::{HashError, HashResult};

/// Whether `x[i]` and `y[j]` are the same value.
///
/// Agrees with hashing: equal positions always have equal `hash_scalar`.
/// A `y` of a different kind than `x` compares unequal; only `x`'s kind
/// decides whether the comparison is supported.
pub(crate) fn equal_scalar(
    x: &Value,
    i: usize,
    y: &Value,
    j: usize,
    depth: Depth,
) -> HashResult<bool> {
    match (x, y) {
        (Value::Logical(a), Value::Logical(b)) | (Value::Integer(a), Value::Integer(b)) => {
            Ok(element(a, i)? == element(b, j)?)
        }
        (Value::Double(a), Value::Double(b)) => Ok(doubles_equal(*element(a, i)?, *element(b, j)?)),
        // Handle identity; interning makes this text equality.
        (Value::String(a), Value::String(b)) => Ok(element(a, i)? == element(b, j)?),
        (Value::List(a), Value::List(b)) => identical(element(a, i)?, element(b, j)?, depth),
        (Value::Table(a), Value::Table(b)) => rows_equal(a, i, b, j, depth),
        (
            Value::Logical(_)
            | Value::Integer(_)
            | Value::Double(_)
            | Value::String(_)
            | Value::List(_)
            | Value::Table(_),
            _,
        ) => Ok(false),
        _ => Err(HashError::unsupported(x.kind())),
    }
}

fn rows_equal(a: &TableValue, i: usize, b: &TableValue, j: usize, depth: Depth) -> HashResult<bool> {
    check_row(a, i)?;
    check_row(b, j)?;
    if a.column_count() != b.column_count() {
        return Ok(false);
    }
    nested(depth, |depth| -> HashResult<bool> {
        for (k, (col_a, col_b)) in a.columns().iter().zip(b.columns()).enumerate() {
            if !equal_scalar(col_a, i, col_b, j, depth).map_err(|e| short_column(e, k))? {
                return Ok(false);
            }
        }
        Ok(true)
    })
}

/// Missing equals only missing, NaN only NaN, numbers compare with `==`.
#[inline]
pub(crate) fn doubles_equal(a: f64, b: f64) -> bool {
    match (DoubleClass::of(a), DoubleClass::of(b)) {
        (DoubleClass::Number, DoubleClass::Number) => a == b,
        (class_a, class_b) => class_a == class_b,
    }
}

#[cfg(test)]
mod tests;
