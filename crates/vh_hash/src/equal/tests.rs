use super::*;
use crate::scalar::hash_scalar;
use crate::HashErrorKind;
use pretty_assertions::assert_eq;
use vh_ir::CharInterner;
use vh_value::na::{na_real, NA_INTEGER};

fn depth() -> Depth {
    Depth::new(64)
}

fn eq(x: &Value, i: usize, y: &Value, j: usize) -> HashResult<bool> {
    equal_scalar(x, i, y, j, depth())
}

#[test]
fn test_integers_and_missing() {
    let x = Value::integer(vec![1, NA_INTEGER, 3]);
    let na = Value::integer(vec![NA_INTEGER]);
    assert_eq!(eq(&x, 0, &x, 0), Ok(true));
    assert_eq!(eq(&x, 0, &x, 2), Ok(false));
    assert_eq!(eq(&x, 1, &na, 0), Ok(true));
    assert_eq!(eq(&x, 0, &na, 0), Ok(false));
}

#[test]
fn test_logicals() {
    let x = Value::logical([Some(true), None, Some(false)]);
    let y = Value::logical([None]);
    assert_eq!(eq(&x, 1, &y, 0), Ok(true));
    assert_eq!(eq(&x, 0, &x, 2), Ok(false));
}

#[test]
fn test_double_classes() {
    let x = Value::double(vec![1.5, na_real(), f64::NAN, 0.0, -0.0]);
    let other_nan = Value::double(vec![f64::from_bits(0x7FF0_0000_0000_0001)]);

    assert_eq!(eq(&x, 0, &x, 0), Ok(true));
    assert_eq!(eq(&x, 1, &x, 1), Ok(true));
    assert_eq!(eq(&x, 2, &other_nan, 0), Ok(true));
    assert_eq!(eq(&x, 1, &x, 2), Ok(false));
    assert_eq!(eq(&x, 0, &x, 1), Ok(false));
    assert_eq!(eq(&x, 3, &x, 4), Ok(true));
}

#[test]
fn test_doubles_equal_matches_hash() {
    let x = Value::double(vec![0.0, -0.0, na_real(), f64::NAN, 2.0]);
    for i in 0..5 {
        for j in 0..5 {
            if eq(&x, i, &x, j) == Ok(true) {
                assert_eq!(hash_scalar(&x, i, depth()), hash_scalar(&x, j, depth()));
            }
        }
    }
}

#[test]
fn test_strings_by_handle() {
    let interner = CharInterner::new();
    let x = Value::strings(&interner, [Some("a"), Some("b"), None]);
    let y = Value::strings(&interner, [Some("a"), None]);
    assert_eq!(eq(&x, 0, &y, 0), Ok(true));
    assert_eq!(eq(&x, 1, &y, 0), Ok(false));
    assert_eq!(eq(&x, 2, &y, 1), Ok(true));
}

#[test]
fn test_list_elements_deep_equal() {
    let x = Value::list(vec![
        Value::integer(vec![1, 2]),
        Value::list(vec![Value::double(vec![1.0]), Value::Null]),
    ]);
    let y = Value::list(vec![Value::list(vec![Value::double(vec![1.0]), Value::Null])]);
    assert_eq!(eq(&x, 1, &y, 0), Ok(true));
    assert_eq!(eq(&x, 0, &y, 0), Ok(false));
}

#[test]
fn test_table_rows() {
    let interner = CharInterner::new();
    let (id, name) = (interner.intern("id"), interner.intern("name"));
    let x = Value::table(
        vec![
            (id, Value::integer(vec![1, 2, 1])),
            (name, Value::strings(&interner, [Some("a"), Some("b"), Some("a")])),
        ],
        3,
    );
    let y = Value::table(
        vec![
            (id, Value::integer(vec![2])),
            (name, Value::strings(&interner, [Some("b")])),
        ],
        1,
    );
    assert_eq!(eq(&x, 0, &x, 2), Ok(true));
    assert_eq!(eq(&x, 0, &x, 1), Ok(false));
    assert_eq!(eq(&x, 1, &y, 0), Ok(true));
}

#[test]
fn test_table_column_count_mismatch() {
    let interner = CharInterner::new();
    let x = Value::table(vec![(interner.intern("a"), Value::integer(vec![1]))], 1);
    let y = Value::table(
        vec![
            (interner.intern("a"), Value::integer(vec![1])),
            (interner.intern("b"), Value::integer(vec![1])),
        ],
        1,
    );
    assert_eq!(eq(&x, 0, &y, 0), Ok(false));
}

#[test]
fn test_table_short_column_is_corrupt() {
    let interner = CharInterner::new();
    let x = Value::table(vec![(interner.intern("a"), Value::integer(vec![1]))], 2);
    assert_eq!(
        eq(&x, 1, &x, 0).map_err(|e| e.kind()),
        Err(HashErrorKind::CorruptStructure)
    );
}

#[test]
fn test_table_row_past_end_is_out_of_bounds() {
    let interner = CharInterner::new();
    let t = Value::table(vec![(interner.intern("a"), Value::integer(vec![1, 2]))], 2);
    assert_eq!(
        eq(&t, 10, &t, 0),
        Err(HashError::IndexOutOfBounds { index: 10, len: 2 })
    );
    assert_eq!(
        eq(&t, 0, &t, 5),
        Err(HashError::IndexOutOfBounds { index: 5, len: 2 })
    );

    let empty = Value::table(vec![], 2);
    assert_eq!(eq(&empty, 1, &empty, 0), Ok(true));
    assert_eq!(
        eq(&empty, 0, &empty, 999),
        Err(HashError::IndexOutOfBounds { index: 999, len: 2 })
    );
}

#[test]
fn test_other_kind_of_y_is_unequal() {
    let x = Value::integer(vec![1]);
    assert_eq!(eq(&x, 0, &Value::double(vec![1.0]), 0), Ok(false));
    assert_eq!(eq(&x, 0, &Value::Null, 0), Ok(false));
}

#[test]
fn test_unsupported_kinds() {
    let interner = CharInterner::new();
    let cases = [
        Value::Null,
        Value::raw(vec![1]),
        Value::symbol(interner.intern("x")),
        Value::environment(),
    ];
    for x in cases {
        assert_eq!(
            eq(&x, 0, &x, 0),
            Err(HashError::UnsupportedType { kind: x.kind().name() })
        );
    }
}

#[test]
fn test_out_of_bounds() {
    let x = Value::integer(vec![1]);
    assert_eq!(
        eq(&x, 0, &x, 1),
        Err(HashError::IndexOutOfBounds { index: 1, len: 1 })
    );
}
