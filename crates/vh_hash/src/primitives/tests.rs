use super::*;
use vh_ir::{CharId, ObjectId};
use vh_value::na::{NAN_BITS, NA_REAL_BITS};

#[test]
fn test_combine_known_values() {
    assert_eq!(hash_combine(0, 0), -1_640_531_527);
    assert_eq!(hash_combine(1, 2), -1_640_531_462);
    assert_eq!(hash_combine(-5, 7), 1_640_531_845);
}

#[test]
fn test_combine_is_order_sensitive() {
    assert_eq!(hash_combine(2, 1), -1_640_531_400);
    assert_ne!(hash_combine(1, 2), hash_combine(2, 1));
}

#[test]
fn test_combine_xor_binds_loosest() {
    // (x ^ y) + C + ... would give a different value for these inputs.
    let x = 0x1234_5678;
    let y = 0x0f0f_0f0f;
    let loose = hash_combine(x, y);
    let tight = (x ^ y)
        .wrapping_add(COMBINE_CONSTANT as i32)
        .wrapping_add(x << 6)
        .wrapping_add(x >> 2);
    assert_ne!(loose, tight);
}

#[test]
fn test_hash_double_xors_words() {
    assert_eq!(hash_double(0.0), 0);
    assert_eq!(hash_double(1.0), 1_072_693_248);
    assert_eq!(hash_double(f64::from_bits(NA_REAL_BITS)), 2_146_437_026);
    assert_eq!(hash_double(f64::from_bits(NAN_BITS)), 2_146_959_360);
}

#[test]
fn test_hash_int64_known_values() {
    assert_eq!(hash_int64(0), 0);
    assert_eq!(hash_int64(1), 2049);
    assert_eq!(hash_int64(-1), -2048);
    assert_eq!(hash_int64(0xdead_beef), -1_285_896_465);
    assert_eq!(hash_int64(1 << 40), 128);
}

#[test]
fn test_hash_identity_uses_handle() {
    let id = ObjectId::from_raw(0xdead_beef);
    assert_eq!(hash_identity(id), hash_int64(0xdead_beef));
    let c = CharId::from_raw(1);
    assert_eq!(hash_identity(c), 2049);
}

#[test]
fn test_fold_seeds_with_zero() {
    assert_eq!(hash_fold([]), 0);
    assert_eq!(hash_fold([7]), hash_combine(0, 7));
    assert_eq!(hash_fold([7, 9]), hash_combine(hash_combine(0, 7), 9));
}
