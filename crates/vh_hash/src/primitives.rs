//! Numeric hashing primitives.
//!
//! Pure functions over integers and doubles with no knowledge of the value
//! model. Their exact bit behavior is part of the fingerprint format: any
//! change here changes every persisted hash.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    reason = "hashes are defined on 32-bit two's complement bit patterns"
)]

use vh_ir::Identity;

/// Additive constant of [`hash_combine`] (the 32-bit golden ratio).
pub const COMBINE_CONSTANT: u32 = 0x9e37_79b9;

/// Mix `y` into the running hash `x`.
///
/// `x ^ (y + 0x9e3779b9 + (x << 6) + (x >> 2))` in wrapping 32-bit arithmetic,
/// with a sign-propagating `x >> 2`. Order-sensitive: the first argument is
/// the accumulator.
#[inline]
pub fn hash_combine(x: i32, y: i32) -> i32 {
    let mix = (y as u32)
        .wrapping_add(COMBINE_CONSTANT)
        .wrapping_add((x as u32) << 6)
        .wrapping_add((x >> 2) as u32);
    ((x as u32) ^ mix) as i32
}

/// XOR of the low and high 32-bit words of the IEEE-754 representation.
///
/// Callers canonicalize NaN classes first; see `vh_value::na::canonical_double`.
#[inline]
pub fn hash_double(x: f64) -> i32 {
    let bits = x.to_bits();
    ((bits as u32) ^ ((bits >> 32) as u32)) as i32
}

/// `(x >> 33) ^ x ^ (x << 11)`, truncated to the low 32 bits.
#[inline]
pub fn hash_int64(x: i64) -> i32 {
    ((x >> 33) ^ x ^ (x << 11)) as i32
}

/// Hash a value known only by its identity handle.
#[inline]
pub fn hash_identity(id: impl Identity) -> i32 {
    hash_int64(id.handle())
}

/// Left fold of [`hash_combine`] over `hashes`, seeded with 0.
#[inline]
pub fn hash_fold(hashes: impl IntoIterator<Item = i32>) -> i32 {
    hashes.into_iter().fold(0, hash_combine)
}

#[cfg(test)]
mod tests;
