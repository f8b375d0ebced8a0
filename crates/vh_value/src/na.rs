//! Missing-value encodings.
//!
//! Integral kinds reserve `i32::MIN` as their missing marker. Doubles carry
//! two families of non-values: the missing marker (a NaN whose low 32 bits
//! are 1954) and every other NaN payload.

/// Missing marker of integer vectors.
pub const NA_INTEGER: i32 = i32::MIN;

/// Missing marker of logical vectors.
pub const NA_LOGICAL: i32 = i32::MIN;

/// Bit pattern of the double missing marker.
pub const NA_REAL_BITS: u64 = 0x7FF0_0000_0000_07A2;

/// Canonical bit pattern for every NaN that is not the missing marker.
pub const NAN_BITS: u64 = 0x7FF8_0000_0000_0000;

/// Low word that identifies the missing marker among NaNs.
const NA_REAL_LOW_WORD: u64 = 1954;

/// The double missing marker.
#[inline]
pub fn na_real() -> f64 {
    f64::from_bits(NA_REAL_BITS)
}

/// Which canonical class a double belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoubleClass {
    /// The missing marker, whatever its high-word payload.
    Missing,
    /// Any other NaN.
    NaN,
    /// An ordinary number, including infinities.
    Number,
}

impl DoubleClass {
    #[inline]
    pub fn of(x: f64) -> Self {
        if !x.is_nan() {
            DoubleClass::Number
        } else if x.to_bits() & 0xFFFF_FFFF == NA_REAL_LOW_WORD {
            DoubleClass::Missing
        } else {
            DoubleClass::NaN
        }
    }
}

#[inline]
pub fn is_na_real(x: f64) -> bool {
    DoubleClass::of(x) == DoubleClass::Missing
}

/// Map a double to its canonical representative.
///
/// Missing values collapse to [`NA_REAL_BITS`], other NaNs to [`NAN_BITS`],
/// and negative zero to positive zero (`-0.0 == 0.0` must hash alike).
#[inline]
pub fn canonical_double(x: f64) -> f64 {
    match DoubleClass::of(x) {
        DoubleClass::Missing => f64::from_bits(NA_REAL_BITS),
        DoubleClass::NaN => f64::from_bits(NAN_BITS),
        DoubleClass::Number if x == 0.0 => 0.0,
        DoubleClass::Number => x,
    }
}
