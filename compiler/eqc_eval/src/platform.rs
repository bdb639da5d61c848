//! Host-platform numeric and string semantics.
//!
//! Bit-exact equivalents of the runtime library calls generated bodies make.
//! All 32-bit arithmetic wraps.

#![allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "bit reinterpretation is the point of these functions"
)]

use std::cmp::Ordering;

/// Canonical NaN bit pattern of a 32-bit float.
pub const CANONICAL_FLOAT_NAN: i32 = 0x7fc0_0000;
/// Canonical NaN bit pattern of a 64-bit float.
pub const CANONICAL_DOUBLE_NAN: i64 = 0x7ff8_0000_0000_0000;

/// `Float.floatToIntBits`: raw bits, every NaN collapsed to one pattern.
pub fn float_to_int_bits(value: f32) -> i32 {
    if value.is_nan() {
        CANONICAL_FLOAT_NAN
    } else {
        value.to_bits() as i32
    }
}

/// `Double.doubleToLongBits`: raw bits, every NaN collapsed to one pattern.
pub fn double_to_long_bits(value: f64) -> i64 {
    if value.is_nan() {
        CANONICAL_DOUBLE_NAN
    } else {
        value.to_bits() as i64
    }
}

/// `Float.compare`: numeric order, then bit order.
///
/// Makes NaN equal to itself and greater than everything else, and orders
/// `-0.0` below `0.0`.
pub fn float_compare(a: f32, b: f32) -> Ordering {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => Ordering::Less,
        Some(Ordering::Greater) => Ordering::Greater,
        _ => float_to_int_bits(a).cmp(&float_to_int_bits(b)),
    }
}

/// `Double.compare`, see [`float_compare`].
pub fn double_compare(a: f64, b: f64) -> Ordering {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => Ordering::Less,
        Some(Ordering::Greater) => Ordering::Greater,
        _ => double_to_long_bits(a).cmp(&double_to_long_bits(b)),
    }
}

/// `(int) (v >>> 32 ^ v)`.
pub fn fold_long(value: i64) -> i32 {
    let bits = value as u64;
    ((bits >> 32) ^ bits) as i32
}

/// `String.hashCode` over UTF-16 code units.
pub fn string_hash(value: &str) -> i32 {
    value
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// One step of a `31 * h + x` fold.
#[inline]
pub fn fold_step(accumulator: i32, multiplier: i32, contribution: i32) -> i32 {
    accumulator.wrapping_mul(multiplier).wrapping_add(contribution)
}
