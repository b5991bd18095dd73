//! Fixed-point helpers.
//!
//! Registers are held in `i64` and truncated to their configured width after
//! every update, the way a hardware register of that width would wrap. All
//! right shifts on signed values are arithmetic.

#[allow(unused_imports)]
use num_traits::float::Float;

/// Scale of the stored arctangent table and the default angle scale.
pub const ANGLE_FRAC_BITS: u32 = 28;

/// Interprets the low `bits` bits of `value` as a two's complement number.
#[inline]
pub fn sign_extend(value: i64, bits: u32) -> i64 {
    debug_assert!((1..=64).contains(&bits));
    let shift = 64 - bits;
    value.wrapping_shl(shift).wrapping_shr(shift)
}

/// Arithmetic shift right, saturating the shift amount at the register width.
#[inline]
pub fn asr(value: i64, shift: u32) -> i64 {
    value >> shift.min(63)
}

/// Rounds a real value to fixed point with `frac_bits` fractional bits.
#[inline]
pub fn from_f64(value: f64, frac_bits: u32) -> i64 {
    (value * (1u64 << frac_bits) as f64).round() as i64
}

#[inline]
pub fn to_f64(value: i64, frac_bits: u32) -> f64 {
    value as f64 / (1u64 << frac_bits) as f64
}

/// Rescales a value stored at [`ANGLE_FRAC_BITS`] to `frac_bits`, rounding to nearest.
#[inline]
pub fn rescale_angle(value: i64, frac_bits: u32) -> i64 {
    if frac_bits >= ANGLE_FRAC_BITS {
        return value << (frac_bits - ANGLE_FRAC_BITS);
    }
    let shift = ANGLE_FRAC_BITS - frac_bits;
    (value + (1 << (shift - 1))) >> shift
}
