//! Arctangent table for the CORDIC micro-rotations.
//!
//! Entry `i` is `round(atan(2^-i) * 2^28)`. From index 29 on the rounded value
//! is zero, so the table stays at 32 entries to cover the maximum iteration
//! count without a special case in the rotation loop.

/// Number of entries that carry a non-zero angle.
pub const LUT_ATAN_POPULATED: usize = 29;

pub const LUT_ATAN: [i32; 32] = [
    210828714, 124459457, 65760959, 33381290, 16755422, 8385879, 4193963, 2097109, 1048571,
    524287, 262144, 131072, 65536, 32768, 16384, 8192, 4096, 2048, 1024, 512, 256, 128, 64, 32,
    16, 8, 4, 2, 1, 0, 0, 0,
];

/// Returns `atan(2^-i)` scaled by `2^28`, or 0 past the end of the table.
#[inline]
pub const fn atan(i: usize) -> i32 {
    if i < LUT_ATAN.len() {
        LUT_ATAN[i]
    } else {
        0
    }
}
