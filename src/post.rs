//! Gain correction and phase restoration.

use crate::config::Constants;
use crate::quadrant::Correction;
use crate::rotation::RotationState;
use crate::Polar;

/// Removes the CORDIC gain from `x` and appends the output fraction bits.
///
/// The product is formed in `i128` so no bits of `x * gain_inv` are lost
/// before the shift.
#[inline]
pub fn magnitude(x: i64, constants: &Constants) -> u64 {
    let product = x as i128 * constants.gain_inv as i128;
    let raw = product >> constants.gain_frac_bits;
    (raw.unsigned_abs() as u64) << constants.output_frac_bits
}

/// Adds the half-turn correction back and wraps the angle into (-π, π].
#[inline]
pub fn phase(z: i64, correction: Correction, constants: &Constants) -> i64 {
    let pi = constants.pi;
    let mut phase = match correction {
        Correction::Minus => z - pi,
        Correction::Zero => z,
        Correction::Plus => z + pi,
    };

    if phase > pi {
        phase -= constants.two_pi;
    } else if phase <= -pi {
        phase += constants.two_pi;
    }

    phase
}

/// Turns the final rotation registers into a result.
pub fn finish(state: &RotationState, constants: &Constants) -> Polar {
    // Only the zero vector leaves x at zero; its angle is undefined, report 0.
    if state.x == 0 {
        return Polar::default();
    }

    Polar {
        magnitude: magnitude(state.x, constants),
        phase: phase(state.z, state.correction, constants),
    }
}
