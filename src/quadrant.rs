//! Quadrant normalization.
//!
//! The vectoring recurrence only converges for vectors within ±90° of the x
//! axis. Left half-plane vectors are rotated by 180° (both components negated)
//! and tagged so the post-processor can add the half turn back.

use crate::config::Constants;
use crate::fixed::sign_extend;
use crate::rotation::RotationState;
use crate::Request;

/// Half-turn correction applied to the accumulated angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Correction {
    /// Subtract π.
    Minus = -1,
    /// Vector was already in the right half-plane.
    #[default]
    Zero = 0,
    /// Add π.
    Plus = 1,
}

/// Sign-extends the request and folds it into the right half-plane.
pub fn normalize(request: Request, constants: &Constants) -> RotationState {
    let x = sign_extend(request.x as i64, constants.input_bits);
    let y = sign_extend(request.y as i64, constants.input_bits);

    let (x, y, correction) = if x < 0 {
        let (x, y) = (-x, -y);
        let correction = if y >= 0 {
            Correction::Plus
        } else {
            Correction::Minus
        };
        (x, y, correction)
    } else {
        (x, y, Correction::Zero)
    };

    RotationState {
        x,
        y,
        z: 0,
        iteration: 0,
        correction,
    }
}
