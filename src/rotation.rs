//! Vectoring-mode micro-rotations.
//!
//! Each step rotates (x, y) towards the positive x axis by `±atan(2^-i)` and
//! accumulates the applied angle in z. After the last step y is close to zero,
//! x holds the magnitude times the CORDIC gain and z the angle of the
//! normalized vector. Steps are strictly sequential.

use crate::config::Constants;
use crate::fixed::{asr, rescale_angle, sign_extend};
use crate::quadrant::Correction;
use crate::resources::atan;

/// Registers of one request while it is being rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotationState {
    pub x: i64,
    pub y: i64,
    pub z: i64,

    /// Index of the next micro-rotation.
    pub iteration: usize,

    pub correction: Correction,
}

impl RotationState {
    /// Applies micro-rotation `self.iteration` and advances the counter.
    #[inline]
    pub fn step(&mut self, constants: &Constants) {
        let i = self.iteration as u32;
        let angle = rescale_angle(atan(self.iteration) as i64, constants.gain_frac_bits);
        let dx = asr(self.y, i);
        let dy = asr(self.x, i);

        let (x, y, z) = if self.y >= 0 {
            (self.x + dx, self.y - dy, self.z + angle)
        } else {
            (self.x - dx, self.y + dy, self.z - angle)
        };

        let bits = constants.internal_bits;
        self.x = sign_extend(x, bits);
        self.y = sign_extend(y, bits);
        self.z = sign_extend(z, bits);
        self.iteration += 1;
    }

    #[inline]
    pub fn is_complete(&self, constants: &Constants) -> bool {
        self.iteration >= constants.iterations
    }

    /// Runs the remaining micro-rotations back to back.
    pub fn run(&mut self, constants: &Constants) {
        while !self.is_complete(constants) {
            self.step(constants);
        }
    }
}
