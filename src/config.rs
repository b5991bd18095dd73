//! Engine configuration.
//!
//! Everything here is fixed when an engine is constructed. [`Config::validate`]
//! checks the parameters against the ranges the datapath supports and derives
//! the numeric [`Constants`] the engines run on.

use core::f64::consts::PI;

use crate::error::{Error, Result};
use crate::fixed::{self, ANGLE_FRAC_BITS};
use crate::gain;
use crate::resources::atan::LUT_ATAN;

/// Largest iteration count covered by the arctangent table.
pub const MAX_ITERATIONS: usize = LUT_ATAN.len();

/// Widest internal register the `i64` datapath can hold with headroom.
pub const MAX_INTERNAL_BITS: u32 = 62;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Width of the request components in bits.
    pub input_bits: u32,

    /// Width of the x, y and z registers in bits.
    pub internal_bits: u32,

    /// Number of micro-rotations per request.
    pub iterations: usize,

    /// Fractional bits of the angle accumulator and of the gain constant.
    pub gain_frac_bits: u32,

    /// Extra fractional bits appended to the magnitude.
    pub output_frac_bits: u32,

    /// Calibrated reciprocal gain. `None` uses the uncalibrated closed-form
    /// value for the configured iteration count, which leaves a small upward
    /// magnitude bias from shift truncation. Use [`crate::gain::calibrate`]
    /// to tune it against known vectors.
    pub gain_inv: Option<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_bits: 16,
            internal_bits: 32,
            iterations: 16,
            gain_frac_bits: ANGLE_FRAC_BITS,
            output_frac_bits: 14,
            gain_inv: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_bits(mut self, bits: u32) -> Self {
        self.input_bits = bits;
        self
    }

    pub fn with_internal_bits(mut self, bits: u32) -> Self {
        self.internal_bits = bits;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_gain_frac_bits(mut self, bits: u32) -> Self {
        self.gain_frac_bits = bits;
        self
    }

    pub fn with_output_frac_bits(mut self, bits: u32) -> Self {
        self.output_frac_bits = bits;
        self
    }

    pub fn with_gain_inv(mut self, gain_inv: i64) -> Self {
        self.gain_inv = Some(gain_inv);
        self
    }

    /// Checks every parameter and derives the datapath constants.
    pub fn validate(&self) -> Result<Constants> {
        if !(2..=32).contains(&self.input_bits) {
            return Err(Error::config(
                "input_bits",
                self.input_bits as i64,
                "must be within 2..=32",
            ));
        }
        if !(1..=ANGLE_FRAC_BITS).contains(&self.gain_frac_bits) {
            return Err(Error::config(
                "gain_frac_bits",
                self.gain_frac_bits as i64,
                "must be within 1..=28",
            ));
        }
        if self.internal_bits > MAX_INTERNAL_BITS {
            return Err(Error::config(
                "internal_bits",
                self.internal_bits as i64,
                "must not exceed 62",
            ));
        }
        if self.internal_bits < self.input_bits + 2 {
            return Err(Error::config(
                "internal_bits",
                self.internal_bits as i64,
                "needs two bits of headroom over input_bits",
            ));
        }
        if self.internal_bits < self.gain_frac_bits + 3 {
            return Err(Error::config(
                "internal_bits",
                self.internal_bits as i64,
                "too narrow for the angle accumulator",
            ));
        }
        if !(1..=MAX_ITERATIONS).contains(&self.iterations) {
            return Err(Error::config(
                "iterations",
                self.iterations as i64,
                "must be within 1..=32",
            ));
        }
        if self.output_frac_bits > 64 - self.internal_bits {
            return Err(Error::config(
                "output_frac_bits",
                self.output_frac_bits as i64,
                "magnitude would not fit in 64 bits",
            ));
        }

        let gain_inv = match self.gain_inv {
            Some(value) if value <= 0 || value >= 1 << self.gain_frac_bits => {
                return Err(Error::config(
                    "gain_inv",
                    value,
                    "must be within 0 < gain_inv < 1.0",
                ));
            }
            Some(value) => value,
            None => gain::nominal_gain_inv(self.iterations, self.gain_frac_bits),
        };

        let pi = fixed::from_f64(PI, self.gain_frac_bits);

        Ok(Constants {
            input_bits: self.input_bits,
            internal_bits: self.internal_bits,
            iterations: self.iterations,
            gain_frac_bits: self.gain_frac_bits,
            output_frac_bits: self.output_frac_bits,
            pi,
            two_pi: 2 * pi,
            gain_inv,
        })
    }

    /// Converts a magnitude result to a real number.
    pub fn magnitude_to_f64(&self, magnitude: u64) -> f64 {
        fixed::to_f64(magnitude as i64, self.output_frac_bits)
    }

    /// Converts a phase result to radians.
    pub fn phase_to_radians(&self, phase: i64) -> f64 {
        fixed::to_f64(phase, self.gain_frac_bits)
    }

    pub fn phase_to_degrees(&self, phase: i64) -> f64 {
        self.phase_to_radians(phase).to_degrees()
    }
}

/// Validated parameters plus the constants derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constants {
    pub input_bits: u32,
    pub internal_bits: u32,
    pub iterations: usize,
    pub gain_frac_bits: u32,
    pub output_frac_bits: u32,

    /// `round(π * 2^gain_frac_bits)`
    pub pi: i64,

    /// `2 * pi`
    pub two_pi: i64,

    /// Reciprocal of the CORDIC gain scaled by `2^gain_frac_bits`.
    pub gain_inv: i64,
}

/// Depths of the shift buffers around a pipelined engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineDepths {
    /// Ticks a request spends in the input buffer. Zero bypasses it.
    pub input: usize,

    /// Slots of the output buffer. At least one.
    pub output: usize,
}

impl Default for PipelineDepths {
    fn default() -> Self {
        Self {
            input: 0,
            output: 1,
        }
    }
}

impl PipelineDepths {
    pub fn new(input: usize, output: usize) -> Self {
        Self { input, output }
    }

    pub fn validate(&self) -> Result<()> {
        if self.output == 0 {
            return Err(Error::config(
                "output_pipeline",
                0,
                "needs at least one slot",
            ));
        }
        Ok(())
    }
}
