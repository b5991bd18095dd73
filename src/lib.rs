#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod fixed;
pub mod gain;
pub mod pipeline;
pub mod post;
pub mod quadrant;
pub mod resources;
pub mod rotation;

pub use config::{Config, Constants, PipelineDepths};
pub use engine::{Engine, Outputs};
pub use error::{Error, Result};

/// Cartesian input vector as presented by the driver.
///
/// Components are taken as `input_bits` wide signed integers; any bits above
/// that width are discarded when the engine samples the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Request {
    pub x: i32,
    pub y: i32,
}

impl Request {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Magnitude and phase produced by one rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Polar {
    /// Unsigned magnitude with `output_frac_bits` fractional bits.
    pub magnitude: u64,

    /// Signed phase in radians scaled by `2^gain_frac_bits`, within (-π, π].
    pub phase: i64,
}
