//! Resources definitions.

pub mod atan;

pub use atan::{atan, LUT_ATAN, LUT_ATAN_POPULATED};
