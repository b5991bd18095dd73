//! Gain correction constant.
//!
//! Every micro-rotation stretches the vector by `sqrt(1 + 2^-2i)`, so after `n`
//! iterations x carries a gain of about 1.6468. The post-processor multiplies
//! by the reciprocal `K_n`, held in fixed point. The nominal value comes from
//! the closed-form product; [`calibrate`] tunes it against known vectors
//! because truncation in the shifts biases the integer datapath slightly.

#[allow(unused_imports)]
use num_traits::float::Float;
use spin::Once;

use crate::config::{Config, MAX_ITERATIONS};
use crate::error::Result;
use crate::fixed;
use crate::post;
use crate::quadrant;
use crate::rotation::RotationState;
use crate::Request;

static RECIPROCAL_GAINS: Once<[f64; MAX_ITERATIONS + 1]> = Once::new();

fn reciprocal_gains() -> &'static [f64; MAX_ITERATIONS + 1] {
    RECIPROCAL_GAINS.call_once(|| {
        let mut table = [1.0; MAX_ITERATIONS + 1];
        for n in 1..=MAX_ITERATIONS {
            let i = (n - 1) as i32;
            table[n] = table[n - 1] / (1.0 + (2.0f64).powi(-2 * i)).sqrt();
        }
        table
    })
}

/// Reciprocal CORDIC gain for `iterations` micro-rotations as a float.
pub fn reciprocal_gain(iterations: usize) -> f64 {
    reciprocal_gains()[iterations.min(MAX_ITERATIONS)]
}

/// Nominal reciprocal gain scaled by `2^frac_bits`.
pub fn nominal_gain_inv(iterations: usize, frac_bits: u32) -> i64 {
    fixed::from_f64(reciprocal_gain(iterations), frac_bits)
}

/// Searches `nominal ± span` for the reciprocal gain that minimises the squared
/// magnitude error over `vectors`.
///
/// Each candidate runs the same integer recurrence the engines use. Ties keep
/// the candidate closest to the nominal value.
pub fn calibrate(config: &Config, vectors: &[Request], span: i64) -> Result<i64> {
    let constants = config.validate()?;
    let nominal = nominal_gain_inv(constants.iterations, constants.gain_frac_bits);

    // The rotation result does not depend on the gain, so run it once.
    let finals: alloc::vec::Vec<(RotationState, f64)> = vectors
        .iter()
        .map(|request| {
            let mut state = quadrant::normalize(*request, &constants);
            state.run(&constants);
            let x = fixed::sign_extend(request.x as i64, constants.input_bits) as f64;
            let y = fixed::sign_extend(request.y as i64, constants.input_bits) as f64;
            let exact = (x * x + y * y).sqrt() * (1u64 << constants.output_frac_bits) as f64;
            (state, exact)
        })
        .collect();

    let error_for = |gain_inv: i64| -> f64 {
        let mut trial = constants;
        trial.gain_inv = gain_inv;
        finals
            .iter()
            .map(|(state, exact)| {
                let magnitude = post::magnitude(state.x, &trial) as f64;
                (magnitude - exact) * (magnitude - exact)
            })
            .sum()
    };

    let mut best = nominal;
    let mut best_error = error_for(nominal);
    for offset in 1..=span.max(0) {
        for candidate in [nominal - offset, nominal + offset] {
            if candidate <= 0 || candidate >= 1 << constants.gain_frac_bits {
                continue;
            }
            let error = error_for(candidate);
            if error < best_error {
                best = candidate;
                best_error = error;
            }
        }
    }

    log::debug!(
        "calibrated gain_inv {best} (nominal {nominal}, {} vectors)",
        vectors.len()
    );

    Ok(best)
}
