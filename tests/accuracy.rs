//! Accuracy of magnitude and phase against floating point references.


use core::f64::consts::PI;

use quickcheck_macros::quickcheck;

use cordic_polar::driver;
use cordic_polar::engine::pipelined_engine::PipelinedEngine;
use cordic_polar::engine::vectoring_engine::VectoringEngine;
use cordic_polar::{gain, Config, PipelineDepths, Polar, Request};

/// Shift truncation biases x upwards by about half a unit per iteration.
fn magnitude_tolerance(iterations: usize) -> f64 {
    iterations as f64 / 2.0 + 3.0
}

/// The residual y after the last iteration is a few units, so short vectors
/// carry an angle error of that many units over the radius.
fn phase_tolerance(iterations: usize, radius: f64) -> f64 {
    (2.0f64).powi(2 - iterations as i32) + 8.0 / radius
}

fn phase_error(config: &Config, result: Polar, x: f64, y: f64) -> f64 {
    let d = config.phase_to_radians(result.phase) - y.atan2(x);
    (d + PI).rem_euclid(2.0 * PI) - PI
}

fn circle(radius: f64, points: usize) -> Vec<Request> {
    (0..points)
        .map(|k| {
            let t = 2.0 * PI * k as f64 / points as f64 - PI;
            Request::new(
                (radius * t.cos()).round() as i32,
                (radius * t.sin()).round() as i32,
            )
        })
        .collect()
}

fn sweep(config: Config, radius: f64) -> (f64, f64) {
    let requests = circle(radius, 3600);
    let mut engine = PipelinedEngine::new(config, PipelineDepths::new(1, 4)).unwrap();
    let results = driver::run_batch(&mut engine, &requests).unwrap();
    let constants = config.validate().unwrap();

    let mut max_magnitude_error: f64 = 0.0;
    let mut max_phase_error: f64 = 0.0;
    for (request, result) in requests.iter().zip(&results) {
        let (x, y) = (request.x as f64, request.y as f64);
        assert!(result.phase > -constants.pi && result.phase <= constants.pi);

        let m = config.magnitude_to_f64(result.magnitude);
        max_magnitude_error = max_magnitude_error.max((m - x.hypot(y)).abs());
        max_phase_error = max_phase_error.max(phase_error(&config, *result, x, y).abs());
    }

    log::info!(
        "{} iterations, {} angle bits: magnitude error {max_magnitude_error:.3}, phase error {max_phase_error:.6} rad",
        config.iterations,
        config.gain_frac_bits
    );

    (max_magnitude_error, max_phase_error)
}

#[test]
fn circle_sweep() {
    logger::init();

    for config in [
        Config::default(),
        Config::default().with_iterations(8),
        Config::default().with_gain_frac_bits(20),
        Config::default().with_iterations(24).with_internal_bits(40),
        Config::default()
            .with_iterations(12)
            .with_internal_bits(24)
            .with_gain_frac_bits(16),
    ] {
        let radius = 20000.0;
        let (magnitude_error, phase_error) = sweep(config, radius);
        assert!(magnitude_error <= magnitude_tolerance(config.iterations));
        assert!(phase_error <= phase_tolerance(config.iterations, radius));
    }
}

#[test]
fn precision_increases_with_iterations() {
    let (_, coarse) = sweep(Config::default().with_iterations(8), 20000.0);
    let (_, fine) = sweep(Config::default().with_iterations(16), 20000.0);
    assert!(fine < coarse);
}

#[test]
fn sweep_trace() {
    let config = Config::default();
    let requests = circle(30000.0, 4800);
    let mut engine = PipelinedEngine::new(config, PipelineDepths::new(2, 3)).unwrap();
    let results = driver::run_batch(&mut engine, &requests).unwrap();

    let magnitude: Vec<f32> = results
        .iter()
        .map(|r| (config.magnitude_to_f64(r.magnitude) / 32768.0) as f32)
        .collect();
    let phase: Vec<f32> = results
        .iter()
        .map(|r| (config.phase_to_radians(r.phase) / PI) as f32)
        .collect();

    assert!(phase.iter().all(|p| *p > -1.0 && *p <= 1.0));
    wav_writer::write("sweep/magnitude_phase.wav", &magnitude, &phase).ok();
}

#[test]
fn calibrated_gain_is_accepted() {
    let config = Config::default();
    let vectors = circle(25000.0, 64);
    let tuned = gain::calibrate(&config, &vectors, 128).unwrap();
    let calibrated = config.with_gain_inv(tuned);

    let mut engine = VectoringEngine::new(calibrated).unwrap();
    let result = driver::run(&mut engine, Request::new(15000, 20000)).unwrap();
    let m = calibrated.magnitude_to_f64(result.magnitude);
    assert!((m - 25000.0).abs() <= magnitude_tolerance(config.iterations));
}

#[quickcheck]
fn phase_is_always_in_range(x: i16, y: i16) -> bool {
    let config = Config::default();
    let constants = config.validate().unwrap();
    let mut engine = VectoringEngine::new(config).unwrap();
    let result = driver::run(&mut engine, Request::new(x as i32, y as i32)).unwrap();
    result.phase > -constants.pi && result.phase <= constants.pi
}

#[quickcheck]
fn check_vectoring(x: i16, y: i16) -> bool {
    let (xf, yf) = (x as f64, y as f64);
    if x == 0 && y == 0 {
        return true;
    }
    let radius = xf.hypot(yf);

    let config = Config::default();
    let mut engine = VectoringEngine::new(config).unwrap();
    let result = driver::run(&mut engine, Request::new(x as i32, y as i32)).unwrap();

    let m = config.magnitude_to_f64(result.magnitude);
    (m - radius).abs() <= magnitude_tolerance(config.iterations)
        && phase_error(&config, result, xf, yf).abs() <= phase_tolerance(config.iterations, radius)
}

#[test]
fn short_vectors_stay_within_bounds() {
    let config = Config::default();
    let mut engine = VectoringEngine::new(config).unwrap();

    for x in -40..=40 {
        for y in -40..=40 {
            if x == 0 && y == 0 {
                continue;
            }
            let (xf, yf) = (x as f64, y as f64);
            let radius = xf.hypot(yf);
            let result = driver::run(&mut engine, Request::new(x, y)).unwrap();

            let m = config.magnitude_to_f64(result.magnitude);
            assert!(
                (m - radius).abs() <= magnitude_tolerance(config.iterations),
                "({x}, {y}): magnitude {m}"
            );
            assert!(
                phase_error(&config, result, xf, yf).abs()
                    <= phase_tolerance(config.iterations, radius),
                "({x}, {y}): phase {}",
                config.phase_to_radians(result.phase)
            );
        }
    }
}
