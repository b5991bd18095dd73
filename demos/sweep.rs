//! Drives a pipelined engine around a circle and logs every result.
//!
//! Usage: `cargo run --example sweep -- [points] [radius]`

use core::f64::consts::PI;

use simple_logger::SimpleLogger;

use cordic_polar::driver;
use cordic_polar::engine::pipelined_engine::PipelinedEngine;
use cordic_polar::{Config, Engine, PipelineDepths, Request};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let mut args = std::env::args().skip(1);
    let points: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(16);
    let radius: f64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(10000.0);

    let config = Config::default();
    let mut engine = PipelinedEngine::new(config, PipelineDepths::new(2, 4))?;
    log::info!(
        "{} iterations, latency {} ticks",
        config.iterations,
        engine.latency()
    );

    let requests: Vec<Request> = (0..points)
        .map(|k| {
            let t = 2.0 * PI * k as f64 / points as f64;
            Request::new(
                (radius * t.cos()).round() as i32,
                (radius * t.sin()).round() as i32,
            )
        })
        .collect();

    for (request, result) in requests
        .iter()
        .zip(driver::run_batch(&mut engine, &requests)?)
    {
        log::info!(
            "({:6}, {:6}) -> magnitude {:10.3}, phase {:8.3}°",
            request.x,
            request.y,
            config.magnitude_to_f64(result.magnitude),
            config.phase_to_degrees(result.phase)
        );
    }

    Ok(())
}
