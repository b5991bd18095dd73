//! Run-to-completion helpers for a host loop.
//!
//! These follow the handshake an external driver has to respect: wait until
//! the engine can take a request, offer it, keep ticking and pick the result
//! up while `done` is set. Every wait is bounded by the engine's latency so a
//! misbehaving engine surfaces as [`Error::Timeout`] instead of a hang.

use alloc::vec::Vec;

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::{Polar, Request};

/// Ticks until the engine reports not busy.
pub fn drain<E: Engine + ?Sized>(engine: &mut E) -> Result<usize> {
    let bound = engine.latency() + 1;
    let mut ticks = 0;
    while engine.outputs().busy {
        if ticks == bound {
            log::warn!("engine still busy after {ticks} ticks");
            return Err(Error::Timeout { ticks });
        }
        engine.tick();
        ticks += 1;
    }
    Ok(ticks)
}

/// Computes one request on an otherwise idle engine.
pub fn run<E: Engine + ?Sized>(engine: &mut E, request: Request) -> Result<Polar> {
    drain(engine)?;
    engine.accept(request)?;

    let bound = engine.latency();
    for _ in 0..bound {
        if let Some(result) = engine.tick().result() {
            return Ok(result);
        }
    }

    log::warn!("no result for {request:?} after {bound} ticks");
    Err(Error::Timeout { ticks: bound })
}

/// Computes a batch of requests, offering each one as soon as the engine can
/// take it. Results are returned in request order.
pub fn run_batch<E: Engine + ?Sized>(engine: &mut E, requests: &[Request]) -> Result<Vec<Polar>> {
    let mut results = Vec::with_capacity(requests.len());
    if requests.is_empty() {
        return Ok(results);
    }

    drain(engine)?;

    let bound = (engine.latency() + 1) * (requests.len() + 1);
    let mut pending = requests.iter();
    let mut next = pending.next();

    for _ in 0..bound {
        if let Some(request) = next {
            if engine.can_accept() {
                engine.accept(*request)?;
                next = pending.next();
            }
        }

        if let Some(result) = engine.tick().result() {
            results.push(result);
            if results.len() == requests.len() {
                return Ok(results);
            }
        }
    }

    log::warn!(
        "batch stalled with {} of {} results after {bound} ticks",
        results.len(),
        requests.len()
    );
    Err(Error::Timeout { ticks: bound })
}
