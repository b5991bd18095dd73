//! Top-level module for the engines.
//!
//! An engine is advanced by calling [`Engine::tick`] once per logical clock.
//! A driver offers a request with [`Engine::accept`]; the next tick samples it.
//! Results are presented on [`Outputs`] while `done` is set.

pub mod controller;
pub mod pipelined_engine;
pub mod vectoring_engine;

use dyn_clone::DynClone;

use crate::config::Config;
use crate::error::Result;
use crate::{Polar, Request};

pub trait Engine: DynClone {
    /// Returns every register, buffer and latched request to its idle state.
    fn reset(&mut self);

    /// Latches a request for the next tick.
    ///
    /// Fails with [`crate::Error::Busy`] and leaves the engine untouched when
    /// [`Engine::can_accept`] is false.
    fn accept(&mut self, request: Request) -> Result<()>;

    fn can_accept(&self) -> bool;

    /// Advances the engine by one tick and returns the new outputs.
    fn tick(&mut self) -> Outputs;

    /// Outputs as of the last tick.
    fn outputs(&self) -> Outputs;

    /// Ticks from the one that samples a request until its result is presented.
    fn latency(&self) -> usize;

    fn config(&self) -> &Config;
}

dyn_clone::clone_trait_object!(Engine);

/// Externally visible signals of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outputs {
    /// Set from acceptance until the result has left the engine.
    pub busy: bool,

    /// Set while `magnitude` and `phase` hold a valid result.
    pub done: bool,

    pub magnitude: u64,
    pub phase: i64,
}

impl Outputs {
    /// The presented result, if any.
    #[inline]
    pub fn result(&self) -> Option<Polar> {
        self.done.then_some(Polar {
            magnitude: self.magnitude,
            phase: self.phase,
        })
    }
}
