//! Non-pipelined vectoring engine.
//!
//! One request at a time. The result registers are written on the
//! post-processing tick and `done` stays high for as long as the controller
//! sits in `Done`. The registers keep their value afterwards but are only
//! valid while `done` is set.

use crate::config::Config;
use crate::engine::controller::{Controller, State};
use crate::engine::{Engine, Outputs};
use crate::error::{Error, Result};
use crate::{Polar, Request};

#[derive(Debug, Clone)]
pub struct VectoringEngine {
    config: Config,
    controller: Controller,
    pending: Option<Request>,
    result: Polar,
}

impl VectoringEngine {
    pub fn new(config: Config) -> Result<Self> {
        let constants = config.validate()?;
        Ok(Self {
            config,
            controller: Controller::new(constants),
            pending: None,
            result: Polar::default(),
        })
    }

    #[inline]
    pub fn state(&self) -> &State {
        self.controller.state()
    }
}

impl Engine for VectoringEngine {
    fn reset(&mut self) {
        log::debug!("vectoring engine reset");
        self.controller.reset();
        self.pending = None;
        self.result = Polar::default();
    }

    fn accept(&mut self, request: Request) -> Result<()> {
        if !self.can_accept() {
            log::debug!("rejected {request:?} in state {}", self.state().name());
            return Err(Error::Busy);
        }
        log::debug!("accepted {request:?}");
        self.pending = Some(request);
        Ok(())
    }

    #[inline]
    fn can_accept(&self) -> bool {
        self.controller.is_idle() && self.pending.is_none()
    }

    fn tick(&mut self) -> Outputs {
        let request = self.pending.take();
        if let Some(result) = self.controller.advance(request.is_some(), request) {
            self.result = result;
        }
        self.outputs()
    }

    fn outputs(&self) -> Outputs {
        Outputs {
            busy: !self.controller.is_idle() || self.pending.is_some(),
            done: *self.controller.state() == State::Done,
            magnitude: self.result.magnitude,
            phase: self.result.phase,
        }
    }

    fn latency(&self) -> usize {
        self.controller.constants().iterations + 2
    }

    fn config(&self) -> &Config {
        &self.config
    }
}
