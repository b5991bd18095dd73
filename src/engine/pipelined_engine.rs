//! Pipelined vectoring engine.
//!
//! Requests pass through an input shift buffer before they are normalized and
//! results through an output shift buffer before they are presented. Both
//! buffers shift every tick. The outputs always show the last output slot, so
//! `done` is a one-tick pulse per result.
//!
//! The controller accepts a new request as soon as it is idle again, even
//! while earlier results are still draining. Results are injected into slot
//! 0 right after the shift has emptied it, and consecutive results are at
//! least `iterations + 2` ticks apart, so an undrained result is never
//! overwritten. The rotation itself stays serial.

use crate::config::{Config, PipelineDepths};
use crate::engine::controller::{Controller, State};
use crate::engine::{Engine, Outputs};
use crate::error::{Error, Result};
use crate::pipeline::ShiftPipeline;
use crate::{Polar, Request};

#[derive(Debug, Clone)]
pub struct PipelinedEngine {
    config: Config,
    depths: PipelineDepths,
    controller: Controller,
    pending: Option<Request>,
    input: ShiftPipeline<Request>,
    output: ShiftPipeline<Polar>,
}

impl PipelinedEngine {
    pub fn new(config: Config, depths: PipelineDepths) -> Result<Self> {
        let constants = config.validate()?;
        depths.validate()?;
        Ok(Self {
            config,
            depths,
            controller: Controller::new(constants),
            pending: None,
            input: ShiftPipeline::new(depths.input),
            output: ShiftPipeline::new(depths.output),
        })
    }

    #[inline]
    pub fn state(&self) -> &State {
        self.controller.state()
    }

    #[inline]
    pub fn depths(&self) -> PipelineDepths {
        self.depths
    }

    /// Number of results currently held in the output buffer.
    pub fn results_in_flight(&self) -> usize {
        self.output.occupancy()
    }
}

impl Engine for PipelinedEngine {
    fn reset(&mut self) {
        log::debug!("pipelined engine reset");
        self.controller.reset();
        self.pending = None;
        self.input.reset();
        self.output.reset();
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
        let captured = self.pending.take();
        let arrived = self.input.shift(captured);
        self.output.shift(None);

        if let Some(result) = self.controller.advance(captured.is_some(), arrived) {
            self.output.inject(result);
        }

        self.outputs()
    }

    fn outputs(&self) -> Outputs {
        let presented = self.output.last();
        let result = presented.unwrap_or_default();
        Outputs {
            busy: !self.controller.is_idle()
                || self.pending.is_some()
                || self.input.is_occupied()
                || self.output.is_occupied(),
            done: presented.is_some(),
            magnitude: result.magnitude,
            phase: result.phase,
        }
    }

    fn latency(&self) -> usize {
        self.depths.input + self.controller.constants().iterations + 2 + self.depths.output - 1
    }

    fn config(&self) -> &Config {
        &self.config
    }
}
