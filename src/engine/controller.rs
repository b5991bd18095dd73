//! Controller state machine shared by both engines.
//!
//! ```text
//! Idle -> [LoadInput] -> Iterate (x iterations) -> PostProcess -> Done -> Idle
//! ```
//!
//! `LoadInput` is only visited while a request is travelling through an
//! input buffer. The rotation registers live inside the states that use them,
//! so they cannot outlive a request.

use crate::config::Constants;
use crate::post;
use crate::quadrant;
use crate::rotation::RotationState;
use crate::{Polar, Request};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Idle,
    LoadInput,
    Iterate(RotationState),
    PostProcess(RotationState),
    Done,
}

impl State {
    pub fn name(&self) -> &'static str {
        match self {
            State::Idle => "idle",
            State::LoadInput => "load-input",
            State::Iterate(_) => "iterate",
            State::PostProcess(_) => "post-process",
            State::Done => "done",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Controller {
    constants: Constants,
    state: State,
}

impl Controller {
    pub fn new(constants: Constants) -> Self {
        Self {
            constants,
            state: State::Idle,
        }
    }

    pub fn reset(&mut self) {
        self.state = State::Idle;
    }

    #[inline]
    pub fn state(&self) -> &State {
        &self.state
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }

    #[inline]
    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    /// Advances one tick.
    ///
    /// `captured` is set on the tick a request enters the engine, `arrived`
    /// carries a request that has left the input side and is ready to be
    /// normalized. Returns the result on the post-processing tick.
    pub fn advance(&mut self, captured: bool, arrived: Option<Request>) -> Option<Polar> {
        let constants = &self.constants;
        let mut produced = None;

        let next = match self.state {
            State::Idle | State::LoadInput => match arrived {
                Some(request) => State::Iterate(quadrant::normalize(request, constants)),
                None if captured || self.state == State::LoadInput => State::LoadInput,
                None => State::Idle,
            },
            State::Iterate(mut rotation) => {
                rotation.step(constants);
                if rotation.is_complete(constants) {
                    State::PostProcess(rotation)
                } else {
                    State::Iterate(rotation)
                }
            }
            State::PostProcess(rotation) => {
                produced = Some(post::finish(&rotation, constants));
                State::Done
            }
            State::Done => State::Idle,
        };

        if core::mem::discriminant(&next) != core::mem::discriminant(&self.state) {
            log::trace!("{} -> {}", self.state.name(), next.name());
        }
        self.state = next;

        produced
    }
}
