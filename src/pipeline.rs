//! Fixed-depth shift buffer.
//!
//! Models a chain of (value, valid) registers. Every tick all slots move one
//! position towards the end; the newest entry enters at index 0 and the
//! entry in the last slot is retired.

use alloc::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct ShiftPipeline<T> {
    slots: VecDeque<Option<T>>,
}

impl<T: Copy> ShiftPipeline<T> {
    /// Creates a pipeline with `depth` empty slots.
    pub fn new(depth: usize) -> Self {
        let mut slots = VecDeque::with_capacity(depth);
        slots.resize(depth, None);
        Self { slots }
    }

    pub fn reset(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.slots.len()
    }

    /// Shifts every slot by one, placing `entry` at index 0, and returns the
    /// entry retired from the last slot.
    ///
    /// A zero-depth pipeline passes `entry` straight through.
    #[inline]
    pub fn shift(&mut self, entry: Option<T>) -> Option<T> {
        if self.slots.is_empty() {
            return entry;
        }
        self.slots.push_front(entry);
        self.slots.pop_back().flatten()
    }

    /// Writes slot 0 after a shift has vacated it.
    #[inline]
    pub fn inject(&mut self, entry: T) {
        debug_assert!(self.first().is_none(), "slot 0 still occupied");
        if let Some(slot) = self.slots.front_mut() {
            *slot = Some(entry);
        }
    }

    #[inline]
    pub fn first(&self) -> Option<T> {
        self.slots.front().copied().flatten()
    }

    /// Contents of the last slot, the one observed from outside.
    #[inline]
    pub fn last(&self) -> Option<T> {
        self.slots.back().copied().flatten()
    }

    /// Number of slots holding a valid entry.
    #[inline]
    pub fn occupancy(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when any slot holds a valid entry.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }
}
