//! Read-only simulation state passed to every policy decision.

use tsc_core::{PerDirection, Tick};
use tsc_traffic::Intersection;

/// What a [`ControlPolicy`][crate::ControlPolicy] may observe in one tick.
///
/// Built by tsc-sim after arrivals and before discharge.  The borrow of the
/// intersection lasts only for the `decide` call.
#[derive(Clone, Copy, Debug)]
pub struct PolicyContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// The signal: current phase, phase time, min/max green.
    pub intersection: &'a Intersection,

    /// Queue length of each approach, including this tick's arrivals.
    pub queues: PerDirection<usize>,
}

impl<'a> PolicyContext<'a> {
    #[inline]
    pub fn new(tick: Tick, intersection: &'a Intersection, queues: PerDirection<usize>) -> Self {
        Self { tick, intersection, queues }
    }

    /// Queue length on the approach that currently has green.
    #[inline]
    pub fn green_queue(&self) -> usize {
        self.queues[self.intersection.current_phase()]
    }

    /// Queue length on the approach currently held at red.
    #[inline]
    pub fn red_queue(&self) -> usize {
        self.queues[self.intersection.red_direction()]
    }
}
