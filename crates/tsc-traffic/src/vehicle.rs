//! The `Vehicle` value entity.

use tsc_core::{Direction, Tick, VehicleId};

/// A vehicle queued at (or already through) the intersection.
///
/// `arrival_time` is fixed at creation.  `waiting_time` only ever grows, by
/// exactly one per [`tick`][Self::tick], and the simulator stops calling
/// `tick` the moment the vehicle leaves its lane.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id:        VehicleId,
    pub direction: Direction,
    arrival_time:  Tick,
    waiting_time:  u64,
}

impl Vehicle {
    pub fn new(id: VehicleId, direction: Direction, arrival_time: Tick) -> Self {
        Self { id, direction, arrival_time, waiting_time: 0 }
    }

    #[inline]
    pub fn arrival_time(&self) -> Tick {
        self.arrival_time
    }

    /// Ticks spent queued so far.
    #[inline]
    pub fn waiting_time(&self) -> u64 {
        self.waiting_time
    }

    /// Record one more tick in the queue.
    #[inline]
    pub fn tick(&mut self) {
        self.waiting_time += 1;
    }

    /// The tick at which the vehicle was discharged, assuming it has been.
    ///
    /// A vehicle discharged in the tick it arrived never waited, so this is
    /// simply `arrival_time + waiting_time`.
    #[inline]
    pub fn departure_time(&self) -> Tick {
        self.arrival_time + self.waiting_time
    }
}
