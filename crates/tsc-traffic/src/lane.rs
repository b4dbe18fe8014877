//! `Lane` — one approach's FIFO queue.
//!
//! Vehicles join at the tail and leave from the head, at most
//! `discharge_capacity` per green tick.  There is no capacity limit on the
//! queue itself and no way for a vehicle to overtake another.

use std::collections::VecDeque;

use tsc_core::Direction;

use crate::{TrafficError, TrafficResult, Vehicle};

#[derive(Clone, Debug)]
pub struct Lane {
    queue:              VecDeque<Vehicle>,
    discharge_capacity: u32,
}

impl Lane {
    /// An empty lane releasing up to `discharge_capacity` vehicles per tick.
    pub fn new(direction: Direction, discharge_capacity: u32) -> TrafficResult<Self> {
        if discharge_capacity == 0 {
            return Err(TrafficError::ZeroCapacity(direction));
        }
        Ok(Self { queue: VecDeque::new(), discharge_capacity })
    }

    /// Append `vehicle` to the tail.
    pub fn enqueue(&mut self, vehicle: Vehicle) {
        self.queue.push_back(vehicle);
    }

    /// Remove up to `discharge_capacity` vehicles from the head, in order.
    ///
    /// Returns fewer when the queue is shorter, and an empty `Vec` when it is
    /// empty.  This is the only way a lane ever shrinks.
    pub fn discharge(&mut self) -> Vec<Vehicle> {
        let n = self.queue.len().min(self.discharge_capacity as usize);
        self.queue.drain(..n).collect()
    }

    /// Add one tick of waiting to every queued vehicle.
    ///
    /// Called on both lanes every tick: red-lane vehicles wait too.
    pub fn advance_waiting(&mut self) {
        for vehicle in &mut self.queue {
            vehicle.tick();
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queued vehicles, head first.
    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.queue.iter()
    }
}
