//! Delay metrics over discharged vehicles.
//!
//! Pure reductions: nothing here mutates a vehicle.  An empty slice is not
//! an error, every statistic is simply zero.

use crate::Vehicle;

/// Mean `waiting_time` over `vehicles`, or `0.0` when there are none.
pub fn average_delay(vehicles: &[Vehicle]) -> f64 {
    if vehicles.is_empty() {
        return 0.0;
    }
    let total: u64 = vehicles.iter().map(Vehicle::waiting_time).sum();
    total as f64 / vehicles.len() as f64
}

/// Largest `waiting_time` over `vehicles`, or `0` when there are none.
pub fn max_delay(vehicles: &[Vehicle]) -> u64 {
    vehicles.iter().map(Vehicle::waiting_time).max().unwrap_or(0)
}

/// Summary of the delay experienced by a set of vehicles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DelayStats {
    pub count:   usize,
    pub average: f64,
    pub max:     u64,
    /// Sum of all waiting times, in vehicle-ticks.
    pub total:   u64,
}

impl DelayStats {
    pub fn from_vehicles(vehicles: &[Vehicle]) -> Self {
        Self {
            count:   vehicles.len(),
            average: average_delay(vehicles),
            max:     max_delay(vehicles),
            total:   vehicles.iter().map(Vehicle::waiting_time).sum(),
        }
    }
}
