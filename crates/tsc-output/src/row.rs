//! Plain data row types written by output backends.

use tsc_control::Decision;
use tsc_core::Direction;
use tsc_sim::{ReplicationSummary, TickReport};
use tsc_traffic::Vehicle;

/// Signal and queue state at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:       u64,
    pub phase:      Direction,
    pub phase_time: u64,
    pub queue_ns:   usize,
    pub queue_ew:   usize,
    pub arrivals:   u32,
    pub discharged: usize,
    pub decision:   Decision,
}

impl From<&TickReport> for TickSummaryRow {
    fn from(r: &TickReport) -> Self {
        Self {
            tick:       r.tick.0,
            phase:      r.phase,
            phase_time: r.phase_time,
            queue_ns:   r.queue_lengths[Direction::NorthSouth],
            queue_ew:   r.queue_lengths[Direction::EastWest],
            arrivals:   r.total_arrivals(),
            discharged: r.discharged,
            decision:   r.decision,
        }
    }
}

/// One discharged vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleRow {
    pub vehicle_id:     u64,
    pub direction:      Direction,
    pub arrival_tick:   u64,
    pub departure_tick: u64,
    pub waiting_ticks:  u64,
}

impl From<&Vehicle> for VehicleRow {
    fn from(v: &Vehicle) -> Self {
        Self {
            vehicle_id:     v.id.0,
            direction:      v.direction,
            arrival_tick:   v.arrival_time().0,
            departure_tick: v.departure_time().0,
            waiting_ticks:  v.waiting_time(),
        }
    }
}

/// Totals for one replication of a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplicationRow {
    pub seed:            u64,
    pub ticks:           u64,
    pub spawned:         u64,
    pub completed:       usize,
    pub remaining:       usize,
    pub average_delay:   f64,
    pub max_delay:       u64,
    pub switches:        u64,
    pub forced_switches: u64,
}

impl From<&ReplicationSummary> for ReplicationRow {
    fn from(r: &ReplicationSummary) -> Self {
        let s = &r.summary;
        Self {
            seed:            r.seed,
            ticks:           s.ticks,
            spawned:         s.spawned,
            completed:       s.delay.count,
            remaining:       s.remaining,
            average_delay:   s.delay.average,
            max_delay:       s.delay.max,
            switches:        s.switches,
            forced_switches: s.forced_switches,
        }
    }
}
