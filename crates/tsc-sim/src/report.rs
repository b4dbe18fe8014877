//! Per-tick and per-run reports.

use tsc_control::Decision;
use tsc_core::{Direction, PerDirection, Tick};
use tsc_traffic::DelayStats;

/// What happened during one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    pub tick: Tick,

    /// Vehicles that arrived on each approach this tick (0 or 1 each).
    pub arrivals: PerDirection<u32>,

    /// The policy's decision, already applied.
    pub decision: Decision,

    /// The phase that was green for this tick's discharge.
    pub phase: Direction,

    /// `phase_time` at the end of the tick, after the phase clock advanced.
    pub phase_time: u64,

    /// Vehicles released by the green lane this tick.
    pub discharged: usize,

    /// Queue lengths at the end of the tick.
    pub queue_lengths: PerDirection<usize>,
}

impl TickReport {
    pub fn total_arrivals(&self) -> u32 {
        self.arrivals.values().sum()
    }
}

/// Totals for a whole run, as read by the entry point and batch runner.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RunSummary {
    /// Ticks simulated so far (the simulator's clock).
    pub ticks: u64,

    /// Vehicles ever enqueued, pre-loaded ones included.
    pub spawned: u64,

    /// Vehicles still queued, both approaches together.
    pub remaining: usize,

    /// Phase switches of either kind.
    pub switches: u64,

    /// Switches forced by `max_green`.
    pub forced_switches: u64,

    /// Delay over discharged vehicles; `delay.count` is the throughput.
    pub delay: DelayStats,
}
