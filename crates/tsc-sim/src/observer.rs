//! Simulation observer trait for progress reporting and data collection.

use tsc_core::{Direction, Tick};
use tsc_traffic::Vehicle;

use crate::TickReport;

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         if report.tick.0 % self.interval == 0 {
///             println!("{}: queues {:?}", report.tick, report.queue_lengths);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before arrivals.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per tick in which the green lane released vehicles.
    ///
    /// `vehicles` are in discharge order and their waiting times are final.
    fn on_discharge(&mut self, _tick: Tick, _direction: Direction, _vehicles: &[Vehicle]) {}

    /// Called at the end of each tick, after the phase clock advanced.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Polled by [`Sim::run`][crate::Sim::run] between ticks.  Returning
    /// `true` ends the run early; the current tick is always completed.
    fn should_stop(&self) -> bool {
        false
    }

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
