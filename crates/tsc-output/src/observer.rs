//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use log::warn;
use tsc_core::{Direction, SimConfig, Tick};
use tsc_sim::{SimObserver, TickReport};
use tsc_traffic::Vehicle;

use crate::row::{TickSummaryRow, VehicleRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries and discharged vehicles to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:                W,
    output_interval_ticks: u64,
    last_error:            Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, writing a tick summary every
    /// `config.output_interval_ticks` ticks.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            output_interval_ticks: config.output_interval_ticks,
            last_error:            None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("output write failed, further errors suppressed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_discharge(&mut self, _tick: Tick, _direction: Direction, vehicles: &[Vehicle]) {
        let rows: Vec<VehicleRow> = vehicles.iter().map(VehicleRow::from).collect();
        let result = self.writer.write_vehicles(&rows);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        if self.output_interval_ticks == 0 || report.tick.0 % self.output_interval_ticks != 0 {
            return;
        }
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(report));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
