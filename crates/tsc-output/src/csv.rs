//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_summaries.csv`
//! - `vehicle_delays.csv`
//!
//! Batch runs additionally write `replications.csv` via
//! [`write_replications`].

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tsc_sim::ReplicationSummary;

use crate::writer::OutputWriter;
use crate::{OutputResult, ReplicationRow, TickSummaryRow, VehicleRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    vehicles:  Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick", "phase", "phase_time", "queue_ns", "queue_ew", "arrivals", "discharged", "decision",
        ])?;

        let mut vehicles = Writer::from_path(dir.join("vehicle_delays.csv"))?;
        vehicles.write_record(["vehicle_id", "direction", "arrival_tick", "departure_tick", "waiting_ticks"])?;

        Ok(Self {
            summaries,
            vehicles,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.phase.to_string(),
            row.phase_time.to_string(),
            row.queue_ns.to_string(),
            row.queue_ew.to_string(),
            row.arrivals.to_string(),
            row.discharged.to_string(),
            row.decision.to_string(),
        ])?;
        Ok(())
    }

    fn write_vehicles(&mut self, rows: &[VehicleRow]) -> OutputResult<()> {
        for row in rows {
            self.vehicles.write_record(&[
                row.vehicle_id.to_string(),
                row.direction.to_string(),
                row.arrival_tick.to_string(),
                row.departure_tick.to_string(),
                row.waiting_ticks.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.vehicles.flush()?;
        Ok(())
    }
}

/// Write one row per replication to `dir/replications.csv`.
pub fn write_replications(dir: &Path, results: &[ReplicationSummary]) -> OutputResult<()> {
    let mut w = Writer::from_path(dir.join("replications.csv"))?;
    w.write_record([
        "seed", "ticks", "spawned", "completed", "remaining",
        "average_delay", "max_delay", "switches", "forced_switches",
    ])?;
    for row in results.iter().map(ReplicationRow::from) {
        w.write_record(&[
            row.seed.to_string(),
            row.ticks.to_string(),
            row.spawned.to_string(),
            row.completed.to_string(),
            row.remaining.to_string(),
            format!("{:.4}", row.average_delay),
            row.max_delay.to_string(),
            row.switches.to_string(),
            row.forced_switches.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
