//! `tsc-output` — simulation output writers for the rust_tsc signal simulator.
//!
//! | Backend | Files created                                                    |
//! |---------|------------------------------------------------------------------|
//! | CSV     | `tick_summaries.csv`, `vehicle_delays.csv`, `replications.csv`   |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `tsc_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tsc_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::{CsvWriter, write_replications};
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{ReplicationRow, TickSummaryRow, VehicleRow};
pub use writer::OutputWriter;
