//! `tsc-sim` — tick loop orchestrator for the rust_tsc signal simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Arrivals  — ArrivalModel is asked once per direction (NS, then EW);
//!                 each hit enqueues a Vehicle { arrival_time: tick }.
//!   ② Decide    — ControlPolicy::decide sees the signal and both queue
//!                 lengths; Switch / ForceSwitch flips the phase *now*.
//!   ③ Movement  — the green lane (post-decision) discharges into
//!                 `completed`; then both lanes add one tick of waiting.
//!   ④ Phase     — Intersection::advance (phase_time += 1).
//!   ⑤ Clock     — time += 1.
//! ```
//!
//! The order is part of the model: a switch decided in ② is effective for
//! the discharge in ③ of the same tick.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Runs [`batch::run_replications`] on Rayon's thread pool. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tsc_control::RuleBasedPolicy;
//! use tsc_core::SimConfig;
//! use tsc_sim::{NoopObserver, SimBuilder};
//! use tsc_traffic::BernoulliArrivals;
//!
//! let config = SimConfig::default();
//! let arrivals = BernoulliArrivals::from_config(&config)?;
//! let mut sim = SimBuilder::new(config, RuleBasedPolicy::new(5), arrivals).build()?;
//! let summary = sim.run(&mut NoopObserver);
//! println!("average delay: {:.2}", summary.delay.average);
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;

#[cfg(test)]
mod tests;

pub use batch::{ReplicationSummary, replication_seeds, run_replications};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{RunSummary, TickReport};
pub use sim::Sim;
