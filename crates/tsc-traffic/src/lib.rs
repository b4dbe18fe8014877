//! `tsc-traffic` — the physical side of the intersection.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                     |
//! |------------------|--------------------------------------------------------------|
//! | [`vehicle`]      | `Vehicle` — arrival tick and accumulated waiting time        |
//! | [`lane`]         | `Lane` — FIFO queue with bounded per-tick discharge          |
//! | [`intersection`] | `Intersection` — two-phase signal with min/max green         |
//! | [`arrival`]      | `ArrivalModel` trait, `BernoulliArrivals`, `NoArrivals`      |
//! | [`metrics`]      | `average_delay`, `DelayStats`                                |
//! | [`error`]        | `TrafficError`, `TrafficResult<T>`                           |
//!
//! Nothing here knows about control policies or the tick loop; `tsc-sim`
//! owns the ordering of operations within a tick.

pub mod arrival;
pub mod error;
pub mod intersection;
pub mod lane;
pub mod metrics;
pub mod vehicle;


pub use arrival::{ArrivalModel, BernoulliArrivals, NoArrivals};
pub use error::{TrafficError, TrafficResult};
pub use intersection::Intersection;
pub use lane::Lane;
pub use metrics::{DelayStats, average_delay, max_delay};
pub use vehicle::Vehicle;
