//! `tsc-core` — foundational types for the `rust_tsc` signal simulator.
//!
//! This crate is a dependency of every other `tsc-*` crate.  It has no
//! `tsc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VehicleId`                                           |
//! | [`time`]        | `Tick`                                                |
//! | [`direction`]   | `Direction` (NS / EW), `PerDirection<T>`              |
//! | [`config`]      | `SimConfig`, `SignalTiming`                           |
//! | [`rng`]         | `SimRng`                                              |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SignalTiming, SimConfig};
pub use direction::{Direction, PerDirection};
pub use error::{CoreError, CoreResult};
pub use ids::VehicleId;
pub use rng::SimRng;
pub use time::Tick;
