//! `tsc-control` — signal control policies.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                    |
//! |-------------------|-------------------------------------------------------------|
//! | [`decision`]      | `Decision` enum (`Hold`, `Switch`, `ForceSwitch`)           |
//! | [`context`]       | `PolicyContext<'a>` — read-only view handed to a policy     |
//! | [`policy`]        | `ControlPolicy` trait                                       |
//! | [`rule_based`]    | `RuleBasedPolicy` — queue threshold with min/max green      |
//! | [`fixed_time`]    | `FixedTimePolicy` — constant green split                    |
//! | [`max_pressure`]  | `MaxPressurePolicy` — serve the longer queue                |
//! | [`hold`]          | `HoldPolicy` — never switches                               |
//! | [`config`]        | `PolicyConfig` — serializable policy selection              |
//! | [`error`]         | `PolicyError`, `PolicyResult<T>`                            |
//!
//! # Design notes
//!
//! A tick in tsc-sim has a decide step and an apply step:
//!
//! 1. **Decide**: the policy reads the current phase, phase time and queue
//!    lengths through `&PolicyContext` and returns one [`Decision`].
//! 2. **Apply**: tsc-sim calls `Intersection::switch()` for `Switch` and
//!    `ForceSwitch`, before the green lane discharges.
//!
//! Returning a single value is what limits a policy to at most one switch
//! per tick, and the context holds no lanes, so a policy cannot reorder or
//! drain a queue.

pub mod config;
pub mod context;
pub mod decision;
pub mod error;
pub mod fixed_time;
pub mod hold;
pub mod max_pressure;
pub mod policy;
pub mod rule_based;


pub use config::PolicyConfig;
pub use context::PolicyContext;
pub use decision::Decision;
pub use error::{PolicyError, PolicyResult};
pub use fixed_time::FixedTimePolicy;
pub use hold::HoldPolicy;
pub use max_pressure::MaxPressurePolicy;
pub use policy::ControlPolicy;
pub use rule_based::RuleBasedPolicy;
