//! Serializable policy selection.

use crate::{
    ControlPolicy, FixedTimePolicy, HoldPolicy, MaxPressurePolicy, PolicyResult, RuleBasedPolicy,
};

/// Which policy to run, with its tunables.
///
/// Every tunable is spelled out; there are no hidden defaults, so an
/// experiment file fully determines the policy.
///
/// With the `serde` feature this reads as e.g.
/// `{ "kind": "rule_based", "threshold": 5 }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum PolicyConfig {
    RuleBased { threshold: usize },
    FixedTime { green_ticks: u64 },
    MaxPressure { margin: usize },
    Hold,
}

impl PolicyConfig {
    /// Validate the tunables and construct the policy.
    pub fn build(&self) -> PolicyResult<Box<dyn ControlPolicy>> {
        Ok(match *self {
            PolicyConfig::RuleBased { threshold } => Box::new(RuleBasedPolicy::new(threshold)),
            PolicyConfig::FixedTime { green_ticks } => Box::new(FixedTimePolicy::new(green_ticks)?),
            PolicyConfig::MaxPressure { margin } => Box::new(MaxPressurePolicy::new(margin)),
            PolicyConfig::Hold => Box::new(HoldPolicy),
        })
    }
}
