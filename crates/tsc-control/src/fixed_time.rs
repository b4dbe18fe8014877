//! Fixed-time (pre-timed) control.

use crate::{ControlPolicy, Decision, PolicyContext, PolicyError, PolicyResult};

/// Give each phase the same green duration regardless of demand.
///
/// A `green_ticks` below `min_green` is effectively raised to `min_green`;
/// one at or above `max_green` is cut short by the forced switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedTimePolicy {
    green_ticks: u64,
}

impl FixedTimePolicy {
    pub fn new(green_ticks: u64) -> PolicyResult<Self> {
        if green_ticks == 0 {
            return Err(PolicyError::Config("fixed-time green must be at least 1 tick".into()));
        }
        Ok(Self { green_ticks })
    }
}

impl ControlPolicy for FixedTimePolicy {
    fn decide(&mut self, ctx: &PolicyContext<'_>) -> Decision {
        let signal = ctx.intersection;
        if signal.max_green_reached() {
            Decision::ForceSwitch
        } else if signal.can_switch() && signal.phase_time() >= self.green_ticks {
            Decision::Switch
        } else {
            Decision::Hold
        }
    }

    fn name(&self) -> &'static str {
        "fixed_time"
    }
}
