//! The reference queue-threshold policy.

use crate::{ControlPolicy, Decision, PolicyContext};

/// Switch when the red approach is backing up, within min/max green.
///
/// Rules, in priority order:
///
/// 1. `phase_time >= max_green` → [`Decision::ForceSwitch`], unconditionally.
/// 2. `can_switch()` and red queue `> threshold` → [`Decision::Switch`].
/// 3. Otherwise [`Decision::Hold`].
///
/// Rule 1 is not folded into rule 2: the forced path never consults
/// `can_switch()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleBasedPolicy {
    threshold: usize,
}

impl RuleBasedPolicy {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }
}

impl ControlPolicy for RuleBasedPolicy {
    fn decide(&mut self, ctx: &PolicyContext<'_>) -> Decision {
        if ctx.intersection.max_green_reached() {
            Decision::ForceSwitch
        } else if ctx.intersection.can_switch() && ctx.red_queue() > self.threshold {
            Decision::Switch
        } else {
            Decision::Hold
        }
    }

    fn name(&self) -> &'static str {
        "rule_based"
    }
}
