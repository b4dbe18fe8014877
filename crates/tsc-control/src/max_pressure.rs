//! Longest-queue-first control.

use crate::{ControlPolicy, Decision, PolicyContext};

/// Switch when the red queue is longer than the green queue by more than
/// `margin` vehicles.
///
/// For a single intersection with unbounded exits, a phase's pressure is
/// just its queue length, so this is max-pressure control with a hysteresis
/// margin.  `margin = 0` switches as soon as the red side is strictly
/// longer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaxPressurePolicy {
    margin: usize,
}

impl MaxPressurePolicy {
    pub fn new(margin: usize) -> Self {
        Self { margin }
    }
}

impl ControlPolicy for MaxPressurePolicy {
    fn decide(&mut self, ctx: &PolicyContext<'_>) -> Decision {
        if ctx.intersection.max_green_reached() {
            Decision::ForceSwitch
        } else if ctx.intersection.can_switch()
            && ctx.red_queue() > ctx.green_queue().saturating_add(self.margin)
        {
            Decision::Switch
        } else {
            Decision::Hold
        }
    }

    fn name(&self) -> &'static str {
        "max_pressure"
    }
}
