//! A policy that never switches.

use crate::{ControlPolicy, Decision, PolicyContext};

/// A [`ControlPolicy`] that always returns [`Decision::Hold`].
///
/// Ignores `max_green`, so the red approach is never served.  Useful for
/// tests that need one lane to stay green for the whole run.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoldPolicy;

impl ControlPolicy for HoldPolicy {
    fn decide(&mut self, _ctx: &PolicyContext<'_>) -> Decision {
        Decision::Hold
    }

    fn name(&self) -> &'static str {
        "hold"
    }
}
