//! The `ControlPolicy` trait, the extension point for signal control.

use crate::{Decision, PolicyContext};

/// Pluggable signal control.
///
/// Called exactly once per tick, after arrivals and before discharge.  A
/// switch returned here therefore changes which lane discharges in the same
/// tick.
///
/// Every implementation is expected to honour the liveness bound: return
/// [`Decision::ForceSwitch`] whenever
/// [`max_green_reached`][tsc_traffic::Intersection::max_green_reached] is
/// true, checked before any other rule.  [`HoldPolicy`][crate::HoldPolicy]
/// is the one deliberate exception.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysAtMin;
///
/// impl ControlPolicy for AlwaysAtMin {
///     fn decide(&mut self, ctx: &PolicyContext<'_>) -> Decision {
///         if ctx.intersection.max_green_reached() {
///             Decision::ForceSwitch
///         } else if ctx.intersection.can_switch() {
///             Decision::Switch
///         } else {
///             Decision::Hold
///         }
///     }
/// }
/// ```
pub trait ControlPolicy: Send {
    /// Decide whether to end the current phase this tick.
    fn decide(&mut self, ctx: &PolicyContext<'_>) -> Decision;

    /// Short label used in logs and run summaries.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<P: ControlPolicy + ?Sized> ControlPolicy for Box<P> {
    fn decide(&mut self, ctx: &PolicyContext<'_>) -> Decision {
        (**self).decide(ctx)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
