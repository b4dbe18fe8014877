//! Policy decisions: what a policy asks the simulator to do this tick.

/// The outcome of one [`ControlPolicy::decide`][crate::ControlPolicy::decide] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Decision {
    /// Keep the current phase.
    #[default]
    Hold,

    /// End the current phase voluntarily.  Policies only return this once
    /// `can_switch()` holds.
    Switch,

    /// End the current phase because it reached `max_green`.
    ///
    /// Applied exactly like `Switch`; kept separate so reports can tell the
    /// liveness bound apart from an opportunistic switch.
    ForceSwitch,
}

impl Decision {
    /// `true` for both kinds of switch.
    #[inline]
    pub fn is_switch(self) -> bool {
        !matches!(self, Decision::Hold)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Hold        => "hold",
            Decision::Switch      => "switch",
            Decision::ForceSwitch => "force_switch",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
