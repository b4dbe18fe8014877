//! Run configuration.
//!
//! All tunables are construction-time parameters.  Nothing in the simulator
//! reads a global default: `SimConfig::default()` exists only so callers can
//! override a few fields with struct-update syntax.

use crate::{CoreError, CoreResult, Tick};

// ── SignalTiming ──────────────────────────────────────────────────────────────

/// Minimum and maximum green durations, in ticks.
///
/// A field missing from a JSON experiment file keeps its default.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SignalTiming {
    /// A phase may be ended voluntarily once it has held this many ticks.
    pub min_green: u64,
    /// A phase that has held this many ticks must be ended.
    pub max_green: u64,
}

impl SignalTiming {
    /// Build and validate in one go.
    pub fn new(min_green: u64, max_green: u64) -> CoreResult<Self> {
        let timing = SignalTiming { min_green, max_green };
        timing.validate()?;
        Ok(timing)
    }

    /// `min_green` must be positive and strictly below `max_green`.
    ///
    /// Otherwise a policy could either never satisfy `can_switch()` before
    /// the forced switch, or be forced to switch every tick.
    pub fn validate(&self) -> CoreResult<()> {
        if self.min_green == 0 || self.min_green >= self.max_green {
            return Err(CoreError::InvalidTiming {
                min_green: self.min_green,
                max_green: self.max_green,
            });
        }
        Ok(())
    }
}

impl Default for SignalTiming {
    fn default() -> Self {
        SignalTiming { min_green: 5, max_green: 30 }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON experiment file by the demo binary and
/// passed to `SimBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total ticks to simulate with `Sim::run`.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Probability in `[0, 1]` that one vehicle arrives on each approach in
    /// a given tick.
    pub arrival_rate: f64,

    /// Vehicles released per tick by the green lane.
    pub discharge_capacity: u32,

    pub timing: SignalTiming,

    /// Write a tick summary every N ticks.  0 disables summaries.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Reject configurations that would produce nonsensical runs.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.arrival_rate.is_finite() || !(0.0..=1.0).contains(&self.arrival_rate) {
            return Err(CoreError::Config(format!(
                "arrival_rate must be in [0, 1], got {}",
                self.arrival_rate
            )));
        }
        if self.discharge_capacity == 0 {
            return Err(CoreError::Config("discharge_capacity must be at least 1".into()));
        }
        self.timing.validate()
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            total_ticks:           2_000,
            seed:                  42,
            arrival_rate:          0.3,
            discharge_capacity:    1,
            timing:                SignalTiming::default(),
            output_interval_ticks: 1,
        }
    }
}
