//! Arrival models: where new vehicles come from.
//!
//! The simulator never draws random numbers itself; it asks an injected
//! [`ArrivalModel`] once per direction per tick.  Tests that need exact
//! control pass a [`NoArrivals`] or a `BernoulliArrivals` with rates of
//! exactly 0 or 1.

use tsc_core::{Direction, PerDirection, SimConfig, SimRng, Tick};

use crate::{TrafficError, TrafficResult};

/// Pluggable vehicle arrival process.
///
/// Called in [`Direction::ALL`] order, once per direction, at the start of
/// every tick.  At most one vehicle can arrive per direction per tick.
pub trait ArrivalModel {
    /// Whether a vehicle arrives on `direction` during `tick`.
    fn arrives(&mut self, direction: Direction, tick: Tick) -> bool;
}

impl<A: ArrivalModel + ?Sized> ArrivalModel for Box<A> {
    fn arrives(&mut self, direction: Direction, tick: Tick) -> bool {
        (**self).arrives(direction, tick)
    }
}

// ── BernoulliArrivals ─────────────────────────────────────────────────────────

/// Independent per-tick Bernoulli arrivals on each approach.
///
/// Each call draws one uniform value in `[0, 1)` and reports an arrival when
/// it falls below the direction's rate, so a rate of `0.0` never fires and a
/// rate of `1.0` always does.
#[derive(Clone, Debug)]
pub struct BernoulliArrivals {
    rates: PerDirection<f64>,
    rng:   SimRng,
}

impl BernoulliArrivals {
    /// The same `rate` on both approaches.
    pub fn new(rate: f64, rng: SimRng) -> TrafficResult<Self> {
        Self::with_rates(PerDirection::new(rate, rate), rng)
    }

    /// A separate rate for each approach.
    pub fn with_rates(rates: PerDirection<f64>, rng: SimRng) -> TrafficResult<Self> {
        for (direction, &rate) in rates.iter() {
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(TrafficError::InvalidRate { direction, rate });
            }
        }
        Ok(Self { rates, rng })
    }

    /// Symmetric arrivals at `config.arrival_rate`, seeded from `config.seed`.
    pub fn from_config(config: &SimConfig) -> TrafficResult<Self> {
        Self::new(config.arrival_rate, SimRng::new(config.seed))
    }
}

impl ArrivalModel for BernoulliArrivals {
    fn arrives(&mut self, direction: Direction, _tick: Tick) -> bool {
        self.rng.unit() < self.rates[direction]
    }
}

// ── NoArrivals ────────────────────────────────────────────────────────────────

/// An [`ArrivalModel`] that never produces a vehicle.
///
/// Useful for draining pre-loaded queues and for timing-only tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoArrivals;

impl ArrivalModel for NoArrivals {
    fn arrives(&mut self, _direction: Direction, _tick: Tick) -> bool {
        false
    }
}
