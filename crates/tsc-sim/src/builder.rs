//! Fluent builder for constructing a [`Sim`].

use tsc_control::ControlPolicy;
use tsc_core::{Direction, PerDirection, SimConfig, Tick, VehicleId};
use tsc_traffic::{ArrivalModel, Intersection, Lane};

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<P, A>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total ticks, seed, arrival rate, capacity, timing
/// - `P: ControlPolicy`: the signal control policy
/// - `A: ArrivalModel`: the arrival process (e.g.
///   [`tsc_traffic::BernoulliArrivals`])
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                     |
/// |-------------------------|-----------------------------|
/// | `.initial_phase(d)`     | `Direction::NorthSouth`     |
/// | `.preload(d, n)`        | Both lanes start empty      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, RuleBasedPolicy::new(5), NoArrivals)
///     .preload(Direction::EastWest, 6)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<P: ControlPolicy, A: ArrivalModel> {
    config:        SimConfig,
    policy:        P,
    arrivals:      A,
    initial_phase: Direction,
    preload:       PerDirection<usize>,
}

impl<P: ControlPolicy, A: ArrivalModel> SimBuilder<P, A> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, policy: P, arrivals: A) -> Self {
        Self {
            config,
            policy,
            arrivals,
            initial_phase: Direction::NorthSouth,
            preload:       PerDirection::default(),
        }
    }

    /// Start the run with `direction` holding the green.
    pub fn initial_phase(mut self, direction: Direction) -> Self {
        self.initial_phase = direction;
        self
    }

    /// Queue `count` vehicles on `direction` before the first tick.
    ///
    /// Pre-loaded vehicles have `arrival_time = 0` and count towards
    /// `spawned`.  Repeated calls for the same direction accumulate.
    pub fn preload(mut self, direction: Direction, count: usize) -> Self {
        self.preload[direction] += count;
        self
    }

    /// Validate the configuration, build the signal and lanes, and return
    /// a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P, A>> {
        self.config.validate()?;

        let intersection = Intersection::with_phase(self.config.timing, self.initial_phase)?;
        let lanes = PerDirection::new(
            Lane::new(Direction::NorthSouth, self.config.discharge_capacity)?,
            Lane::new(Direction::EastWest, self.config.discharge_capacity)?,
        );

        let mut sim = Sim {
            config:          self.config,
            policy:          self.policy,
            arrivals:        self.arrivals,
            time:            Tick::ZERO,
            intersection,
            lanes,
            completed:       Vec::new(),
            next_vehicle:    VehicleId::FIRST,
            spawned:         0,
            switches:        0,
            forced_switches: 0,
        };

        for (direction, &count) in self.preload.iter() {
            for _ in 0..count {
                sim.spawn(direction, Tick::ZERO);
            }
        }

        Ok(sim)
    }
}
