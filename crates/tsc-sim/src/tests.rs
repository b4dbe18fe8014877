//! Integration tests for tsc-sim.

use tsc_control::{
    ControlPolicy, Decision, FixedTimePolicy, HoldPolicy, MaxPressurePolicy, PolicyContext,
    RuleBasedPolicy,
};
use tsc_core::{Direction, SignalTiming, SimConfig, SimRng, Tick};
use tsc_traffic::{BernoulliArrivals, NoArrivals, Vehicle};

use crate::{NoopObserver, SimBuilder, SimError, SimObserver, TickReport};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        total_ticks,
        seed:                  42,
        arrival_rate:          0.0,
        discharge_capacity:    1,
        timing:                SignalTiming { min_green: 5, max_green: 30 },
        output_interval_ticks: 1,
    }
}

/// Observer that keeps every tick report.
#[derive(Default)]
struct Recorder {
    reports: Vec<TickReport>,
}

impl SimObserver for Recorder {
    fn on_tick_end(&mut self, report: &TickReport) {
        self.reports.push(*report);
    }
}

/// Policy wrapper that checks what the inner policy sees and returns.
struct Probe<P> {
    inner:               P,
    max_phase_time_seen: u64,
    early_switches:      usize,
}

impl<P> Probe<P> {
    fn new(inner: P) -> Self {
        Self { inner, max_phase_time_seen: 0, early_switches: 0 }
    }
}

impl<P: ControlPolicy> ControlPolicy for Probe<P> {
    fn decide(&mut self, ctx: &PolicyContext<'_>) -> Decision {
        let phase_time = ctx.intersection.phase_time();
        self.max_phase_time_seen = self.max_phase_time_seen.max(phase_time);
        let d = self.inner.decide(ctx);
        if d == Decision::Switch && !ctx.intersection.can_switch() {
            self.early_switches += 1;
        }
        d
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(test_config(10), HoldPolicy, NoArrivals).build().unwrap();
        assert_eq!(sim.time(), Tick(0));
        assert_eq!(sim.intersection().current_phase(), Direction::NorthSouth);
        assert_eq!(sim.intersection().phase_time(), 0);
        assert_eq!(sim.queue_lengths()[Direction::NorthSouth], 0);
        assert_eq!(sim.queue_lengths()[Direction::EastWest], 0);
        assert!(sim.completed().is_empty());
    }

    #[test]
    fn invalid_timing_fails_fast() {
        let config = SimConfig {
            timing: SignalTiming { min_green: 30, max_green: 30 },
            ..test_config(10)
        };
        let result = SimBuilder::new(config, HoldPolicy, NoArrivals).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn invalid_rate_fails_fast() {
        let config = SimConfig { arrival_rate: 1.5, ..test_config(10) };
        assert!(SimBuilder::new(config, HoldPolicy, NoArrivals).build().is_err());
    }

    #[test]
    fn zero_capacity_fails_fast() {
        let config = SimConfig { discharge_capacity: 0, ..test_config(10) };
        assert!(SimBuilder::new(config, HoldPolicy, NoArrivals).build().is_err());
    }

    #[test]
    fn preload_and_initial_phase() {
        let sim = SimBuilder::new(test_config(10), HoldPolicy, NoArrivals)
            .initial_phase(Direction::EastWest)
            .preload(Direction::NorthSouth, 2)
            .preload(Direction::NorthSouth, 1)
            .preload(Direction::EastWest, 4)
            .build()
            .unwrap();
        assert_eq!(sim.intersection().current_phase(), Direction::EastWest);
        assert_eq!(sim.queue_lengths()[Direction::NorthSouth], 3);
        assert_eq!(sim.queue_lengths()[Direction::EastWest], 4);
        assert_eq!(sim.spawned(), 7);
        assert!(sim.lane(Direction::EastWest).iter().all(|v| v.arrival_time() == Tick(0)));
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    /// No traffic at all: the only switch is the forced one at max_green.
    #[test]
    fn forced_switch_at_max_green_without_traffic() {
        let mut sim = SimBuilder::new(test_config(100), RuleBasedPolicy::new(5), NoArrivals)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run_ticks(30, &mut rec);
        assert_eq!(sim.intersection().current_phase(), Direction::NorthSouth);
        assert_eq!(sim.intersection().phase_time(), 30);
        assert!(rec.reports.iter().all(|r| r.decision == Decision::Hold));

        sim.run_ticks(1, &mut rec);
        let last = rec.reports.last().unwrap();
        assert_eq!(last.tick, Tick(30));
        assert_eq!(last.decision, Decision::ForceSwitch);
        assert_eq!(sim.intersection().current_phase(), Direction::EastWest);
        // Reset to 0 by the switch, then one tick of the new phase elapsed.
        assert_eq!(sim.intersection().phase_time(), 1);
        assert_eq!(sim.switch_count(), 1);
        assert_eq!(sim.summary().forced_switches, 1);
    }

    /// Six vehicles waiting on red: switch as soon as min_green allows, and
    /// the red lane discharges in that same tick.
    #[test]
    fn queued_red_lane_switches_at_min_green() {
        let mut sim = SimBuilder::new(test_config(100), RuleBasedPolicy::new(5), NoArrivals)
            .preload(Direction::EastWest, 6)
            .build()
            .unwrap();

        sim.run_ticks(5, &mut NoopObserver);
        assert_eq!(sim.intersection().current_phase(), Direction::NorthSouth);
        assert_eq!(sim.intersection().phase_time(), 5);
        assert_eq!(sim.lane(Direction::EastWest).len(), 6);
        assert!(sim.completed().is_empty());

        let report = sim.step();
        assert_eq!(report.tick, Tick(5));
        assert_eq!(report.decision, Decision::Switch);
        assert_eq!(report.phase, Direction::EastWest);
        assert_eq!(report.discharged, 1);
        assert_eq!(sim.lane(Direction::EastWest).len(), 5);
        assert_eq!(sim.completed()[0].waiting_time(), 5);

        // The rest drain one per tick; the policy has no reason to switch back.
        sim.run_ticks(5, &mut NoopObserver);
        assert!(sim.lane(Direction::EastWest).is_empty());
        let waits: Vec<u64> = sim.completed().iter().map(Vehicle::waiting_time).collect();
        assert_eq!(waits, [5, 6, 7, 8, 9, 10]);
        assert_eq!(sim.switch_count(), 1);
    }

    /// A green lane with three vehicles and no arrivals drains in three ticks.
    #[test]
    fn green_lane_drains_at_capacity() {
        let config = test_config(3);
        let arrivals = BernoulliArrivals::from_config(&config).unwrap();
        let mut sim = SimBuilder::new(config, HoldPolicy, arrivals)
            .preload(Direction::NorthSouth, 3)
            .build()
            .unwrap();
        let summary = sim.run(&mut NoopObserver);
        assert_eq!(sim.completed().len(), 3);
        assert!(sim.lane(Direction::NorthSouth).is_empty());
        let waits: Vec<u64> = sim.completed().iter().map(Vehicle::waiting_time).collect();
        assert_eq!(waits, [0, 1, 2]);
        assert_eq!(summary.delay.average, 1.0);
    }

    /// Saturated arrivals on a lane that never gets green.
    #[test]
    fn red_lane_accumulates_wait() {
        let config = SimConfig { arrival_rate: 1.0, ..test_config(10) };
        let arrivals = BernoulliArrivals::from_config(&config).unwrap();
        let mut sim = SimBuilder::new(config, HoldPolicy, arrivals).build().unwrap();
        sim.run(&mut NoopObserver);

        let ew = sim.lane(Direction::EastWest);
        assert_eq!(ew.len(), 10);
        for v in ew.iter() {
            assert_eq!(v.waiting_time(), 10 - v.arrival_time().0);
        }
        // The green lane releases each arrival in the tick it arrives.
        assert!(sim.lane(Direction::NorthSouth).is_empty());
        assert_eq!(sim.completed().len(), 10);
        assert!(sim.completed().iter().all(|v| v.waiting_time() == 0));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use super::*;

    fn random_config(seed: u64) -> SimConfig {
        let mut rng = SimRng::new(seed);
        let min_green = 1 + (rng.random::<u64>() % 8);
        SimConfig {
            total_ticks:           400,
            seed,
            arrival_rate:          rng.unit(),
            discharge_capacity:    1 + (rng.random::<u32>() % 3),
            timing:                SignalTiming {
                min_green,
                max_green: min_green + 1 + (rng.random::<u64>() % 30),
            },
            output_interval_ticks: 1,
        }
    }

    fn policies() -> Vec<Box<dyn ControlPolicy>> {
        vec![
            Box::new(RuleBasedPolicy::new(5)),
            Box::new(RuleBasedPolicy::new(0)),
            Box::new(FixedTimePolicy::new(12).unwrap()),
            Box::new(FixedTimePolicy::new(500).unwrap()),
            Box::new(MaxPressurePolicy::new(1)),
        ]
    }

    #[test]
    fn conservation_of_vehicles() {
        for seed in 0..20 {
            let config = random_config(seed);
            let arrivals = BernoulliArrivals::from_config(&config).unwrap();
            let mut sim = SimBuilder::new(config, RuleBasedPolicy::new(3), arrivals)
                .preload(Direction::EastWest, (seed % 4) as usize)
                .build()
                .unwrap();
            let summary = sim.run(&mut NoopObserver);
            assert_eq!(
                summary.spawned,
                summary.delay.count as u64 + summary.remaining as u64,
                "seed {seed}",
            );
        }
    }

    #[test]
    fn liveness_bound_and_min_green_guard() {
        for seed in 0..10 {
            for policy in policies() {
                let config = random_config(seed);
                let max_green = config.timing.max_green;
                let arrivals = BernoulliArrivals::from_config(&config).unwrap();
                let mut sim = SimBuilder::new(config, Probe::new(policy), arrivals).build().unwrap();
                sim.run(&mut NoopObserver);
                assert!(
                    sim.policy.max_phase_time_seen <= max_green,
                    "seed {seed}: saw phase_time {} > max_green {max_green}",
                    sim.policy.max_phase_time_seen,
                );
                assert_eq!(sim.policy.early_switches, 0, "seed {seed}");
            }
        }
    }

    #[test]
    fn hold_policy_breaks_liveness() {
        let mut sim = SimBuilder::new(test_config(100), Probe::new(HoldPolicy), NoArrivals)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver);
        assert_eq!(sim.policy.max_phase_time_seen, 99);
    }

    #[test]
    fn waiting_time_equals_ticks_queued() {
        /// Checks every vehicle the moment it is discharged.
        struct DepartureCheck {
            checked: usize,
        }
        impl SimObserver for DepartureCheck {
            fn on_discharge(&mut self, tick: Tick, direction: Direction, vehicles: &[Vehicle]) {
                for v in vehicles {
                    assert_eq!(v.direction, direction);
                    assert_eq!(v.departure_time(), tick);
                    self.checked += 1;
                }
            }
        }

        let config = SimConfig { arrival_rate: 0.45, ..test_config(500) };
        let arrivals = BernoulliArrivals::from_config(&config).unwrap();
        let mut sim = SimBuilder::new(config, RuleBasedPolicy::new(4), arrivals).build().unwrap();
        let mut check = DepartureCheck { checked: 0 };
        sim.run(&mut check);
        assert_eq!(check.checked, sim.completed().len());
        assert!(check.checked > 0);

        // Still-queued vehicles have waited every tick since they arrived.
        for d in Direction::ALL {
            for v in sim.lane(d).iter() {
                assert_eq!(v.waiting_time(), sim.time().0 - v.arrival_time().0);
            }
        }
    }

    #[test]
    fn fifo_within_each_direction() {
        let config = SimConfig { arrival_rate: 0.4, discharge_capacity: 2, ..test_config(600) };
        let arrivals = BernoulliArrivals::from_config(&config).unwrap();
        let mut sim = SimBuilder::new(config, MaxPressurePolicy::new(0), arrivals).build().unwrap();
        sim.run(&mut NoopObserver);
        for d in Direction::ALL {
            let ids: Vec<u64> = sim
                .completed()
                .iter()
                .filter(|v| v.direction == d)
                .chain(sim.lane(d).iter())
                .map(|v| v.id.0)
                .collect();
            assert!(ids.windows(2).all(|w| w[0] < w[1]), "{d} out of order");
        }
    }

    #[test]
    fn phase_alternates_between_reports() {
        let config = SimConfig { arrival_rate: 0.35, ..test_config(800) };
        let arrivals = BernoulliArrivals::from_config(&config).unwrap();
        let mut sim = SimBuilder::new(config, RuleBasedPolicy::new(2), arrivals).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);
        let mut previous = Direction::NorthSouth;
        for r in &rec.reports {
            if r.decision.is_switch() {
                assert_eq!(r.phase, previous.opposite());
                assert_eq!(r.phase_time, 1);
            } else {
                assert_eq!(r.phase, previous);
            }
            previous = r.phase;
        }
        assert!(sim.switch_count() > 0);
    }

    #[test]
    fn same_seed_same_run() {
        let run = || {
            let config = SimConfig { arrival_rate: 0.3, ..test_config(300) };
            let arrivals = BernoulliArrivals::from_config(&config).unwrap();
            let mut sim = SimBuilder::new(config, RuleBasedPolicy::new(5), arrivals).build().unwrap();
            sim.run(&mut NoopObserver);
            sim.completed().to_vec()
        };
        assert_eq!(run(), run());
    }
}

// ── Run control and observers ─────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn run_stops_at_end_tick() {
        let mut sim = SimBuilder::new(test_config(10), HoldPolicy, NoArrivals).build().unwrap();
        let summary = sim.run(&mut NoopObserver);
        assert_eq!(sim.time(), Tick(10));
        assert_eq!(summary.ticks, 10);
    }

    #[test]
    fn run_ticks_advances_clock() {
        let mut sim = SimBuilder::new(test_config(100), HoldPolicy, NoArrivals).build().unwrap();
        sim.run_ticks(5, &mut NoopObserver);
        assert_eq!(sim.time(), Tick(5));
        sim.run_ticks(3, &mut NoopObserver);
        assert_eq!(sim.time(), Tick(8));
    }

    #[test]
    fn zero_length_run_does_nothing() {
        let mut sim = SimBuilder::new(test_config(0), HoldPolicy, NoArrivals)
            .preload(Direction::NorthSouth, 2)
            .build()
            .unwrap();
        let summary = sim.run(&mut NoopObserver);
        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.remaining, 2);
        assert_eq!(summary.delay.average, 0.0);
    }

    /// Observer that counts callbacks.
    #[derive(Default)]
    struct Counter {
        starts:     usize,
        ends:       usize,
        discharges: usize,
        sim_ends:   usize,
    }
    impl SimObserver for Counter {
        fn on_tick_start(&mut self, _t: Tick) { self.starts += 1; }
        fn on_discharge(&mut self, _t: Tick, _d: Direction, v: &[Vehicle]) { self.discharges += v.len(); }
        fn on_tick_end(&mut self, _r: &TickReport) { self.ends += 1; }
        fn on_sim_end(&mut self, _t: Tick) { self.sim_ends += 1; }
    }

    #[test]
    fn observer_called_correct_number_of_times() {
        let mut sim = SimBuilder::new(test_config(7), HoldPolicy, NoArrivals)
            .preload(Direction::NorthSouth, 4)
            .build()
            .unwrap();
        let mut obs = Counter::default();
        sim.run(&mut obs);
        assert_eq!(obs.starts, 7);
        assert_eq!(obs.ends, 7);
        assert_eq!(obs.discharges, 4);
        assert_eq!(obs.sim_ends, 1);
    }

    #[test]
    fn observer_can_stop_run_early() {
        struct StopAfter(usize, usize);
        impl SimObserver for StopAfter {
            fn on_tick_end(&mut self, _r: &TickReport) { self.0 += 1; }
            fn should_stop(&self) -> bool { self.0 >= self.1 }
        }

        let mut sim = SimBuilder::new(test_config(1_000), HoldPolicy, NoArrivals).build().unwrap();
        sim.run(&mut StopAfter(0, 12));
        assert_eq!(sim.time(), Tick(12));
    }

    #[test]
    fn step_reports_arrivals() {
        let config = SimConfig { arrival_rate: 1.0, ..test_config(5) };
        let arrivals = BernoulliArrivals::from_config(&config).unwrap();
        let mut sim = SimBuilder::new(config, HoldPolicy, arrivals).build().unwrap();
        let r = sim.step();
        assert_eq!(r.total_arrivals(), 2);
        assert_eq!(r.discharged, 1);
        assert_eq!(r.queue_lengths[Direction::EastWest], 1);
        assert_eq!(sim.spawned(), 2);
    }
}

// ── Replications ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch_tests {
    use crate::{ReplicationSummary, replication_seeds, run_replications};

    use super::*;

    fn experiment(seeds: &[u64]) -> Vec<ReplicationSummary> {
        run_replications(seeds, |seed| {
            let config = SimConfig { seed, arrival_rate: 0.3, ..test_config(500) };
            let arrivals = BernoulliArrivals::from_config(&config)?;
            SimBuilder::new(config, RuleBasedPolicy::new(5), arrivals).build()
        })
        .unwrap()
    }

    #[test]
    fn seeds_are_deterministic_and_distinct() {
        let a = replication_seeds(7, 5);
        assert_eq!(a, replication_seeds(7, 5));
        let mut sorted = a.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 5);
    }

    #[test]
    fn replications_are_reproducible_and_in_seed_order() {
        let seeds = replication_seeds(1, 4);
        let first = experiment(&seeds);
        let second = experiment(&seeds);
        assert_eq!(first, second);
        let order: Vec<u64> = first.iter().map(|r| r.seed).collect();
        assert_eq!(order, seeds);
        assert!(first.iter().all(|r| r.summary.ticks == 500));
    }

    #[test]
    fn build_errors_abort_batch() {
        let result = run_replications(&[1, 2], |seed| {
            let config = SimConfig { seed, arrival_rate: 7.0, ..test_config(10) };
            SimBuilder::new(config, HoldPolicy, NoArrivals).build()
        });
        assert!(result.is_err());
    }
}
