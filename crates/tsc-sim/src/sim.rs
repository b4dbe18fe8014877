//! The `Sim` struct and its tick loop.

use log::{debug, info, trace};
use tsc_control::{ControlPolicy, Decision, PolicyContext};
use tsc_core::{Direction, PerDirection, SimConfig, Tick, VehicleId};
use tsc_traffic::{ArrivalModel, DelayStats, Intersection, Lane, Vehicle};

use crate::{NoopObserver, RunSummary, SimObserver, TickReport};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner for one signalized intersection.
///
/// `Sim<P, A>` exclusively owns the signal and both lanes.  The policy `P`
/// only ever sees them through a [`PolicyContext`] for the length of one
/// `decide` call, and the arrival model `A` is the run's sole source of
/// randomness.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: ControlPolicy, A: ArrivalModel> {
    /// Run configuration (total ticks, seed, arrival rate, timing, …).
    pub config: SimConfig,

    /// The control policy.  Called once per tick.
    pub policy: P,

    /// The arrival process.  Called once per direction per tick.
    pub arrivals: A,

    pub(crate) time:            Tick,
    pub(crate) intersection:    Intersection,
    pub(crate) lanes:           PerDirection<Lane>,
    pub(crate) completed:       Vec<Vehicle>,
    pub(crate) next_vehicle:    VehicleId,
    pub(crate) spawned:         u64,
    pub(crate) switches:        u64,
    pub(crate) forced_switches: u64,
}

impl<P: ControlPolicy, A: ArrivalModel> Sim<P, A> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the simulation by exactly one tick.
    pub fn step(&mut self) -> TickReport {
        self.process_tick(&mut NoopObserver)
    }

    /// Run from the current tick to `config.end_tick()`, or until the
    /// observer asks to stop.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunSummary {
        info!(
            "starting run: {} ticks, policy {}, arrival rate {}",
            self.config.total_ticks,
            self.policy.name(),
            self.config.arrival_rate,
        );
        while self.time < self.config.end_tick() && !observer.should_stop() {
            self.process_tick(observer);
        }
        observer.on_sim_end(self.time);

        let summary = self.summary();
        info!(
            "run finished at {}: {} vehicles passed, {} queued, average delay {:.2} ticks",
            self.time, summary.delay.count, summary.remaining, summary.delay.average,
        );
        summary
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`
    /// and `should_stop`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.process_tick(observer);
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// The current tick: number of ticks simulated so far.
    #[inline]
    pub fn time(&self) -> Tick {
        self.time
    }

    #[inline]
    pub fn intersection(&self) -> &Intersection {
        &self.intersection
    }

    #[inline]
    pub fn lane(&self, direction: Direction) -> &Lane {
        &self.lanes[direction]
    }

    /// Current length of each approach's queue.
    pub fn queue_lengths(&self) -> PerDirection<usize> {
        self.lanes.map(Lane::len)
    }

    /// Discharged vehicles, in discharge order.
    #[inline]
    pub fn completed(&self) -> &[Vehicle] {
        &self.completed
    }

    /// Vehicles ever enqueued.  Always equals
    /// `completed().len()` plus the sum of `queue_lengths()`.
    #[inline]
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    #[inline]
    pub fn switch_count(&self) -> u64 {
        self.switches
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks:           self.time.0,
            spawned:         self.spawned,
            remaining:       self.queue_lengths().values().sum(),
            switches:        self.switches,
            forced_switches: self.forced_switches,
            delay:           DelayStats::from_vehicles(&self.completed),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) -> TickReport {
        let now = self.time;
        observer.on_tick_start(now);

        // ── ① Arrivals ────────────────────────────────────────────────────
        let mut arrivals = PerDirection::new(0u32, 0);
        for direction in Direction::ALL {
            if self.arrivals.arrives(direction, now) {
                self.spawn(direction, now);
                arrivals[direction] += 1;
            }
        }

        // ── ② Policy decision ─────────────────────────────────────────────
        //
        // Applied before discharge so a switch this tick changes which lane
        // moves this tick.
        let decision = {
            let ctx = PolicyContext::new(now, &self.intersection, self.queue_lengths());
            self.policy.decide(&ctx)
        };
        if decision.is_switch() {
            self.apply_switch(now, decision);
        }

        // ── ③ Movement ────────────────────────────────────────────────────
        let green = self.intersection.current_phase();
        let released = self.lanes[green].discharge();
        let discharged = released.len();
        if !released.is_empty() {
            observer.on_discharge(now, green, &released);
            self.completed.extend(released);
        }
        for (_, lane) in self.lanes.iter_mut() {
            lane.advance_waiting();
        }

        // ── ④ Phase tick ──────────────────────────────────────────────────
        self.intersection.advance();

        let report = TickReport {
            tick:          now,
            arrivals,
            decision,
            phase:         green,
            phase_time:    self.intersection.phase_time(),
            discharged,
            queue_lengths: self.queue_lengths(),
        };
        trace!(
            "{now}: phase {green} ({}), arrivals {}, discharged {discharged}, queues NS {} EW {}",
            report.phase_time,
            report.total_arrivals(),
            report.queue_lengths[Direction::NorthSouth],
            report.queue_lengths[Direction::EastWest],
        );
        observer.on_tick_end(&report);

        // ── ⑤ Clock ───────────────────────────────────────────────────────
        self.time = now.next();
        report
    }

    /// Enqueue a fresh vehicle on `direction`.
    pub(crate) fn spawn(&mut self, direction: Direction, at: Tick) {
        let id = self.next_vehicle;
        self.next_vehicle = id.next();
        self.spawned += 1;
        self.lanes[direction].enqueue(Vehicle::new(id, direction, at));
    }

    fn apply_switch(&mut self, now: Tick, decision: Decision) {
        let held = self.intersection.phase_time();
        self.intersection.switch();
        self.switches += 1;
        if decision == Decision::ForceSwitch {
            self.forced_switches += 1;
        }
        debug!(
            "{now}: {decision} to {} after {held} ticks of green",
            self.intersection.current_phase(),
        );
    }
}
