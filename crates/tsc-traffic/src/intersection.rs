//! `Intersection` — the two-phase signal state machine.
//!
//! ```text
//!            switch()
//!     NS  ───────────▶  EW
//!      ▲                 │
//!      └──── switch() ───┘
//! ```
//!
//! `switch` is the only transition and it is unconditional.  Whether a
//! switch is *allowed* is the caller's business: ordinary switches check
//! [`can_switch`][Intersection::can_switch] first, while a switch forced at
//! `max_green` deliberately does not.

use tsc_core::{Direction, SignalTiming};

use crate::TrafficResult;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Intersection {
    current_phase: Direction,
    /// Ticks since the last switch (or since creation).
    phase_time:    u64,
    timing:        SignalTiming,
}

impl Intersection {
    /// A signal showing green to north–south, with `phase_time = 0`.
    pub fn new(timing: SignalTiming) -> TrafficResult<Self> {
        Self::with_phase(timing, Direction::NorthSouth)
    }

    /// A signal starting with `phase` green.
    pub fn with_phase(timing: SignalTiming, phase: Direction) -> TrafficResult<Self> {
        timing.validate()?;
        Ok(Self { current_phase: phase, phase_time: 0, timing })
    }

    /// The direction that currently has right-of-way.
    #[inline]
    pub fn current_phase(&self) -> Direction {
        self.current_phase
    }

    /// The direction currently held at red.
    #[inline]
    pub fn red_direction(&self) -> Direction {
        self.current_phase.opposite()
    }

    #[inline]
    pub fn phase_time(&self) -> u64 {
        self.phase_time
    }

    /// `true` once the current phase has held for at least `min_green`.
    #[inline]
    pub fn can_switch(&self) -> bool {
        self.phase_time >= self.timing.min_green
    }

    /// `true` once the current phase has reached `max_green`.
    #[inline]
    pub fn max_green_reached(&self) -> bool {
        self.phase_time >= self.timing.max_green
    }

    /// Give right-of-way to the other direction and restart the phase clock.
    pub fn switch(&mut self) {
        self.current_phase = self.current_phase.opposite();
        self.phase_time = 0;
    }

    /// Count one more tick of the current phase.
    #[inline]
    pub fn advance(&mut self) {
        self.phase_time += 1;
    }
}
