//! Approach directions and per-direction storage.
//!
//! The intersection has exactly two approaches, and the signal phase is named
//! after the approach holding right-of-way, so `Direction` doubles as the
//! phase type.  There is no third value: a phase can only ever flip to
//! [`Direction::opposite`].

use std::ops::{Index, IndexMut};

/// One of the two approaches of the intersection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// North–south approach.  Holds the green at simulation start.
    #[default]
    NorthSouth,
    /// East–west approach.
    EastWest,
}

impl Direction {
    /// Both directions in the fixed order used for arrival draws and output.
    pub const ALL: [Direction; 2] = [Direction::NorthSouth, Direction::EastWest];

    /// The other approach.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::NorthSouth => Direction::EastWest,
            Direction::EastWest   => Direction::NorthSouth,
        }
    }

    /// Position in [`Direction::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::NorthSouth => 0,
            Direction::EastWest   => 1,
        }
    }

    /// Short label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::NorthSouth => "NS",
            Direction::EastWest   => "EW",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PerDirection ──────────────────────────────────────────────────────────────

/// A value for each of the two directions, indexed by [`Direction`].
///
/// Both entries always exist, which is what lets the simulator hand out
/// `lanes[d]` without an `Option`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerDirection<T>([T; 2]);

impl<T> PerDirection<T> {
    pub fn new(north_south: T, east_west: T) -> Self {
        PerDirection([north_south, east_west])
    }

    /// Apply `f` to each entry, preserving direction.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PerDirection<U> {
        PerDirection([f(&self.0[0]), f(&self.0[1])])
    }

    /// `(direction, &value)` pairs in [`Direction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        Direction::ALL.into_iter().zip(self.0.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Direction, &mut T)> {
        Direction::ALL.into_iter().zip(self.0.iter_mut())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T> Index<Direction> for PerDirection<T> {
    type Output = T;
    #[inline]
    fn index(&self, d: Direction) -> &T {
        &self.0[d.index()]
    }
}

impl<T> IndexMut<Direction> for PerDirection<T> {
    #[inline]
    fn index_mut(&mut self, d: Direction) -> &mut T {
        &mut self.0[d.index()]
    }
}
