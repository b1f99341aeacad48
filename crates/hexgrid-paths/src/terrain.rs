//! Obstacle sets and grid bounds as a [`Pather`].

use hexgrid_core::{Hex, HexSet};

use crate::traits::Pather;

/// Which hexes exist at all.
#[derive(Debug, Clone, Copy)]
pub enum Bounds<'a> {
    /// Every hex exists.
    Unbounded,
    /// Only the hexes whose keys are in the set exist.
    Within(&'a HexSet),
}

/// A read-only view over caller-owned obstacle and grid sets.
///
/// A hex is passable when it lies inside the bounds and is not blocked.
/// The sets are borrowed for the duration of a query, so several queries
/// may share them.
#[derive(Debug, Clone, Copy)]
pub struct Terrain<'a> {
    blocked: &'a HexSet,
    bounds: Bounds<'a>,
}

impl<'a> Terrain<'a> {
    /// Infinite grid with `blocked` obstacles.
    pub fn unbounded(blocked: &'a HexSet) -> Self {
        Self {
            blocked,
            bounds: Bounds::Unbounded,
        }
    }

    /// The hexes of `grid`, minus `blocked`.
    pub fn bounded(blocked: &'a HexSet, grid: &'a HexSet) -> Self {
        Self {
            blocked,
            bounds: Bounds::Within(grid),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds<'a> {
        self.bounds
    }

    /// Whether `h` is in the obstacle set.
    #[inline]
    pub fn is_blocked(&self, h: Hex) -> bool {
        self.blocked.contains(&h.key())
    }

    /// Whether `h` is part of the grid, ignoring obstacles.
    #[inline]
    pub fn contains(&self, h: Hex) -> bool {
        match self.bounds {
            Bounds::Unbounded => true,
            Bounds::Within(grid) => grid.contains(&h.key()),
        }
    }
}

impl Pather for Terrain<'_> {
    #[inline]
    fn passable(&self, h: Hex) -> bool {
        self.contains(h) && !self.is_blocked(h)
    }
}
