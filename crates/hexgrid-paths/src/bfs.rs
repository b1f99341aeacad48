//! Breadth-first movement range.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use hexgrid_core::{Hex, HexKey, HexSet};

use crate::search::{HexSearch, PathNode};
use crate::terrain::Terrain;
use crate::traits::Pather;

/// The hexes a BFS reached, grouped by the step they were first found at.
///
/// Every step costs 1, so a hex's step index is also the minimal movement
/// cost to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachable {
    fringes: Vec<Vec<Hex>>,
    costs: HashMap<HexKey, u32>,
}

impl Reachable {
    /// Number of reached hexes, the start included.
    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// The start hex is always present, so this is false for any result
    /// of a search.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    #[inline]
    pub fn contains(&self, h: Hex) -> bool {
        self.costs.contains_key(&h.key())
    }

    /// Steps needed to reach `h`, or `None` if it was not reached.
    #[inline]
    pub fn cost(&self, h: Hex) -> Option<u32> {
        self.costs.get(&h.key()).copied()
    }

    /// The hexes first found at each step. `fringes()[0]` is the start.
    ///
    /// Expansion stops at the first empty fringe, so there may be fewer
    /// than `movement + 1` entries.
    #[inline]
    pub fn fringes(&self) -> &[Vec<Hex>] {
        &self.fringes
    }

    /// Reached hexes in discovery order.
    pub fn hexes(&self) -> impl Iterator<Item = Hex> + '_ {
        self.fringes.iter().flatten().copied()
    }

    /// Reached hexes with their costs, in discovery order.
    pub fn nodes(&self) -> impl Iterator<Item = PathNode> + '_ {
        self.fringes
            .iter()
            .zip(0u32..)
            .flat_map(|(f, cost)| f.iter().map(move |&pos| PathNode { pos, cost }))
    }

    /// Keys of every reached hex.
    pub fn keys(&self) -> HexSet {
        self.costs.keys().copied().collect()
    }
}

impl HexSearch {
    /// Every hex reachable from `start` in at most `movement` steps.
    ///
    /// Hexes the pather rejects are never entered nor expanded from. The
    /// start hex itself is always included.
    pub fn reachable<P: Pather>(&mut self, pather: &P, start: Hex, movement: u32) -> Reachable {
        self.reset();

        let mut costs = HashMap::new();
        costs.insert(start.key(), 0);
        let mut fringes = vec![vec![start]];
        self.fringe.push(start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        for step in 1..=movement {
            self.next_fringe.clear();
            for &h in &self.fringe {
                nbuf.clear();
                pather.neighbors(h, &mut nbuf);
                for &n in &nbuf {
                    if let Entry::Vacant(e) = costs.entry(n.key()) {
                        e.insert(step);
                        self.next_fringe.push(n);
                    }
                }
            }
            if self.next_fringe.is_empty() {
                break;
            }
            fringes.push(self.next_fringe.clone());
            std::mem::swap(&mut self.fringe, &mut self.next_fringe);
        }

        self.nbuf = nbuf;
        log::debug!(
            "reachable from {start} within {movement}: {} hexes over {} steps",
            costs.len(),
            fringes.len() - 1
        );
        Reachable { fringes, costs }
    }
}

/// Hexes reachable from `start` within `movement` steps on an unbounded
/// grid, avoiding `blocked`.
pub fn reachable(start: Hex, movement: u32, blocked: &HexSet) -> Reachable {
    HexSearch::new().reachable(&Terrain::unbounded(blocked), start, movement)
}

/// Like [`reachable`], restricted to the hexes of `grid`.
pub fn reachable_within(start: Hex, movement: u32, blocked: &HexSet, grid: &HexSet) -> Reachable {
    HexSearch::new().reachable(&Terrain::bounded(blocked, grid), start, movement)
}
