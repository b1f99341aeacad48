use std::collections::HashMap;

use hexgrid_core::{Hex, HexKey};

use crate::heap::MinHeap;

/// A hex with the number of steps needed to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Hex,
    pub cost: u32,
}

/// Heap entry for A*: the hex and the g-score it was pushed with, so stale
/// entries can be told apart from current ones on pop.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OpenNode {
    pub(crate) hex: Hex,
    pub(crate) g: u32,
}

// ---------------------------------------------------------------------------
// HexSearch
// ---------------------------------------------------------------------------

/// Reusable scratch space for searches.
///
/// `HexSearch` owns the score maps, open list and neighbour buffer a query
/// needs. Each query clears them before use and returns an owned result,
/// so nothing leaks between queries, but repeated queries through the same
/// `HexSearch` reuse the allocations. The free functions
/// [`find_path`](crate::find_path) and [`reachable`](crate::reachable)
/// build a fresh one per call.
#[derive(Debug, Default)]
pub struct HexSearch {
    // A* caches
    pub(crate) g_score: HashMap<HexKey, u32>,
    pub(crate) came_from: HashMap<HexKey, Hex>,
    pub(crate) open: MinHeap<OpenNode, f64>,
    // BFS caches
    pub(crate) fringe: Vec<Hex>,
    pub(crate) next_fringe: Vec<Hex>,
    // shared scratch buffer for neighbour queries
    pub(crate) nbuf: Vec<Hex>,
}

impl HexSearch {
    pub fn new() -> Self {
        Self {
            nbuf: Vec::with_capacity(6),
            ..Self::default()
        }
    }

    /// Drop every cached entry, keeping allocations.
    pub(crate) fn reset(&mut self) {
        self.g_score.clear();
        self.came_from.clear();
        self.open.clear();
        self.fringe.clear();
        self.next_fringe.clear();
        self.nbuf.clear();
    }
}
