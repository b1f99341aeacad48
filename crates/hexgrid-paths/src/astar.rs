//! A* shortest paths with selectable heuristics.

use std::fmt;

use hexgrid_core::{Hex, HexSet, Layout};

use crate::search::{HexSearch, OpenNode};
use crate::terrain::Terrain;
use crate::traits::Pather;

/// Remaining-cost estimate used to order the open list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Always 0: the search degenerates to Dijkstra.
    Zero,
    /// Hex distance to the goal. Admissible and consistent on a grid where
    /// every step costs 1.
    #[default]
    HexDistance,
    /// Pixel distance under the query's [`Layout`], divided by the layout
    /// size. Adjacent centres are `√3` sizes apart, so this overestimates
    /// and the returned path is not guaranteed to be shortest.
    Euclidean,
}

impl Heuristic {
    /// Estimate the remaining cost from `from` to `to`.
    pub fn estimate(self, from: Hex, to: Hex, layout: &Layout) -> f64 {
        match self {
            Heuristic::Zero => 0.0,
            Heuristic::HexDistance => f64::from(from.distance(to)),
            Heuristic::Euclidean => {
                let a = layout.hex_to_pixel(from);
                let b = layout.hex_to_pixel(to);
                a.distance(b) / layout.size()
            }
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Heuristic::Zero => "dijkstra",
            Heuristic::HexDistance => "hex-distance",
            Heuristic::Euclidean => "euclidean",
        })
    }
}

/// Everything an A* search needs.
///
/// The obstacle and grid sets are borrowed: the caller owns them and may
/// share them between queries.
#[derive(Debug, Clone, Copy)]
pub struct PathQuery<'a> {
    pub start: Hex,
    pub end: Hex,
    /// Hexes the path may not enter.
    pub blocked: &'a HexSet,
    /// Hexes that exist. Anything outside is treated like an obstacle.
    pub grid: &'a HexSet,
    pub heuristic: Heuristic,
    /// Only consulted by [`Heuristic::Euclidean`].
    pub layout: Layout,
    /// Give up after this many pops, stale ones included. `None` searches
    /// until the open list is empty.
    pub max_expansions: Option<usize>,
}

impl<'a> PathQuery<'a> {
    /// A query with the hex-distance heuristic, a default layout and no
    /// expansion cap.
    pub fn new(start: Hex, end: Hex, blocked: &'a HexSet, grid: &'a HexSet) -> Self {
        Self {
            start,
            end,
            blocked,
            grid,
            heuristic: Heuristic::default(),
            layout: Layout::default(),
            max_expansions: None,
        }
    }

    pub fn with_heuristic(self, heuristic: Heuristic) -> Self {
        Self { heuristic, ..self }
    }

    pub fn with_layout(self, layout: Layout) -> Self {
        Self { layout, ..self }
    }

    pub fn with_max_expansions(self, max: usize) -> Self {
        Self {
            max_expansions: Some(max),
            ..self
        }
    }

    /// The passability view this query searches over.
    pub fn terrain(&self) -> Terrain<'a> {
        Terrain::bounded(self.blocked, self.grid)
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathStatus {
    /// `path` runs from start to end.
    Found,
    /// The open list ran dry: no path exists.
    Unreachable,
    /// The expansion cap was hit before the end was found.
    Exhausted,
}

/// Outcome of an A* search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Start to end inclusive, or empty when no path was found.
    pub path: Vec<Hex>,
    /// Every hex popped from the open list, in pop order. A hex whose
    /// cost improved after it was first pushed appears more than once.
    pub explored: Vec<Hex>,
    pub status: PathStatus,
}

impl PathResult {
    #[inline]
    pub fn is_found(&self) -> bool {
        self.status == PathStatus::Found
    }

    /// Number of steps along the path, or `None` when there is no path.
    #[inline]
    pub fn cost(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

impl HexSearch {
    /// Compute a path for `query` using A*.
    ///
    /// An unreachable end is not an error: the result has an empty path,
    /// [`PathStatus::Unreachable`] and every hex the search popped.
    pub fn find_path(&mut self, query: &PathQuery<'_>) -> PathResult {
        self.astar(&query.terrain(), query)
    }

    fn astar<P: Pather>(&mut self, pather: &P, query: &PathQuery<'_>) -> PathResult {
        self.reset();

        let PathQuery {
            start,
            end,
            heuristic,
            layout,
            max_expansions,
            ..
        } = *query;
        let estimate = |h: Hex| heuristic.estimate(h, end, &layout);

        self.g_score.insert(start.key(), 0);
        self.open.push(OpenNode { hex: start, g: 0 }, estimate(start));

        let mut explored = Vec::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let status = 'search: loop {
            if max_expansions.is_some_and(|max| explored.len() >= max) {
                break 'search PathStatus::Exhausted;
            }
            let Some((current, _)) = self.open.pop() else {
                break 'search PathStatus::Unreachable;
            };

            explored.push(current.hex);
            log::trace!("astar pop {} g={}", current.hex, current.g);

            if current.hex == end {
                break 'search PathStatus::Found;
            }

            // An entry superseded by a cheaper push has nothing left to
            // relax: the cheaper one was popped first.
            let best = self.g_score.get(&current.hex.key()).copied();
            if best.is_some_and(|g| current.g > g) {
                continue;
            }

            nbuf.clear();
            pather.neighbors(current.hex, &mut nbuf);

            let tentative = current.g + 1;
            for &n in nbuf.iter() {
                let key = n.key();
                if self.g_score.get(&key).is_some_and(|&g| tentative >= g) {
                    continue;
                }
                self.g_score.insert(key, tentative);
                self.came_from.insert(key, current.hex);
                self.open.push(
                    OpenNode {
                        hex: n,
                        g: tentative,
                    },
                    f64::from(tentative) + estimate(n),
                );
            }
        };

        self.nbuf = nbuf;

        let path = match status {
            PathStatus::Found => self.reconstruct(start, end),
            _ => Vec::new(),
        };
        log::debug!(
            "astar {start} -> {end} ({heuristic}): {status:?}, {} steps, {} explored",
            path.len().saturating_sub(1),
            explored.len()
        );
        PathResult {
            path,
            explored,
            status,
        }
    }

    /// Walk `came_from` back from `end` to `start`.
    fn reconstruct(&self, start: Hex, end: Hex) -> Vec<Hex> {
        let mut path = vec![end];
        let mut cur = end;
        while cur != start {
            match self.came_from.get(&cur.key()) {
                Some(&prev) => {
                    path.push(prev);
                    cur = prev;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}

/// Run A* for `query` with fresh scratch space.
pub fn find_path(query: &PathQuery<'_>) -> PathResult {
    HexSearch::new().find_path(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::bfs::reachable_within;
    use crate::heap::MinHeap;
    use hexgrid_core::{HexKey, Orientation, Point, key_set, shapes};

    fn grid(radius: u32) -> HexSet {
        key_set(shapes::hexagonal(radius))
    }

    fn assert_valid_path(result: &PathResult, query: &PathQuery<'_>) {
        assert_eq!(result.status, PathStatus::Found);
        assert_eq!(result.path.first(), Some(&query.start));
        assert_eq!(result.path.last(), Some(&query.end));
        for w in result.path.windows(2) {
            assert_eq!(w[0].distance(w[1]), 1);
        }
        for h in &result.path[1..] {
            assert!(query.grid.contains(&h.key()));
            assert!(!query.blocked.contains(&h.key()));
        }
    }

    /// The plain A* loop: every pop is recorded and expanded with the best
    /// known g. Returns `(path, explored)`.
    fn textbook_astar(q: &PathQuery<'_>) -> (Vec<Hex>, Vec<Hex>) {
        let estimate = |h: Hex| q.heuristic.estimate(h, q.end, &q.layout);
        let mut open = MinHeap::new();
        let mut came_from: HashMap<HexKey, Hex> = HashMap::new();
        let mut g_score: HashMap<HexKey, u32> = HashMap::new();
        let mut explored = Vec::new();

        g_score.insert(q.start.key(), 0);
        open.push(q.start, estimate(q.start));
        while let Some((current, _)) = open.pop() {
            explored.push(current);
            if current == q.end {
                let mut path = vec![current];
                let mut k = current;
                while let Some(&prev) = came_from.get(&k.key()) {
                    path.push(prev);
                    k = prev;
                }
                path.reverse();
                return (path, explored);
            }
            let g = g_score[&current.key()];
            for n in current.neighbors() {
                if q.blocked.contains(&n.key()) || !q.grid.contains(&n.key()) {
                    continue;
                }
                let t = g + 1;
                if g_score.get(&n.key()).is_none_or(|&old| t < old) {
                    g_score.insert(n.key(), t);
                    came_from.insert(n.key(), current);
                    open.push(n, f64::from(t) + estimate(n));
                }
            }
        }
        (Vec::new(), explored)
    }

    #[test]
    fn explored_matches_the_textbook_loop() {
        let grid = grid(5);
        let blocked = key_set((-3..=2).map(|r| Hex::axial(1, r)));
        let start = Hex::axial(-2, 0);
        let mut search = HexSearch::new();
        let mut repeated_pops = 0;
        for orientation in [Orientation::Flat, Orientation::Pointy] {
            let layout = Layout::new(orientation, 30.0, Point::new(100.0, 100.0)).unwrap();
            for heuristic in [Heuristic::Zero, Heuristic::HexDistance, Heuristic::Euclidean] {
                for end in shapes::hexagonal(5) {
                    if blocked.contains(&end.key()) {
                        continue;
                    }
                    let q = PathQuery::new(start, end, &blocked, &grid)
                        .with_heuristic(heuristic)
                        .with_layout(layout);
                    let result = search.find_path(&q);
                    let (path, explored) = textbook_astar(&q);
                    assert_eq!(result.path, path, "{heuristic} {orientation:?} -> {end}");
                    assert_eq!(result.explored, explored, "{heuristic} {orientation:?} -> {end}");
                    if key_set(explored.iter().copied()).len() < explored.len() {
                        repeated_pops += 1;
                    }
                }
            }
        }
        // Some queries pop a hex again after its cost improved.
        assert!(repeated_pops > 0);
    }

    #[test]
    fn stale_pops_count_towards_the_cap() {
        let grid = grid(5);
        let blocked = key_set((-3..=2).map(|r| Hex::axial(1, r)));
        let start = Hex::axial(-2, 0);
        for end in shapes::hexagonal(5) {
            if blocked.contains(&end.key()) {
                continue;
            }
            let q = PathQuery::new(start, end, &blocked, &grid);
            let (_, explored) = textbook_astar(&q);
            let capped = find_path(&q.with_max_expansions(explored.len().saturating_sub(1)));
            assert_eq!(capped.status, PathStatus::Exhausted, "-> {end}");
            assert_eq!(capped.explored[..], explored[..explored.len() - 1]);
        }
    }

    #[test]
    fn straight_path_on_open_grid() {
        let grid = grid(4);
        let blocked = HexSet::new();
        let q = PathQuery::new(Hex::ORIGIN, Hex::axial(3, -3), &blocked, &grid);
        let result = find_path(&q);
        assert_valid_path(&result, &q);
        assert_eq!(result.path.len(), 4);
        assert_eq!(result.cost(), Some(3));
        assert_eq!(result.explored[0], Hex::ORIGIN);
    }

    #[test]
    fn start_equals_end() {
        let grid = grid(2);
        let blocked = HexSet::new();
        let h = Hex::axial(1, 0);
        let result = find_path(&PathQuery::new(h, h, &blocked, &grid));
        assert_eq!(result.path, vec![h]);
        assert_eq!(result.explored, vec![h]);
        assert!(result.is_found());
    }

    #[test]
    fn walled_in_end_is_unreachable() {
        let grid = grid(4);
        let end = Hex::axial(2, -1);
        let blocked = key_set(end.neighbors());
        let q = PathQuery::new(Hex::ORIGIN, end, &blocked, &grid);
        let result = find_path(&q);
        assert_eq!(result.status, PathStatus::Unreachable);
        assert!(result.path.is_empty());
        assert_eq!(result.cost(), None);

        let explored = key_set(result.explored.iter().copied());
        let bfs = reachable_within(Hex::ORIGIN, u32::MAX, &blocked, &grid);
        assert_eq!(explored, bfs.keys());
        assert!(!explored.contains(&end.key()));
    }

    #[test]
    fn detours_around_a_wall() {
        let grid = grid(5);
        // Wall on q = 1 except its two ends.
        let blocked = key_set((-3..=2).map(|r| Hex::axial(1, r)));
        let q = PathQuery::new(Hex::ORIGIN, Hex::axial(2, 0), &blocked, &grid);
        for heuristic in [Heuristic::Zero, Heuristic::HexDistance] {
            let q = q.with_heuristic(heuristic);
            let result = find_path(&q);
            assert_valid_path(&result, &q);
            let bfs = reachable_within(q.start, u32::MAX, &blocked, &grid);
            assert_eq!(result.cost(), bfs.cost(q.end).map(|c| c as usize));
        }
    }

    #[test]
    fn heuristics_agree_on_cost_when_admissible() {
        let grid = grid(6);
        let blocked = key_set([
            Hex::axial(0, -1),
            Hex::axial(1, -1),
            Hex::axial(1, 0),
            Hex::axial(-1, 0),
            Hex::axial(2, -3),
            Hex::axial(-2, 3),
        ]);
        for end in shapes::hexagonal(6) {
            if blocked.contains(&end.key()) {
                continue;
            }
            let q = PathQuery::new(Hex::ORIGIN, end, &blocked, &grid);
            let dijkstra = find_path(&q.with_heuristic(Heuristic::Zero));
            let astar = find_path(&q);
            assert_eq!(dijkstra.cost(), astar.cost(), "to {end}");
        }
    }

    #[test]
    fn euclidean_heuristic_still_yields_a_valid_path() {
        let grid = grid(5);
        let blocked = key_set((-2..=2).map(|r| Hex::axial(1, r)));
        for orientation in [Orientation::Flat, Orientation::Pointy] {
            let layout = Layout::new(orientation, 30.0, Point::new(100.0, 100.0)).unwrap();
            let q = PathQuery::new(Hex::axial(-2, 0), Hex::axial(3, -1), &blocked, &grid)
                .with_heuristic(Heuristic::Euclidean)
                .with_layout(layout);
            let result = find_path(&q);
            assert_valid_path(&result, &q);
            let optimal = find_path(&q.with_heuristic(Heuristic::HexDistance));
            assert!(result.cost() >= optimal.cost());
        }
    }

    #[test]
    fn euclidean_overestimates_one_step() {
        let layout = Layout::default();
        let h = Heuristic::Euclidean.estimate(Hex::ORIGIN, Hex::axial(1, 0), &layout);
        assert!((h - 3f64.sqrt()).abs() < 1e-9);
        assert_eq!(Heuristic::Zero.estimate(Hex::ORIGIN, Hex::axial(4, 0), &layout), 0.0);
    }

    #[test]
    fn expansion_cap_exhausts() {
        let grid = grid(8);
        let blocked = HexSet::new();
        let q = PathQuery::new(Hex::axial(-8, 0), Hex::axial(8, 0), &blocked, &grid)
            .with_heuristic(Heuristic::Zero)
            .with_max_expansions(10);
        let result = find_path(&q);
        assert_eq!(result.status, PathStatus::Exhausted);
        assert!(result.path.is_empty());
        assert_eq!(result.explored.len(), 10);

        // A generous cap behaves like no cap.
        let result = find_path(&q.with_max_expansions(10_000));
        assert!(result.is_found());
        assert_eq!(result.cost(), Some(16));
    }

    #[test]
    fn end_outside_grid_is_unreachable() {
        let grid = grid(2);
        let blocked = HexSet::new();
        let result = find_path(&PathQuery::new(Hex::ORIGIN, Hex::axial(5, 0), &blocked, &grid));
        assert_eq!(result.status, PathStatus::Unreachable);
        assert_eq!(key_set(result.explored.iter().copied()).len(), 19);
    }

    #[test]
    fn search_can_be_reused() {
        let grid = grid(3);
        let blocked = key_set([Hex::axial(1, 0)]);
        let mut search = HexSearch::new();
        let q1 = PathQuery::new(Hex::ORIGIN, Hex::axial(2, 0), &blocked, &grid);
        let q2 = PathQuery::new(Hex::axial(-3, 0), Hex::axial(3, -3), &blocked, &grid);
        let a = search.find_path(&q1);
        let b = search.find_path(&q2);
        assert_eq!(a, find_path(&q1));
        assert_eq!(b, find_path(&q2));
    }
}
