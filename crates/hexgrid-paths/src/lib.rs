//! Search algorithms over hexagonal grids.
//!
//! This crate builds on [`hexgrid_core`] coordinates and provides:
//!
//! - **BFS** movement range ([`reachable`], [`reachable_within`])
//! - **A\*** shortest paths with selectable heuristics ([`find_path`])
//! - **Field of view** by ray casting ([`field_of_view`], [`line_of_sight`])
//! - a binary [`MinHeap`] used as the A* open list
//!
//! Obstacle and grid sets are plain [`HexSet`](hexgrid_core::HexSet)s of
//! canonical keys, borrowed for the duration of a query. Repeated queries
//! can go through a [`HexSearch`], which keeps its scratch buffers between
//! calls.
//!
//! # Passability
//!
//! | Type | Passable hexes |
//! |---|---|
//! | [`Terrain::unbounded`] | everything not blocked |
//! | [`Terrain::bounded`] | grid hexes not blocked |
//! | `Fn(Hex) -> bool` | whatever the closure accepts |
//!
//! All three implement [`Pather`].

mod astar;
mod bfs;
mod fov;
mod heap;
mod search;
mod terrain;
mod traits;

pub use astar::{Heuristic, PathQuery, PathResult, PathStatus, find_path};
pub use bfs::{Reachable, reachable, reachable_within};
pub use fov::{field_of_view, line_of_sight};
pub use heap::MinHeap;
pub use search::{HexSearch, PathNode};
pub use terrain::{Bounds, Terrain};
pub use traits::Pather;
