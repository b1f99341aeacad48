//! Line-of-sight field of view.
//!
//! Rays are cast with [`hexgrid_core::line`] from the viewer to every hex of
//! each ring up to the sight range. A ray lights the hexes it crosses up to
//! and including the first wall. Walls are therefore visible but hide what
//! lies behind them.

use hexgrid_core::{Hex, HexSet, draw};

/// Whether `target` can be seen from `viewer`: no wall lies strictly
/// between them on the line joining them.
pub fn line_of_sight(viewer: Hex, target: Hex, walls: &HexSet) -> bool {
    let ray = draw::line(viewer, target);
    let inner = ray.len().saturating_sub(1);
    ray.iter()
        .take(inner)
        .skip(1)
        .all(|h| !walls.contains(&h.key()))
}

/// The set of hexes visible from `viewer` within `range` steps.
///
/// The viewer's own hex is always in the set. Every ray starts on it, so a
/// viewer standing on a wall sees nothing else.
pub fn field_of_view(viewer: Hex, range: u32, walls: &HexSet) -> HexSet {
    let mut visible = HexSet::with_capacity(draw::hex_count(range));
    visible.insert(viewer.key());

    for radius in 1..=range {
        for target in draw::ring(viewer, radius) {
            for h in draw::line(viewer, target) {
                visible.insert(h.key());
                if walls.contains(&h.key()) {
                    break;
                }
            }
        }
    }

    log::debug!(
        "fov from {viewer} range {range}: {} visible, {} walls",
        visible.len(),
        walls.len()
    );
    visible
}
