//! Derived geometry: lines, rings, spirals and ranges.

use crate::cube::{DIRECTIONS, Hex};
use crate::frac::FracHex;

/// Bias applied to both line endpoints so interpolated points never sit
/// exactly on a hex edge. The components still sum to zero.
const LINE_NUDGE: FracHex = FracHex::new(1e-6, 1e-6, -2e-6);

/// Hexes on the straight line from `a` to `b`, both ends included.
///
/// The result has `distance(a, b) + 1` entries and every consecutive pair
/// is adjacent.
pub fn line(a: Hex, b: Hex) -> Vec<Hex> {
    let n = a.distance(b);
    if n == 0 {
        return vec![a];
    }
    let fa = FracHex::from(a).offset(LINE_NUDGE);
    let fb = FracHex::from(b).offset(LINE_NUDGE);
    (0..=n)
        .map(|i| fa.lerp(fb, f64::from(i) / f64::from(n)).round())
        .collect()
}

/// The hexes exactly `radius` steps from `center`.
///
/// The walk starts at `center + DIRECTIONS[4] * radius` and follows the six
/// sides in direction order, so the result always holds `6 * radius` hexes
/// (or just `center` when `radius` is 0).
pub fn ring(center: Hex, radius: u32) -> Vec<Hex> {
    if radius == 0 {
        return vec![center];
    }
    let radius = radius as i32;
    let mut out = Vec::with_capacity(6 * radius as usize);
    let mut h = center + DIRECTIONS[4] * radius;
    for dir in 0..6 {
        for _ in 0..radius {
            out.push(h);
            h = h.neighbor(dir);
        }
    }
    out
}

/// `center` followed by every ring from 1 to `radius`, innermost first.
/// Holds `1 + 3 * radius * (radius + 1)` hexes.
pub fn spiral(center: Hex, radius: u32) -> Vec<Hex> {
    let mut out = Vec::with_capacity(hex_count(radius));
    out.push(center);
    for k in 1..=radius {
        out.extend(ring(center, k));
    }
    out
}

/// Every hex within `n` steps of `center`, ordered by q then r.
///
/// Enumerates the valid r interval for each q directly instead of filtering
/// a bounding box.
pub fn range(center: Hex, n: u32) -> Vec<Hex> {
    let n = n as i32;
    let mut out = Vec::with_capacity(hex_count(n as u32));
    for q in -n..=n {
        let r_min = (-n).max(-q - n);
        let r_max = n.min(-q + n);
        for r in r_min..=r_max {
            out.push(center + Hex::axial(q, r));
        }
    }
    out
}

/// Number of hexes within `radius` of a center.
#[inline]
pub fn hex_count(radius: u32) -> usize {
    let r = radius as usize;
    1 + 3 * r * (r + 1)
}
