//! Map-shape generators.
//!
//! Each generator is a total function of its size parameters and returns
//! the cells in a fixed order, so callers can iterate the result to draw or
//! index a map and get the same sequence every time.

use std::fmt;

use crate::cube::Hex;
use crate::draw;

/// A hexagon of the given radius around the origin, ordered by q then r.
/// Radius 0 is the single origin cell.
pub fn hexagonal(radius: u32) -> Vec<Hex> {
    draw::range(Hex::ORIGIN, radius)
}

/// `height` rows of `width` cells, each row shifted back by half its index
/// so the map renders as a rectangle under a pointy-top layout. Either
/// dimension at 0 yields an empty map.
pub fn rectangular(width: u32, height: u32) -> Vec<Hex> {
    let (w, h) = (width as i32, height as i32);
    let mut out = Vec::with_capacity(width as usize * height as usize);
    for r in 0..h {
        let offset = r >> 1;
        for q in -offset..w - offset {
            out.push(Hex::axial(q, r));
        }
    }
    out
}

/// The triangle `q >= 0, r >= 0, q + r <= size`. Size 0 is the single
/// origin cell.
pub fn triangular(size: u32) -> Vec<Hex> {
    let n = size as i32;
    let mut out = Vec::with_capacity((size as usize + 1) * (size as usize + 2) / 2);
    for q in 0..=n {
        for r in 0..=n - q {
            out.push(Hex::axial(q, r));
        }
    }
    out
}

/// The parallelogram `0 <= q < width, 0 <= r < height`. Either dimension
/// at 0 yields an empty map.
pub fn rhombus(width: u32, height: u32) -> Vec<Hex> {
    let (w, h) = (width as i32, height as i32);
    let mut out = Vec::with_capacity(width as usize * height as usize);
    for q in 0..w {
        for r in 0..h {
            out.push(Hex::axial(q, r));
        }
    }
    out
}

/// The available map shapes, driven by a single size parameter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapShape {
    /// [`hexagonal`] with radius `size`.
    #[default]
    Hexagonal,
    /// [`rectangular`] of `2 * size` by `2 * size`.
    Rectangular,
    /// [`triangular`] with side `size`.
    Triangular,
    /// [`rhombus`] of `size` by `size`.
    Rhombus,
}

impl MapShape {
    pub const ALL: [MapShape; 4] = [
        MapShape::Hexagonal,
        MapShape::Rectangular,
        MapShape::Triangular,
        MapShape::Rhombus,
    ];

    /// Build the map for this shape.
    pub fn generate(self, size: u32) -> Vec<Hex> {
        match self {
            MapShape::Hexagonal => hexagonal(size),
            MapShape::Rectangular => rectangular(size * 2, size * 2),
            MapShape::Triangular => triangular(size),
            MapShape::Rhombus => rhombus(size, size),
        }
    }
}

impl fmt::Display for MapShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MapShape::Hexagonal => "hexagonal",
            MapShape::Rectangular => "rectangular",
            MapShape::Triangular => "triangular",
            MapShape::Rhombus => "rhombus",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{Offset, OffsetParity};
    use std::collections::HashSet;

    fn unique(hexes: &[Hex]) -> usize {
        hexes.iter().collect::<HashSet<_>>().len()
    }

    #[test]
    fn hexagonal_radius_two_has_nineteen_cells() {
        let m = hexagonal(2);
        assert_eq!(m.len(), 19);
        assert_eq!(unique(&m), 19);
        assert!(m.iter().all(|h| h.length() <= 2));
    }

    #[test]
    fn zero_sizes() {
        assert_eq!(hexagonal(0), vec![Hex::ORIGIN]);
        assert_eq!(triangular(0), vec![Hex::ORIGIN]);
        assert!(rectangular(0, 5).is_empty());
        assert!(rectangular(5, 0).is_empty());
        assert!(rhombus(0, 3).is_empty());
        assert!(MapShape::Rectangular.generate(0).is_empty());
    }

    #[test]
    fn rectangular_rows_are_aligned_in_offset_space() {
        let m = rectangular(4, 3);
        assert_eq!(m.len(), 12);
        // Under odd-r offset every row covers columns 0..width.
        for h in &m {
            let o = Offset::from_hex(*h, OffsetParity::OddRow);
            assert!((0..4).contains(&o.col), "{h} -> {o:?}");
            assert!((0..3).contains(&o.row));
        }
        assert_eq!(unique(&m), 12);
    }

    #[test]
    fn triangular_and_rhombus_sizes() {
        let t = triangular(3);
        assert_eq!(t.len(), 10);
        assert!(t.iter().all(|h| h.q() >= 0 && h.r() >= 0 && h.q() + h.r() <= 3));
        let r = rhombus(3, 5);
        assert_eq!(r.len(), 15);
        assert_eq!(unique(&r), 15);
    }

    #[test]
    fn generation_order_is_stable() {
        for shape in MapShape::ALL {
            assert_eq!(shape.generate(3), shape.generate(3), "{shape}");
        }
        assert_eq!(hexagonal(1)[0], Hex::axial(-1, 0));
    }
}
