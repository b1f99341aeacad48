//! Projection between hexes and 2D pixel space.
//!
//! A [`Layout`] bundles the orientation, hex size and screen origin. It is a
//! plain value passed to every projection; there is no shared layout state.

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Sub};

use crate::cube::Hex;
use crate::error::{HexError, Result};
use crate::frac::FracHex;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D pixel position. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

/// Forward (hex → pixel) and backward (pixel → hex) 2×2 matrices plus the
/// angle of the first corner, in sixths of a turn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrientationMatrix {
    pub f0: f64,
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
    pub start_angle: f64,
}

const FLAT: OrientationMatrix = OrientationMatrix {
    f0: 3.0 / 2.0,
    f1: 0.0,
    f2: SQRT_3 / 2.0,
    f3: SQRT_3,
    b0: 2.0 / 3.0,
    b1: 0.0,
    b2: -1.0 / 3.0,
    b3: SQRT_3 / 3.0,
    start_angle: 0.0,
};

const POINTY: OrientationMatrix = OrientationMatrix {
    f0: SQRT_3,
    f1: SQRT_3 / 2.0,
    f2: 0.0,
    f3: 3.0 / 2.0,
    b0: SQRT_3 / 3.0,
    b1: -1.0 / 3.0,
    b2: 0.0,
    b3: 2.0 / 3.0,
    start_angle: 0.5,
};

/// Whether hexes have a flat edge or a corner at the top.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Flat,
    Pointy,
}

impl Orientation {
    #[inline]
    pub const fn matrix(self) -> &'static OrientationMatrix {
        match self {
            Orientation::Flat => &FLAT,
            Orientation::Pointy => &POINTY,
        }
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// How hexes map onto the plane.
///
/// Deserialization goes through [`Layout::new`], so a decoded layout always
/// has a valid size.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LayoutRepr", into = "LayoutRepr")
)]
pub struct Layout {
    orientation: Orientation,
    size: f64,
    origin: Point,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            orientation: Orientation::Flat,
            size: 1.0,
            origin: Point::ZERO,
        }
    }
}

impl Layout {
    /// Create a layout. `size` is the centre-to-corner radius in pixels and
    /// must be finite and positive.
    pub fn new(orientation: Orientation, size: f64, origin: Point) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(HexError::InvalidLayoutSize(size));
        }
        Ok(Self {
            orientation,
            size,
            origin,
        })
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Same layout with a different orientation.
    #[inline]
    pub fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    /// Same layout centred on a different origin.
    #[inline]
    pub fn with_origin(self, origin: Point) -> Self {
        Self { origin, ..self }
    }

    /// Pixel position of the centre of `h`.
    pub fn hex_to_pixel(&self, h: Hex) -> Point {
        let m = self.orientation.matrix();
        let (q, r) = (f64::from(h.q()), f64::from(h.r()));
        let x = (m.f0 * q + m.f1 * r) * self.size;
        let y = (m.f2 * q + m.f3 * r) * self.size;
        Point::new(x + self.origin.x, y + self.origin.y)
    }

    /// Fractional hex under pixel `p`. Round the result to find the cell.
    pub fn pixel_to_hex(&self, p: Point) -> FracHex {
        let m = self.orientation.matrix();
        let px = (p.x - self.origin.x) / self.size;
        let py = (p.y - self.origin.y) / self.size;
        FracHex::axial(m.b0 * px + m.b1 * py, m.b2 * px + m.b3 * py)
    }

    /// The hex containing pixel `p`.
    #[inline]
    pub fn hex_at(&self, p: Point) -> Hex {
        self.pixel_to_hex(p).round()
    }

    /// Offset from a hex centre to corner `corner` (0..6).
    pub fn corner_offset(&self, corner: usize) -> Point {
        let angle = 2.0 * PI * (self.orientation.matrix().start_angle + corner as f64) / 6.0;
        Point::new(self.size * angle.cos(), self.size * angle.sin())
    }

    /// The six corners of `h` in pixel space.
    pub fn polygon_corners(&self, h: Hex) -> [Point; 6] {
        let center = self.hex_to_pixel(h);
        std::array::from_fn(|i| center + self.corner_offset(i))
    }
}

/// Unvalidated wire form of a [`Layout`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct LayoutRepr {
    orientation: Orientation,
    size: f64,
    origin: Point,
}

#[cfg(feature = "serde")]
impl TryFrom<LayoutRepr> for Layout {
    type Error = HexError;

    fn try_from(repr: LayoutRepr) -> Result<Self> {
        Layout::new(repr.orientation, repr.size, repr.origin)
    }
}

#[cfg(feature = "serde")]
impl From<Layout> for LayoutRepr {
    fn from(layout: Layout) -> Self {
        Self {
            orientation: layout.orientation,
            size: layout.size,
            origin: layout.origin,
        }
    }
}

/// Pixel position of the centre of `h` under `layout`.
#[inline]
pub fn hex_to_pixel(h: Hex, layout: &Layout) -> Point {
    layout.hex_to_pixel(h)
}

/// Fractional hex under pixel `p` for `layout`.
#[inline]
pub fn pixel_to_hex(p: Point, layout: &Layout) -> FracHex {
    layout.pixel_to_hex(p)
}
