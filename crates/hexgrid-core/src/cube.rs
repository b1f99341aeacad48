//! The cube coordinate [`Hex`] and its arithmetic.
//!
//! Every hex stores all three cube components and upholds `q + r + s == 0`.
//! Constructors either validate ([`Hex::new`]) or derive the third component
//! ([`Hex::axial`]), so a `Hex` that exists is always well formed.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{HexError, Result};
use crate::key::HexKey;

// ---------------------------------------------------------------------------
// Hex
// ---------------------------------------------------------------------------

/// A hexagon addressed by cube coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "crate::convert::Axial", into = "crate::convert::Axial")
)]
pub struct Hex {
    q: i32,
    r: i32,
    s: i32,
}

/// The six edge-adjacent unit vectors, indexed 0..6 in rotational order
/// starting from `+q`. Direction `d` and `(d + 3) % 6` are opposite.
pub const DIRECTIONS: [Hex; 6] = [
    Hex::axial(1, 0),
    Hex::axial(1, -1),
    Hex::axial(0, -1),
    Hex::axial(-1, 0),
    Hex::axial(-1, 1),
    Hex::axial(0, 1),
];

/// The six vertex-adjacent vectors (distance 2), in the same rotational
/// order as [`DIRECTIONS`].
pub const DIAGONALS: [Hex; 6] = [
    Hex::axial(2, -1),
    Hex::axial(1, -2),
    Hex::axial(-1, -1),
    Hex::axial(-2, 1),
    Hex::axial(-1, 2),
    Hex::axial(1, 1),
];

impl Hex {
    /// The origin (0, 0, 0).
    pub const ORIGIN: Self = Self { q: 0, r: 0, s: 0 };

    /// Create a hex from all three cube components.
    ///
    /// Fails with [`HexError::InvalidCube`] when the components do not sum
    /// to zero.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self> {
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            return Err(HexError::InvalidCube { q, r, s });
        }
        Ok(Self { q, r, s })
    }

    /// Create a hex from its axial pair, deriving `s = -(q + r)`.
    ///
    /// Overflows (and panics in debug builds) only when no `i32` value of
    /// `s` exists, that is when `q + r` lies outside `-i32::MAX..=i32::MAX`.
    #[inline]
    pub const fn axial(q: i32, r: i32) -> Self {
        Self { q, r, s: -(q + r) }
    }

    #[inline]
    pub const fn q(self) -> i32 {
        self.q
    }

    #[inline]
    pub const fn r(self) -> i32 {
        self.r
    }

    #[inline]
    pub const fn s(self) -> i32 {
        self.s
    }

    /// Canonical key for set and map membership.
    #[inline]
    pub const fn key(self) -> HexKey {
        HexKey::new(self.q, self.r)
    }

    /// Multiply every component by `k`.
    #[inline]
    pub const fn scale(self, k: i32) -> Self {
        Self::axial(self.q * k, self.r * k)
    }

    /// Number of steps from the origin.
    #[inline]
    pub fn length(self) -> i32 {
        (self.q.abs() + self.r.abs() + self.s.abs()) / 2
    }

    /// Number of steps between two hexes.
    #[inline]
    pub fn distance(self, other: Hex) -> i32 {
        (self - other).length()
    }

    /// The edge neighbour in direction `dir` (taken modulo 6).
    #[inline]
    pub fn neighbor(self, dir: usize) -> Self {
        self + DIRECTIONS[dir % 6]
    }

    /// The vertex neighbour in diagonal direction `dir` (taken modulo 6).
    #[inline]
    pub fn diagonal_neighbor(self, dir: usize) -> Self {
        self + DIAGONALS[dir % 6]
    }

    /// All six edge neighbours, in direction order.
    pub fn neighbors(self) -> [Hex; 6] {
        DIRECTIONS.map(|d| self + d)
    }

    /// All six diagonal neighbours, in direction order.
    pub fn diagonal_neighbors(self) -> [Hex; 6] {
        DIAGONALS.map(|d| self + d)
    }

    /// Rotate 60° clockwise about the origin.
    #[inline]
    pub const fn rotate_cw(self) -> Self {
        Self {
            q: -self.r,
            r: -self.s,
            s: -self.q,
        }
    }

    /// Rotate 60° counter-clockwise about the origin.
    #[inline]
    pub const fn rotate_ccw(self) -> Self {
        Self {
            q: -self.s,
            r: -self.q,
            s: -self.r,
        }
    }

    /// This hex followed by its five successive clockwise rotations.
    pub fn rotations(self) -> [Hex; 6] {
        let mut out = [self; 6];
        for i in 1..6 {
            out[i] = out[i - 1].rotate_cw();
        }
        out
    }

    /// Rotate about `center` by `steps` sixths of a turn. Positive steps turn
    /// clockwise, negative steps counter-clockwise.
    pub fn rotate_around(self, center: Hex, steps: i32) -> Self {
        let mut v = self - center;
        for _ in 0..steps.rem_euclid(6) {
            v = v.rotate_cw();
        }
        center + v
    }

    /// Reflect across the q axis (swaps r and s).
    #[inline]
    pub const fn reflect_q(self) -> Self {
        Self {
            q: self.q,
            r: self.s,
            s: self.r,
        }
    }

    /// Reflect across the r axis (swaps q and s).
    #[inline]
    pub const fn reflect_r(self) -> Self {
        Self {
            q: self.s,
            r: self.r,
            s: self.q,
        }
    }

    /// Reflect across the s axis (swaps q and r).
    #[inline]
    pub const fn reflect_s(self) -> Self {
        Self {
            q: self.r,
            r: self.q,
            s: self.s,
        }
    }
}

// --- trait impls for Hex ---

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

impl Add for Hex {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::axial(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for Hex {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::axial(self.q - rhs.q, self.r - rhs.r)
    }
}

impl Mul<i32> for Hex {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Hex {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::axial(-self.q, -self.r)
    }
}

impl TryFrom<(i32, i32, i32)> for Hex {
    type Error = HexError;

    fn try_from((q, r, s): (i32, i32, i32)) -> Result<Self> {
        Self::new(q, r, s)
    }
}
