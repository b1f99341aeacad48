//! Fractional cube coordinates and rounding back to the grid.

use std::fmt;

use crate::cube::Hex;

/// A cube coordinate with real components, as produced by pixel projection
/// or interpolation. The components sum to zero up to floating-point error.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FracHex {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FracHex {
    #[inline]
    pub const fn new(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    /// Fractional coordinate from an axial pair, deriving `s`.
    #[inline]
    pub fn axial(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Round to the nearest hex.
    ///
    /// Each component is rounded on its own, then the one that moved the
    /// most is rebuilt from the other two. Ties resolve in q, r, s order:
    /// `q` is rebuilt only when its error is strictly the largest, otherwise
    /// `r` when its error strictly exceeds that of `s`, otherwise `s`.
    ///
    /// Halves round up, towards positive infinity, so a point exactly on a
    /// hex corner resolves the same way whatever its sign.
    pub fn round(self) -> Hex {
        let mut q = round_half_up(self.q);
        let mut r = round_half_up(self.r);
        let s = round_half_up(self.s);

        let dq = (q - self.q).abs();
        let dr = (r - self.r).abs();
        let ds = (s - self.s).abs();

        if dq > dr && dq > ds {
            q = -r - s;
        } else if dr > ds {
            r = -q - s;
        }
        // Otherwise s is rebuilt, which `Hex::axial` does for us.
        Hex::axial(q as i32, r as i32)
    }

    /// Linear interpolation from `self` (t = 0) to `other` (t = 1).
    #[inline]
    pub fn lerp(self, other: FracHex, t: f64) -> Self {
        Self {
            q: self.q + (other.q - self.q) * t,
            r: self.r + (other.r - self.r) * t,
            s: self.s + (other.s - self.s) * t,
        }
    }

    /// Shift every component by the matching component of `by`.
    #[inline]
    pub fn offset(self, by: FracHex) -> Self {
        Self {
            q: self.q + by.q,
            r: self.r + by.r,
            s: self.s + by.s,
        }
    }
}

#[inline]
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

impl From<Hex> for FracHex {
    #[inline]
    fn from(h: Hex) -> Self {
        Self {
            q: f64::from(h.q()),
            r: f64::from(h.r()),
            s: f64::from(h.s()),
        }
    }
}

impl fmt::Display for FracHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.q, self.r, self.s)
    }
}
