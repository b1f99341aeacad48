//! Alternate addressing schemes and their closed-form conversions to and
//! from cube coordinates.

use crate::cube::Hex;

// ---------------------------------------------------------------------------
// Axial
// ---------------------------------------------------------------------------

/// Two-component projection of a [`Hex`]; `s` is implied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl Axial {
    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }
}

impl From<Hex> for Axial {
    #[inline]
    fn from(h: Hex) -> Self {
        Self { q: h.q(), r: h.r() }
    }
}

impl From<Axial> for Hex {
    #[inline]
    fn from(a: Axial) -> Self {
        Hex::axial(a.q, a.r)
    }
}

// ---------------------------------------------------------------------------
// Offset
// ---------------------------------------------------------------------------

/// Which rows are shoved half a cell to the right in offset addressing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OffsetParity {
    /// Even rows are shoved right ("even-r").
    #[default]
    EvenRow,
    /// Odd rows are shoved right ("odd-r").
    OddRow,
}

/// Row/column addressing for row-aligned (pointy-top) rectangular layouts.
///
/// The same `(col, row)` names a different hex under each [`OffsetParity`],
/// so the parity always travels with the conversion.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub col: i32,
    pub row: i32,
}

impl Offset {
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Convert a hex to offset coordinates under `parity`.
    ///
    /// `r & 1` is 1 for every odd row, negative rows included, so the
    /// numerator is always even and the division is exact.
    pub fn from_hex(h: Hex, parity: OffsetParity) -> Self {
        let (q, r) = (h.q(), h.r());
        let col = match parity {
            OffsetParity::EvenRow => q + (r + (r & 1)) / 2,
            OffsetParity::OddRow => q + (r - (r & 1)) / 2,
        };
        Self { col, row: r }
    }

    /// Convert back to a hex, under the same `parity` used to create it.
    pub fn to_hex(self, parity: OffsetParity) -> Hex {
        let row = self.row;
        let q = match parity {
            OffsetParity::EvenRow => self.col - (row + (row & 1)) / 2,
            OffsetParity::OddRow => self.col - (row - (row & 1)) / 2,
        };
        Hex::axial(q, row)
    }
}

// ---------------------------------------------------------------------------
// Doubled
// ---------------------------------------------------------------------------

/// Doubled-column addressing: the column counts half-cells, so every row
/// stays aligned without fractional shifts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Doubled {
    pub col: i32,
    pub row: i32,
}

impl Doubled {
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// `col + row` is always even for a doubled coordinate produced from a
    /// hex; odd sums do not name a cell and are truncated toward zero.
    #[inline]
    pub fn to_hex(self) -> Hex {
        Hex::axial((self.col - self.row) / 2, self.row)
    }
}

impl From<Hex> for Doubled {
    #[inline]
    fn from(h: Hex) -> Self {
        Self {
            col: 2 * h.q() + h.r(),
            row: h.r(),
        }
    }
}

impl From<Doubled> for Hex {
    #[inline]
    fn from(d: Doubled) -> Self {
        d.to_hex()
    }
}
