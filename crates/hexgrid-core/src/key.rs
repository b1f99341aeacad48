//! Canonical keys for hash-set and hash-map membership.
//!
//! A [`HexKey`] packs the axial pair of a hex into one `u64`: the bit
//! pattern of `q` in the high 32 bits and the bit pattern of `r` in the low
//! 32 bits. `s` is implied by `q` and `r`, so the packing is injective over
//! every hex, negative components included. Callers that build their own
//! obstacle or grid sets should always go through [`Hex::key`] or
//! [`key_set`] so their keys agree with the ones the searches use.

use std::collections::HashSet;
use std::fmt;

use crate::cube::Hex;

/// Set of hexes identified by canonical key.
pub type HexSet = HashSet<HexKey>;

/// Canonical, injective key of a [`Hex`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexKey(u64);

impl HexKey {
    /// Pack an axial pair.
    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self(((q as u32 as u64) << 32) | (r as u32 as u64))
    }

    /// The packed representation.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Rebuild a key from its packed representation.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The hex this key identifies.
    ///
    /// Keys obtained from [`Hex::key`] always decode. A raw value whose
    /// packed `q + r` has no `i32` negation has no hex and overflows like
    /// [`Hex::axial`].
    #[inline]
    pub const fn hex(self) -> Hex {
        Hex::axial((self.0 >> 32) as u32 as i32, self.0 as u32 as i32)
    }
}

impl From<Hex> for HexKey {
    #[inline]
    fn from(h: Hex) -> Self {
        h.key()
    }
}

impl From<HexKey> for Hex {
    #[inline]
    fn from(k: HexKey) -> Self {
        k.hex()
    }
}

impl fmt::Display for HexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.hex();
        write!(f, "{},{}", h.q(), h.r())
    }
}

/// Collect the keys of `hexes` into a [`HexSet`].
pub fn key_set<I>(hexes: I) -> HexSet
where
    I: IntoIterator<Item = Hex>,
{
    hexes.into_iter().map(Hex::key).collect()
}
