use hexgrid_core::Hex;

/// Minimal search interface: which hexes a search may step onto.
///
/// Any `Fn(Hex) -> bool` closure is a `Pather`.
pub trait Pather {
    /// Whether a search may enter `h`.
    fn passable(&self, h: Hex) -> bool;

    /// Append the enterable neighbours of `h` into `buf`, in direction
    /// order. The caller clears `buf` before calling.
    fn neighbors(&self, h: Hex, buf: &mut Vec<Hex>) {
        buf.extend(h.neighbors().into_iter().filter(|&n| self.passable(n)));
    }
}

impl<F: Fn(Hex) -> bool> Pather for F {
    #[inline]
    fn passable(&self, h: Hex) -> bool {
        self(h)
    }
}
