//! **hexgrid-core**: geometry for hexagonal grids.
//!
//! This crate provides the value types and pure functions the rest of the
//! *hexgrid* workspace builds on: cube coordinates and their arithmetic,
//! conversions to axial/offset/doubled addressing, fractional rounding,
//! lines, rings, spirals and ranges, map-shape generators, and projection
//! between hexes and pixels.
//!
//! Everything here is a pure function of its inputs. Layout parameters are
//! always passed explicitly as a [`Layout`] value.

pub mod convert;
pub mod cube;
pub mod draw;
pub mod error;
pub mod frac;
pub mod key;
pub mod layout;
pub mod shapes;

pub use convert::{Axial, Doubled, Offset, OffsetParity};
pub use cube::{DIAGONALS, DIRECTIONS, Hex};
pub use draw::{line, range, ring, spiral};
pub use error::{HexError, Result};
pub use frac::FracHex;
pub use key::{HexKey, HexSet, key_set};
pub use layout::{Layout, Orientation, Point, hex_to_pixel, pixel_to_hex};
pub use shapes::MapShape;
