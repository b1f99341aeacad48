use thiserror::Error;

/// Convenient result alias for hex geometry operations.
pub type Result<T> = std::result::Result<T, HexError>;

/// Errors raised when a caller hands in malformed geometry.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum HexError {
    /// The three cube components do not sum to zero.
    #[error("invalid cube coordinate ({q}, {r}, {s}): q + r + s must be 0")]
    InvalidCube { q: i32, r: i32, s: i32 },

    /// Layout hex size must be finite and strictly positive.
    #[error("invalid layout size {0}: must be finite and > 0")]
    InvalidLayoutSize(f64),
}
