//! Error types for grid construction.

use thiserror::Error;

/// Errors arising from grid construction or whole-grid copies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero cells.
    #[error("grid must have at least one cell")]
    EmptySpace,
    /// An axis length does not fit the `i32` coordinate type.
    #[error("{name} = {value} exceeds maximum {max}")]
    DimensionTooLarge {
        /// Which axis (`"width"` or `"height"`).
        name: &'static str,
        /// The requested length.
        value: u32,
        /// The largest accepted length.
        max: u32,
    },
    /// Two grids of different shape were combined.
    #[error("grid shape mismatch: expected {expected:?}, got {actual:?}")]
    SizeMismatch {
        /// `(width, height)` of the destination.
        expected: (u32, u32),
        /// `(width, height)` of the source.
        actual: (u32, u32),
    },
}
