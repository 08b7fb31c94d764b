//! Error type for grid queries and mutation.

use thiserror::Error;

use crate::geom::Point;

/// Errors reported by [`TileGrid`](crate::TileGrid) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// The coordinate lies outside `[0, width) × [0, height)`.
    #[error("coordinate {0} is outside the grid bounds")]
    OutOfRange(Point),
}
