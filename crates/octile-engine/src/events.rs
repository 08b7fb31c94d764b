//! Per-step tile-state-change notifications.

use octile_core::Point;

/// A single observable change produced by one engine step.
///
/// The driver receives a slice of these from each
/// [`advance`](crate::AstarEngine::advance) call and can replay them onto
/// whatever presentation it maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileEvent {
    /// The tile entered the open frontier.
    Opened(Point),
    /// The tile was expanded into the closed set. Never emitted for the
    /// start or goal tile, which keep their distinguished markers.
    Closed(Point),
    /// The tile's cost bookkeeping accepted a new value. `f` is always
    /// `g + h`, recomputed rather than stored.
    CostUpdated { pos: Point, g: i32, h: i32, f: i32 },
    /// The tile is an intermediate tile of the final path. Emitted in
    /// reverse-discovery order (goal side first); start and goal are
    /// excluded.
    Path(Point),
}
