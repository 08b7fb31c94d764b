//! Error type for engine commands.

use thiserror::Error;

use octile_core::GridError;

use crate::engine::EngineState;

/// Errors reported by [`AstarEngine`](crate::AstarEngine) commands.
///
/// All of these are programming or precondition errors; the search itself
/// is deterministic and has no transient failure modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A coordinate was outside the grid bounds.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// `advance` was called after the search already terminated.
    #[error("advance called on a finished search ({0:?})")]
    SearchFinished(EngineState),

    /// Traversability mutation was attempted mid-search.
    #[error("grid mutation attempted while a search is running")]
    MutationWhileRunning,

    /// Path reconstruction did not terminate at the start tile. Signals a
    /// corrupted predecessor graph and is unreachable when the engine's
    /// invariants hold.
    #[error("path reconstruction did not terminate at the start tile")]
    BrokenPath,
}
