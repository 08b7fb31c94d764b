//! **octile-engine** — a stepped A* search engine for 8-connected grids.
//!
//! The engine runs A* with an octile-distance heuristic over an
//! [`octile_core::TileGrid`], one frontier expansion per
//! [`advance`](AstarEngine::advance) call. Each call returns the
//! [`TileEvent`]s produced by that step (tiles opened, closed, cost
//! updates, final path tiles), so an external driver can pace the search
//! however it likes — a tight loop, a timer, a frame callback — and
//! render the deltas without the engine depending on any scheduler.
//!
//! # Example
//!
//! ```
//! use octile_core::{Point, TileGrid};
//! use octile_engine::{AstarEngine, EngineState};
//!
//! let grid = TileGrid::new(5, 5);
//! let mut engine = AstarEngine::new(grid, Point::new(0, 0), Point::new(4, 4)).unwrap();
//! while engine.state() == EngineState::Idle || engine.state() == EngineState::Running {
//!     engine.advance().unwrap();
//! }
//! assert_eq!(engine.state(), EngineState::Found);
//! assert_eq!(engine.path().unwrap().len(), 4); // four diagonal steps
//! ```

mod distance;
mod engine;
mod error;
mod events;
mod step;

pub use distance::{DIAGONAL_COST, STRAIGHT_COST, octile};
pub use engine::{AstarEngine, EngineState, UNREACHABLE};
pub use error::EngineError;
pub use events::TileEvent;
