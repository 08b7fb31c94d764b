//! **octile-core** — grid data model for stepped octile pathfinding.
//!
//! This crate provides the pure data layer consumed by the search engine:
//! the [`Point`] geometry primitive, the [`TileGrid`] traversability map,
//! and the [`GridError`] type for bounds violations. It has no search
//! behavior of its own beyond lookup, mutation, and bounds-checked
//! neighbor enumeration.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::Point;
pub use grid::TileGrid;
