//! The [`AstarEngine`] state machine and its search bookkeeping.

use std::collections::BinaryHeap;

use octile_core::{GridError, Point, TileGrid};

use crate::error::EngineError;
use crate::events::TileEvent;

/// Sentinel g-cost meaning "not yet discovered".
pub const UNREACHABLE: i32 = i32::MAX;

/// Lifecycle of a search run.
///
/// `Idle` is the entry state; the first `advance` call moves to `Running`;
/// the run terminates in `Found` or `Exhausted`, both terminal until
/// [`reset`](AstarEngine::reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineState {
    Idle,
    Running,
    Found,
    Exhausted,
}

// ---------------------------------------------------------------------------
// Internal node bookkeeping
// ---------------------------------------------------------------------------

/// Per-tile search bookkeeping, indexed by the grid's flat index. The
/// `parent` link forms a tree rooted at the start tile (`usize::MAX` means
/// "no parent"). A generation counter makes reset O(1): nodes from an
/// older generation are treated as undiscovered.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            h: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
            closed: false,
        }
    }
}

/// Reference into the node array, ordered by `(f, h)` for the frontier heap.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (a max-heap) pops the smallest f first;
        // f ties are broken by smaller h, which biases toward the goal.
        other.f.cmp(&self.f).then(other.h.cmp(&self.h))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// AstarEngine
// ---------------------------------------------------------------------------

/// A stepped A* search over an owned [`TileGrid`].
///
/// The engine performs exactly one frontier expansion per
/// [`advance`](Self::advance) call and reports the tiles it touched as
/// [`TileEvent`]s. It holds no resources requiring release; cancellation
/// is simply not calling `advance` again (optionally followed by
/// [`reset`](Self::reset)).
pub struct AstarEngine {
    pub(crate) grid: TileGrid,
    pub(crate) start: Point,
    pub(crate) goal: Point,
    pub(crate) start_idx: usize,
    pub(crate) goal_idx: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) state: EngineState,
    pub(crate) events: Vec<TileEvent>,
    pub(crate) path: Vec<Point>,
    /// Scratch buffer for neighbor queries, reused across steps.
    pub(crate) nbuf: Vec<Point>,
}

impl AstarEngine {
    /// Create an engine for `grid` searching from `start` to `goal`.
    ///
    /// Fails with [`GridError::OutOfRange`] if either endpoint lies
    /// outside the grid.
    pub fn new(grid: TileGrid, start: Point, goal: Point) -> Result<Self, EngineError> {
        let start_idx = grid.index_of(start).ok_or(GridError::OutOfRange(start))?;
        let goal_idx = grid.index_of(goal).ok_or(GridError::OutOfRange(goal))?;
        let len = grid.len();
        Ok(Self {
            grid,
            start,
            goal,
            start_idx,
            goal_idx,
            nodes: vec![Node::default(); len],
            generation: 0,
            open: BinaryHeap::new(),
            state: EngineState::Idle,
            events: Vec::new(),
            path: Vec::new(),
            nbuf: Vec::with_capacity(8),
        })
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The start tile.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The goal tile.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The grid being searched.
    #[inline]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Events produced by the most recent [`advance`](Self::advance).
    #[inline]
    pub fn last_step(&self) -> &[TileEvent] {
        &self.events
    }

    /// The final path, ordered from start to goal — exclusive of start,
    /// inclusive of goal (empty when start == goal). `Some` only in
    /// [`EngineState::Found`].
    pub fn path(&self) -> Option<&[Point]> {
        (self.state == EngineState::Found).then_some(self.path.as_slice())
    }

    /// The `(g, h, f)` costs of a tile, or `None` if it is out of bounds
    /// or has not been discovered in the current run.
    pub fn cost_at(&self, p: Point) -> Option<(i32, i32, i32)> {
        let idx = self.grid.index_of(p)?;
        let n = self.node(idx)?;
        (n.g != UNREACHABLE).then_some((n.g, n.h, n.g + n.h))
    }

    /// Whether the tile is currently in the open frontier.
    pub fn is_open(&self, p: Point) -> bool {
        self.grid
            .index_of(p)
            .and_then(|i| self.node(i))
            .is_some_and(|n| n.open)
    }

    /// Whether the tile has been expanded into the closed set.
    pub fn is_closed(&self, p: Point) -> bool {
        self.grid
            .index_of(p)
            .and_then(|i| self.node(i))
            .is_some_and(|n| n.closed)
    }

    /// Toggle a tile's traversability.
    ///
    /// Rejected with [`EngineError::MutationWhileRunning`] while a search
    /// is in progress; allowed in `Idle` and the terminal states.
    pub fn set_traversable(&mut self, p: Point, value: bool) -> Result<(), EngineError> {
        if self.state == EngineState::Running {
            return Err(EngineError::MutationWhileRunning);
        }
        self.grid.set_traversable(p, value)?;
        Ok(())
    }

    /// Return the engine to `Idle`, discarding all search bookkeeping.
    ///
    /// Costs and parents are invalidated by bumping the generation
    /// counter, so reset is O(1) regardless of grid size. Traversability
    /// is untouched.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.open.clear();
        self.events.clear();
        self.path.clear();
        self.state = EngineState::Idle;
    }

    // -----------------------------------------------------------------------
    // Node access helpers
    // -----------------------------------------------------------------------

    /// The node at `idx`, or `None` if it belongs to an older generation
    /// (i.e. is undiscovered in the current run).
    #[inline]
    pub(crate) fn node(&self, idx: usize) -> Option<&Node> {
        let n = &self.nodes[idx];
        (n.generation == self.generation).then_some(n)
    }

    /// Mutable access to the node at `idx`, reinitializing it first if it
    /// is stale from an older generation.
    #[inline]
    pub(crate) fn touch(&mut self, idx: usize) -> &mut Node {
        let generation = self.generation;
        let n = &mut self.nodes[idx];
        if n.generation != generation {
            *n = Node {
                generation,
                ..Node::default()
            };
        }
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_endpoints() {
        let err = AstarEngine::new(TileGrid::new(5, 5), Point::new(5, 0), Point::new(4, 4));
        assert!(matches!(
            err,
            Err(EngineError::Grid(GridError::OutOfRange(p))) if p == Point::new(5, 0)
        ));
        let err = AstarEngine::new(TileGrid::new(5, 5), Point::new(0, 0), Point::new(0, -1));
        assert!(err.is_err());
    }

    #[test]
    fn fresh_engine_is_idle_and_undiscovered() {
        let engine =
            AstarEngine::new(TileGrid::new(4, 4), Point::new(0, 0), Point::new(3, 3)).unwrap();
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.path(), None);
        assert_eq!(engine.cost_at(Point::new(0, 0)), None);
        assert!(!engine.is_open(Point::new(0, 0)));
        assert!(!engine.is_closed(Point::new(0, 0)));
    }

    #[test]
    fn cost_at_out_of_bounds_is_none() {
        let engine =
            AstarEngine::new(TileGrid::new(4, 4), Point::new(0, 0), Point::new(3, 3)).unwrap();
        assert_eq!(engine.cost_at(Point::new(9, 9)), None);
    }

    #[test]
    fn heap_pops_min_f_then_min_h() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, f: 30, h: 20 });
        heap.push(NodeRef { idx: 1, f: 20, h: 15 });
        heap.push(NodeRef { idx: 2, f: 20, h: 5 });
        assert_eq!(heap.pop().unwrap().idx, 2); // lowest f, lowest h
        assert_eq!(heap.pop().unwrap().idx, 1);
        assert_eq!(heap.pop().unwrap().idx, 0);
    }

    #[test]
    fn set_traversable_bounds_error_passes_through() {
        let mut engine =
            AstarEngine::new(TileGrid::new(4, 4), Point::new(0, 0), Point::new(3, 3)).unwrap();
        let p = Point::new(8, 8);
        assert_eq!(
            engine.set_traversable(p, false),
            Err(EngineError::Grid(GridError::OutOfRange(p)))
        );
    }
}
