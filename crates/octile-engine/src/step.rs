//! The per-step search algorithm: one frontier expansion per call.

use crate::distance::octile;
use crate::engine::{AstarEngine, EngineState, NodeRef};
use crate::error::EngineError;
use crate::events::TileEvent;

impl AstarEngine {
    /// Perform exactly one frontier expansion and return the tile events
    /// it produced.
    ///
    /// From `Idle` this first seeds the start tile and enters `Running`.
    /// The run ends in [`EngineState::Found`] when the goal is expanded,
    /// or [`EngineState::Exhausted`] when the frontier empties; calling
    /// `advance` again after that is an
    /// [`EngineError::SearchFinished`] error.
    pub fn advance(&mut self) -> Result<&[TileEvent], EngineError> {
        match self.state {
            EngineState::Found | EngineState::Exhausted => {
                return Err(EngineError::SearchFinished(self.state));
            }
            EngineState::Idle => self.begin(),
            EngineState::Running => {}
        }
        self.events.clear();

        // Pop the open tile minimizing f (ties by h), skipping heap
        // entries made stale by later cost improvements or expansion.
        let current = loop {
            let Some(entry) = self.open.pop() else {
                log::debug!("frontier exhausted without reaching {}", self.goal);
                self.state = EngineState::Exhausted;
                return Ok(&self.events);
            };
            if self.node(entry.idx).is_some_and(|n| n.open) {
                break entry.idx;
            }
        };

        let current_point = self.grid.point_at(current);
        let node = self.touch(current);
        node.open = false;
        node.closed = true;
        let current_g = node.g;

        // Start and goal keep their distinguished markers.
        if current != self.start_idx && current != self.goal_idx {
            self.events.push(TileEvent::Closed(current_point));
        }

        if current == self.goal_idx {
            self.reconstruct()?;
            log::debug!(
                "path found: {} -> {} at cost {} ({} tiles)",
                self.start,
                self.goal,
                current_g,
                self.path.len()
            );
            self.state = EngineState::Found;
            return Ok(&self.events);
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.grid.neighbors(current_point, &mut nbuf);

        for &np in nbuf.iter() {
            if !matches!(self.grid.traversable(np), Ok(true)) {
                continue;
            }
            // Neighbors are in bounds by construction.
            let Some(ni) = self.grid.index_of(np) else {
                continue;
            };
            let tentative = current_g + octile(current_point, np);
            let h = octile(np, self.goal);

            let n = self.touch(ni);
            if n.closed {
                continue;
            }
            // Undiscovered tiles hold UNREACHABLE, so first discovery
            // always accepts; rediscovery only accepts an improvement.
            if tentative >= n.g {
                continue;
            }
            n.g = tentative;
            n.h = h;
            n.parent = current;
            let newly_opened = !n.open;
            n.open = true;

            let f = tentative + h;
            self.events.push(TileEvent::CostUpdated {
                pos: np,
                g: tentative,
                h,
                f,
            });
            if newly_opened {
                self.events.push(TileEvent::Opened(np));
            }
            // Improved tiles are re-pushed; the old entry is skipped as
            // stale when popped.
            self.open.push(NodeRef { idx: ni, f, h });
        }

        self.nbuf = nbuf;
        Ok(&self.events)
    }

    /// Seed the start tile and enter `Running`.
    fn begin(&mut self) {
        let h = octile(self.start, self.goal);
        let start_idx = self.start_idx;
        let node = self.touch(start_idx);
        node.g = 0;
        node.h = h;
        node.parent = usize::MAX;
        node.open = true;
        self.open.push(NodeRef {
            idx: start_idx,
            f: h,
            h,
        });
        self.state = EngineState::Running;
        log::debug!("search started: {} -> {}", self.start, self.goal);
    }

    /// Walk the parent links from goal back to start, filling `path`
    /// (start-exclusive, goal-inclusive, ordered start → goal) and
    /// emitting [`TileEvent::Path`] for the intermediate tiles in
    /// reverse-discovery order.
    fn reconstruct(&mut self) -> Result<(), EngineError> {
        self.path.clear();
        let limit = self.grid.len();
        let mut idx = self.goal_idx;
        let mut hops = 0usize;
        while idx != self.start_idx {
            let p = self.grid.point_at(idx);
            self.path.push(p);
            if idx != self.goal_idx {
                self.events.push(TileEvent::Path(p));
            }
            let parent = self.nodes[idx].parent;
            hops += 1;
            if parent == usize::MAX || hops > limit {
                return Err(EngineError::BrokenPath);
            }
            idx = parent;
        }
        self.path.reverse();
        Ok(())
    }
}
