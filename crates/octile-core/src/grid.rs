//! The [`TileGrid`] type — a fixed-size traversability map.
//!
//! A `TileGrid` owns a flat `width × height` array of traversability
//! flags, row-major. Every in-bounds coordinate has exactly one tile;
//! tiles are never destroyed, only mutated. Search bookkeeping (costs,
//! predecessors) lives in the engine, not here.

use crate::error::GridError;
use crate::geom::Point;

/// A fixed `width × height` grid of traversable/blocked tiles.
#[derive(Debug, Clone)]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<bool>,
}

impl TileGrid {
    /// Create a grid of the given dimensions with every tile traversable.
    /// Negative dimensions clamp to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            tiles: vec![true; (w * h) as usize],
        }
    }

    /// Create a grid whose traversability comes from a predicate.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> bool) -> Self {
        let mut grid = Self::new(width, height);
        for idx in 0..grid.tiles.len() {
            grid.tiles[idx] = f(grid.point_at(idx));
        }
        grid
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of tiles (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid has no tiles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `p` lies inside the grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y * self.width + p.x) as usize)
        } else {
            None
        }
    }

    /// The point corresponding to a flat row-major index.
    ///
    /// The inverse of [`index_of`](Self::index_of) for valid indices.
    #[inline]
    pub fn point_at(&self, idx: usize) -> Point {
        Point::new(idx as i32 % self.width, idx as i32 / self.width)
    }

    /// Bounds-checked traversability lookup.
    pub fn traversable(&self, p: Point) -> Result<bool, GridError> {
        self.index_of(p)
            .map(|i| self.tiles[i])
            .ok_or(GridError::OutOfRange(p))
    }

    /// Bounds-checked traversability mutation.
    ///
    /// Mutating while a search is running is rejected by the engine; the
    /// grid itself only checks bounds.
    pub fn set_traversable(&mut self, p: Point, value: bool) -> Result<(), GridError> {
        let idx = self.index_of(p).ok_or(GridError::OutOfRange(p))?;
        self.tiles[idx] = value;
        Ok(())
    }

    /// Set every tile's traversability to `value`.
    pub fn fill(&mut self, value: bool) {
        self.tiles.fill(value);
    }

    /// Append the in-bounds Moore neighborhood of `p` (all tiles at
    /// Chebyshev distance 1) into `buf`, excluding `p` itself.
    ///
    /// Order is a row-major scan of the 3×3 block, which keeps repeated
    /// searches reproducible. Traversability is not filtered here; the
    /// engine's expansion step skips blocked tiles.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n = p.shift(dx, dy);
                if self.contains(n) {
                    buf.push(n);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_all_traversable() {
        let g = TileGrid::new(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.len(), 12);
        assert_eq!(g.traversable(Point::new(3, 2)), Ok(true));
    }

    #[test]
    fn negative_dimensions_clamp() {
        let g = TileGrid::new(-3, 5);
        assert_eq!(g.width(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn set_and_get() {
        let mut g = TileGrid::new(4, 4);
        let p = Point::new(2, 1);
        g.set_traversable(p, false).unwrap();
        assert_eq!(g.traversable(p), Ok(false));
        assert_eq!(g.traversable(Point::new(0, 0)), Ok(true));
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut g = TileGrid::new(4, 4);
        let p = Point::new(4, 0);
        assert_eq!(g.traversable(p), Err(GridError::OutOfRange(p)));
        assert_eq!(g.set_traversable(p, false), Err(GridError::OutOfRange(p)));
        let q = Point::new(0, -1);
        assert_eq!(g.traversable(q), Err(GridError::OutOfRange(q)));
    }

    #[test]
    fn index_round_trip() {
        let g = TileGrid::new(5, 3);
        for idx in 0..g.len() {
            let p = g.point_at(idx);
            assert_eq!(g.index_of(p), Some(idx));
        }
        assert_eq!(g.index_of(Point::new(5, 0)), None);
    }

    #[test]
    fn from_fn_sets_traversability() {
        let g = TileGrid::from_fn(3, 3, |p| p.x != 1);
        assert_eq!(g.traversable(Point::new(0, 0)), Ok(true));
        assert_eq!(g.traversable(Point::new(1, 2)), Ok(false));
    }

    #[test]
    fn fill_resets_everything() {
        let mut g = TileGrid::new(3, 3);
        g.set_traversable(Point::new(1, 1), false).unwrap();
        g.fill(true);
        assert_eq!(g.traversable(Point::new(1, 1)), Ok(true));
    }

    #[test]
    fn neighbors_center_has_eight_in_row_major_order() {
        let g = TileGrid::new(3, 3);
        let mut buf = Vec::new();
        g.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn neighbors_corner_has_three() {
        let g = TileGrid::new(3, 3);
        let mut buf = Vec::new();
        g.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(
            buf,
            vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn neighbors_includes_blocked_tiles() {
        let mut g = TileGrid::new(3, 3);
        g.set_traversable(Point::new(1, 0), false).unwrap();
        let mut buf = Vec::new();
        g.neighbors(Point::new(0, 0), &mut buf);
        assert!(buf.contains(&Point::new(1, 0)));
    }
}
