//! ASCII map loading and random obstacle scatter.

use rand::Rng;
use thiserror::Error;

use octile_core::{GridError, Point, TileGrid};

/// Errors from parsing an ASCII map.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("map is empty")]
    Empty,
    #[error("line {0} has width {1}, expected {2}")]
    RaggedLine(usize, usize, usize),
    #[error("unknown map character {0:?} at {1}")]
    UnknownChar(char, Point),
    #[error("map has no start tile (S)")]
    MissingStart,
    #[error("map has no goal tile (G)")]
    MissingGoal,
}

/// A parsed or generated grid with its endpoints.
pub struct MapSetup {
    pub grid: TileGrid,
    pub start: Point,
    pub goal: Point,
}

/// Parse an ASCII map: `#` wall, `.` floor, `S` start, `G` goal.
/// Blank lines are skipped; all remaining lines must share one width.
pub fn parse_map(text: &str) -> Result<MapSetup, MapError> {
    let rows: Vec<Vec<char>> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.chars().collect())
        .collect();
    if rows.is_empty() {
        return Err(MapError::Empty);
    }

    let width = rows[0].len();
    let mut start = None;
    let mut goal = None;
    for (y, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(MapError::RaggedLine(y, row.len(), width));
        }
        for (x, &ch) in row.iter().enumerate() {
            let p = Point::new(x as i32, y as i32);
            match ch {
                '#' | '.' => {}
                'S' => start = Some(p),
                'G' => goal = Some(p),
                other => return Err(MapError::UnknownChar(other, p)),
            }
        }
    }

    let grid = TileGrid::from_fn(width as i32, rows.len() as i32, |p| {
        rows[p.y as usize][p.x as usize] != '#'
    });
    Ok(MapSetup {
        grid,
        start: start.ok_or(MapError::MissingStart)?,
        goal: goal.ok_or(MapError::MissingGoal)?,
    })
}

/// Block up to `count` random tiles, never the start or goal. Gives up
/// after `3 * count` attempts on crowded grids.
pub fn scatter_obstacles(
    grid: &mut TileGrid,
    start: Point,
    goal: Point,
    count: usize,
    rng: &mut impl Rng,
) -> Result<(), GridError> {
    let mut placed = 0;
    let mut attempts = 0;
    while placed < count && attempts < count * 3 {
        attempts += 1;
        let p = Point::new(
            rng.random_range(0..grid.width()),
            rng.random_range(0..grid.height()),
        );
        if p == start || p == goal {
            continue;
        }
        if grid.traversable(p)? {
            grid.set_traversable(p, false)?;
            placed += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_simple_map() {
        let setup = parse_map("S.#\n..#\n..G\n").unwrap();
        assert_eq!(setup.start, Point::new(0, 0));
        assert_eq!(setup.goal, Point::new(2, 2));
        assert_eq!(setup.grid.width(), 3);
        assert_eq!(setup.grid.height(), 3);
        assert_eq!(setup.grid.traversable(Point::new(2, 0)), Ok(false));
        assert_eq!(setup.grid.traversable(Point::new(1, 1)), Ok(true));
        // S and G tiles are traversable.
        assert_eq!(setup.grid.traversable(setup.start), Ok(true));
    }

    #[test]
    fn ragged_map_is_rejected() {
        assert!(matches!(
            parse_map("S..\n..\n..G\n"),
            Err(MapError::RaggedLine(1, 2, 3))
        ));
    }

    #[test]
    fn unknown_char_is_rejected() {
        assert!(matches!(
            parse_map("S.\n?G\n"),
            Err(MapError::UnknownChar('?', p)) if p == Point::new(0, 1)
        ));
    }

    #[test]
    fn missing_endpoints_are_rejected() {
        assert!(matches!(parse_map("..\n.G\n"), Err(MapError::MissingStart)));
        assert!(matches!(parse_map("S.\n..\n"), Err(MapError::MissingGoal)));
        assert!(matches!(parse_map("\n \n"), Err(MapError::Empty)));
    }

    #[test]
    fn scatter_never_blocks_endpoints() {
        let mut grid = TileGrid::new(10, 10);
        let start = Point::new(1, 1);
        let goal = Point::new(8, 8);
        let mut rng = StdRng::seed_from_u64(7);
        scatter_obstacles(&mut grid, start, goal, 40, &mut rng).unwrap();
        assert_eq!(grid.traversable(start), Ok(true));
        assert_eq!(grid.traversable(goal), Ok(true));
    }
}
