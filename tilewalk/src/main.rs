//! tilewalk — terminal driver for the stepped octile A* engine.
//!
//! Loads or generates a grid, drives the engine one expansion at a time,
//! and renders the search state as ASCII frames.

mod map;

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use octile_core::{Point, TileGrid};
use octile_engine::{AstarEngine, EngineState};

use map::{MapSetup, parse_map, scatter_obstacles};

/// Step an octile A* search across a grid and print what happens.
#[derive(Parser, Debug)]
#[command(name = "tilewalk")]
struct Args {
    /// Grid width (ignored with --map).
    #[arg(long, default_value_t = 50)]
    width: i32,

    /// Grid height (ignored with --map).
    #[arg(long, default_value_t = 35)]
    height: i32,

    /// Number of randomly scattered obstacles.
    #[arg(long, default_value_t = 0)]
    obstacles: usize,

    /// RNG seed for reproducible obstacle scatter.
    #[arg(long)]
    seed: Option<u64>,

    /// Load an ASCII map (`#` wall, `.` floor, `S` start, `G` goal).
    #[arg(long)]
    map: Option<PathBuf>,

    /// Render the grid after every step instead of only at the end.
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let MapSetup { grid, start, goal } = match &args.map {
        Some(path) => parse_map(&fs::read_to_string(path)?)?,
        None => {
            let mut grid = TileGrid::new(args.width, args.height);
            let start = Point::new(1, 1);
            let goal = Point::new(args.width - 2, args.height - 2);
            if args.obstacles > 0 {
                let mut rng = match args.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                scatter_obstacles(&mut grid, start, goal, args.obstacles, &mut rng)?;
            }
            MapSetup { grid, start, goal }
        }
    };

    log::info!(
        "grid {}x{}, start {}, goal {}",
        grid.width(),
        grid.height(),
        start,
        goal
    );

    let mut engine = AstarEngine::new(grid, start, goal)?;
    let mut steps = 0usize;
    loop {
        let changed = engine.advance()?.len();
        steps += 1;
        if args.trace {
            println!("step {steps}: {changed} tile events");
            render(&engine);
        }
        if engine.state() != EngineState::Running {
            break;
        }
    }

    if !args.trace {
        render(&engine);
    }
    match engine.state() {
        EngineState::Found => {
            let path_len = engine.path().map_or(0, |p| p.len());
            let cost = engine.cost_at(engine.goal()).map_or(0, |(g, _, _)| g);
            println!("found a path of {path_len} steps (g = {cost}) in {steps} expansions");
        }
        EngineState::Exhausted => println!("no path exists ({steps} expansions)"),
        _ => {}
    }
    Ok(())
}

/// Render the search state: `S`/`G` markers, `#` wall, `o` open,
/// `x` closed, `*` path, `.` untouched.
fn render(engine: &AstarEngine) {
    let grid = engine.grid();
    let path = engine.path().unwrap_or(&[]);
    for y in 0..grid.height() {
        let mut line = String::with_capacity(grid.width() as usize);
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let ch = if p == engine.start() {
                'S'
            } else if p == engine.goal() {
                'G'
            } else if !grid.traversable(p).unwrap_or(true) {
                '#'
            } else if path.contains(&p) {
                '*'
            } else if engine.is_closed(p) {
                'x'
            } else if engine.is_open(p) {
                'o'
            } else {
                '.'
            };
            line.push(ch);
        }
        println!("{line}");
    }
    println!();
}
