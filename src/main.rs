use std::io::{Write, stdout};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use conways::{Glyphs, Grid, Seed, render};
use crossterm::{cursor, execute, terminal};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Delay between frames of the unattended run loop.
const FRAME_DELAY: Duration = Duration::from_millis(50);

/// Dimensions used for `random` when the caller gives none.
const DEFAULT_ROWS: usize = 30;
const DEFAULT_COLS: usize = 60;

fn main() -> Result<()> {
    env_logger::init();

    let seed = parse_args().context("usage: conways [blinker|toad|star|random] [ROWS COLS]")?;
    debug!("requested seed: {seed:?}");

    let mut rng = SmallRng::from_os_rng();
    let pattern = seed.realize(&mut rng);
    let rows = pattern.len();
    let cols = pattern.first().map_or(0, Vec::len);

    let mut grid = Grid::new(rows, cols, Glyphs::default(), pattern)?;
    info!(
        "running {rows}x{cols} grid, initial population {}",
        grid.population()
    );

    let mut out = stdout();
    loop {
        execute!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        out.write_all(render::frame(&grid).as_bytes())?;
        out.flush()?;
        thread::sleep(FRAME_DELAY);
        grid.step();
        debug!(
            "generation {}: population {}",
            grid.generation(),
            grid.population()
        );
    }
}

/// `conways [SEED] [ROWS COLS]`. ROWS and COLS only apply to `random`;
/// named patterns come at their own dimensions.
fn parse_args() -> Result<Seed> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str).unwrap_or("random") {
        "random" => {
            let rows = parse_dimension(args.get(1), DEFAULT_ROWS)?;
            let cols = parse_dimension(args.get(2), DEFAULT_COLS)?;
            Ok(Seed::Random { rows, cols })
        }
        name => Ok(Seed::Named(name.parse()?)),
    }
}

fn parse_dimension(arg: Option<&String>, default: usize) -> Result<usize> {
    match arg {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{raw:?} is not a valid dimension")),
        None => Ok(default),
    }
}
