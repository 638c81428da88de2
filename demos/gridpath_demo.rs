//! Terminal demo: generate a random maze, run every search on it and print
//! the explored area and the path. With `--play` each search is replayed in
//! real time through the replay scheduler.
//!
//! Run: cargo run --bin gridpath-demo -- --seed 7 --play

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use anyhow::Context as _;
use clap::Parser;
use gridpath_core::{Grid, GridConfig, MazeConfig, PlaybackConfig, Pos};
use gridpath_maze::generate_maze;
use gridpath_paths::{Algorithm, SearchResult, run_search};
use gridpath_replay::Scheduler;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Grid pathfinding demo
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Search to run; all of them when omitted
    #[arg(long, short)]
    algorithm: Option<Algorithm>,

    /// Random seed for the maze
    #[arg(long)]
    seed: Option<u64>,

    /// Chance for each cell to become a wall
    #[arg(long, default_value_t = MazeConfig::DEFAULT_WALL_PROBABILITY)]
    wall_probability: f64,

    /// Load the grid from an ASCII file ('.', '#', 'S', 'T') instead of
    /// generating one
    #[arg(long)]
    grid: Option<std::path::PathBuf>,

    /// Replay each search in real time
    #[arg(long)]
    play: bool,

    /// Replay speed slider, 10 (slow) to 60 (fast)
    #[arg(long, default_value_t = 15)]
    slider: u32,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn load_grid(args: &Args) -> anyhow::Result<Grid> {
    if let Some(path) = &args.grid {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        return Grid::from_ascii(&text).with_context(|| format!("parsing {}", path.display()));
    }
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("maze seed {seed}");
    let grid = Grid::from_config(&GridConfig::default())?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(generate_maze(&grid, args.wall_probability, &mut rng)?)
}

/// Draw `grid` with the cells settled by `result` as 'o' and the path as
/// '*'. Endpoints keep their own glyphs.
fn render(grid: &Grid, result: &SearchResult) -> String {
    let cols = grid.cols() as usize;
    let mut out: Vec<char> = grid.iter().map(|(_, c)| c.glyph()).collect();
    let mut mark = |p: Pos, ch: char| {
        if let Some(i) = grid.idx(p) {
            if !out[i].is_ascii_uppercase() {
                out[i] = ch;
            }
        }
    };
    for &p in &result.visited {
        mark(p, 'o');
    }
    if result.is_found() {
        for &p in &result.path {
            mark(p, '*');
        }
    }
    out.chunks(cols)
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn summary(result: &SearchResult) -> String {
    match result.path_len() {
        Some(n) => format!(
            "{}: settled {} cells, path of {} steps",
            result.algorithm,
            result.settled(),
            n
        ),
        None => format!(
            "{}: settled {} cells, target unreachable",
            result.algorithm,
            result.settled()
        ),
    }
}

fn play(scheduler: &mut Scheduler, result: &SearchResult, cfg: PlaybackConfig) -> anyhow::Result<()> {
    let visits = Arc::new(AtomicUsize::new(0));
    let path = Arc::new(Mutex::new(Vec::new()));
    let (v, p) = (Arc::clone(&visits), Arc::clone(&path));
    let started = Instant::now();
    let playback = scheduler.play(
        result.visited.clone(),
        result.path.clone(),
        cfg.delay(),
        move |_, _| {
            v.fetch_add(1, Ordering::Relaxed);
        },
        move |pos| p.lock().unwrap_or_else(PoisonError::into_inner).push(pos),
    )?;
    let fired = playback.join();
    let path = path.lock().unwrap_or_else(PoisonError::into_inner);
    println!(
        "  replayed {} events ({} visits, {} path cells) in {:?}",
        fired,
        visits.load(Ordering::Relaxed),
        path.len(),
        started.elapsed()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let grid = load_grid(&args)?;
    let playback = PlaybackConfig::with_slider(args.slider);
    let algorithms: Vec<Algorithm> = match args.algorithm {
        Some(a) => vec![a],
        None => Algorithm::ALL.to_vec(),
    };

    println!("{grid}\n");
    let mut scheduler = Scheduler::new();
    for algorithm in algorithms {
        let result = run_search(&grid, grid.start(), grid.target(), algorithm)?;
        println!("{}", summary(&result));
        println!("{}\n", render(&grid, &result));
        if args.play {
            play(&mut scheduler, &result, playback)?;
        }
    }
    Ok(())
}
