//! `blockpath` — generate a random block map, find the shortest path from
//! the top-left to the bottom-right corner, and print the result.

use blockpath_demo::{DemoConfig, generate, overlay, render};
use blockpath_paths::find_path;
use clap::Parser;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Command line arguments for the blockpath demo.
#[derive(Parser, Debug)]
#[command(name = "blockpath")]
#[command(about = "Shortest path across a random block map")]
#[command(version)]
struct Args {
    /// Map width in cells
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i32).range(1..))]
    width: i32,

    /// Map height in cells
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i32).range(1..))]
    height: i32,

    /// Probability that a cell becomes a wall
    #[arg(long, default_value_t = 0.2, value_parser = parse_chance)]
    wall_chance: f64,

    /// Random seed for map generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

impl From<&Args> for DemoConfig {
    fn from(args: &Args) -> Self {
        Self {
            width: args.width,
            height: args.height,
            wall_chance: args.wall_chance,
            seed: args.seed,
        }
    }
}

fn parse_chance(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(format!("{v} is not in [0, 1]"))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if let Some(level) = &args.log_level {
        logger.parse_filters(level);
    }
    logger.init();

    let config = DemoConfig::from(&args);
    let mut grid = match config.seed {
        Some(seed) => generate(&config, &mut StdRng::seed_from_u64(seed))?,
        None => generate(&config, &mut rand::rng())?,
    };

    let (start, goal) = (config.start(), config.goal());
    let path = find_path(&grid, start, goal)?;
    if path.reaches(goal) {
        info!("found path {start} -> {goal} in {} steps", path.steps());
    } else {
        warn!("no path from {start} to {goal}");
    }

    overlay(&mut grid, &path)?;
    println!("{}", render(&grid));
    Ok(())
}
