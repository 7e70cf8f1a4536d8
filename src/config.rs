use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{error::Result, seed::Density};

pub const DEFAULT_GENERATIONS: u64 = 1000;
pub const DEFAULT_DENSITY: u8 = 10;
pub const DEFAULT_WIDTH: usize = 60;
pub const DEFAULT_HEIGHT: usize = 30;

/// Conway's Game of Life on a wraparound board, animated in the terminal.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "EXAMPLE:\n    torus_life 500 50 60 30 0"
)]
pub struct Args {
    /// How many generations to play out.
    #[arg(value_name = "GENERATIONS", default_value_t = DEFAULT_GENERATIONS)]
    pub generations: u64,

    /// Percent chance that each cell starts out alive.
    #[arg(
        value_name = "DENSITY",
        default_value_t = DEFAULT_DENSITY,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub density: u8,

    /// Number of cells in the grid, horizontally.
    #[arg(value_name = "WIDTH", default_value_t = DEFAULT_WIDTH, value_parser = parse_size)]
    pub width: usize,

    /// Number of cells in the grid, vertically.
    #[arg(value_name = "HEIGHT", default_value_t = DEFAULT_HEIGHT, value_parser = parse_size)]
    pub height: usize,

    /// Seconds to pause between generations.
    #[arg(value_name = "DELAY", default_value = "0", value_parser = parse_delay)]
    pub delay: Duration,

    /// Seed for the random initial board.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Start from a text pattern instead of a random board.
    #[arg(long, value_name = "FILE")]
    pub pattern: Option<PathBuf>,

    /// Run without drawing; only print a summary at the end.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Where the first generation comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Random {
        width: usize,
        height: usize,
        density: Density,
        seed: Option<u64>,
    },
    Pattern(PathBuf),
}

/// Validated launch parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub generations: u64,
    pub delay: Duration,
    pub source: Source,
    pub quiet: bool,
}

impl Args {
    pub fn into_settings(self) -> Result<Settings> {
        let source = match self.pattern {
            Some(path) => Source::Pattern(path),
            None => Source::Random {
                width: self.width,
                height: self.height,
                density: Density::new(self.density)?,
                seed: self.seed,
            },
        };

        Ok(Settings {
            generations: self.generations,
            delay: self.delay,
            source,
            quiet: self.quiet,
        })
    }
}

fn parse_size(s: &str) -> std::result::Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|error| format!("invalid size: {error}"))?;
    if n == 0 {
        return Err("size must be at least 1".to_string());
    }
    Ok(n)
}

fn parse_delay(s: &str) -> std::result::Result<Duration, String> {
    let secs: f64 = s
        .parse()
        .map_err(|error| format!("invalid delay: {error}"))?;
    Duration::try_from_secs_f64(secs)
        .map_err(|error| format!("invalid delay: {error}"))
}
