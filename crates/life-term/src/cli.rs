//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgGroup, Parser};
use life_core::Grid;
use life_load::{LoadError, LoadOptions};

use crate::session::{DEFAULT_DELAY, DEFAULT_STEPS, MAX_STEPS};

/// Preset used when no pattern source is given.
pub const DEFAULT_PRESET: &str = "glider";

/// Conway's Game of Life on a wrap-around board.
#[derive(Debug, Parser)]
#[command(name = "lifegame", version, about)]
#[command(group(ArgGroup::new("source").args(["file", "preset", "random"])))]
pub struct Args {
    /// Pattern table to load (comma-separated; `1` or `●` is alive).
    pub file: Option<PathBuf>,

    /// Start from a built-in pattern (see --list-presets).
    #[arg(long)]
    pub preset: Option<String>,

    /// Start from a random board of the given size, e.g. `40x60`.
    #[arg(long, value_name = "ROWSxCOLS", value_parser = parse_size)]
    pub random: Option<(usize, usize)>,

    /// Fraction of live cells in a random board.
    #[arg(long, default_value_t = 0.3)]
    pub density: f64,

    /// Seed for the random board (random if omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of generations to run.
    #[arg(
        long,
        default_value_t = DEFAULT_STEPS as u64,
        value_parser = clap::value_parser!(u64).range(1..=MAX_STEPS as u64),
    )]
    pub steps: u64,

    /// Delay between generations, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Field separator in pattern files.
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Keep all-dead first and last rows of a pattern file.
    #[arg(long)]
    pub no_trim: bool,

    /// List the built-in patterns and exit.
    #[arg(long)]
    pub list_presets: bool,

    /// Run all steps without a UI and print the final board.
    #[arg(long)]
    pub print: bool,

    /// Write log records (filtered by `RUST_LOG`) to this file. Without it
    /// the interactive view logs nothing.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Loader settings from `--delimiter` and `--no-trim`.
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::default()
            .with_delimiter(self.delimiter)
            .with_trim_border(!self.no_trim)
    }

    /// Generations per run, from `--steps`.
    pub fn step_limit(&self) -> usize {
        self.steps as usize
    }

    /// Delay between generations, from `--delay-ms`.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Build the starting board from whichever source was selected.
    pub fn source_grid(&self) -> Result<Grid, LoadError> {
        if let Some(path) = &self.file {
            return life_load::load_file(path, &self.load_options());
        }
        if let Some((rows, cols)) = self.random {
            let seed = self.seed.unwrap_or_else(rand::random);
            log::info!("random board seed {seed}");
            return life_load::random_grid(rows, cols, self.density, seed);
        }
        let name = self.preset.as_deref().unwrap_or(DEFAULT_PRESET);
        life_load::preset(name)?.grid()
    }
}

/// Parse `ROWSxCOLS`.
fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (r, c) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got \u{201c}{s}\u{201d}"))?;
    let rows: usize = r.trim().parse().map_err(|e| format!("rows: {e}"))?;
    let cols: usize = c.trim().parse().map_err(|e| format!("cols: {e}"))?;
    if rows == 0 || cols == 0 {
        return Err("both dimensions must be positive".to_string());
    }
    Ok((rows, cols))
}
