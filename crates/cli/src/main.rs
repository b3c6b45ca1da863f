//! Page-replacement simulator CLI.
//!
//! This binary drives the engine from the command line. It provides:
//! 1. **Run:** Simulate one algorithm and print the execution trace (or JSON).
//! 2. **Compare:** Run every algorithm on the same input and tabulate faults.
//! 3. **Curve:** Sweep the frame count for one algorithm and flag Belady's anomaly.
//!
//! References come from `--refs`, a file, the seeded random generator or a JSON
//! config file; explicit flags override values from `--config`.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pagesim_core::config::defaults;
use pagesim_core::reference::ReferenceInput;
use pagesim_core::sim::{StepRecord, compare, fault_curve};
use pagesim_core::stats::Statistics;
use pagesim_core::{Algorithm, ReferenceSequence, SimConfig, SimError, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Step-by-step page replacement simulator",
    long_about = "Simulate FIFO, LRU, Optimal and Clock page replacement over a reference string.\n\nExamples:\n  pagesim run --refs \"7,0,1,2,0,3,0,4\" --frames 3 --algorithm lru\n  pagesim compare --file refs.txt --frames 4\n  pagesim curve --refs \"1 2 3 4 1 2 5 1 2 3 4 5\" --algorithm fifo --max-frames 6\n  pagesim run --config run.json --json"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate one algorithm and print its execution trace.
    Run {
        #[command(flatten)]
        input: InputArgs,

        /// Number of physical frames.
        #[arg(short = 'n', long)]
        frames: Option<usize>,

        /// Replacement algorithm (fifo, lru, optimal, clock).
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Print statistics and the full step history as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run every algorithm on the same references and compare fault counts.
    Compare {
        #[command(flatten)]
        input: InputArgs,

        /// Number of physical frames.
        #[arg(short = 'n', long)]
        frames: Option<usize>,

        /// Print the comparison as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Sweep the frame count for one algorithm.
    Curve {
        #[command(flatten)]
        input: InputArgs,

        /// Replacement algorithm (fifo, lru, optimal, clock).
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Smallest frame count in the sweep.
        #[arg(long, default_value_t = defaults::MIN_FRAMES)]
        min_frames: usize,

        /// Largest frame count in the sweep.
        #[arg(long, default_value_t = 8)]
        max_frames: usize,

        /// Print the curve as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Reference sources shared by every subcommand.
#[derive(Args, Debug, Default)]
struct InputArgs {
    /// Reference string, comma and/or whitespace separated.
    #[arg(short, long, conflicts_with_all = ["file", "random"])]
    refs: Option<String>,

    /// File containing the reference string.
    #[arg(short, long, conflicts_with = "random")]
    file: Option<PathBuf>,

    /// Generate a random reference string of this length.
    #[arg(long, value_name = "LEN")]
    random: Option<usize>,

    /// Seed for `--random`.
    #[arg(long, default_value_t = defaults::RANDOM_SEED)]
    seed: u64,

    /// Pages drawn by `--random` lie in `0..PAGE_RANGE`.
    #[arg(long, default_value_t = defaults::RANDOM_PAGE_RANGE)]
    page_range: u32,

    /// JSON run configuration (`frames`, `algorithm`, `references`).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Failures surfaced to the user before exiting with status 1.
#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid curve range {min}..={max}")]
    Range { min: usize, max: usize },

    #[error(transparent)]
    Sim(#[from] SimError),
}

/// JSON document emitted by `run --json`.
#[derive(Serialize)]
struct RunReport<'a> {
    algorithm: Algorithm,
    frames: usize,
    references: &'a ReferenceSequence,
    statistics: Statistics,
    history: &'a [StepRecord],
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = dispatch(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Run {
            input,
            frames,
            algorithm,
            json,
        } => cmd_run(&input, frames, algorithm.as_deref(), json),
        Commands::Compare {
            input,
            frames,
            json,
        } => cmd_compare(&input, frames, json),
        Commands::Curve {
            input,
            algorithm,
            min_frames,
            max_frames,
            json,
        } => cmd_curve(&input, algorithm.as_deref(), min_frames, max_frames, json),
    }
}

/// Simulates one algorithm and prints the trace or a JSON report.
fn cmd_run(
    input: &InputArgs,
    frames: Option<usize>,
    algorithm: Option<&str>,
    json: bool,
) -> Result<(), CliError> {
    let config = resolve_config(input, frames, algorithm)?;
    let mut sim = Simulator::from_config(&config)?;
    let _ = sim.simulate();

    if json {
        let report = RunReport {
            algorithm: sim.algorithm(),
            frames: sim.frame_count(),
            references: sim.references(),
            statistics: sim.statistics(),
            history: sim.history(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", sim.execution_trace());
    }
    Ok(())
}

/// Runs all four algorithms and prints the comparison table.
fn cmd_compare(input: &InputArgs, frames: Option<usize>, json: bool) -> Result<(), CliError> {
    let config = resolve_config(input, frames, None)?;
    let references = config.references.resolve().map_err(SimError::from)?;
    let table = compare(&references, config.frames)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print!("{table}");
        if let Some(best) = table.best() {
            println!("best: {} ({} faults)", best.algorithm, best.statistics.fault_count);
        }
    }
    Ok(())
}

/// Sweeps `min_frames..=max_frames` for one algorithm.
fn cmd_curve(
    input: &InputArgs,
    algorithm: Option<&str>,
    min_frames: usize,
    max_frames: usize,
    json: bool,
) -> Result<(), CliError> {
    if min_frames > max_frames {
        return Err(CliError::Range {
            min: min_frames,
            max: max_frames,
        });
    }
    let config = resolve_config(input, None, algorithm)?;
    let references = config.references.resolve().map_err(SimError::from)?;
    let curve = fault_curve(&references, config.algorithm, min_frames..=max_frames)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&curve)?);
    } else {
        print!("{curve}");
    }
    Ok(())
}

/// Merges the config file (if any) with command-line overrides.
fn resolve_config(
    input: &InputArgs,
    frames: Option<usize>,
    algorithm: Option<&str>,
) -> Result<SimConfig, CliError> {
    let mut config = match &input.config {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };

    if let Some(frames) = frames {
        config.frames = frames;
    }
    if let Some(selector) = algorithm {
        config.algorithm = selector.parse::<Algorithm>().map_err(SimError::from)?;
    }
    if let Some(references) = reference_override(input)? {
        config.references = references;
    }

    debug!(
        frames = config.frames,
        algorithm = %config.algorithm,
        "resolved run configuration"
    );
    Ok(config)
}

/// Reference input chosen by `--refs`, `--file` or `--random`, in that order.
fn reference_override(input: &InputArgs) -> Result<Option<ReferenceInput>, CliError> {
    if let Some(text) = &input.refs {
        return Ok(Some(ReferenceInput::from(text.as_str())));
    }
    if let Some(path) = &input.file {
        return Ok(Some(ReferenceInput::from(read(path)?)));
    }
    if let Some(len) = input.random {
        let references = ReferenceSequence::random(len, input.page_range, input.seed);
        info!(len, seed = input.seed, "generated random reference string");
        return Ok(Some(ReferenceInput::from(references.pages().to_vec())));
    }
    Ok(None)
}

fn load_config(path: &Path) -> Result<SimConfig, CliError> {
    let text = read(path)?;
    SimConfig::from_json(&text).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
