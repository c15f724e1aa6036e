//! Belief Contagion Simulator
//!
//! Loads behaviours, beliefs and agents from JSON (zstd-compressed for `.zst`
//! paths), runs the simulation over `[start-time, end-time)` and writes full
//! histories or per-tick summaries.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use contagion_core::config::{seed_from_clock, DEFAULT_TUNING_PATH};
use contagion_core::{simulate, write_output, ContagionError, InputPaths, RunConfig, Tuning};

/// Command line arguments for the simulator
#[derive(Parser, Debug)]
#[command(name = "contagion")]
#[command(about = "Simulates belief diffusion over a weighted social network")]
struct Args {
    /// First simulated timestep (inclusive, at least 1)
    start_time: usize,

    /// Last simulated timestep (exclusive)
    end_time: usize,

    /// Agents JSON document (`.zst` for zstd-compressed)
    agents: PathBuf,

    /// Beliefs JSON document (`.zst` for zstd-compressed)
    beliefs: PathBuf,

    /// Behaviours JSON document (`.zst` for zstd-compressed)
    behaviours: PathBuf,

    /// Where to write the output JSON (`.zst` for zstd-compressed)
    output: PathBuf,

    /// Write full agent histories instead of per-timestep summaries
    #[arg(long)]
    full_output: bool,

    /// Random seed for reproducibility; derived from the clock when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Tuning file (TOML); `tuning.toml` in the working directory is used
    /// when present
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Compute activation updates on all cores
    #[arg(long)]
    parallel: bool,
}

fn main() -> ExitCode {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt().with_env_filter(log_filter(&directives)).init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG`-style directives, falling back to INFO when none are given
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn run(args: Args) -> Result<(), ContagionError> {
    let seed = args.seed.unwrap_or_else(|| {
        let seed = seed_from_clock();
        tracing::warn!(seed, "No seed given; derived one from the clock");
        seed
    });

    let mut tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None if Path::new(DEFAULT_TUNING_PATH).exists() => Tuning::load(DEFAULT_TUNING_PATH)?,
        None => Tuning::default(),
    };
    if args.parallel {
        tuning.activation.parallel = true;
    }

    let config = RunConfig::new(args.start_time, args.end_time, seed)
        .with_full_output(args.full_output)
        .with_tuning(tuning);
    let paths = InputPaths {
        agents: args.agents,
        beliefs: args.beliefs,
        behaviours: args.behaviours,
    };

    let output = simulate(&paths, config)?;
    write_output(&args.output, &output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_honours_debug() {
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter("contagion_core=trace").max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_log_filter_can_quiet_output() {
        assert_eq!(log_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
    }
}
