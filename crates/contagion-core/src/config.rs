//! Configuration System
//!
//! `RunConfig` is the control surface handed to the runner: time range,
//! output mode, seed, and tuning. Tuning covers the numeric edge-case
//! policies and can be loaded from a TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// How the action selector resolves several qualifying behaviours that all
/// score exactly zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroSumPolicy {
    /// Draw one uniform value and pick among them with equal weight
    #[default]
    Uniform,
    /// Pick the last one in ascending-score order without drawing
    Highest,
}

/// Which belief edges contextualization consults for a pair (b1, b2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoherenceMode {
    /// Only the edge b1 -> b2
    #[default]
    Directed,
    /// Mean of whichever of b1 -> b2 and b2 -> b1 exist
    Bidirectional,
}

/// Action selection parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub zero_sum_policy: ZeroSumPolicy,
}

/// Activation update parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationConfig {
    pub coherence: CoherenceMode,
    /// Compute each tick's activation phase on the rayon pool
    pub parallel: bool,
}

/// Top-level tuning structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub selection: SelectionConfig,
    pub activation: ActivationConfig,
}

impl Tuning {
    /// Load tuning from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse tuning from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Everything the runner needs besides the population itself
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// First simulated tick (inclusive)
    pub start_time: usize,
    /// Last simulated tick (exclusive)
    pub end_time: usize,
    /// Emit full agent histories instead of per-tick summaries
    pub full_output: bool,
    pub seed: u64,
    pub tuning: Tuning,
}

impl RunConfig {
    pub fn new(start_time: usize, end_time: usize, seed: u64) -> Self {
        Self {
            start_time,
            end_time,
            full_output: false,
            seed,
            tuning: Tuning::default(),
        }
    }

    pub fn with_full_output(mut self, full_output: bool) -> Self {
        self.full_output = full_output;
        self
    }

    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Reject time ranges the runner cannot execute
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.end_time <= self.start_time {
            return Err(ConfigError::InvalidTimeRange {
                start: self.start_time,
                end: self.end_time,
            });
        }
        if self.start_time == 0 {
            return Err(ConfigError::StartBeforeHistory);
        }
        Ok(())
    }

    /// Simulated ticks, `start_time..end_time`
    pub fn ticks(&self) -> Range<usize> {
        self.start_time..self.end_time
    }

    /// Timestep of the seed action pass
    pub fn seed_time(&self) -> usize {
        self.start_time - 1
    }
}

/// Seed derived from the wall clock, for runs that do not supply one
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("end time {end} must be after start time {start}")]
    InvalidTimeRange { start: usize, end: usize },

    #[error("start time must be at least 1 so the seed pass has a prior timestep")]
    StartBeforeHistory,

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
