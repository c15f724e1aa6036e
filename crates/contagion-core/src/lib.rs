//! Belief Contagion Simulation Engine
//!
//! Public API for the simulation engine: link input documents into a
//! population, run it over a time range, and collect full or summary output.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

pub mod codec;
pub mod components;
pub mod config;
pub mod output;
pub mod runner;
pub mod setup;
pub mod systems;

pub use components::*;
pub use config::{CoherenceMode, ConfigError, RunConfig, Tuning, ZeroSumPolicy};
pub use output::{write_output, OutputError, SimulationOutput};
pub use runner::{RunError, Runner};
pub use setup::{link, InputDocuments, InputPaths, LinkError, LoadError};

/// Seeded random number generator shared by every action selection.
///
/// ChaCha keeps draw sequences identical across platforms for a given seed.
#[derive(Debug, Clone)]
pub struct SimRng(pub ChaCha8Rng);

impl SimRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Any failure that aborts a run before output is written
#[derive(Debug, Error)]
pub enum ContagionError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Link(#[from] LinkError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Load, link, run, and return the output of one simulation
pub fn simulate(paths: &InputPaths, config: RunConfig) -> Result<SimulationOutput, ContagionError> {
    let documents = InputDocuments::load(paths)?;
    let population = link(&documents.behaviours, &documents.beliefs, &documents.agents)?;
    Ok(Runner::new(population, config)?.run()?)
}
