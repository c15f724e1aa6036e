//! Tick Scheduler
//!
//! Drives a linked population through the configured time range:
//! seed actions at `start_time - 1`, then for each tick in
//! `start_time..end_time` update every agent's activations before any agent
//! chooses an action, and finally collect full or summary output.

use thiserror::Error;
use uuid::Uuid;

use crate::components::Population;
use crate::config::{ConfigError, RunConfig};
use crate::output::{full_output, summarize_tick, SimulationOutput};
use crate::systems::{perceive_beliefs, perform_actions, seed_actions};
use crate::SimRng;

/// Errors that abort a run. No partial output is produced.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("agents exist but no behaviours are defined")]
    NoBehaviours,

    #[error("agent {agent} {reason}")]
    History { agent: Uuid, reason: String },

    #[error("agent {agent} has no activation snapshot at timestep {time}")]
    MissingActivations { agent: Uuid, time: usize },

    #[error("agent {agent} has no action at timestep {time}")]
    MissingAction { agent: Uuid, time: usize },
}

pub struct Runner {
    population: Population,
    config: RunConfig,
    rng: SimRng,
}

impl Runner {
    /// Validate the configuration and pre-seeded histories before any tick
    pub fn new(population: Population, config: RunConfig) -> Result<Self, RunError> {
        config.validate()?;
        if !population.agents.is_empty() && population.behaviours.is_empty() {
            return Err(RunError::NoBehaviours);
        }
        validate_histories(&population, &config)?;

        let rng = SimRng::seed_from_u64(config.seed);
        Ok(Self {
            population,
            config,
            rng,
        })
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Execute the whole run and collect its output
    pub fn run(mut self) -> Result<SimulationOutput, RunError> {
        tracing::info!(
            start = self.config.start_time,
            end = self.config.end_time,
            n_beliefs = self.population.beliefs.len(),
            n_behaviours = self.population.behaviours.len(),
            n_agents = self.population.agents.len(),
            seed = self.config.seed,
            "Starting simulation"
        );

        let seed_time = self.config.seed_time();
        let seeded = seed_actions(
            &mut self.population,
            seed_time,
            &mut self.rng,
            self.config.tuning.selection.zero_sum_policy,
        )?;
        tracing::debug!(time = seed_time, seeded, "Seeded actions");

        for time in self.config.ticks() {
            self.tick(time)?;
        }

        tracing::info!("Simulation complete; collecting output");
        self.finalize()
    }

    fn tick(&mut self, time: usize) -> Result<(), RunError> {
        tracing::debug!(time, "Perceiving beliefs");
        perceive_beliefs(&mut self.population, time, &self.config.tuning.activation)?;

        tracing::debug!(time, "Performing actions");
        perform_actions(
            &mut self.population,
            time,
            &mut self.rng,
            self.config.tuning.selection.zero_sum_policy,
        )
    }

    fn finalize(self) -> Result<SimulationOutput, RunError> {
        if self.config.full_output {
            return Ok(SimulationOutput::Full(full_output(&self.population)));
        }

        let summaries = self
            .config
            .ticks()
            .map(|time| summarize_tick(&self.population, time))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SimulationOutput::Summary(summaries))
    }
}

/// Every agent must end its activation history exactly at `start_time - 1`
/// and its action history at `start_time - 2` or `start_time - 1`
fn validate_histories(population: &Population, config: &RunConfig) -> Result<(), RunError> {
    let seed_time = config.seed_time();

    for agent in &population.agents {
        let snapshots = agent.activation_history().len();
        if snapshots <= seed_time {
            return Err(RunError::History {
                agent: agent.uuid,
                reason: format!(
                    "has {} activation snapshots but the seed pass reads timestep {}",
                    snapshots, seed_time
                ),
            });
        }
        if snapshots > config.start_time {
            return Err(RunError::History {
                agent: agent.uuid,
                reason: format!(
                    "has activation snapshots beyond timestep {}, where the run takes over",
                    seed_time
                ),
            });
        }

        let actions = agent.action_history().len();
        if actions < seed_time {
            return Err(RunError::History {
                agent: agent.uuid,
                reason: format!(
                    "has {} actions but history through timestep {} is required",
                    actions,
                    seed_time as i64 - 1
                ),
            });
        }
        if actions > config.start_time {
            return Err(RunError::History {
                agent: agent.uuid,
                reason: format!("has actions beyond timestep {}", seed_time),
            });
        }
    }
    Ok(())
}
