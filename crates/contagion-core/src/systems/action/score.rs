//! Behaviour Scoring
//!
//! A behaviour's score is the sum over beliefs of the agent's performance
//! weight for that (belief, behaviour) pair times its current activation.

use crate::components::{Agent, Population};
use crate::runner::RunError;

/// Score every behaviour for `agent` at `time`, indexed by `BehaviourId`
pub fn score_behaviours(
    population: &Population,
    agent: &Agent,
    time: usize,
) -> Result<Vec<f64>, RunError> {
    let activations = agent.activations_at(time).ok_or(RunError::MissingActivations {
        agent: agent.uuid,
        time,
    })?;

    Ok(population
        .behaviour_ids()
        .map(|behaviour| {
            population
                .belief_ids()
                .map(|belief| agent.performance(belief, behaviour) * activations[belief.index()])
                .sum::<f64>()
        })
        .collect())
}
