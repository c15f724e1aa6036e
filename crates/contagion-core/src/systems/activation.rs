//! Activation Update System
//!
//! Recomputes an agent's activation for every belief from its previous
//! snapshot and the behaviours its friends most recently performed.
//!
//! For belief `b` at tick `t`:
//! - pressure: friends' tie weights accumulated per behaviour they performed
//!   at `t - 1`, weighted by `b`'s perception of each behaviour, divided by
//!   the number of friends
//! - context: mean over all beliefs `b2` of `activation[b] * weight(b -> b2)`
//!   using the snapshot at `t - 1`
//! - change: `(1 ± context) / 2 * pressure`, with the sign chosen by pressure
//! - new activation: `clamp(delta[b] * previous[b] + change, -1, 1)`

use rayon::prelude::*;

use crate::components::{ActivationSnapshot, Agent, AgentId, BehaviourId, Belief, BeliefId, Population};
use crate::config::{ActivationConfig, CoherenceMode};
use crate::runner::RunError;

/// Sum of friends' tie weights per behaviour they performed at `time`,
/// indexed by `BehaviourId`
pub fn actions_of_friends(
    population: &Population,
    agent: &Agent,
    time: usize,
) -> Result<Vec<f64>, RunError> {
    let mut totals = vec![0.0; population.behaviours.len()];
    for &(friend_id, weight) in &agent.friends {
        let friend = population.agent(friend_id);
        let action = friend.action_at(time).ok_or(RunError::MissingAction {
            agent: friend.uuid,
            time,
        })?;
        totals[action.index()] += weight;
    }
    Ok(totals)
}

/// Friend-driven push on a belief. Zero for an agent without friends.
pub fn pressure(belief: &Belief, actions_of_friends: &[f64], friend_count: usize) -> f64 {
    if friend_count == 0 {
        return 0.0;
    }
    let total: f64 = actions_of_friends
        .iter()
        .enumerate()
        .map(|(behaviour, weight)| belief.perception_of(BehaviourId(behaviour)) * weight)
        .sum();
    total / friend_count as f64
}

/// `activations[b1] * weight(b1, b2)`, or 0.0 when no edge applies
pub fn weighted_relationship(
    population: &Population,
    activations: &[f64],
    b1: BeliefId,
    b2: BeliefId,
    mode: CoherenceMode,
) -> f64 {
    let forward = population.belief(b1).relationship_to(b2);
    let weight = match mode {
        CoherenceMode::Directed => forward,
        CoherenceMode::Bidirectional => match (forward, population.belief(b2).relationship_to(b1)) {
            (Some(a), Some(b)) => Some((a + b) / 2.0),
            (Some(w), None) | (None, Some(w)) => Some(w),
            (None, None) => None,
        },
    };
    weight.map_or(0.0, |w| activations[b1.index()] * w)
}

/// Mean coherence between `belief` and every belief in the population
pub fn contextualize(
    population: &Population,
    activations: &[f64],
    belief: BeliefId,
    mode: CoherenceMode,
) -> f64 {
    let count = population.beliefs.len();
    if count == 0 {
        return 0.0;
    }
    let total: f64 = population
        .belief_ids()
        .map(|other| weighted_relationship(population, activations, belief, other, mode))
        .sum();
    total / count as f64
}

/// Pressure amplified by coherent context and dampened by incoherent context
pub fn activation_change(pressure: f64, context: f64) -> f64 {
    if pressure > 0.0 {
        (1.0 + context) / 2.0 * pressure
    } else {
        (1.0 - context) / 2.0 * pressure
    }
}

/// Compute the snapshot for `time` without recording it
pub fn next_activations(
    population: &Population,
    agent_id: AgentId,
    time: usize,
    mode: CoherenceMode,
) -> Result<ActivationSnapshot, RunError> {
    let agent = population.agent(agent_id);
    let prior = time.checked_sub(1).ok_or(RunError::MissingActivations {
        agent: agent.uuid,
        time,
    })?;
    let previous = agent.activations_at(prior).ok_or(RunError::MissingActivations {
        agent: agent.uuid,
        time: prior,
    })?;
    let friend_actions = actions_of_friends(population, agent, prior)?;

    Ok(population
        .belief_ids()
        .map(|belief| {
            let push = pressure(population.belief(belief), &friend_actions, agent.friends.len());
            let change = activation_change(push, contextualize(population, previous, belief, mode));
            (agent.delta(belief) * previous[belief.index()] + change).clamp(-1.0, 1.0)
        })
        .collect())
}

/// Activation phase of a tick: every agent's snapshot for `time` is computed
/// from the frozen population, then all are recorded in agent order
pub fn perceive_beliefs(
    population: &mut Population,
    time: usize,
    config: &ActivationConfig,
) -> Result<(), RunError> {
    let snapshots: Vec<ActivationSnapshot> = {
        let frozen: &Population = population;
        let agent_ids: Vec<AgentId> = frozen.agent_ids().collect();
        if config.parallel {
            agent_ids
                .into_par_iter()
                .map(|id| next_activations(frozen, id, time, config.coherence))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            agent_ids
                .into_iter()
                .map(|id| next_activations(frozen, id, time, config.coherence))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    for (agent, snapshot) in population.agents.iter_mut().zip(snapshots) {
        agent.push_activations(snapshot);
    }
    Ok(())
}
