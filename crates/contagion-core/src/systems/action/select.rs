//! Action Selection System
//!
//! Turns behaviour scores into exactly one chosen behaviour per agent.
//!
//! - Every score negative: take the highest (least negative), no draw.
//! - One non-negative score: take it, no draw.
//! - Otherwise roulette over the non-negative scores, walked in ascending
//!   score order with ties kept in input order. One draw per agent.

use rand::Rng;

use crate::components::{AgentId, BehaviourId, Population};
use crate::config::ZeroSumPolicy;
use crate::runner::RunError;
use crate::SimRng;

use super::score::score_behaviours;

/// Pick a behaviour index from its scores. `None` only when `scores` is empty.
pub fn choose_behaviour<R: Rng>(
    rng: &mut R,
    scores: &[f64],
    policy: ZeroSumPolicy,
) -> Option<usize> {
    // First maximum wins ties
    let (max_index, max_score) = scores.iter().copied().enumerate().fold(
        None,
        |best: Option<(usize, f64)>, (index, score)| match best {
            Some((_, top)) if score <= top => best,
            _ => Some((index, score)),
        },
    )?;

    if max_score < 0.0 {
        return Some(max_index);
    }

    let mut qualifying: Vec<(usize, f64)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, score)| score >= 0.0)
        .collect();
    // Stable: equal scores keep input order
    qualifying.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    if qualifying.len() == 1 {
        return Some(qualifying[0].0);
    }

    let total: f64 = qualifying.iter().map(|&(_, score)| score).sum();
    if total == 0.0 {
        return Some(match policy {
            ZeroSumPolicy::Uniform => {
                let roll: f64 = rng.gen();
                let slot = ((roll * qualifying.len() as f64) as usize).min(qualifying.len() - 1);
                qualifying[slot].0
            }
            ZeroSumPolicy::Highest => qualifying[qualifying.len() - 1].0,
        });
    }

    let mut roll: f64 = rng.gen();
    for &(index, score) in &qualifying {
        roll -= score / total;
        if roll <= 0.0 {
            return Some(index);
        }
    }

    // Rounding left the roll above zero; take the highest scorer
    qualifying.last().map(|&(index, _)| index)
}

/// Score and choose a behaviour for one agent at `time` without recording it
pub fn select_action(
    population: &Population,
    agent_id: AgentId,
    time: usize,
    rng: &mut SimRng,
    policy: ZeroSumPolicy,
) -> Result<BehaviourId, RunError> {
    let scores = score_behaviours(population, population.agent(agent_id), time)?;
    choose_behaviour(&mut rng.0, &scores, policy)
        .map(BehaviourId)
        .ok_or(RunError::NoBehaviours)
}

/// Action phase of a tick: every agent, in agent order, records one
/// behaviour for `time`
pub fn perform_actions(
    population: &mut Population,
    time: usize,
    rng: &mut SimRng,
    policy: ZeroSumPolicy,
) -> Result<(), RunError> {
    for agent_id in population.agent_ids() {
        let chosen = select_action(population, agent_id, time, rng, policy)?;
        population.agent_mut(agent_id).push_action(chosen);
    }
    Ok(())
}

/// Seed pass before the first tick: agents without a recorded action at
/// `time` get one chosen from their snapshot at `time`. Pre-seeded actions
/// are kept. Returns how many agents were seeded.
pub fn seed_actions(
    population: &mut Population,
    time: usize,
    rng: &mut SimRng,
    policy: ZeroSumPolicy,
) -> Result<usize, RunError> {
    let mut seeded = 0;
    for agent_id in population.agent_ids() {
        if population.agent(agent_id).action_at(time).is_some() {
            continue;
        }
        let chosen = select_action(population, agent_id, time, rng, policy)?;
        population.agent_mut(agent_id).push_action(chosen);
        seeded += 1;
    }
    Ok(seeded)
}
