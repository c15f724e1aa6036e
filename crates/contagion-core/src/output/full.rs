//! Full Output
//!
//! Converts linked agents back into the agent document shape, with
//! histories extended through the end of the run.

use contagion_specs::AgentSpec;
use std::collections::BTreeMap;

use crate::components::{Agent, Population};

/// Every agent's complete history, in agent order
pub fn full_output(population: &Population) -> Vec<AgentSpec> {
    population
        .agents
        .iter()
        .map(|agent| agent_spec(population, agent))
        .collect()
}

fn agent_spec(population: &Population, agent: &Agent) -> AgentSpec {
    let belief_uuid = |index: usize| population.beliefs[index].uuid;
    let behaviour_uuid = |index: usize| population.behaviours[index].uuid;

    AgentSpec {
        uuid: agent.uuid,
        actions: agent
            .action_history()
            .iter()
            .map(|&behaviour| population.behaviour(behaviour).uuid)
            .collect(),
        activations: agent
            .activation_history()
            .iter()
            .map(|snapshot| {
                snapshot
                    .iter()
                    .enumerate()
                    .map(|(belief, &value)| (belief_uuid(belief), value))
                    .collect()
            })
            .collect(),
        deltas: agent
            .deltas
            .iter()
            .enumerate()
            .map(|(belief, &delta)| (belief_uuid(belief), delta))
            .collect(),
        friends: agent
            .friends
            .iter()
            .map(|&(friend, weight)| (population.agent(friend).uuid, weight))
            .collect(),
        performance_relationships: agent
            .performance
            .iter()
            .enumerate()
            .map(|(belief, row)| {
                let weights: BTreeMap<_, _> = row
                    .iter()
                    .enumerate()
                    .map(|(behaviour, &weight)| (behaviour_uuid(behaviour), weight))
                    .collect();
                (belief_uuid(belief), weights)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::link;
    use contagion_specs::fixtures;

    #[test]
    fn test_unrun_population_mirrors_input() {
        let sample = fixtures::two_friends();
        let population = link(&sample.behaviours, &sample.beliefs, &sample.agents).unwrap();

        assert_eq!(full_output(&population), sample.agents);
    }

    #[test]
    fn test_fill_pass_visible_in_output() {
        let sample = fixtures::village();
        let population = link(&sample.behaviours, &sample.beliefs, &sample.agents).unwrap();

        let agents = full_output(&population);
        for agent in &agents {
            assert_eq!(agent.activations[0].len(), 3);
        }
        assert_eq!(agents[1].friends, sample.agents[1].friends);
        assert_eq!(agents[3].performance_relationships, sample.agents[3].performance_relationships);
    }
}
