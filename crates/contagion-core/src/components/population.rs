//! Population Arena
//!
//! Owns every entity of a run. Entities refer to each other only through
//! the typed indices handed out here, so the cyclic belief and friendship
//! graphs need no shared references.

use super::agent::Agent;
use super::behaviour::Behaviour;
use super::belief::Belief;
use super::ids::{AgentId, BehaviourId, BeliefId};

#[derive(Debug, Clone, Default)]
pub struct Population {
    pub behaviours: Vec<Behaviour>,
    pub beliefs: Vec<Belief>,
    pub agents: Vec<Agent>,
}

impl Population {
    pub fn new(behaviours: Vec<Behaviour>, beliefs: Vec<Belief>, agents: Vec<Agent>) -> Self {
        Self {
            behaviours,
            beliefs,
            agents,
        }
    }

    pub fn behaviour(&self, id: BehaviourId) -> &Behaviour {
        &self.behaviours[id.index()]
    }

    pub fn belief(&self, id: BeliefId) -> &Belief {
        &self.beliefs[id.index()]
    }

    pub fn agent(&self, id: AgentId) -> &Agent {
        &self.agents[id.index()]
    }

    pub fn agent_mut(&mut self, id: AgentId) -> &mut Agent {
        &mut self.agents[id.index()]
    }

    pub fn behaviour_ids(&self) -> impl Iterator<Item = BehaviourId> {
        (0..self.behaviours.len()).map(BehaviourId)
    }

    pub fn belief_ids(&self) -> impl Iterator<Item = BeliefId> {
        (0..self.beliefs.len()).map(BeliefId)
    }

    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> {
        (0..self.agents.len()).map(AgentId)
    }
}
