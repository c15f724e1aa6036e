//! Belief Component
//!
//! A belief carries directed, signed edges to other beliefs and a perception
//! weight per behaviour. Edges are asymmetric: `a -> b` says nothing about
//! `b -> a`.

use std::collections::HashMap;
use uuid::Uuid;

use super::ids::{BehaviourId, BeliefId};

#[derive(Debug, Clone)]
pub struct Belief {
    pub uuid: Uuid,
    pub name: String,
    /// Outgoing edges (target -> weight). Populated in the second linking phase.
    pub relationships: HashMap<BeliefId, f64>,
    /// Dense perception weights indexed by `BehaviourId`; absent entries are 0.0
    pub perceptions: Vec<f64>,
}

impl Belief {
    /// Create a belief with no edges and zero perception of every behaviour
    pub fn new(uuid: Uuid, name: impl Into<String>, behaviour_count: usize) -> Self {
        Self {
            uuid,
            name: name.into(),
            relationships: HashMap::new(),
            perceptions: vec![0.0; behaviour_count],
        }
    }

    /// Weight of the edge `self -> target`, if one exists
    pub fn relationship_to(&self, target: BeliefId) -> Option<f64> {
        self.relationships.get(&target).copied()
    }

    pub fn perception_of(&self, behaviour: BehaviourId) -> f64 {
        self.perceptions.get(behaviour.index()).copied().unwrap_or(0.0)
    }
}

impl PartialEq for Belief {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for Belief {}

impl std::hash::Hash for Belief {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}
