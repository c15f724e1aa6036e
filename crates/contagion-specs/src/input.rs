//! Input Documents
//!
//! Behaviour, belief and agent documents as handed over by the loader.
//! Every cross-reference is a UUID; resolution happens in the core crate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// An observable behaviour an agent can perform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviourSpec {
    #[serde(alias = "id")]
    pub uuid: Uuid,
    pub name: String,
}

impl BehaviourSpec {
    pub fn new(uuid: Uuid, name: impl Into<String>) -> Self {
        Self {
            uuid,
            name: name.into(),
        }
    }
}

/// A belief together with its outgoing belief edges and behaviour perceptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeliefSpec {
    #[serde(alias = "id")]
    pub uuid: Uuid,
    pub name: String,
    /// Directed, signed edges to other beliefs (target uuid -> weight)
    #[serde(default)]
    pub relationships: BTreeMap<Uuid, f64>,
    /// How strongly performing a behaviour signals support for this belief
    #[serde(default)]
    pub perceptions: BTreeMap<Uuid, f64>,
}

impl BeliefSpec {
    pub fn new(uuid: Uuid, name: impl Into<String>) -> Self {
        Self {
            uuid,
            name: name.into(),
            relationships: BTreeMap::new(),
            perceptions: BTreeMap::new(),
        }
    }

    /// Add a directed edge to another belief
    pub fn with_relationship(mut self, target: Uuid, weight: f64) -> Self {
        self.relationships.insert(target, weight);
        self
    }

    /// Add a perception weight toward a behaviour
    pub fn with_perception(mut self, behaviour: Uuid, weight: f64) -> Self {
        self.perceptions.insert(behaviour, weight);
        self
    }
}

/// An agent with its pre-seeded histories.
///
/// `activations[t]` and `actions[t]` hold the state at timestep `t`. The same
/// shape is used for full output, with histories extended through the end of
/// the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    #[serde(alias = "id")]
    pub uuid: Uuid,
    #[serde(default)]
    pub actions: Vec<Uuid>,
    #[serde(default)]
    pub activations: Vec<BTreeMap<Uuid, f64>>,
    #[serde(default)]
    pub deltas: BTreeMap<Uuid, f64>,
    #[serde(default)]
    pub friends: BTreeMap<Uuid, f64>,
    #[serde(default)]
    pub performance_relationships: BTreeMap<Uuid, BTreeMap<Uuid, f64>>,
}

impl AgentSpec {
    pub fn new(uuid: Uuid) -> Self {
        Self {
            uuid,
            actions: Vec::new(),
            activations: Vec::new(),
            deltas: BTreeMap::new(),
            friends: BTreeMap::new(),
            performance_relationships: BTreeMap::new(),
        }
    }

    pub fn with_friend(mut self, friend: Uuid, weight: f64) -> Self {
        self.friends.insert(friend, weight);
        self
    }

    pub fn with_delta(mut self, belief: Uuid, delta: f64) -> Self {
        self.deltas.insert(belief, delta);
        self
    }

    pub fn with_performance(mut self, belief: Uuid, behaviour: Uuid, weight: f64) -> Self {
        self.performance_relationships
            .entry(belief)
            .or_default()
            .insert(behaviour, weight);
        self
    }

    /// Append one pre-seeded activation snapshot
    pub fn with_activations(mut self, snapshot: impl IntoIterator<Item = (Uuid, f64)>) -> Self {
        self.activations.push(snapshot.into_iter().collect());
        self
    }

    /// Append one pre-seeded action
    pub fn with_action(mut self, behaviour: Uuid) -> Self {
        self.actions.push(behaviour);
        self
    }
}
