//! Population Linking
//!
//! Builds the population in two phases. Phase one creates every behaviour,
//! belief and agent with empty relationship containers; phase two resolves
//! belief edges and friendships through per-kind uuid tables. Both graphs
//! may be cyclic, which is why edges wait until every entity exists.

use std::collections::HashMap;
use std::fmt;

use contagion_specs::{AgentSpec, BehaviourSpec, BeliefSpec};
use thiserror::Error;
use uuid::Uuid;

use crate::components::{Agent, AgentId, Behaviour, BehaviourId, Belief, BeliefId, Population};

/// Kind of entity a uuid refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Behaviour,
    Belief,
    Agent,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Behaviour => write!(f, "behaviour"),
            EntityKind::Belief => write!(f, "belief"),
            EntityKind::Agent => write!(f, "agent"),
        }
    }
}

/// Fatal data errors found while linking
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinkError {
    #[error("duplicate {kind} uuid {uuid}")]
    DuplicateId { kind: EntityKind, uuid: Uuid },

    #[error("unknown {kind} {uuid} referenced by {referenced_by}")]
    UnknownReference {
        kind: EntityKind,
        uuid: Uuid,
        referenced_by: Uuid,
    },

    #[error("agent {agent} has no delta for belief {belief}")]
    MissingDelta { agent: Uuid, belief: Uuid },

    #[error("agent {agent} has no performance weight for belief {belief} and behaviour {behaviour}")]
    MissingPerformance {
        agent: Uuid,
        belief: Uuid,
        behaviour: Uuid,
    },
}

/// Uuid -> arena position for one entity kind
struct UuidTable {
    kind: EntityKind,
    index: HashMap<Uuid, usize>,
}

impl UuidTable {
    fn build(kind: EntityKind, uuids: impl Iterator<Item = Uuid>) -> Result<Self, LinkError> {
        let mut index = HashMap::new();
        for (position, uuid) in uuids.enumerate() {
            if index.insert(uuid, position).is_some() {
                return Err(LinkError::DuplicateId { kind, uuid });
            }
        }
        Ok(Self { kind, index })
    }

    fn resolve(&self, uuid: &Uuid, referenced_by: Uuid) -> Result<usize, LinkError> {
        self.index
            .get(uuid)
            .copied()
            .ok_or(LinkError::UnknownReference {
                kind: self.kind,
                uuid: *uuid,
                referenced_by,
            })
    }
}

/// Resolve the three input documents into a fully linked population.
///
/// Activation snapshots are densified: any belief a snapshot omits is
/// recorded as 0.0. Every agent must carry a delta for every belief and a
/// performance weight for every belief/behaviour pair.
pub fn link(
    behaviours: &[BehaviourSpec],
    beliefs: &[BeliefSpec],
    agents: &[AgentSpec],
) -> Result<Population, LinkError> {
    let behaviour_table = UuidTable::build(EntityKind::Behaviour, behaviours.iter().map(|b| b.uuid))?;
    let belief_table = UuidTable::build(EntityKind::Belief, beliefs.iter().map(|b| b.uuid))?;
    let agent_table = UuidTable::build(EntityKind::Agent, agents.iter().map(|a| a.uuid))?;

    // Phase 1: entities without cross-entity edges
    let behaviour_entities: Vec<Behaviour> = behaviours
        .iter()
        .map(|spec| Behaviour::new(spec.uuid, spec.name.clone()))
        .collect();

    let mut belief_entities = beliefs
        .iter()
        .map(|spec| build_belief(spec, &behaviour_table, behaviours.len()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut agent_entities = agents
        .iter()
        .map(|spec| build_agent(spec, behaviours, beliefs, &behaviour_table, &belief_table))
        .collect::<Result<Vec<_>, _>>()?;

    // Phase 2: belief edges and friendships
    for (belief, spec) in belief_entities.iter_mut().zip(beliefs) {
        for (target, weight) in &spec.relationships {
            let target = belief_table.resolve(target, spec.uuid)?;
            belief.relationships.insert(BeliefId(target), *weight);
        }
    }

    for (agent, spec) in agent_entities.iter_mut().zip(agents) {
        for (friend, weight) in &spec.friends {
            let friend = agent_table.resolve(friend, spec.uuid)?;
            agent.friends.push((AgentId(friend), *weight));
        }
    }

    tracing::debug!(
        behaviours = behaviour_entities.len(),
        beliefs = belief_entities.len(),
        agents = agent_entities.len(),
        "Linked population"
    );

    Ok(Population::new(behaviour_entities, belief_entities, agent_entities))
}

fn build_belief(
    spec: &BeliefSpec,
    behaviour_table: &UuidTable,
    behaviour_count: usize,
) -> Result<Belief, LinkError> {
    let mut belief = Belief::new(spec.uuid, spec.name.clone(), behaviour_count);
    for (behaviour, weight) in &spec.perceptions {
        let behaviour = behaviour_table.resolve(behaviour, spec.uuid)?;
        belief.perceptions[behaviour] = *weight;
    }
    Ok(belief)
}

fn build_agent(
    spec: &AgentSpec,
    behaviours: &[BehaviourSpec],
    beliefs: &[BeliefSpec],
    behaviour_table: &UuidTable,
    belief_table: &UuidTable,
) -> Result<Agent, LinkError> {
    let mut deltas: Vec<Option<f64>> = vec![None; beliefs.len()];
    for (belief, delta) in &spec.deltas {
        deltas[belief_table.resolve(belief, spec.uuid)?] = Some(*delta);
    }

    let mut performance: Vec<Vec<Option<f64>>> = vec![vec![None; behaviours.len()]; beliefs.len()];
    for (belief, weights) in &spec.performance_relationships {
        let belief = belief_table.resolve(belief, spec.uuid)?;
        for (behaviour, weight) in weights {
            performance[belief][behaviour_table.resolve(behaviour, spec.uuid)?] = Some(*weight);
        }
    }

    let mut activations = Vec::with_capacity(spec.activations.len());
    for snapshot in &spec.activations {
        let mut dense = vec![0.0; beliefs.len()];
        for (belief, value) in snapshot {
            let belief = belief_table.resolve(belief, spec.uuid)?;
            let clamped = value.clamp(-1.0, 1.0);
            if clamped != *value {
                tracing::warn!(agent = %spec.uuid, value, "Clamping out-of-range input activation");
            }
            dense[belief] = clamped;
        }
        activations.push(dense);
    }

    let actions = spec
        .actions
        .iter()
        .map(|behaviour| behaviour_table.resolve(behaviour, spec.uuid).map(BehaviourId))
        .collect::<Result<Vec<_>, _>>()?;

    let deltas = deltas
        .into_iter()
        .zip(beliefs)
        .map(|(delta, belief)| {
            delta.ok_or(LinkError::MissingDelta {
                agent: spec.uuid,
                belief: belief.uuid,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let performance = performance
        .into_iter()
        .zip(beliefs)
        .map(|(row, belief)| {
            row.into_iter()
                .zip(behaviours)
                .map(|(weight, behaviour)| {
                    weight.ok_or(LinkError::MissingPerformance {
                        agent: spec.uuid,
                        belief: belief.uuid,
                        behaviour: behaviour.uuid,
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Agent::new(spec.uuid, deltas, performance, activations, actions))
}
