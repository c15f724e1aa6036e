//! Sample input documents for testing.
//!
//! This module provides ready-made populations for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // contagion-specs = { path = "../contagion-specs", features = ["test-fixtures"] }
//!
//! use contagion_specs::fixtures;
//!
//! let population = fixtures::village();
//! ```

use uuid::Uuid;

use crate::{AgentSpec, BehaviourSpec, BeliefSpec};

/// The three input documents for one population
#[derive(Debug, Clone)]
pub struct SamplePopulation {
    pub behaviours: Vec<BehaviourSpec>,
    pub beliefs: Vec<BeliefSpec>,
    pub agents: Vec<AgentSpec>,
}

/// Two mutual friends, one belief `B`, one behaviour `H`.
///
/// Both agents start at activation 0.0 with action `H` at timestep 0,
/// `deltas[B] = 0.5` and `B.perceptions[H] = 1.0`.
pub fn two_friends() -> SamplePopulation {
    SamplePopulation {
        behaviours: parse(include_str!("../tests/fixtures/two_friends_behaviours.json")),
        beliefs: parse(include_str!("../tests/fixtures/two_friends_beliefs.json")),
        agents: parse(include_str!("../tests/fixtures/two_friends_agents.json")),
    }
}

/// Five agents, three beliefs, three behaviours.
///
/// Contains:
/// - directed belief edges, including one pair with opposite signs
/// - a negative friend tie (agent a2 -> a3)
/// - agent a5 with no friends
/// - snapshots that omit some beliefs, exercising the fill pass
/// - no pre-seeded actions
pub fn village() -> SamplePopulation {
    SamplePopulation {
        behaviours: parse(include_str!("../tests/fixtures/village_behaviours.json")),
        beliefs: parse(include_str!("../tests/fixtures/village_beliefs.json")),
        agents: parse(include_str!("../tests/fixtures/village_agents.json")),
    }
}

/// Uuid used by the fixture files for a short hex tag such as `"a1"` or `"e2"`
pub fn fixture_uuid(tag: &str) -> Uuid {
    let value = u128::from_str_radix(tag, 16)
        .unwrap_or_else(|e| panic!("Invalid fixture tag {}: {}", tag, e));
    Uuid::from_u128(value)
}

fn parse<T: serde::de::DeserializeOwned>(json: &str) -> T {
    serde_json::from_str(json).unwrap_or_else(|e| panic!("Failed to parse fixture: {}", e))
}
