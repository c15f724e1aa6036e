//! Input and output documents for the belief contagion simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod input;
pub mod summary;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

pub use input::{AgentSpec, BehaviourSpec, BeliefSpec};
pub use summary::SummarySpec;
