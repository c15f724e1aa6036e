//! Action Systems
//!
//! Scoring behaviours from learned belief weights and choosing one per agent.

pub mod score;
pub mod select;

pub use score::score_behaviours;
pub use select::{choose_behaviour, perform_actions, seed_actions, select_action};
