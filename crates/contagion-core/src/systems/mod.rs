//! Simulation Systems
//!
//! The two per-tick phases: activation updates, then action selection.

pub mod activation;
pub mod action;

// Re-export commonly used systems
pub use activation::{
    activation_change, actions_of_friends, contextualize, next_activations, perceive_beliefs,
    pressure, weighted_relationship,
};
pub use action::{choose_behaviour, perform_actions, score_behaviours, seed_actions, select_action};
