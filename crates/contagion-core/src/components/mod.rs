//! Entity Components
//!
//! Behaviours, beliefs, agents, and the population arena that owns them.

pub mod ids;
pub mod behaviour;
pub mod belief;
pub mod agent;
pub mod population;

pub use ids::*;
pub use behaviour::*;
pub use belief::*;
pub use agent::*;
pub use population::*;
