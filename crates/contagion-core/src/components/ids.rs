//! Entity Indices
//!
//! Typed positions into the population arenas. An index is only meaningful
//! for the population that issued it.

use std::fmt;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub usize);

        impl $name {
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0)
            }
        }
    };
}

arena_id!(
    /// Position of a behaviour in input order
    BehaviourId
);
arena_id!(
    /// Position of a belief in input order
    BeliefId
);
arena_id!(
    /// Position of an agent in input order
    AgentId
);
