//! Population Setup
//!
//! Reading input documents and linking them into a population.

pub mod load;
pub mod link;

pub use load::*;
pub use link::*;
