//! Summary Records
//!
//! Per-tick population statistics emitted in summary output mode.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Population statistics for a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummarySpec {
    /// Arithmetic mean activation per belief
    pub mean_activations: BTreeMap<Uuid, f64>,
    /// Sample standard deviation (n - 1) per belief
    pub sd_activations: BTreeMap<Uuid, f64>,
    pub median_activations: BTreeMap<Uuid, f64>,
    /// Number of agents whose activation is not exactly zero
    pub nonzero_activations: BTreeMap<Uuid, u64>,
    /// Number of agents performing each behaviour; unchosen behaviours are absent
    pub n_performers: BTreeMap<Uuid, u64>,
}
