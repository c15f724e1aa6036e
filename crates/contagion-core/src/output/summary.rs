//! Summary Statistics
//!
//! Reduces every agent's state at one tick to population statistics per
//! belief (mean, sample standard deviation, median, nonzero count) and a
//! histogram of chosen behaviours.
//!
//! With no agents every map is empty. With a single agent the sample
//! standard deviation is reported as 0.0.

use contagion_specs::SummarySpec;
use std::collections::BTreeMap;

use crate::components::Population;
use crate::runner::RunError;

/// Arithmetic mean; `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation with `n - 1` in the denominator; 0.0 for fewer
/// than two values
pub fn sample_sd(values: &[f64], mean: f64) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (squares / (values.len() - 1) as f64).sqrt()
}

/// Median; the mean of the two central values for an even count
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Population statistics at `time`
pub fn summarize_tick(population: &Population, time: usize) -> Result<SummarySpec, RunError> {
    let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(population.agents.len()); population.beliefs.len()];
    let mut n_performers: BTreeMap<_, u64> = BTreeMap::new();

    for agent in &population.agents {
        let snapshot = agent.activations_at(time).ok_or(RunError::MissingActivations {
            agent: agent.uuid,
            time,
        })?;
        for (column, &value) in columns.iter_mut().zip(snapshot) {
            column.push(value);
        }

        let action = agent.action_at(time).ok_or(RunError::MissingAction {
            agent: agent.uuid,
            time,
        })?;
        *n_performers.entry(population.behaviour(action).uuid).or_insert(0) += 1;
    }

    let mut summary = SummarySpec {
        n_performers,
        ..SummarySpec::default()
    };

    for (belief, values) in population.beliefs.iter().zip(&columns) {
        let Some(average) = mean(values) else {
            continue;
        };
        summary.mean_activations.insert(belief.uuid, average);
        summary.sd_activations.insert(belief.uuid, sample_sd(values, average));
        if let Some(middle) = median(values) {
            summary.median_activations.insert(belief.uuid, middle);
        }

        let nonzero = values.iter().filter(|&&v| v != 0.0).count() as u64;
        if nonzero > 0 {
            summary.nonzero_activations.insert(belief.uuid, nonzero);
        }
    }

    Ok(summary)
}
