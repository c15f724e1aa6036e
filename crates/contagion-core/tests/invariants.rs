//! Property tests over randomly generated populations

use contagion_core::{link, RunConfig, Runner, SimulationOutput};
use contagion_specs::fixtures::{self, SamplePopulation};
use contagion_specs::{AgentSpec, BehaviourSpec, BeliefSpec};
use proptest::prelude::*;
use std::collections::BTreeMap;
use uuid::Uuid;

fn behaviour_uuid(i: usize) -> Uuid {
    Uuid::from_u128(0xb000 + i as u128)
}

fn belief_uuid(i: usize) -> Uuid {
    Uuid::from_u128(0xe000 + i as u128)
}

fn agent_uuid(i: usize) -> Uuid {
    Uuid::from_u128(0xa000 + i as u128)
}

/// Lay out a population from flat weight and delta pools. Friend ties with a
/// weight below 0.3 in magnitude are dropped, so some agents end up friendless.
fn build(n_agents: usize, n_beliefs: usize, n_behaviours: usize, weights: &[f64], deltas: &[f64]) -> SamplePopulation {
    let mut pool = weights.iter().copied();
    let mut next = move || pool.next().unwrap_or(0.0);

    let behaviours = (0..n_behaviours)
        .map(|j| BehaviourSpec::new(behaviour_uuid(j), format!("behaviour-{}", j)))
        .collect();

    let beliefs = (0..n_beliefs)
        .map(|i| {
            let mut belief = BeliefSpec::new(belief_uuid(i), format!("belief-{}", i));
            for k in (0..n_beliefs).filter(|&k| k != i) {
                belief = belief.with_relationship(belief_uuid(k), next());
            }
            for j in 0..n_behaviours {
                belief = belief.with_perception(behaviour_uuid(j), next());
            }
            belief
        })
        .collect();

    let agents = (0..n_agents)
        .map(|a| {
            let mut agent = AgentSpec::new(agent_uuid(a))
                .with_activations((0..n_beliefs).map(|i| (belief_uuid(i), next())).collect::<Vec<_>>());
            for i in 0..n_beliefs {
                agent = agent.with_delta(belief_uuid(i), deltas[a * n_beliefs + i]);
                for j in 0..n_behaviours {
                    agent = agent.with_performance(belief_uuid(i), behaviour_uuid(j), next());
                }
            }
            for f in (0..n_agents).filter(|&f| f != a) {
                let weight = next();
                if weight.abs() >= 0.3 {
                    agent = agent.with_friend(agent_uuid(f), weight);
                }
            }
            agent
        })
        .collect();

    SamplePopulation {
        behaviours,
        beliefs,
        agents,
    }
}

fn population_strategy() -> impl Strategy<Value = SamplePopulation> {
    (1usize..7, 1usize..4, 1usize..4)
        .prop_flat_map(|(n_agents, n_beliefs, n_behaviours)| {
            let n_weights = n_beliefs * n_beliefs
                + n_beliefs * n_behaviours
                + n_agents * n_beliefs
                + n_agents * n_beliefs * n_behaviours
                + n_agents * n_agents;
            (
                Just((n_agents, n_beliefs, n_behaviours)),
                prop::collection::vec(-1.0f64..=1.0, n_weights),
                prop::collection::vec(0.0f64..1.5, n_agents * n_beliefs),
            )
        })
        .prop_map(|((n_agents, n_beliefs, n_behaviours), weights, deltas)| {
            build(n_agents, n_beliefs, n_behaviours, &weights, &deltas)
        })
}

fn run_full(sample: &SamplePopulation, end: usize, seed: u64) -> Vec<AgentSpec> {
    let population = link(&sample.behaviours, &sample.beliefs, &sample.agents).unwrap();
    let config = RunConfig::new(1, end, seed).with_full_output(true);
    match Runner::new(population, config).unwrap().run().unwrap() {
        SimulationOutput::Full(agents) => agents,
        SimulationOutput::Summary(_) => panic!("Expected full output"),
    }
}

proptest! {
    #[test]
    fn activations_stay_clamped(sample in population_strategy(), seed in 0_u64..10_000) {
        for agent in run_full(&sample, 12, seed) {
            for snapshot in &agent.activations {
                for &value in snapshot.values() {
                    prop_assert!((-1.0..=1.0).contains(&value), "activation {} out of range", value);
                }
            }
        }
    }

    #[test]
    fn one_known_action_per_timestep(sample in population_strategy(), seed in 0_u64..10_000) {
        let known: Vec<Uuid> = sample.behaviours.iter().map(|b| b.uuid).collect();
        for agent in run_full(&sample, 10, seed) {
            prop_assert_eq!(agent.actions.len(), 10);
            prop_assert_eq!(agent.activations.len(), 10);
            for action in &agent.actions {
                prop_assert!(known.contains(action));
            }
        }
    }

    #[test]
    fn friendless_agents_only_decay(sample in population_strategy(), seed in 0_u64..10_000) {
        let agents = run_full(&sample, 8, seed);
        for (spec, agent) in sample.agents.iter().zip(&agents) {
            if !spec.friends.is_empty() {
                continue;
            }
            for t in 1..agent.activations.len() {
                for (belief, &value) in &agent.activations[t] {
                    let previous = agent.activations[t - 1][belief];
                    let expected = (spec.deltas[belief] * previous).clamp(-1.0, 1.0);
                    prop_assert_eq!(value, expected);
                }
            }
        }
    }

    #[test]
    fn summary_matches_recomputed_statistics(sample in population_strategy(), seed in 0_u64..10_000) {
        check_summary(&sample, seed)?;
    }
}

/// Compare every summary record with statistics recomputed from the full
/// output of the same run
fn check_summary(sample: &SamplePopulation, seed: u64) -> Result<(), TestCaseError> {
    let agents = run_full(sample, 6, seed);
    let population = link(&sample.behaviours, &sample.beliefs, &sample.agents).unwrap();
    let output = Runner::new(population, RunConfig::new(1, 6, seed)).unwrap().run().unwrap();

    let SimulationOutput::Summary(records) = output else {
        panic!("Expected summary output");
    };
    prop_assert_eq!(records.len(), 5);

    for (record, time) in records.iter().zip(1..6) {
        let mut performers: BTreeMap<Uuid, u64> = BTreeMap::new();
        for agent in &agents {
            *performers.entry(agent.actions[time]).or_insert(0) += 1;
        }
        prop_assert_eq!(&record.n_performers, &performers);

        for belief in &sample.beliefs {
            let values: Vec<f64> = agents.iter().map(|a| a.activations[time][&belief.uuid]).collect();
            let expected = recompute(&values);

            prop_assert!((record.mean_activations[&belief.uuid] - expected.mean).abs() < 1e-9);
            prop_assert!((record.sd_activations[&belief.uuid] - expected.sd).abs() < 1e-9);
            prop_assert!((record.median_activations[&belief.uuid] - expected.median).abs() < 1e-9);
            prop_assert_eq!(record.nonzero_activations.get(&belief.uuid).copied(), expected.nonzero);
        }
    }
    Ok(())
}

struct Expected {
    mean: f64,
    sd: f64,
    median: f64,
    nonzero: Option<u64>,
}

/// Statistics for one belief column, computed independently of the engine
fn recompute(values: &[f64]) -> Expected {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sd = if values.len() < 2 {
        0.0
    } else {
        (values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1.0)).sqrt()
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let half = sorted.len() / 2;
    let median = if sorted.len() % 2 == 1 {
        sorted[half]
    } else {
        (sorted[half - 1] + sorted[half]) * 0.5
    };

    let nonzero = values.iter().filter(|v| **v != 0.0).count() as u64;
    Expected {
        mean,
        sd,
        median,
        nonzero: (nonzero > 0).then_some(nonzero),
    }
}

#[test]
fn test_summary_even_agent_count() {
    // Drop a5, whom nobody befriends, leaving four agents
    let mut sample = fixtures::village();
    sample.agents.pop();

    assert!((recompute(&[0.4, -0.2, 0.0, 0.8]).median - 0.2).abs() < 1e-12);
    for seed in [1, 17, 256] {
        check_summary(&sample, seed).unwrap();
    }
}
