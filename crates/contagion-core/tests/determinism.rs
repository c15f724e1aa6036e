//! Determinism verification tests
//!
//! Tests to ensure a run produces identical output given the same seed,
//! whether the activation phase runs sequentially or on the rayon pool.

use contagion_core::{link, RunConfig, Runner, SimRng, SimulationOutput, Tuning};
use contagion_specs::fixtures;
use rand::Rng;

fn run_village(config: RunConfig) -> SimulationOutput {
    let sample = fixtures::village();
    let population = link(&sample.behaviours, &sample.beliefs, &sample.agents).unwrap();
    Runner::new(population, config).unwrap().run().unwrap()
}

fn parallel_tuning() -> Tuning {
    let mut tuning = Tuning::default();
    tuning.activation.parallel = true;
    tuning
}

/// Test that SimRng produces identical sequences with the same seed
#[test]
fn test_rng_determinism() {
    let mut rng1 = SimRng::seed_from_u64(42);
    let mut rng2 = SimRng::seed_from_u64(42);

    let values1: Vec<f64> = (0..100).map(|_| rng1.0.gen()).collect();
    let values2: Vec<f64> = (0..100).map(|_| rng2.0.gen()).collect();

    assert_eq!(values1, values2, "RNG sequences should be identical with same seed");
}

/// Test that identical seeds give byte-identical serialized output
#[test]
fn test_same_seed_same_output() {
    let first = run_village(RunConfig::new(1, 25, 2024).with_full_output(true));
    let second = run_village(RunConfig::new(1, 25, 2024).with_full_output(true));

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap(),
        "Full output should be identical with same seed"
    );
}

/// Test that summaries are also reproducible
#[test]
fn test_same_seed_same_summary() {
    let first = run_village(RunConfig::new(1, 25, 99));
    let second = run_village(RunConfig::new(1, 25, 99));

    assert_eq!(first, second);
}

/// Test that different seeds lead to different action histories
#[test]
fn test_different_seeds_diverge() {
    let outputs: Vec<String> = (0..5)
        .map(|seed| {
            let output = run_village(RunConfig::new(1, 40, seed).with_full_output(true));
            serde_json::to_string(&output).unwrap()
        })
        .collect();

    assert!(
        outputs.iter().any(|o| o != &outputs[0]),
        "Different seeds should produce different runs"
    );
}

/// Test that the parallel activation phase does not change results
#[test]
fn test_parallel_matches_sequential() {
    let sequential = run_village(RunConfig::new(1, 30, 7).with_full_output(true));
    let parallel = run_village(
        RunConfig::new(1, 30, 7)
            .with_full_output(true)
            .with_tuning(parallel_tuning()),
    );

    assert_eq!(sequential, parallel);
}
