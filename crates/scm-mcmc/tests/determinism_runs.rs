use scm_complex::SequencePair;
use scm_mcmc::{run, sample, RejectionConfig, RunConfig};

fn toy_pair() -> SequencePair {
    SequencePair::new(vec![2, 2, 1, 2, 1], vec![3, 3, 2]).unwrap()
}

fn deterministic_config() -> RunConfig {
    RunConfig {
        num_samples: 8,
        burn_in: 10,
        thinning: 3,
        ..RunConfig::default()
    }
}

#[test]
fn repeated_chain_runs_with_same_seed_match() {
    let pair = toy_pair();
    let config = deterministic_config();

    let summary_a = run(&config, 2024, &pair).unwrap();
    let summary_b = run(&config, 2024, &pair).unwrap();

    assert_eq!(summary_a, summary_b);
    assert_eq!(summary_a.samples.len(), 8);
}

#[test]
fn repeated_rejection_draws_with_same_seed_match() {
    let pair = toy_pair();
    let rejection = RejectionConfig::default();

    let outcome_a = sample(&pair, &rejection, 99).unwrap();
    let outcome_b = sample(&pair, &rejection, 99).unwrap();

    assert_eq!(outcome_a, outcome_b);
    assert!(outcome_a.attempts >= 1);
}
