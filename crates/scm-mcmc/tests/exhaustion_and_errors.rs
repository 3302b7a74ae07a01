use scm_complex::{Configuration, SequencePair};
use scm_core::errors::ScmError;
use scm_core::VertexId;
use scm_mcmc::{run_from, sample, RejectionConfig, RunConfig};

fn vertices(raw: &[u64]) -> Vec<VertexId> {
    raw.iter().copied().map(VertexId::from_raw).collect()
}

#[test]
fn unrealizable_pair_exhausts_the_attempt_budget() {
    // Both facets must be 2-subsets of the same two vertices, so every
    // matching yields duplicate facets. Feasible by counting, never valid.
    let pair = SequencePair::new(vec![2, 2], vec![2, 2]).unwrap();
    let rejection = RejectionConfig { max_attempts: 64 };
    let err = sample(&pair, &rejection, 0).unwrap_err();
    match err {
        ScmError::SamplingExhausted(info) => {
            assert_eq!(info.code, "attempts-exhausted");
            assert_eq!(info.context.get("attempts"), Some(&"64".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_attempt_budget_is_a_config_error() {
    let pair = SequencePair::new(vec![1, 1], vec![2]).unwrap();
    let rejection = RejectionConfig { max_attempts: 0 };
    let err = sample(&pair, &rejection, 0).unwrap_err();
    assert_eq!(err.info().code, "empty-attempt-budget");
}

#[test]
fn zero_thinning_is_rejected_before_running() {
    let pair = SequencePair::new(vec![2, 2, 1, 2, 1], vec![3, 3, 2]).unwrap();
    let config = RunConfig {
        thinning: 0,
        ..RunConfig::default()
    };
    let err = scm_mcmc::run(&config, 1, &pair).unwrap_err();
    assert_eq!(err.info().code, "zero-thinning");
}

#[test]
fn invalid_start_state_is_an_internal_defect() {
    // Nested facets: the supplied start state was never valid.
    let initial = Configuration::new(
        vec![2, 2, 1],
        vec![3, 2],
        vec![vertices(&[0, 1, 2]), vertices(&[0, 1])],
    )
    .unwrap();
    let err = run_from(&RunConfig::default(), 1, initial).unwrap_err();
    match err {
        ScmError::InvariantViolation(info) => assert_eq!(info.code, "nested-facet"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn burn_in_and_thinning_accounting() {
    let pair = SequencePair::new(vec![2, 2, 1, 2, 1], vec![3, 3, 2]).unwrap();
    let config = RunConfig {
        num_samples: 4,
        burn_in: 3,
        thinning: 2,
        ..RunConfig::default()
    };
    let summary = scm_mcmc::run(&config, 5, &pair).unwrap();

    assert_eq!(summary.proposed, 3 + 2 * 4);
    let steps: Vec<usize> = summary.samples.iter().map(|record| record.step).collect();
    assert_eq!(steps, vec![5, 7, 9, 11]);
}
