use std::collections::BTreeMap;

use scm_complex::{check, SequencePair};
use scm_mcmc::{sample, RejectionConfig};

// The toy pair d=(2,2,1,2,1), s=(3,3,2) admits exactly 12 distinct valid
// complexes up to facet order, each realized by the same number of labeled
// configurations, so the canonical-hash histogram must come out flat.

fn toy_pair() -> SequencePair {
    SequencePair::new(vec![2, 2, 1, 2, 1], vec![3, 3, 2]).unwrap()
}

#[test]
fn accepted_draws_are_valid_and_realize_targets() {
    let pair = toy_pair();
    let rejection = RejectionConfig::default();
    for seed in 0..32u64 {
        let outcome = sample(&pair, &rejection, seed).unwrap();
        assert_eq!(check(&outcome.configuration), None);
        assert_eq!(outcome.configuration.realized_degrees(), pair.degrees());
    }
}

#[test]
fn draw_frequencies_are_flat_over_the_enumerable_instance() {
    let pair = toy_pair();
    let rejection = RejectionConfig::default();
    let draws = 3000usize;

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for seed in 0..draws as u64 {
        let outcome = sample(&pair, &rejection, seed).unwrap();
        *counts.entry(outcome.hash).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 12, "support should cover all 12 instances");
    let mean = draws as f64 / counts.len() as f64;
    for (hash, count) in &counts {
        let ratio = *count as f64 / mean;
        assert!(
            (0.7..=1.3).contains(&ratio),
            "instance {hash} drawn {count} times (ratio {ratio:.3})"
        );
    }
}
