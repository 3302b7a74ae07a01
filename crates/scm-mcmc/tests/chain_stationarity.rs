use std::collections::{BTreeMap, BTreeSet};

use scm_complex::{check, SequencePair};
use scm_mcmc::{run, sample, RejectionConfig, RunConfig};

fn toy_pair() -> SequencePair {
    SequencePair::new(vec![2, 2, 1, 2, 1], vec![3, 3, 2]).unwrap()
}

#[test]
fn chain_reproduces_the_rejection_distribution() {
    let pair = toy_pair();

    // Reference support from independent rejection draws.
    let rejection = RejectionConfig::default();
    let mut reference: BTreeSet<String> = BTreeSet::new();
    for seed in 0..500u64 {
        reference.insert(sample(&pair, &rejection, seed).unwrap().hash);
    }
    assert_eq!(reference.len(), 12);

    // A generously burned-in and thinned chain over the same pair.
    let config = RunConfig {
        num_samples: 3000,
        burn_in: 500,
        thinning: 10,
        ..RunConfig::default()
    };
    let summary = run(&config, 7, &pair).unwrap();
    assert_eq!(summary.samples.len(), 3000);

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in &summary.samples {
        assert_eq!(check(&record.configuration), None);
        *counts.entry(record.hash.clone()).or_insert(0) += 1;
    }

    let visited: BTreeSet<String> = counts.keys().cloned().collect();
    assert_eq!(visited, reference, "chain support differs from rejection support");

    let mean = summary.samples.len() as f64 / counts.len() as f64;
    for (hash, count) in &counts {
        let ratio = *count as f64 / mean;
        assert!(
            (0.5..=1.5).contains(&ratio),
            "instance {hash} emitted {count} times (ratio {ratio:.3})"
        );
    }

    // The chain actually moved.
    assert!(summary.accepted > 0);
    assert!(summary.coverage.unique_state_hashes == 12);
    assert!(summary.coverage.average_jaccard < 1.0);
}
