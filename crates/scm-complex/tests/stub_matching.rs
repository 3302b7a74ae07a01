use scm_complex::{canonical_hash, check, random_configuration, SequencePair};
use scm_core::rng::RngHandle;

fn toy_pair() -> SequencePair {
    SequencePair::new(vec![2, 2, 1, 2, 1], vec![3, 3, 2]).unwrap()
}

#[test]
fn matching_is_deterministic_per_seed() {
    let pair = toy_pair();
    let mut rng_a = RngHandle::from_seed(17);
    let mut rng_b = RngHandle::from_seed(17);

    let config_a = random_configuration(&pair, &mut rng_a);
    let config_b = random_configuration(&pair, &mut rng_b);

    assert_eq!(config_a, config_b);
    assert_eq!(canonical_hash(&config_a), canonical_hash(&config_b));
}

#[test]
fn raw_draws_respect_the_matching_marginals() {
    let pair = toy_pair();
    for seed in 0..64u64 {
        let mut rng = RngHandle::from_seed(seed);
        let config = random_configuration(&pair, &mut rng);

        assert_eq!(config.num_facets(), pair.num_facets());
        for (idx, facet) in config.facet_ids().into_iter().enumerate() {
            let content = config.facet(facet).unwrap();
            // Duplicate landings collapse, so a facet never exceeds its
            // target and every member index is in range.
            assert!(content.len() <= pair.sizes()[idx]);
            assert!(!content.is_empty());
            for member in content {
                assert!((member.as_raw() as usize) < pair.num_vertices());
            }
        }
        let realized = config.realized_degrees();
        for (vertex, &target) in pair.degrees().iter().enumerate() {
            assert!(realized[vertex] <= target);
        }
    }
}

#[test]
fn accepted_draws_realize_the_targets_exactly() {
    let pair = toy_pair();
    let mut accepted = 0usize;
    for seed in 0..128u64 {
        let mut rng = RngHandle::from_seed(seed);
        let config = random_configuration(&pair, &mut rng);
        if check(&config).is_none() {
            accepted += 1;
            assert_eq!(config.realized_degrees(), pair.degrees());
            for (idx, facet) in config.facet_ids().into_iter().enumerate() {
                assert_eq!(config.facet(facet).unwrap().len(), pair.sizes()[idx]);
            }
        }
    }
    assert!(accepted > 0, "no seed out of 128 produced a valid draw");
}
