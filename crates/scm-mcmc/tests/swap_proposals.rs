use scm_complex::{check, swap_pair, Configuration, SequencePair};
use scm_core::rng::RngHandle;
use scm_core::VertexId;
use scm_mcmc::{propose_swap, sample, RejectionConfig};

fn vertices(raw: &[u64]) -> Vec<VertexId> {
    raw.iter().copied().map(VertexId::from_raw).collect()
}

fn toy_state() -> Configuration {
    let pair = SequencePair::new(vec![2, 2, 1, 2, 1], vec![3, 3, 2]).unwrap();
    sample(&pair, &RejectionConfig::default(), 1)
        .unwrap()
        .configuration
}

#[test]
fn proposal_probabilities_are_symmetric() {
    let state = toy_state();
    let mut rng = RngHandle::from_seed(11);
    let proposal = propose_swap(&state, &mut rng, 64).unwrap();
    assert!((proposal.forward_prob - proposal.reverse_prob).abs() < 1e-12);
    assert!(proposal.forward_prob > 0.0);
}

#[test]
fn valid_proposals_are_self_inverse() {
    let state = toy_state();
    let mut undone = 0usize;
    for seed in 0..20u64 {
        let mut rng = RngHandle::from_seed(seed);
        let proposal = propose_swap(&state, &mut rng, 64).unwrap();
        if check(&proposal.candidate).is_none() {
            let mut reverted = proposal.candidate.clone();
            swap_pair(
                &mut reverted,
                proposal.facet_a,
                proposal.vertex_b,
                proposal.facet_b,
                proposal.vertex_a,
            )
            .unwrap();
            assert_eq!(reverted, state);
            undone += 1;
        }
    }
    assert!(undone > 0, "no seed out of 20 produced a valid proposal");
}

#[test]
fn proposals_preserve_targets() {
    let state = toy_state();
    for seed in 0..20u64 {
        let mut rng = RngHandle::from_seed(seed);
        let proposal = propose_swap(&state, &mut rng, 64).unwrap();
        assert_eq!(proposal.candidate.degrees(), state.degrees());
        assert_eq!(proposal.candidate.sizes(), state.sizes());
    }
}

#[test]
fn single_facet_configurations_cannot_swap() {
    let config = Configuration::new(vec![1, 1], vec![2], vec![vertices(&[0, 1])]).unwrap();
    let mut rng = RngHandle::from_seed(3);
    let err = propose_swap(&config, &mut rng, 64).unwrap_err();
    assert_eq!(err.info().code, "insufficient-facets");
}

#[test]
fn shared_membership_exhausts_the_redraw_budget() {
    // Both facets hold only the shared vertex, so every draw collides.
    let config = Configuration::new(
        vec![2],
        vec![1, 1],
        vec![vertices(&[0]), vertices(&[0])],
    )
    .unwrap();
    let mut rng = RngHandle::from_seed(5);
    let err = propose_swap(&config, &mut rng, 16).unwrap_err();
    assert_eq!(err.info().code, "redraws-exhausted");
}
