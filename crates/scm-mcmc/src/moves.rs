use rand::Rng;
use scm_complex::{swap_pair, Configuration};
use scm_core::errors::{ErrorInfo, ScmError};
use scm_core::rng::RngHandle;
use scm_core::{FacetId, VertexId};

/// Result of a swap proposal.
#[derive(Debug, Clone)]
pub struct SwapProposal {
    /// Candidate configuration produced by the move.
    pub candidate: Configuration,
    /// Facet losing `vertex_a`.
    pub facet_a: FacetId,
    /// Facet losing `vertex_b`.
    pub facet_b: FacetId,
    /// Vertex moving from `facet_a` to `facet_b`.
    pub vertex_a: VertexId,
    /// Vertex moving from `facet_b` to `facet_a`.
    pub vertex_b: VertexId,
    /// Forward proposal probability for MH acceptance.
    pub forward_prob: f64,
    /// Reverse proposal probability for MH acceptance.
    pub reverse_prob: f64,
    /// Human readable description of the move.
    pub description: String,
}

/// Proposes a double-edge swap between two facets.
///
/// Two distinct facets are drawn uniformly, then one member of each; a draw
/// landing on a vertex shared by both facets is redrawn, up to `max_redraws`
/// times. The move preserves every vertex degree and facet size, and because
/// facet sizes are unchanged the reverse move has exactly the same proposal
/// probability, so a Metropolis chain targeting the uniform distribution
/// accepts any valid candidate outright.
pub fn propose_swap(
    config: &Configuration,
    rng: &mut RngHandle,
    max_redraws: usize,
) -> Result<SwapProposal, ScmError> {
    let num_facets = config.num_facets();
    if num_facets < 2 {
        return Err(ScmError::Complex(ErrorInfo::new(
            "insufficient-facets",
            "need at least two facets for a swap",
        )));
    }
    let idx_a = rng.gen_range(0..num_facets);
    let mut idx_b = rng.gen_range(0..num_facets - 1);
    if idx_b >= idx_a {
        idx_b += 1;
    }
    let facet_a = FacetId::from_raw(idx_a as u64);
    let facet_b = FacetId::from_raw(idx_b as u64);
    let members_a = config.facet(facet_a)?;
    let members_b = config.facet(facet_b)?;

    let mut chosen = None;
    for _ in 0..max_redraws {
        let vertex_a = members_a[rng.gen_range(0..members_a.len())];
        let vertex_b = members_b[rng.gen_range(0..members_b.len())];
        if vertex_a != vertex_b {
            chosen = Some((vertex_a, vertex_b));
            break;
        }
    }
    let Some((vertex_a, vertex_b)) = chosen else {
        return Err(ScmError::SamplingExhausted(
            ErrorInfo::new(
                "redraws-exhausted",
                "every vertex draw landed on a shared member",
            )
            .with_context("facet_a", facet_a.as_raw())
            .with_context("facet_b", facet_b.as_raw())
            .with_context("redraws", max_redraws),
        ));
    };

    let pair_prob =
        1.0 / (num_facets * (num_facets - 1) * members_a.len() * members_b.len()) as f64;

    let mut candidate = config.clone();
    swap_pair(&mut candidate, facet_a, vertex_a, facet_b, vertex_b)?;

    Ok(SwapProposal {
        candidate,
        facet_a,
        facet_b,
        vertex_a,
        vertex_b,
        forward_prob: pair_prob,
        reverse_prob: pair_prob,
        description: format!(
            "swap:f{}:v{}<->f{}:v{}",
            facet_a.as_raw(),
            vertex_a.as_raw(),
            facet_b.as_raw(),
            vertex_b.as_raw()
        ),
    })
}
