use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use scm_core::rng::RngHandle;
use scm_core::VertexId;

use crate::complex::Configuration;
use crate::ids::make_vertex;
use crate::sequences::SequencePair;

/// Draws one random labeled bipartite matching realizing the validated pair.
///
/// Vertex stubs (vertex `v` repeated `d[v]` times) are shuffled uniformly and
/// paired position-wise against facet stubs grouped contiguously by facet.
/// Collecting each facet's stubs through a set makes a duplicate landing
/// observable as a facet smaller than its target size, which the validity
/// checker reports as an underfilled facet. The output therefore satisfies
/// the degree/size marginals of the matching but is NOT guaranteed to be a
/// legal simplicial complex; conditioning on validity downstream yields the
/// exact uniform distribution over valid configurations.
///
/// Cost is O(sum(d)) per call.
pub fn random_configuration(pair: &SequencePair, rng: &mut RngHandle) -> Configuration {
    let mut vertex_stubs: Vec<VertexId> = Vec::with_capacity(pair.total_stubs());
    for (vertex, &degree) in pair.degrees().iter().enumerate() {
        for _ in 0..degree {
            vertex_stubs.push(make_vertex(vertex));
        }
    }
    vertex_stubs.shuffle(rng);

    let mut facets = Vec::with_capacity(pair.num_facets());
    let mut cursor = 0usize;
    for &size in pair.sizes() {
        let mut members = BTreeSet::new();
        for stub in &vertex_stubs[cursor..cursor + size] {
            members.insert(*stub);
        }
        cursor += size;
        facets.push(members.into_iter().collect());
    }

    Configuration::from_parts(pair.degrees().to_vec(), pair.sizes().to_vec(), facets)
}
