use scm_core::{FacetId, VertexId};

/// Converts a [`VertexId`] into its underlying index within membership arrays.
pub(crate) fn vertex_index(id: VertexId) -> usize {
    id.as_raw() as usize
}

/// Converts a [`FacetId`] into its underlying index within membership arrays.
pub(crate) fn facet_index(id: FacetId) -> usize {
    id.as_raw() as usize
}

/// Creates a [`VertexId`] from an index.
pub(crate) fn make_vertex(index: usize) -> VertexId {
    VertexId::from_raw(index as u64)
}

/// Creates a [`FacetId`] from an index.
pub(crate) fn make_facet(index: usize) -> FacetId {
    FacetId::from_raw(index as u64)
}
