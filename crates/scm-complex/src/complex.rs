use scm_core::{
    errors::{ErrorInfo, ScmError},
    FacetId, VertexId,
};

use crate::ids::{facet_index, make_facet, vertex_index};

/// Canonical comparable signature of one facet's vertex content.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FacetSignature {
    members: Vec<u64>,
}

impl FacetSignature {
    pub(crate) fn new(members: &[VertexId]) -> Self {
        Self {
            members: members.iter().map(|id| id.as_raw()).collect(),
        }
    }

    /// Returns the raw vertex identifiers forming the signature.
    pub fn raw_members(&self) -> &[u64] {
        &self.members
    }
}

/// One concrete facet-to-vertex incidence realizing a degree/size sequence
/// pair.
///
/// Facet content is a set: each inner vector is kept sorted ascending and
/// free of duplicates. A configuration produced by the stub-matching builder
/// is *not* guaranteed to be a legal simplicial complex; the validity checker
/// decides that separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    degrees: Vec<usize>,
    sizes: Vec<usize>,
    facets: Vec<Vec<VertexId>>,
}

impl Configuration {
    /// Builds a configuration from target sequences and explicit facet
    /// contents. Contents are canonicalized (sorted, deduplicated); vertex
    /// indices must lie in `[0, degrees.len())` and the number of facets must
    /// match the size sequence.
    pub fn new(
        degrees: Vec<usize>,
        sizes: Vec<usize>,
        facets: Vec<Vec<VertexId>>,
    ) -> Result<Self, ScmError> {
        if facets.len() != sizes.len() {
            return Err(complex_error("facet-count-mismatch", "facet list does not match size sequence")
                .with_context("facets", facets.len())
                .with_context("sizes", sizes.len()));
        }
        let num_vertices = degrees.len();
        let mut canonical = Vec::with_capacity(facets.len());
        for (idx, members) in facets.into_iter().enumerate() {
            for member in &members {
                if vertex_index(*member) >= num_vertices {
                    return Err(complex_error("vertex-out-of-range", "facet references unknown vertex")
                        .with_context("facet", idx)
                        .with_context("vertex", member.as_raw()));
                }
            }
            canonical.push(canonicalize_members(members));
        }
        Ok(Self {
            degrees,
            sizes,
            facets: canonical,
        })
    }

    /// Internal constructor for contents already sorted and deduplicated.
    pub(crate) fn from_parts(
        degrees: Vec<usize>,
        sizes: Vec<usize>,
        facets: Vec<Vec<VertexId>>,
    ) -> Self {
        Self {
            degrees,
            sizes,
            facets,
        }
    }

    /// Number of vertices in the configuration.
    pub fn num_vertices(&self) -> usize {
        self.degrees.len()
    }

    /// Number of facets in the configuration.
    pub fn num_facets(&self) -> usize {
        self.facets.len()
    }

    /// Target degree sequence.
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// Target size sequence.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Returns all facet identifiers in index order.
    pub fn facet_ids(&self) -> Vec<FacetId> {
        (0..self.facets.len()).map(make_facet).collect()
    }

    /// Returns the sorted vertex content of the given facet.
    pub fn facet(&self, facet: FacetId) -> Result<&[VertexId], ScmError> {
        self.facets
            .get(facet_index(facet))
            .map(|members| members.as_slice())
            .ok_or_else(|| {
                complex_error("unknown-facet", "facet does not exist")
                    .with_context("facet", facet.as_raw())
            })
    }

    /// Returns whether the facet contains the vertex.
    pub fn contains(&self, facet: FacetId, vertex: VertexId) -> Result<bool, ScmError> {
        let members = self.facet(facet)?;
        Ok(members.binary_search(&vertex).is_ok())
    }

    /// Degrees actually realized by the current facet contents.
    pub fn realized_degrees(&self) -> Vec<usize> {
        let mut realized = vec![0usize; self.degrees.len()];
        for members in &self.facets {
            for member in members {
                realized[vertex_index(*member)] += 1;
            }
        }
        realized
    }

    /// Canonical signature of the given facet's content.
    pub fn facet_signature(&self, facet: FacetId) -> Result<FacetSignature, ScmError> {
        Ok(FacetSignature::new(self.facet(facet)?))
    }

    /// Signatures of every facet in index order.
    pub(crate) fn signatures(&self) -> Vec<FacetSignature> {
        self.facets
            .iter()
            .map(|members| FacetSignature::new(members))
            .collect()
    }

    pub(crate) fn facet_contents(&self) -> &[Vec<VertexId>] {
        &self.facets
    }

    pub(crate) fn facet_contents_mut(&mut self) -> &mut [Vec<VertexId>] {
        &mut self.facets
    }
}

pub(crate) fn canonicalize_members(members: Vec<VertexId>) -> Vec<VertexId> {
    let mut members = members;
    members.sort_by_key(|id| id.as_raw());
    members.dedup();
    members
}

fn complex_error(code: impl Into<String>, message: impl Into<String>) -> ScmError {
    ScmError::Complex(ErrorInfo::new(code, message))
}

trait ContextExt {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> ScmError;
}

impl ContextExt for ScmError {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> ScmError {
        match self {
            ScmError::Complex(info) => ScmError::Complex(info.with_context(key, value)),
            other => other,
        }
    }
}
