use scm_core::errors::{ErrorInfo, ScmError};
use scm_core::{FacetId, VertexId};

use crate::complex::Configuration;
use crate::ids::facet_index;

/// Exchanges one vertex between two facets in place.
///
/// `vertex_a` leaves `facet_a` and joins `facet_b`; `vertex_b` moves the
/// other way. The exchange is symmetric, so every vertex degree and facet
/// size target is untouched, and applying the counter-swap restores the
/// original configuration exactly.
///
/// When the incoming vertex is already a member of the receiving facet the
/// set insertion collapses and the facet shrinks below its target size; the
/// result is intentionally representable so the validity checker can reject
/// it as an underfilled facet (the Markov chain treats that as a self-loop).
///
/// Returns `Ok(false)` for the no-op `facet_a == facet_b`. Errors with
/// [`ScmError::Complex`] on an unknown facet, a vertex that is not a member
/// of its facet, or `vertex_a == vertex_b`.
pub fn swap_pair(
    config: &mut Configuration,
    facet_a: FacetId,
    vertex_a: VertexId,
    facet_b: FacetId,
    vertex_b: VertexId,
) -> Result<bool, ScmError> {
    if facet_a == facet_b {
        return Ok(false);
    }
    if vertex_a == vertex_b {
        return Err(swap_error("identical-vertices", "swap requires two distinct vertices")
            .with_context("vertex", vertex_a.as_raw()));
    }
    if !config.contains(facet_a, vertex_a)? {
        return Err(missing_member(facet_a, vertex_a));
    }
    if !config.contains(facet_b, vertex_b)? {
        return Err(missing_member(facet_b, vertex_b));
    }

    replace_member(config, facet_a, vertex_a, vertex_b);
    replace_member(config, facet_b, vertex_b, vertex_a);
    Ok(true)
}

fn replace_member(config: &mut Configuration, facet: FacetId, leaving: VertexId, joining: VertexId) {
    let members = &mut config.facet_contents_mut()[facet_index(facet)];
    if let Ok(position) = members.binary_search(&leaving) {
        members.remove(position);
    }
    if let Err(position) = members.binary_search(&joining) {
        members.insert(position, joining);
    }
}

fn missing_member(facet: FacetId, vertex: VertexId) -> ScmError {
    swap_error("missing-member", "vertex is not a member of the facet")
        .with_context("facet", facet.as_raw())
        .with_context("vertex", vertex.as_raw())
}

fn swap_error(code: impl Into<String>, message: impl Into<String>) -> ScmError {
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
