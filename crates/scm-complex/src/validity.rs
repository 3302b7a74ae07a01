use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};

use scm_core::errors::{ErrorInfo, ScmError};
use scm_core::{FacetId, VertexId};

use crate::complex::{Configuration, FacetSignature};
use crate::ids::{make_facet, vertex_index};

/// First invariant violated by a candidate configuration.
///
/// Checks run in increasing cost order and short-circuit, so the reported
/// violation is the cheapest one present, not necessarily the only one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// A facet's deduplicated content is smaller than its target size: the
    /// stub matching landed the same vertex in the facet more than once.
    UnderfilledFacet {
        /// Offending facet.
        facet: FacetId,
        /// Target size from the size sequence.
        expected: usize,
        /// Distinct vertices actually present.
        actual: usize,
    },
    /// Two facets carry identical vertex content.
    DuplicateFacet {
        /// Lower-indexed facet of the pair.
        first: FacetId,
        /// Higher-indexed facet of the pair.
        second: FacetId,
    },
    /// One facet's vertex set is contained in another's, so the smaller one
    /// is not a maximal face.
    NestedFacet {
        /// The contained facet.
        inner: FacetId,
        /// The containing facet.
        outer: FacetId,
    },
    /// The bipartite incidence graph is not connected (only reported when
    /// connectivity is requested).
    Disconnected,
}

impl Violation {
    /// Converts the violation into the internal-defect error surfaced when an
    /// invalid configuration reaches a caller.
    pub fn into_error(self) -> ScmError {
        let info = match &self {
            Violation::UnderfilledFacet {
                facet,
                expected,
                actual,
            } => ErrorInfo::new("underfilled-facet", "facet lost members to a stub multi-edge")
                .with_context("facet", facet.as_raw())
                .with_context("expected", expected)
                .with_context("actual", actual),
            Violation::DuplicateFacet { first, second } => {
                ErrorInfo::new("duplicate-facet", "two facets carry identical content")
                    .with_context("first", first.as_raw())
                    .with_context("second", second.as_raw())
            }
            Violation::NestedFacet { inner, outer } => {
                ErrorInfo::new("nested-facet", "facet is contained in another facet")
                    .with_context("inner", inner.as_raw())
                    .with_context("outer", outer.as_raw())
            }
            Violation::Disconnected => {
                ErrorInfo::new("disconnected", "incidence graph is not connected")
            }
        };
        ScmError::InvariantViolation(info)
    }
}

/// Optional extra predicates layered on top of the simpliciality checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOptions {
    /// Additionally require the bipartite incidence graph to be connected.
    #[serde(default)]
    pub require_connected: bool,
}

/// Runs the simpliciality checks with default options.
pub fn check(config: &Configuration) -> Option<Violation> {
    check_with(config, &CheckOptions::default())
}

/// Runs the simpliciality checks, cheapest first, returning the first
/// violation found.
///
/// Order: (a) no facet lost members to a stub multi-edge, (b) no two facets
/// are identical, (c) no facet is contained in a larger one, then the
/// optional connectivity predicate. Re-running on a valid configuration
/// always returns `None`.
pub fn check_with(config: &Configuration, options: &CheckOptions) -> Option<Violation> {
    if let Some(violation) = check_fill(config) {
        return Some(violation);
    }
    if let Some(violation) = check_duplicates(config) {
        return Some(violation);
    }
    if let Some(violation) = check_containment(config) {
        return Some(violation);
    }
    if options.require_connected && !is_connected(config) {
        return Some(Violation::Disconnected);
    }
    None
}

/// Returns whether the configuration is a legal simplicial complex instance.
pub fn is_valid(config: &Configuration) -> bool {
    check(config).is_none()
}

/// Returns whether the configuration passes the checks under the options.
pub fn is_valid_with(config: &Configuration, options: &CheckOptions) -> bool {
    check_with(config, options).is_none()
}

fn check_fill(config: &Configuration) -> Option<Violation> {
    for (idx, members) in config.facet_contents().iter().enumerate() {
        let expected = config.sizes()[idx];
        if members.len() != expected {
            return Some(Violation::UnderfilledFacet {
                facet: make_facet(idx),
                expected,
                actual: members.len(),
            });
        }
    }
    None
}

fn check_duplicates(config: &Configuration) -> Option<Violation> {
    let mut seen: BTreeMap<FacetSignature, usize> = BTreeMap::new();
    for (idx, signature) in config.signatures().into_iter().enumerate() {
        if let Some(&first) = seen.get(&signature) {
            return Some(Violation::DuplicateFacet {
                first: make_facet(first),
                second: make_facet(idx),
            });
        }
        seen.insert(signature, idx);
    }
    None
}

fn check_containment(config: &Configuration) -> Option<Violation> {
    let contents = config.facet_contents();
    // Bucket facets by content size. Equal-size containment is equality and
    // already excluded by the duplicate check, so each facet only needs to be
    // compared against strictly larger buckets.
    let mut buckets: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (idx, members) in contents.iter().enumerate() {
        buckets.entry(members.len()).or_default().push(idx);
    }
    for (idx, members) in contents.iter().enumerate() {
        for (_, larger) in buckets.range((members.len() + 1)..) {
            let mut found = None;
            for &outer in larger {
                if is_sorted_subset(members, &contents[outer]) {
                    found = Some(outer);
                    break;
                }
            }
            if let Some(outer) = found {
                return Some(Violation::NestedFacet {
                    inner: make_facet(idx),
                    outer: make_facet(outer),
                });
            }
        }
    }
    None
}

/// Two-pointer subset test over sorted, deduplicated member lists.
fn is_sorted_subset(small: &[VertexId], large: &[VertexId]) -> bool {
    let mut idx_small = 0;
    let mut idx_large = 0;
    while idx_small < small.len() && idx_large < large.len() {
        match small[idx_small].as_raw().cmp(&large[idx_large].as_raw()) {
            std::cmp::Ordering::Less => return false,
            std::cmp::Ordering::Greater => idx_large += 1,
            std::cmp::Ordering::Equal => {
                idx_small += 1;
                idx_large += 1;
            }
        }
    }
    idx_small == small.len()
}

/// Breadth-first connectivity over the bipartite incidence graph.
///
/// Vertices and facets form one node set; a facet is adjacent to each of its
/// members. The empty complex counts as connected.
pub fn is_connected(config: &Configuration) -> bool {
    let num_vertices = config.num_vertices();
    let num_facets = config.num_facets();
    if num_vertices + num_facets == 0 {
        return true;
    }
    if num_facets == 0 {
        return num_vertices <= 1;
    }

    let mut vertex_to_facets: Vec<Vec<usize>> = vec![Vec::new(); num_vertices];
    for (facet, members) in config.facet_contents().iter().enumerate() {
        for member in members {
            vertex_to_facets[vertex_index(*member)].push(facet);
        }
    }

    let mut facet_seen = vec![false; num_facets];
    let mut vertex_seen = vec![false; num_vertices];
    let mut queue = VecDeque::new();
    facet_seen[0] = true;
    queue.push_back(Node::Facet(0));
    while let Some(node) = queue.pop_front() {
        match node {
            Node::Facet(facet) => {
                for member in &config.facet_contents()[facet] {
                    let vertex = vertex_index(*member);
                    if !vertex_seen[vertex] {
                        vertex_seen[vertex] = true;
                        queue.push_back(Node::Vertex(vertex));
                    }
                }
            }
            Node::Vertex(vertex) => {
                for &facet in &vertex_to_facets[vertex] {
                    if !facet_seen[facet] {
                        facet_seen[facet] = true;
                        queue.push_back(Node::Facet(facet));
                    }
                }
            }
        }
    }

    facet_seen.into_iter().all(|seen| seen) && vertex_seen.into_iter().all(|seen| seen)
}

enum Node {
    Facet(usize),
    Vertex(usize),
}
