use scm_core::errors::{ErrorInfo, ScmError};

/// A degree/size sequence pair that passed feasibility validation.
///
/// Every sampler entry point takes a `SequencePair`, so infeasible input is
/// rejected exactly once, at the boundary, and never mid-sampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePair {
    degrees: Vec<usize>,
    sizes: Vec<usize>,
    total_stubs: usize,
}

impl SequencePair {
    /// Validates a degree sequence and a size sequence for basic feasibility.
    ///
    /// Fails with [`ScmError::InfeasibleSequence`] when the stub totals do not
    /// balance, any entry is zero, a facet asks for more distinct vertices
    /// than exist, or a vertex asks for more facets than exist. On success the
    /// sequences are held unchanged.
    pub fn new(degrees: Vec<usize>, sizes: Vec<usize>) -> Result<Self, ScmError> {
        if let Some(vertex) = degrees.iter().position(|&d| d == 0) {
            return Err(infeasible("zero-degree", "degree entries must be positive")
                .with_context("vertex", vertex));
        }
        if let Some(facet) = sizes.iter().position(|&s| s == 0) {
            return Err(infeasible("zero-size", "size entries must be positive")
                .with_context("facet", facet));
        }
        let degree_total: usize = degrees.iter().sum();
        let size_total: usize = sizes.iter().sum();
        if degree_total != size_total {
            return Err(infeasible("stub-imbalance", "vertex and facet stub totals differ")
                .with_context("degree_total", degree_total)
                .with_context("size_total", size_total)
                .with_hint("every vertex stub must pair with exactly one facet stub"));
        }
        if let Some(facet) = sizes.iter().position(|&s| s > degrees.len()) {
            return Err(infeasible("oversized-facet", "facet size exceeds vertex count")
                .with_context("facet", facet)
                .with_context("size", sizes[facet])
                .with_context("vertices", degrees.len()));
        }
        if let Some(vertex) = degrees.iter().position(|&d| d > sizes.len()) {
            return Err(infeasible("overcommitted-vertex", "vertex degree exceeds facet count")
                .with_context("vertex", vertex)
                .with_context("degree", degrees[vertex])
                .with_context("facets", sizes.len()));
        }
        Ok(Self {
            degrees,
            sizes,
            total_stubs: degree_total,
        })
    }

    /// Validated degree sequence.
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// Validated size sequence.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of vertices described by the pair.
    pub fn num_vertices(&self) -> usize {
        self.degrees.len()
    }

    /// Number of facets described by the pair.
    pub fn num_facets(&self) -> usize {
        self.sizes.len()
    }

    /// Combined stub count (`sum(d) == sum(s)`).
    pub fn total_stubs(&self) -> usize {
        self.total_stubs
    }
}

fn infeasible(code: impl Into<String>, message: impl Into<String>) -> ScmError {
    ScmError::InfeasibleSequence(ErrorInfo::new(code, message))
}

trait ContextExt {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> ScmError;
    fn with_hint(self, hint: impl Into<String>) -> ScmError;
}

impl ContextExt for ScmError {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> ScmError {
        match self {
            ScmError::InfeasibleSequence(info) => {
                ScmError::InfeasibleSequence(info.with_context(key, value))
            }
            other => other,
        }
    }

    fn with_hint(self, hint: impl Into<String>) -> ScmError {
        match self {
            ScmError::InfeasibleSequence(info) => {
                ScmError::InfeasibleSequence(info.with_hint(hint))
            }
            other => other,
        }
    }
}
