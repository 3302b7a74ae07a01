use std::collections::BTreeSet;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use scm_complex::Configuration;

/// One emitted configuration together with its position in the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRecord {
    /// Chain step (1-based, counting from the seed state) at emission time.
    pub step: usize,
    /// Canonical hash of the emitted configuration.
    pub hash: String,
    /// The emitted configuration itself.
    pub configuration: Configuration,
}

/// Aggregate coverage metrics summarising the exploration quality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageMetrics {
    /// Number of unique canonical hashes among the emitted samples.
    pub unique_state_hashes: usize,
    /// Average Jaccard similarity between consecutive samples' incidence
    /// pairs; a serial-correlation proxy (1.0 means the chain never moved).
    pub average_jaccard: f64,
}

impl CoverageMetrics {
    /// Returns an empty coverage descriptor.
    pub fn empty() -> Self {
        Self {
            unique_state_hashes: 0,
            average_jaccard: 1.0,
        }
    }
}

/// Collects emitted samples and computes aggregate coverage proxies.
#[derive(Debug, Default)]
pub struct MetricsRecorder {
    samples: Vec<SampleRecord>,
    unique_hashes: IndexSet<String>,
    incidence_history: Vec<BTreeSet<(u64, u64)>>,
}

impl MetricsRecorder {
    /// Creates a new recorder instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an emitted sample.
    pub fn push_sample(&mut self, record: SampleRecord) {
        self.unique_hashes.insert(record.hash.clone());
        self.incidence_history
            .push(incidence_pairs(&record.configuration));
        self.samples.push(record);
    }

    /// Returns an immutable view over the recorded samples.
    pub fn samples(&self) -> &[SampleRecord] {
        &self.samples
    }

    /// Consumes the recorder, yielding the recorded samples.
    pub fn into_samples(self) -> Vec<SampleRecord> {
        self.samples
    }

    /// Computes coverage metrics from the recorded data.
    pub fn coverage(&self) -> CoverageMetrics {
        if self.samples.is_empty() {
            return CoverageMetrics::empty();
        }
        let mut jaccard_sum = 0.0;
        let mut jaccard_count = 0usize;
        for pair in self.incidence_history.windows(2) {
            if let [a, b] = pair {
                let intersection = a.intersection(b).count() as f64;
                let union = (a.len() + b.len()) as f64 - intersection;
                if union > 0.0 {
                    jaccard_sum += intersection / union;
                    jaccard_count += 1;
                }
            }
        }
        let average_jaccard = if jaccard_count > 0 {
            jaccard_sum / jaccard_count as f64
        } else {
            1.0
        };

        CoverageMetrics {
            unique_state_hashes: self.unique_hashes.len(),
            average_jaccard,
        }
    }
}

/// Flattens a configuration into its set of (facet, vertex) incidence pairs.
pub fn incidence_pairs(config: &Configuration) -> BTreeSet<(u64, u64)> {
    let mut pairs = BTreeSet::new();
    for facet in config.facet_ids() {
        if let Ok(members) = config.facet(facet) {
            for member in members {
                pairs.insert((facet.as_raw(), member.as_raw()));
            }
        }
    }
    pairs
}
