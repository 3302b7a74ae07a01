use scm_complex::{
    canonical_hash, is_valid_with, random_configuration, CheckOptions, Configuration, SequencePair,
};
use scm_core::errors::{ErrorInfo, ScmError};
use scm_core::rng::RngHandle;

use crate::config::RejectionConfig;
use crate::determinism;

/// A uniformly drawn valid configuration together with draw diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectionOutcome {
    /// The accepted configuration.
    pub configuration: Configuration,
    /// Number of stub matchings drawn, including the accepted one.
    pub attempts: usize,
    /// Canonical hash of the accepted configuration.
    pub hash: String,
}

/// Draws one uniformly random valid configuration with default validity
/// options.
pub fn sample(
    pair: &SequencePair,
    config: &RejectionConfig,
    master_seed: u64,
) -> Result<RejectionOutcome, ScmError> {
    sample_with(pair, config, &CheckOptions::default(), master_seed)
}

/// Draws one uniformly random valid configuration.
///
/// Each attempt uses a fresh substream of the master seed, draws a random
/// stub matching, and keeps it only when the validity checker passes. Every
/// valid configuration corresponds to the same number of stub permutations,
/// so conditioning on validity leaves the distribution exactly uniform. The
/// loop is bounded: once `max_attempts` matchings have been discarded the
/// call fails with [`ScmError::SamplingExhausted`].
pub fn sample_with(
    pair: &SequencePair,
    config: &RejectionConfig,
    options: &CheckOptions,
    master_seed: u64,
) -> Result<RejectionOutcome, ScmError> {
    config.validate()?;
    for attempt in 0..config.max_attempts {
        let mut rng = RngHandle::from_seed(determinism::attempt_seed(master_seed, attempt as u64));
        let candidate = random_configuration(pair, &mut rng);
        if is_valid_with(&candidate, options) {
            let hash = canonical_hash(&candidate);
            return Ok(RejectionOutcome {
                configuration: candidate,
                attempts: attempt + 1,
                hash,
            });
        }
    }
    Err(ScmError::SamplingExhausted(
        ErrorInfo::new(
            "attempts-exhausted",
            "no valid configuration found within the attempt budget",
        )
        .with_context("attempts", config.max_attempts.to_string())
        .with_hint("raise max_attempts or switch to the chain sampler"),
    ))
}
