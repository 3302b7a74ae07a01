use scm_complex::{canonical_hash, check_with, is_valid_with, Configuration, SequencePair};
use scm_core::errors::ScmError;
use scm_core::rng::RngHandle;

use crate::config::RunConfig;
use crate::determinism;
use crate::metrics::{CoverageMetrics, MetricsRecorder, SampleRecord};
use crate::moves;
use crate::rejection;

/// Summary returned to callers after a chain run completes.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Emitted configurations in chain order.
    pub samples: Vec<SampleRecord>,
    /// Number of swap proposals issued.
    pub proposed: usize,
    /// Number of proposals accepted (valid candidates).
    pub accepted: usize,
    /// Accepted / proposed; 0.0 for an empty run.
    pub acceptance_rate: f64,
    /// Coverage metrics over the emitted samples.
    pub coverage: CoverageMetrics,
    /// Canonical hash of the final chain state.
    pub final_hash: String,
}

/// Runs the chain sampler from scratch, seeding the chain with one call to
/// the rejection sampler.
pub fn run(
    config: &RunConfig,
    master_seed: u64,
    pair: &SequencePair,
) -> Result<RunSummary, ScmError> {
    config.validate()?;
    let seed_state = rejection::sample_with(
        pair,
        &config.rejection,
        &config.check_options(),
        master_seed,
    )?;
    run_from(config, master_seed, seed_state.configuration)
}

/// Runs the chain sampler from an externally supplied starting state.
///
/// The start state must already be valid under the configured options; a
/// caller handing over an invalid configuration is a defect and is surfaced
/// immediately as [`ScmError::InvariantViolation`].
///
/// Each step draws a per-step RNG substream, proposes a swap, and accepts
/// the candidate exactly when it passes the validity checker; the swap move
/// is symmetric and the target distribution is uniform over valid
/// configurations, so no acceptance ratio is computed. `burn_in` steps run
/// unrecorded, then every `thinning`-th state is emitted until `num_samples`
/// records exist. A proposal that cannot be completed (single shared vertex,
/// redraw budget spent) counts as a rejected proposal, never an error.
pub fn run_from(
    config: &RunConfig,
    master_seed: u64,
    initial: Configuration,
) -> Result<RunSummary, ScmError> {
    config.validate()?;
    let options = config.check_options();
    if let Some(violation) = check_with(&initial, &options) {
        return Err(violation.into_error());
    }

    let mut current = initial;
    let mut recorder = MetricsRecorder::new();
    let mut proposed = 0usize;
    let mut accepted = 0usize;
    let mut emitted = 0usize;

    let total_steps = config.burn_in + config.thinning * config.num_samples;
    for step in 0..total_steps {
        let mut step_rng = RngHandle::from_seed(determinism::step_seed(master_seed, step as u64));
        proposed += 1;
        match moves::propose_swap(&current, &mut step_rng, config.proposal.max_redraws) {
            Ok(proposal) => {
                if is_valid_with(&proposal.candidate, &options) {
                    current = proposal.candidate;
                    accepted += 1;
                }
            }
            // A proposal the engine could not complete is a self-loop.
            Err(_) => {}
        }

        let completed = step + 1;
        if completed > config.burn_in
            && (completed - config.burn_in) % config.thinning == 0
            && emitted < config.num_samples
        {
            emitted += 1;
            recorder.push_sample(SampleRecord {
                step: completed,
                hash: canonical_hash(&current),
                configuration: current.clone(),
            });
        }
    }

    let acceptance_rate = if proposed == 0 {
        0.0
    } else {
        accepted as f64 / proposed as f64
    };
    let coverage = recorder.coverage();
    let final_hash = canonical_hash(&current);

    Ok(RunSummary {
        samples: recorder.into_samples(),
        proposed,
        accepted,
        acceptance_rate,
        coverage,
        final_hash,
    })
}
