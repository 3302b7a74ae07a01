use scm_core::derive_substream_seed;

/// Derives the deterministic seed for one rejection attempt.
pub fn attempt_seed(master_seed: u64, attempt: u64) -> u64 {
    derive_substream_seed(master_seed, attempt)
}

/// Derives the deterministic seed for one chain step.
pub fn step_seed(master_seed: u64, step: u64) -> u64 {
    derive_substream_seed(master_seed ^ 0xA5A5_A5A5_A5A5_A5A5, step)
}

/// Derives the master seed for an independently running chain, so outer
/// parallelism never shares randomness between chains.
pub fn chain_seed(master_seed: u64, chain_index: u64) -> u64 {
    derive_substream_seed(master_seed ^ 0x5C5C_5C5C_5C5C_5C5C, chain_index)
}
