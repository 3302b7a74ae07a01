use scm_complex::CheckOptions;
use scm_core::errors::{ErrorInfo, ScmError};
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters governing a sampling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of configurations to emit.
    #[serde(default = "default_num_samples")]
    pub num_samples: usize,
    /// Number of initial chain steps discarded before any sample is taken.
    #[serde(default)]
    pub burn_in: usize,
    /// Number of chain steps executed between two emitted samples.
    #[serde(default = "default_thinning")]
    pub thinning: usize,
    /// Rejection sampling budget (also used to seed the chain).
    #[serde(default)]
    pub rejection: RejectionConfig,
    /// Swap proposal redraw budget.
    #[serde(default)]
    pub proposal: ProposalConfig,
    /// Additionally require the bipartite incidence graph to be connected.
    #[serde(default)]
    pub require_connected: bool,
    /// Master seed and substream policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

fn default_num_samples() -> usize {
    1
}

fn default_thinning() -> usize {
    1
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_samples: default_num_samples(),
            burn_in: 0,
            thinning: default_thinning(),
            rejection: RejectionConfig::default(),
            proposal: ProposalConfig::default(),
            require_connected: false,
            seed_policy: SeedPolicy::default(),
        }
    }
}

impl RunConfig {
    /// Parses a run configuration from YAML.
    pub fn from_yaml(contents: &str) -> Result<Self, ScmError> {
        serde_yaml::from_str(contents)
            .map_err(|err| ScmError::Serde(ErrorInfo::new("config-parse", err.to_string())))
    }

    /// Validity options implied by this configuration.
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            require_connected: self.require_connected,
        }
    }

    /// Rejects parameter combinations that cannot drive a run.
    pub fn validate(&self) -> Result<(), ScmError> {
        if self.thinning == 0 {
            return Err(ScmError::Config(ErrorInfo::new(
                "zero-thinning",
                "thinning interval must be at least one step",
            )));
        }
        self.rejection.validate()?;
        self.proposal.validate()
    }
}

/// Bounded retry budget for the exact rejection sampler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionConfig {
    /// Maximum number of stub-matching attempts before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

fn default_max_attempts() -> usize {
    10_000
}

impl Default for RejectionConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
        }
    }
}

impl RejectionConfig {
    /// Rejects an empty attempt budget.
    pub fn validate(&self) -> Result<(), ScmError> {
        if self.max_attempts == 0 {
            return Err(ScmError::Config(ErrorInfo::new(
                "empty-attempt-budget",
                "rejection sampling needs at least one attempt",
            )));
        }
        Ok(())
    }
}

/// Bounded redraw budget for one swap proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalConfig {
    /// Maximum vertex-pair redraws when both draws land on a shared vertex.
    #[serde(default = "default_max_redraws")]
    pub max_redraws: usize,
}

fn default_max_redraws() -> usize {
    64
}

impl Default for ProposalConfig {
    fn default() -> Self {
        Self {
            max_redraws: default_max_redraws(),
        }
    }
}

impl ProposalConfig {
    /// Rejects an empty redraw budget.
    pub fn validate(&self) -> Result<(), ScmError> {
        if self.max_redraws == 0 {
            return Err(ScmError::Config(ErrorInfo::new(
                "empty-redraw-budget",
                "swap proposals need at least one vertex draw",
            )));
        }
        Ok(())
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed used for the run.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label used when deriving substream seeds (documented in manifests).
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    0x05EE_D5EE_DD15_5EED_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}
