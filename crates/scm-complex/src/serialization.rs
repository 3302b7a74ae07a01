use scm_core::errors::{ErrorInfo, ScmError};
use scm_core::{SchemaVersion, VertexId};
use serde::{Deserialize, Serialize};

use crate::complex::Configuration;

/// Serializes the configuration to a compact binary representation using
/// `bincode`.
pub fn configuration_to_bytes(config: &Configuration) -> Result<Vec<u8>, ScmError> {
    let serializable = SerializableConfiguration::from_configuration(config);
    bincode::serialize(&serializable)
        .map_err(|err| ScmError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a configuration from its binary representation.
pub fn configuration_from_bytes(bytes: &[u8]) -> Result<Configuration, ScmError> {
    let serializable: SerializableConfiguration = bincode::deserialize(bytes)
        .map_err(|err| ScmError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_configuration()
}

/// Serializes the configuration to a JSON string.
pub fn configuration_to_json(config: &Configuration) -> Result<String, ScmError> {
    let serializable = SerializableConfiguration::from_configuration(config);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| ScmError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a configuration from a JSON string.
pub fn configuration_from_json(json: &str) -> Result<Configuration, ScmError> {
    let serializable: SerializableConfiguration = serde_json::from_str(json)
        .map_err(|err| ScmError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_configuration()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableConfiguration {
    schema_version: SchemaVersion,
    degrees: Vec<usize>,
    sizes: Vec<usize>,
    facets: Vec<Vec<u64>>,
}

impl SerializableConfiguration {
    fn from_configuration(config: &Configuration) -> Self {
        let facets = config
            .facet_contents()
            .iter()
            .map(|members| members.iter().map(|id| id.as_raw()).collect())
            .collect();
        Self {
            schema_version: SchemaVersion::default(),
            degrees: config.degrees().to_vec(),
            sizes: config.sizes().to_vec(),
            facets,
        }
    }

    fn into_configuration(self) -> Result<Configuration, ScmError> {
        let facets = self
            .facets
            .into_iter()
            .map(|members| members.into_iter().map(VertexId::from_raw).collect())
            .collect();
        Configuration::new(self.degrees, self.sizes, facets)
    }
}
