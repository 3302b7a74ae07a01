//! Structured error types shared across SCM crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`ScmError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (indices, counts, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the SCM sampling engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum ScmError {
    /// The degree/size sequence pair cannot be realized. Detected at the
    /// boundary, before any sampling begins.
    #[error("infeasible sequence: {0}")]
    InfeasibleSequence(ErrorInfo),
    /// A bounded retry budget (rejection attempts, proposal redraws) ran out.
    /// Retryable by the caller with a larger budget or different sequences.
    #[error("sampling exhausted: {0}")]
    SamplingExhausted(ErrorInfo),
    /// A configuration that reached the caller failed validation. This is an
    /// implementation defect, never a user error.
    #[error("invariant violation: {0}")]
    InvariantViolation(ErrorInfo),
    /// Structural misuse of a configuration (unknown facet, missing member).
    #[error("complex error: {0}")]
    Complex(ErrorInfo),
    /// Invalid run parameters (zero thinning, empty budgets).
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl ScmError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            ScmError::InfeasibleSequence(info)
            | ScmError::SamplingExhausted(info)
            | ScmError::InvariantViolation(info)
            | ScmError::Complex(info)
            | ScmError::Config(info)
            | ScmError::Serde(info) => info,
        }
    }
}
