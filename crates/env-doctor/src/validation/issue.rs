//! Validation findings.

use serde::{Deserialize, Serialize};

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Should be reviewed; does not fail validation on its own.
    #[serde(rename = "warn")]
    Warning,
    /// Fails validation.
    #[serde(rename = "error")]
    Error,
}

impl Severity {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Warning => "warn",
            Severity::Error => "error",
        }
    }
}

/// A finding about a single variable.
///
/// Issues accumulate into lists; they are values, never errors, and never
/// mutate their input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// The variable the finding is about.
    pub key: String,
    /// Severity level.
    #[serde(rename = "level")]
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl Issue {
    /// Create an error-level issue.
    pub fn error(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Create a warning-level issue.
    pub fn warn(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Whether this finding fails validation.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
