//! Reconciliation plan value objects.

use serde::{Deserialize, Serialize};

/// Why a filled-in value was chosen for an added variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// The schema rule's default value.
    Default,
    /// The example file's recorded value.
    Example,
    /// A user-supplied answer.
    Prompted,
    /// No value was available; filled with the empty string.
    Empty,
}

impl ValueSource {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ValueSource::Default => "default",
            ValueSource::Example => "from example",
            ValueSource::Prompted => "user input",
            ValueSource::Empty => "empty",
        }
    }
}

/// A variable the plan adds to the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedVar {
    pub key: String,
    pub value: String,
    /// Provenance of the value.
    pub source: ValueSource,
    /// Whether the reference itself supplied the value.
    pub has_default: bool,
}

/// A variable the plan removes (fix) or reports as orphaned (sync).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedVar {
    pub key: String,
    pub value: String,
}

/// The complete outcome of a fix or sync computation.
///
/// A pure value object, computed once per invocation. The caller performs
/// the single whole-file write, and must not write a no-op plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationPlan {
    /// The full rendered file content, with trailing newline.
    pub content: String,
    /// Variables added, in reference order.
    pub added: Vec<AddedVar>,
    /// Variables removed or orphaned, in existing-file order.
    pub removed: Vec<RemovedVar>,
    /// Whether pre-existing variables changed position.
    pub reordered: bool,
    /// The raw text of the pre-existing file; empty when there was none.
    pub original: String,
}

impl ReconciliationPlan {
    /// Whether applying this plan would change nothing.
    pub fn is_noop(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && !self.reordered
            && self.content == self.original
    }
}
