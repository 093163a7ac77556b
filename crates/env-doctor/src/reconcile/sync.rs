//! Sync planning: additive reconciliation that preserves the existing file.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::envfile::EnvFile;
use crate::schema::Rule;

use super::plan::{AddedVar, ReconciliationPlan, RemovedVar, ValueSource};
use super::reference::{Reference, ReferenceSource};

/// Banner emitted above variables appended by sync.
pub const SYNC_BANNER: &str = "# Added by env-doctor sync";

/// A missing variable that needs a user-supplied value, with rule metadata
/// for prompt display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub key: String,
    /// The schema rule for the key, when the reference is a schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<Rule>,
}

/// Missing keys with neither a schema default nor an example value, in
/// reference order.
///
/// This is the request side of the prompt exchange: the caller resolves
/// answers before [`plan_sync`] runs, and decides *before* asking whether
/// prompting is possible at all (non-interactive mode, dry run, no TTY).
pub fn prompt_requests(env: Option<&EnvFile>, reference: &Reference) -> Vec<PromptRequest> {
    reference
        .ordered_keys()
        .into_iter()
        .filter(|key| !env.is_some_and(|env| env.contains(key)))
        .filter(|key| reference.fill_value(key).is_none())
        .map(|key| PromptRequest {
            key: key.to_string(),
            rule: reference.schema().and_then(|s| s.get(key)).cloned(),
        })
        .collect()
}

/// Compute the sync plan for an env file against a reference.
///
/// Never reorders or drops existing content: the raw file text is reproduced
/// byte-for-byte (minus a single trailing empty line), then missing keys are
/// appended under a banner in reference order. Fill priority: schema default,
/// example value, user answer, empty string. Orphans are reported in
/// `removed` but never touched.
pub fn plan_sync(
    env: Option<&EnvFile>,
    reference: &Reference,
    answers: &HashMap<String, String>,
) -> ReconciliationPlan {
    let removed: Vec<RemovedVar> = env
        .map(|env| {
            env.keys()
                .filter(|key| !reference.has_key(key))
                .map(|key| RemovedVar {
                    key: key.to_string(),
                    value: env.value(key).unwrap_or_default().to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    let missing: Vec<&str> = reference
        .ordered_keys()
        .into_iter()
        .filter(|key| !env.is_some_and(|env| env.contains(key)))
        .collect();

    let mut lines: Vec<String> = Vec::new();
    if let Some(env) = env {
        let mut raw_lines: Vec<&str> = env.raw.split('\n').collect();
        if raw_lines.last() == Some(&"") {
            raw_lines.pop();
        }
        lines.extend(raw_lines.into_iter().map(String::from));
    }

    let mut added = Vec::new();
    if !missing.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
            lines.push(SYNC_BANNER.to_string());
        }

        for key in missing {
            let (value, source) = if let Some(fill) = reference.fill_value(key) {
                let source = match reference {
                    Reference::Schema(_) => ValueSource::Default,
                    Reference::Example(_) => ValueSource::Example,
                };
                (fill.to_string(), source)
            } else if let Some(answer) = answers.get(key) {
                (answer.clone(), ValueSource::Prompted)
            } else {
                (String::new(), ValueSource::Empty)
            };

            lines.push(format!("{key}={value}"));
            added.push(AddedVar {
                key: key.to_string(),
                value,
                source,
                has_default: matches!(source, ValueSource::Default | ValueSource::Example),
            });
        }
    }

    #[cfg(feature = "tracing")]
    debug!(
        added = added.len(),
        orphans = removed.len(),
        "computed sync plan"
    );

    ReconciliationPlan {
        content: format!("{}\n", lines.join("\n")),
        added,
        removed,
        reordered: false,
        original: env.map(|env| env.raw.clone()).unwrap_or_default(),
    }
}
