//! Fix planning: rewrite an env file to match schema membership and order.

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::envfile::EnvFile;
use crate::schema::Schema;

use super::plan::{AddedVar, ReconciliationPlan, RemovedVar, ValueSource};

/// Banner emitted above commented-out orphans.
pub const ORPHAN_BANNER: &str = "# Orphaned variables (commented out by env-doctor fix)";

/// Options for [`plan_fix`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FixOptions {
    /// Reorder output to schema declaration order.
    pub sort: bool,
    /// Demote orphaned variables to commented-out lines.
    pub remove_orphans: bool,
}

/// Compute the fix plan for an env file against a schema.
///
/// Missing schema keys are filled from their rule default (empty otherwise,
/// preceded by a TODO comment). Orphans are kept in place unless
/// `remove_orphans` demotes them to `# KEY=value` lines under a banner at
/// the end of the file; removal never destroys data. Existing variables keep
/// their recorded value and leading comment.
pub fn plan_fix(env: Option<&EnvFile>, schema: &Schema, options: FixOptions) -> ReconciliationPlan {
    let empty;
    let env = match env {
        Some(env) => env,
        None => {
            empty = EnvFile::default();
            &empty
        }
    };

    let orphan_keys: Vec<&str> = env.keys().filter(|key| !schema.contains(key)).collect();
    let missing: Vec<&str> = schema.keys().filter(|key| !env.contains(key)).collect();

    let added: Vec<AddedVar> = missing
        .iter()
        .map(|&key| {
            let default = schema.get(key).and_then(|rule| rule.default.clone());
            let has_default = default.is_some();
            AddedVar {
                key: key.to_string(),
                value: default.unwrap_or_default(),
                source: if has_default {
                    ValueSource::Default
                } else {
                    ValueSource::Empty
                },
                has_default,
            }
        })
        .collect();

    let removed: Vec<RemovedVar> = if options.remove_orphans {
        orphan_keys
            .iter()
            .map(|&key| RemovedVar {
                key: key.to_string(),
                value: env.value(key).unwrap_or_default().to_string(),
            })
            .collect()
    } else {
        Vec::new()
    };

    let mut reordered = false;
    let output_keys: Vec<&str> = if options.sort {
        // Schema order for schema keys, then kept orphans in file order.
        let mut output: Vec<&str> = schema.keys().collect();
        if !options.remove_orphans {
            output.extend(orphan_keys.iter().copied());
        }

        let current_order: Vec<&str> = env
            .keys()
            .filter(|key| !options.remove_orphans || schema.contains(key))
            .collect();
        let new_order: Vec<&str> = output
            .iter()
            .copied()
            .filter(|key| env.contains(key))
            .collect();
        reordered = current_order != new_order;

        output
    } else {
        // Preserve existing order, append missing at the end.
        env.keys()
            .filter(|key| !options.remove_orphans || schema.contains(key))
            .chain(missing.iter().copied())
            .collect()
    };

    #[cfg(feature = "tracing")]
    debug!(
        missing = missing.len(),
        orphans = orphan_keys.len(),
        reordered,
        "computed fix plan"
    );

    let mut lines: Vec<String> = Vec::new();
    for key in output_keys {
        if let Some(var) = env.get(key) {
            if let Some(comment) = &var.comment {
                lines.push(format!("# {comment}"));
            }
            lines.push(format!("{key}={}", var.value));
        } else if let Some(rule) = schema.get(key) {
            let value = rule.default.clone().unwrap_or_default();
            if value.is_empty() {
                lines.push(format!("# TODO: Set value for {key}"));
            }
            lines.push(format!("{key}={value}"));
        }
    }

    if options.remove_orphans && !orphan_keys.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(ORPHAN_BANNER.to_string());
        for &key in &orphan_keys {
            lines.push(format!("# {key}={}", env.value(key).unwrap_or_default()));
        }
    }

    ReconciliationPlan {
        content: format!("{}\n", lines.join("\n")),
        added,
        removed,
        reordered,
        original: env.raw.clone(),
    }
}
