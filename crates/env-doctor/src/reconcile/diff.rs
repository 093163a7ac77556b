//! Line-level and key-level differences between env renderings.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::envfile::EnvFile;

/// What happened to a line in a line-level diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffOp {
    /// Present in both renderings.
    Context,
    /// Only in the new rendering.
    Added,
    /// Only in the old rendering.
    Removed,
}

/// A single line of a line-level diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub op: DiffOp,
    pub text: String,
}

/// Compute a line-level diff between two renderings.
///
/// A simple two-pointer walk: matching lines advance both sides, lines
/// absent from the other rendering are emitted as additions/removals, and a
/// position where both sides still hold known lines becomes a removal plus
/// an addition.
pub fn line_diff(old: &str, new: &str) -> Vec<DiffLine> {
    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();
    let old_set: HashSet<&str> = old_lines.iter().copied().collect();
    let new_set: HashSet<&str> = new_lines.iter().copied().collect();

    let mut out = Vec::new();
    let (mut oi, mut ni) = (0, 0);

    while oi < old_lines.len() || ni < new_lines.len() {
        if oi < old_lines.len() && ni < new_lines.len() && old_lines[oi] == new_lines[ni] {
            out.push(DiffLine {
                op: DiffOp::Context,
                text: old_lines[oi].to_string(),
            });
            oi += 1;
            ni += 1;
        } else if ni < new_lines.len()
            && (oi >= old_lines.len() || !old_set.contains(new_lines[ni]))
        {
            out.push(DiffLine {
                op: DiffOp::Added,
                text: new_lines[ni].to_string(),
            });
            ni += 1;
        } else if oi < old_lines.len()
            && (ni >= new_lines.len() || !new_set.contains(old_lines[oi]))
        {
            out.push(DiffLine {
                op: DiffOp::Removed,
                text: old_lines[oi].to_string(),
            });
            oi += 1;
        } else {
            out.push(DiffLine {
                op: DiffOp::Removed,
                text: old_lines[oi].to_string(),
            });
            out.push(DiffLine {
                op: DiffOp::Added,
                text: new_lines[ni].to_string(),
            });
            oi += 1;
            ni += 1;
        }
    }

    out
}

/// A key present in both files with different values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedVar {
    pub key: String,
    pub left: String,
    pub right: String,
}

/// Key-level comparison of two env files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Keys only in the right file.
    pub added: Vec<String>,
    /// Keys only in the left file.
    pub removed: Vec<String>,
    /// Keys in both files with different values.
    pub changed: Vec<ChangedVar>,
    /// Keys in both files with identical values.
    pub same: Vec<String>,
}

impl Comparison {
    /// Total number of differing keys.
    pub fn difference_count(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }

    /// Whether the files declare the same variables with the same values.
    pub fn is_identical(&self) -> bool {
        self.difference_count() == 0
    }
}

/// Compare two env files key by key, over the sorted union of their keys.
pub fn compare(left: &EnvFile, right: &EnvFile) -> Comparison {
    let keys: BTreeSet<&str> = left.keys().chain(right.keys()).collect();

    let mut comparison = Comparison::default();
    for key in keys {
        match (left.value(key), right.value(key)) {
            (None, Some(_)) => comparison.added.push(key.to_string()),
            (Some(_), None) => comparison.removed.push(key.to_string()),
            (Some(l), Some(r)) if l != r => comparison.changed.push(ChangedVar {
                key: key.to_string(),
                left: l.to_string(),
                right: r.to_string(),
            }),
            _ => comparison.same.push(key.to_string()),
        }
    }

    comparison
}
