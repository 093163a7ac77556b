//! Order-preserving representation of `.env` files.

mod parser;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single variable parsed from an env file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    /// Value with surrounding quotes and any inline comment stripped.
    pub value: String,
    /// 1-based line number the variable was read from.
    pub source_line: usize,
    /// Leading comment if one immediately precedes the variable, else the
    /// inline comment if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// An ordered set of variables parsed from a `.env` file.
///
/// Iteration order is declaration order. Re-declaring a key later in the
/// file overwrites its entry but keeps the position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvFile {
    /// Variables in declaration order.
    pub vars: IndexMap<String, EnvVar>,
    /// The text the file was parsed from, verbatim.
    #[serde(skip)]
    pub raw: String,
}

impl EnvFile {
    /// Get a variable by name.
    pub fn get(&self, key: &str) -> Option<&EnvVar> {
        self.vars.get(key)
    }

    /// Get a variable's value by name.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|v| v.value.as_str())
    }

    /// Whether a variable is declared.
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Variable names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Number of declared variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the file declares no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
