//! Declarative per-variable validation rules.

mod parser;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Expected shape of a variable's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Any text. Always passes the type check.
    #[default]
    String,
    /// A numeric literal.
    Number,
    /// One of true/false/0/1/yes/no, case-insensitive.
    Boolean,
    /// An http(s) URL.
    Url,
    /// A `local@domain.tld` shape.
    Email,
    /// Syntactic IPv4 shape only (no 0-255 range check).
    Ip,
}

impl ValueType {
    /// Parse a DSL type token. `None` when the token is not a type name.
    pub(crate) fn from_token(token: &str) -> Option<Self> {
        match token {
            "string" => Some(ValueType::String),
            "number" => Some(ValueType::Number),
            "boolean" => Some(ValueType::Boolean),
            "url" => Some(ValueType::Url),
            "email" => Some(ValueType::Email),
            "ip" => Some(ValueType::Ip),
            _ => None,
        }
    }

    /// Get the DSL name of this type.
    pub fn label(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Number => "number",
            ValueType::Boolean => "boolean",
            ValueType::Url => "url",
            ValueType::Email => "email",
            ValueType::Ip => "ip",
        }
    }
}

/// Validation rule for a single variable.
///
/// The default rule (`required: false, type: string`) constrains nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    /// The variable must be present and non-empty.
    pub required: bool,
    /// Expected value shape, checked independently of `required`.
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Marks the value as sensitive for masking.
    pub secret: bool,
    /// Fill value used by fix/sync when the variable is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Minimum value length in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,
    /// Maximum value length in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    /// Regex the value must match, compiled at validation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Closed set of permitted values, case-sensitive.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
}

/// A mapping of variable name to [`Rule`], in declaration order.
///
/// Declaration order drives "sort to schema order" reconciliation. Duplicate
/// declarations follow the same policy as [`EnvFile`](crate::EnvFile): last
/// rule wins, position of the first occurrence is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    /// Rules in declaration order.
    pub rules: IndexMap<String, Rule>,
}

impl Schema {
    /// Get the rule for a variable.
    pub fn get(&self, key: &str) -> Option<&Rule> {
        self.rules.get(key)
    }

    /// Whether the schema declares a variable.
    pub fn contains(&self, key: &str) -> bool {
        self.rules.contains_key(key)
    }

    /// Variable names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(k, r)| (k.as_str(), r))
    }

    /// Number of declared variables.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the schema declares no variables.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
