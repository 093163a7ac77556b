//! Schema parsing: strict JSON object or line-oriented rule DSL.

use indexmap::IndexMap;
use serde_json::Value;

#[cfg(feature = "tracing")]
use tracing::debug;

use super::{Rule, Schema, ValueType};

impl Schema {
    /// Parse schema text.
    ///
    /// Text whose trimmed form starts with `{` is tried as strict JSON: each
    /// entry is either a comma-token string (run through the rule tokenizer)
    /// or a partial rule object merged over the default rule. On JSON
    /// failure, or for any other text, the line DSL is used.
    pub fn parse(content: &str) -> Self {
        let trimmed = content.trim();

        if trimmed.starts_with('{') {
            if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
                #[cfg(feature = "tracing")]
                debug!("parsed schema as JSON with {} entries", map.len());

                return Self::from_json_entries(map);
            }
        }

        Self::parse_dsl(content)
    }

    fn from_json_entries(map: serde_json::Map<String, Value>) -> Self {
        let mut rules = IndexMap::new();
        for (key, def) in map {
            match def {
                Value::String(tokens) => {
                    rules.insert(key, parse_rule_tokens(tokens.split(',')));
                }
                Value::Object(_) => {
                    let rule = serde_json::from_value(def).unwrap_or_default();
                    rules.insert(key, rule);
                }
                // Other JSON shapes are not rules; skipped.
                _ => {}
            }
        }
        Self { rules }
    }

    /// Parse the line-oriented DSL: `KEY=token,token:value,...` per line.
    ///
    /// Blank and `#`-led lines are skipped, as are lines without `=`. An
    /// empty right-hand side yields the default rule.
    pub fn parse_dsl(content: &str) -> Self {
        let mut rules = IndexMap::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some((key, tokens)) = trimmed.split_once('=') else {
                continue;
            };
            let key = key.trim().to_string();
            let tokens = tokens.trim();

            let rule = if tokens.is_empty() {
                Rule::default()
            } else {
                parse_rule_tokens(tokens.split(','))
            };

            // Last declaration wins, position of the first is kept.
            rules.insert(key, rule);
        }

        #[cfg(feature = "tracing")]
        debug!("parsed schema DSL with {} entries", rules.len());

        Self { rules }
    }
}

/// Build a rule from comma-separated tokens, applied left to right.
///
/// Later tokens override earlier ones for scalar fields. Unknown tokens are
/// silently ignored. `min:`/`max:` suffixes that fail integer parsing leave
/// the bound absent.
pub(crate) fn parse_rule_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> Rule {
    let mut rule = Rule::default();

    for token in tokens {
        let token = token.trim();

        if token == "required" {
            rule.required = true;
        } else if token == "optional" {
            rule.required = false;
        } else if token == "secret" {
            rule.secret = true;
        } else if let Some(value_type) = ValueType::from_token(token) {
            rule.value_type = value_type;
        } else if let Some(rest) = token.strip_prefix("default:") {
            rule.default = Some(rest.to_string());
        } else if let Some(rest) = token.strip_prefix("min:") {
            rule.min = rest.parse().ok();
        } else if let Some(rest) = token.strip_prefix("max:") {
            rule.max = rest.parse().ok();
        } else if let Some(rest) = token.strip_prefix("pattern:") {
            rule.pattern = Some(rest.to_string());
        } else if let Some(rest) = token.strip_prefix("enum:") {
            rule.allowed = Some(rest.split('|').map(|s| s.trim().to_string()).collect());
        }
    }

    rule
}
