//! Scaffolding of example and schema files from an existing env file.

use crate::envfile::EnvFile;
use crate::mask::is_sensitive_key;
use crate::validation::infer_type;

/// Render a `.env.example` from an env file.
///
/// Keeps the original layout and comments. Sensitive keys (and, with
/// `strip_values`, all keys) render as `KEY=`; other keys keep their parsed
/// value as the example.
pub fn example_from_env(env: &EnvFile, strip_values: bool) -> String {
    let lines: Vec<String> = env
        .raw
        .split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return line.to_string();
            }
            let Some((key_part, _)) = trimmed.split_once('=') else {
                return line.to_string();
            };

            let key = key_part.trim();
            let Some(var) = env.get(key) else {
                return line.to_string();
            };

            if strip_values || is_sensitive_key(key) {
                format!("{key}=")
            } else {
                format!("{key}={}", var.value)
            }
        })
        .collect();

    lines.join("\n")
}

/// Render a `.env.schema` DSL scaffold from an env file.
///
/// One `KEY=type` line per variable in file order, types inferred from the
/// current values; sensitive key names get the `secret` token.
pub fn schema_from_env(env: &EnvFile) -> String {
    let mut lines: Vec<String> = env
        .vars
        .iter()
        .map(|(key, var)| {
            let inferred = infer_type(&var.value).label();
            if is_sensitive_key(key) {
                format!("{key}={inferred},secret")
            } else {
                format!("{key}={inferred}")
            }
        })
        .collect();
    lines.push(String::new());
    lines.join("\n")
}
