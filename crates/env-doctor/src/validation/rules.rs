//! Schema-driven validation of parsed env files.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::envfile::EnvFile;
use crate::schema::{Schema, ValueType};

use super::issue::Issue;

static URL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://.+").unwrap());
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static IPV4_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,3}\.){3}\d{1,3}$").unwrap());

/// Validate an env file against a schema.
///
/// Checks every schema key in declaration order. A key can accumulate
/// multiple issues, except that a missing-or-empty required variable
/// short-circuits the remaining checks for that key. A rule pattern that
/// fails to compile downgrades to a warning and never aborts the run.
pub fn validate(env: &EnvFile, schema: &Schema) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (key, rule) in schema.iter() {
        let value = env.value(key);

        if rule.required && value.is_none_or(str::is_empty) {
            issues.push(Issue::error(key, "Required variable is missing or empty"));
            continue;
        }

        let Some(value) = value else {
            continue;
        };

        // Empty is tolerated for optional variables.
        if value.is_empty() {
            continue;
        }

        if let Some(message) = check_type(value, rule.value_type) {
            issues.push(Issue::error(key, message));
        }

        let length = value.chars().count();
        if let Some(min) = rule.min {
            if length < min {
                issues.push(Issue::error(
                    key,
                    format!("Value too short ({length} < {min})"),
                ));
            }
        }
        if let Some(max) = rule.max {
            if length > max {
                issues.push(Issue::error(
                    key,
                    format!("Value too long ({length} > {max})"),
                ));
            }
        }

        if let Some(pattern) = &rule.pattern {
            match Regex::new(pattern) {
                Ok(re) => {
                    if !re.is_match(value) {
                        issues.push(Issue::error(
                            key,
                            format!("Value doesn't match pattern: {pattern}"),
                        ));
                    }
                }
                Err(_) => {
                    issues.push(Issue::warn(
                        key,
                        format!("Invalid regex pattern in schema: {pattern}"),
                    ));
                }
            }
        }

        if let Some(allowed) = &rule.allowed {
            if !allowed.iter().any(|candidate| candidate == value) {
                issues.push(Issue::error(
                    key,
                    format!("Value must be one of: {}", allowed.join(", ")),
                ));
            }
        }
    }

    issues
}

/// Check a non-empty value against a type; `Some(message)` on mismatch.
fn check_type(value: &str, value_type: ValueType) -> Option<String> {
    let matches = match value_type {
        ValueType::String => true,
        ValueType::Number => {
            let trimmed = value.trim();
            !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
        }
        ValueType::Boolean => matches!(
            value.to_lowercase().as_str(),
            "true" | "false" | "0" | "1" | "yes" | "no"
        ),
        ValueType::Url => URL_SHAPE.is_match(value),
        ValueType::Email => EMAIL_SHAPE.is_match(value),
        ValueType::Ip => IPV4_SHAPE.is_match(value),
    };

    if matches {
        None
    } else {
        Some(format!(
            "Expected {}, got: \"{value}\"",
            type_article(value_type)
        ))
    }
}

fn type_article(value_type: ValueType) -> &'static str {
    match value_type {
        ValueType::String => "a string",
        ValueType::Number => "a number",
        ValueType::Boolean => "a boolean",
        ValueType::Url => "a URL",
        ValueType::Email => "an email",
        ValueType::Ip => "an IP address",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Severity;

    fn env(content: &str) -> EnvFile {
        EnvFile::parse(content)
    }

    fn schema(dsl: &str) -> Schema {
        Schema::parse_dsl(dsl)
    }

    #[test]
    fn test_required_missing() {
        let issues = validate(&env(""), &schema("DB_URL=required,url"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert!(issues[0].message.to_lowercase().contains("missing"));
    }

    #[test]
    fn test_required_empty() {
        let issues = validate(&env("DB_URL="), &schema("DB_URL=required,url"));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("missing or empty"));
    }

    #[test]
    fn test_required_short_circuits_other_checks() {
        let issues = validate(&env(""), &schema("DB_URL=required,url,min:10"));
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_valid_required_variable_passes() {
        let issues = validate(
            &env("DB_URL=http://localhost:5432"),
            &schema("DB_URL=required,url"),
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_number_type() {
        let issues = validate(&env("PORT=abc"), &schema("PORT=required,number"));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.to_lowercase().contains("number"));
    }

    #[test]
    fn test_number_accepts_float() {
        let issues = validate(&env("RATIO=0.75"), &schema("RATIO=number"));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_boolean_type() {
        let issues = validate(&env("DEBUG=maybe"), &schema("DEBUG=boolean"));
        assert_eq!(issues.len(), 1);

        for ok in ["true", "FALSE", "0", "1", "yes", "No"] {
            let issues = validate(&env(&format!("DEBUG={ok}")), &schema("DEBUG=boolean"));
            assert!(issues.is_empty(), "{ok} should be a valid boolean");
        }
    }

    #[test]
    fn test_email_type() {
        let issues = validate(&env("MAIL=not-an-email"), &schema("MAIL=email"));
        assert_eq!(issues.len(), 1);

        let issues = validate(&env("MAIL=a@b.com"), &schema("MAIL=email"));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_ip_type_is_syntactic_only() {
        let issues = validate(&env("HOST=10.0.0.1"), &schema("HOST=ip"));
        assert!(issues.is_empty());

        // Out-of-range groups still match the shape.
        let issues = validate(&env("HOST=999.999.999.999"), &schema("HOST=ip"));
        assert!(issues.is_empty());

        let issues = validate(&env("HOST=localhost"), &schema("HOST=ip"));
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_min_length() {
        let issues = validate(&env("KEY=ab"), &schema("KEY=required,min:5"));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.to_lowercase().contains("short"));
    }

    #[test]
    fn test_max_length() {
        let issues = validate(&env("KEY=abcdefghij"), &schema("KEY=max:5"));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.to_lowercase().contains("long"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let issues = validate(&env("NAME=héllo"), &schema("NAME=max:5"));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_pattern_mismatch() {
        let issues = validate(&env("APP=Hello World"), &schema("APP=pattern:^[a-z-]+$"));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("pattern"));
    }

    #[test]
    fn test_invalid_pattern_downgrades_to_warning() {
        let issues = validate(&env("APP=anything"), &schema("APP=pattern:[unclosed"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].message.contains("Invalid regex"));
    }

    #[test]
    fn test_enum_membership_is_case_sensitive() {
        let issues = validate(&env("ENV=test"), &schema("ENV=enum:dev|staging|prod"));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("one of"));

        let issues = validate(&env("ENV=DEV"), &schema("ENV=enum:dev|staging|prod"));
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_optional_missing_is_skipped() {
        let issues = validate(&env(""), &schema("OPT=string"));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_optional_empty_is_tolerated() {
        let issues = validate(&env("OPT="), &schema("OPT=number,min:3"));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_multiple_issues_accumulate_for_one_key() {
        let issues = validate(
            &env("KEY=zz"),
            &schema("KEY=number,min:5,pattern:^[0-9]+$"),
        );
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn test_issues_follow_schema_declaration_order() {
        let issues = validate(&env(""), &schema("B=required\nA=required"));
        assert_eq!(issues[0].key, "B");
        assert_eq!(issues[1].key, "A");
    }

    #[test]
    fn test_unconstrained_env_keys_are_ignored() {
        let issues = validate(&env("EXTRA=anything"), &schema("OTHER=string"));
        assert!(issues.is_empty());
    }
}
