//! Schema-free checks that run on any env file.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::ValueType;

use super::issue::Issue;

static SENSITIVE_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)password|secret|key|token|api_key|apikey|auth|credential").unwrap()
});
static PORT_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)port").unwrap());

static INTEGER_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());
static DECIMAL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+$").unwrap());
static URL_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://").unwrap());
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Placeholder values that must never survive on a sensitive variable.
const WEAK_VALUES: &[&str] = &["changeme", "password", "123456", "secret", "test", "example"];

/// Detect common problems in a single variable without any schema.
pub fn detect_issues(key: &str, value: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    if value.is_empty() {
        issues.push(Issue::warn(key, "Empty value"));
        return issues;
    }

    if SENSITIVE_KEY.is_match(key) {
        let lowered = value.to_lowercase();
        if WEAK_VALUES.contains(&lowered.as_str()) {
            issues.push(Issue::error(
                key,
                "Insecure default value for sensitive variable",
            ));
        }
    }

    if PORT_KEY.is_match(key) {
        let port = value.parse::<u32>();
        if !matches!(port, Ok(1..=65535)) {
            issues.push(Issue::error(key, "Invalid port number"));
        }
    }

    issues
}

/// Infer the likely type of a value, for schema scaffolding.
pub fn infer_type(value: &str) -> ValueType {
    if value.is_empty() {
        return ValueType::String;
    }
    if value == "true" || value == "false" {
        return ValueType::Boolean;
    }
    if INTEGER_SHAPE.is_match(value) || DECIMAL_SHAPE.is_match(value) {
        return ValueType::Number;
    }
    if URL_PREFIX.is_match(value) {
        return ValueType::Url;
    }
    if EMAIL_SHAPE.is_match(value) {
        return ValueType::Email;
    }
    ValueType::String
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Severity;

    #[test]
    fn test_empty_value_warns() {
        let issues = detect_issues("ANYTHING", "");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].message, "Empty value");
    }

    #[test]
    fn test_insecure_default_on_sensitive_key() {
        let issues = detect_issues("API_KEY", "changeme");
        assert!(issues.iter().any(Issue::is_error));

        let issues = detect_issues("DB_PASSWORD", "Secret");
        assert!(issues.iter().any(Issue::is_error));
    }

    #[test]
    fn test_strong_value_on_sensitive_key_passes() {
        let issues = detect_issues("API_KEY", "f3a91c0d77b24e5f");
        assert!(issues.is_empty());
    }

    #[test]
    fn test_weak_value_on_ordinary_key_passes() {
        let issues = detect_issues("GREETING", "password");
        assert!(issues.is_empty());
    }

    #[test]
    fn test_invalid_port_numbers() {
        assert!(detect_issues("APP_PORT", "99999").iter().any(Issue::is_error));
        assert!(detect_issues("PORT", "0").iter().any(Issue::is_error));
        assert!(detect_issues("port", "abc").iter().any(Issue::is_error));
        assert!(detect_issues("PORT", "8080").is_empty());
    }

    #[test]
    fn test_normal_value_is_clean() {
        assert!(detect_issues("APP_NAME", "my-app").is_empty());
    }

    #[test]
    fn test_infer_type() {
        assert_eq!(infer_type("true"), ValueType::Boolean);
        assert_eq!(infer_type("3000"), ValueType::Number);
        assert_eq!(infer_type("3.14"), ValueType::Number);
        assert_eq!(infer_type("https://example.com"), ValueType::Url);
        assert_eq!(infer_type("a@b.com"), ValueType::Email);
        assert_eq!(infer_type("hello"), ValueType::String);
        assert_eq!(infer_type(""), ValueType::String);
    }
}
