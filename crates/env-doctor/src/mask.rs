//! Masking of sensitive values in env file text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::Schema;

static SENSITIVE_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)password|secret|key|token|api_key|apikey|auth|credential|private").unwrap()
});

/// Whether a key name should be treated as sensitive when masking or
/// scaffolding example files.
pub(crate) fn is_sensitive_key(key: &str) -> bool {
    SENSITIVE_KEY.is_match(key)
}

/// Render env text with sensitive values masked.
///
/// Works on the raw text line by line, so comments, blank lines, and layout
/// survive untouched. A key is sensitive when `mask_all` is set, when its
/// name matches the sensitive pattern, or when its schema rule says
/// `secret`. Empty values stay empty.
pub fn mask_content(content: &str, schema: Option<&Schema>, mask_all: bool) -> String {
    let lines: Vec<String> = content
        .split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return line.to_string();
            }
            let Some((key_part, value_part)) = trimmed.split_once('=') else {
                return line.to_string();
            };

            let key = key_part.trim();
            let value = value_part.trim();

            let sensitive = mask_all
                || is_sensitive_key(key)
                || schema
                    .and_then(|schema| schema.get(key))
                    .is_some_and(|rule| rule.secret);

            if sensitive && !value.is_empty() {
                format!("{key}={}", mask_value(value))
            } else {
                line.to_string()
            }
        })
        .collect();

    lines.join("\n")
}

/// Mask a single raw value, preserving surrounding quotes.
fn mask_value(value: &str) -> String {
    let bytes = value.as_bytes();
    let quoted = bytes.len() >= 2 && {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'')
    };

    if quoted {
        let quote = &value[..1];
        let inner = &value[1..value.len() - 1];
        format!("{quote}{}{quote}", mask_plain(inner))
    } else {
        mask_plain(value)
    }
}

/// Keep the first three characters, replace the rest with stars (at least
/// five), or `***` for very short values.
fn mask_plain(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 3 {
        "***".to_string()
    } else {
        let prefix: String = chars[..3].iter().collect();
        let stars = "*".repeat((chars.len() - 3).max(5));
        format!("{prefix}{stars}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_sensitive_key_names() {
        let masked = mask_content("API_KEY=abcdef123456\nAPP_NAME=demo\n", None, false);
        assert!(masked.contains("API_KEY=abc"));
        assert!(!masked.contains("abcdef123456"));
        assert!(masked.contains("APP_NAME=demo"));
    }

    #[test]
    fn test_short_values_fully_masked() {
        let masked = mask_content("TOKEN=abc\n", None, false);
        assert!(masked.contains("TOKEN=***"));
    }

    #[test]
    fn test_preserves_quotes() {
        let masked = mask_content("SECRET=\"super secret value\"\n", None, false);
        assert!(masked.contains("SECRET=\"sup"));
        assert!(masked.ends_with("\"\n"));
    }

    #[test]
    fn test_schema_secret_rule_masks_unsuspicious_name() {
        let schema = Schema::parse_dsl("LICENSE_CODE=secret");
        let masked = mask_content("LICENSE_CODE=abcd1234\n", Some(&schema), false);
        assert!(!masked.contains("abcd1234"));
    }

    #[test]
    fn test_mask_all_masks_everything() {
        let masked = mask_content("APP_NAME=demo-app\n", None, true);
        assert!(!masked.contains("demo-app"));
        assert!(masked.contains("APP_NAME=dem"));
    }

    #[test]
    fn test_comments_blanks_and_layout_survive() {
        let content = "# header\n\nNOT_A_VAR\nPASSWORD=hunter42\n";
        let masked = mask_content(content, None, false);
        assert!(masked.starts_with("# header\n\nNOT_A_VAR\n"));
        assert!(masked.ends_with("\n"));
    }

    #[test]
    fn test_empty_sensitive_value_left_alone() {
        let masked = mask_content("API_KEY=\n", None, false);
        assert_eq!(masked, "API_KEY=\n");
    }

    #[test]
    fn test_star_count_scales_with_length() {
        let masked = mask_content("PASSWORD=abcdefghijkl\n", None, false);
        // 12 chars: 3 kept + 9 stars.
        assert!(masked.contains(&format!("PASSWORD=abc{}", "*".repeat(9))));
    }
}
