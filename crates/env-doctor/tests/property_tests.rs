//! Property-based tests for the parser and reconciliation engines.
//!
//! These tests use proptest to generate random inputs and verify the
//! algebraic contracts of the core:
//!
//! 1. **Round-trip**: rendering a parsed canonical file reproduces it
//! 2. **Idempotence**: a plan computed against its own output is empty
//! 3. **No panics**: parsers accept arbitrary text
//!
//! Run with more cases via `PROPTEST_CASES=10000 cargo test -p env-doctor
//! --test property_tests`.

use std::collections::{BTreeMap, HashMap};

use proptest::prelude::*;

use env_doctor::reconcile::{FixOptions, Reference, plan_fix, plan_sync};
use env_doctor::{EnvFile, Schema};

// =============================================================================
// Test Strategies
// =============================================================================

/// Canonical variable names.
fn key() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,10}"
}

/// Values that survive parsing untouched: no quotes, no inline-comment
/// trigger, no surrounding whitespace.
fn value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./:=-]{0,12}"
}

/// A canonical env file: unique keys, `KEY=value` lines only.
fn canonical_env() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(key(), value(), 0..8)
}

/// Rule token lists the DSL accepts.
fn rule_tokens() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("required".to_string()),
        Just("string".to_string()),
        Just("number,default:3000".to_string()),
        Just("required,url".to_string()),
        Just("default:fallback".to_string()),
        Just("boolean,default:false".to_string()),
    ]
}

/// A schema over random keys (some may collide with env keys).
fn schema_dsl() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(key(), rule_tokens(), 0..8)
}

fn render_env(vars: &BTreeMap<String, String>) -> String {
    let lines: Vec<String> = vars
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    format!("{}\n", lines.join("\n"))
}

fn render_schema(rules: &BTreeMap<String, String>) -> String {
    let lines: Vec<String> = rules
        .iter()
        .map(|(key, tokens)| format!("{key}={tokens}"))
        .collect();
    format!("{}\n", lines.join("\n"))
}

// =============================================================================
// Round-Trip Properties
// =============================================================================

proptest! {
    /// Rendering a parsed canonical file reproduces the text exactly.
    #[test]
    fn round_trip_canonical_text(vars in canonical_env()) {
        let text = render_env(&vars);
        let env = EnvFile::parse(&text);

        // An empty schema plans no changes, so the content is the render.
        let plan = plan_fix(Some(&env), &Schema::default(), FixOptions::default());
        prop_assert_eq!(plan.content, text);
    }

    /// Parsing never panics on arbitrary text.
    #[test]
    fn parse_accepts_arbitrary_text(text in "\\PC{0,200}") {
        let _ = EnvFile::parse(&text);
        let _ = Schema::parse(&text);
    }

    /// Parsing is deterministic.
    #[test]
    fn parse_is_deterministic(text in "\\PC{0,200}") {
        prop_assert_eq!(EnvFile::parse(&text), EnvFile::parse(&text));
    }
}

// =============================================================================
// Idempotence Properties
// =============================================================================

proptest! {
    /// A fix plan computed against its own rendering adds nothing, orphans
    /// nothing, and reorders nothing.
    #[test]
    fn fix_is_idempotent(
        vars in canonical_env(),
        rules in schema_dsl(),
        sort in any::<bool>(),
        remove_orphans in any::<bool>(),
    ) {
        let schema = Schema::parse_dsl(&render_schema(&rules));
        let env = EnvFile::parse(&render_env(&vars));
        let options = FixOptions { sort, remove_orphans };

        let first = plan_fix(Some(&env), &schema, options);
        let fixed = EnvFile::parse(&first.content);
        let second = plan_fix(Some(&fixed), &schema, options);

        prop_assert!(second.added.is_empty());
        prop_assert!(second.removed.is_empty());
        prop_assert!(!second.reordered);
    }

    /// A sync plan computed against its own rendering is a no-op, and the
    /// second rendering is byte-identical.
    #[test]
    fn sync_is_idempotent(vars in canonical_env(), rules in schema_dsl()) {
        let reference = Reference::Schema(Schema::parse_dsl(&render_schema(&rules)));
        let env = EnvFile::parse(&render_env(&vars));
        let answers = HashMap::new();

        let first = plan_sync(Some(&env), &reference, &answers);
        let synced = EnvFile::parse(&first.content);
        let second = plan_sync(Some(&synced), &reference, &answers);

        prop_assert!(second.added.is_empty());
        prop_assert_eq!(second.content, first.content);
    }

    /// Fix output always contains every schema key.
    #[test]
    fn fix_output_covers_schema(vars in canonical_env(), rules in schema_dsl()) {
        let schema = Schema::parse_dsl(&render_schema(&rules));
        let env = EnvFile::parse(&render_env(&vars));

        let plan = plan_fix(Some(&env), &schema, FixOptions::default());
        let fixed = EnvFile::parse(&plan.content);

        for key in schema.keys() {
            prop_assert!(fixed.contains(key), "missing {} in output", key);
        }
    }
}
