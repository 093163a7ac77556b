//! Rule evaluation and schema-free heuristic checks.

mod heuristics;
mod issue;
mod rules;

pub use heuristics::{detect_issues, infer_type};
pub use issue::{Issue, Severity};
pub use rules::validate;
