//! env-doctor: schema-driven diagnosis and reconciliation of `.env` files.
//!
//! env-doctor parses env files into an order-preserving representation,
//! validates them against a declarative schema (or an example file), and
//! computes reconciliation plans that bring a file back in line with its
//! reference.
//!
//! # Core Principles
//!
//! - **Non-destructive**: plans are computed completely before a single
//!   whole-file write; orphan removal demotes to comments, never deletes
//!   data.
//! - **Lenient parsing**: malformed env or schema lines are skipped, not
//!   fatal; validation findings accumulate as values instead of aborting.
//! - **Injected I/O**: parsing and planning never touch the filesystem
//!   themselves; file access goes through the [`storage::Storage`]
//!   capability.
//!
//! # Example
//!
//! ```
//! use env_doctor::{EnvFile, Schema, validation};
//!
//! let env = EnvFile::parse("PORT=8080\n");
//! let schema = Schema::parse("PORT=required,number\nDB_URL=required,url");
//!
//! let issues = validation::validate(&env, &schema);
//! assert_eq!(issues.len(), 1);
//! assert_eq!(issues[0].key, "DB_URL");
//! ```

pub mod envfile;
pub mod error;
pub mod generate;
pub mod mask;
pub mod reconcile;
pub mod schema;
pub mod storage;
pub mod validation;

mod doctor;

pub use crate::doctor::{
    CheckOptions, CheckOutcome, CheckReport, Coverage, DoctorConfig, EnvDoctor,
};
pub use envfile::{EnvFile, EnvVar};
pub use error::{EnvDoctorError, Result};
pub use reconcile::{
    AddedVar, Comparison, DiffLine, DiffOp, FixOptions, PromptRequest, ReconciliationPlan,
    Reference, ReferenceKind, RemovedVar, ValueSource,
};
pub use schema::{Rule, Schema, ValueType};
pub use validation::{Issue, Severity};
