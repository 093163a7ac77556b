//! Reconciliation between an env file and a schema or example reference.

mod diff;
mod fix;
mod plan;
mod reference;
mod sync;

pub use diff::{ChangedVar, Comparison, DiffLine, DiffOp, compare, line_diff};
pub use fix::{FixOptions, ORPHAN_BANNER, plan_fix};
pub use plan::{AddedVar, ReconciliationPlan, RemovedVar, ValueSource};
pub use reference::{Reference, ReferenceKind, ReferenceSource};
pub use sync::{PromptRequest, SYNC_BANNER, plan_sync, prompt_requests};
