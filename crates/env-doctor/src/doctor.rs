//! File-level operations: resolve inputs through storage, run the engines.

use std::path::Path;

use serde::Serialize;

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::envfile::EnvFile;
use crate::error::{EnvDoctorError, Result};
use crate::generate;
use crate::mask;
use crate::reconcile::{ReconciliationPlan, Reference, ReferenceKind};
use crate::schema::Schema;
use crate::storage::{FsStorage, Storage};
use crate::validation::{self, Issue};

/// File-name configuration for doctor operations.
#[derive(Debug, Clone)]
pub struct DoctorConfig {
    /// Env file name.
    pub env_file: String,
    /// Schema file name.
    pub schema_file: String,
    /// Example file name.
    pub example_file: String,
}

impl Default for DoctorConfig {
    fn default() -> Self {
        Self {
            env_file: ".env".to_string(),
            schema_file: ".env.schema".to_string(),
            example_file: ".env.example".to_string(),
        }
    }
}

/// Options for [`EnvDoctor::check`].
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Env file name override.
    pub env_file: Option<String>,
    /// Example file name override.
    pub example_file: Option<String>,
    /// Run the schema-free heuristic checks too.
    pub heuristics: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            env_file: None,
            example_file: None,
            heuristics: true,
        }
    }
}

/// Aggregate outcome of a check run, for exit-status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckOutcome {
    /// No findings at all.
    Clean,
    /// Warning-level findings only.
    Warnings,
    /// At least one error-level finding.
    Errors,
}

/// Example-mode coverage: how many reference keys the env file declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub present: usize,
    pub total: usize,
}

impl Coverage {
    /// Coverage as a rounded percentage; 100 when the reference is empty.
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            100
        } else {
            ((self.present as f64 / self.total as f64) * 100.0).round() as usize
        }
    }
}

/// Structured result of a check run.
///
/// The report is data only; rendering and exit codes belong to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Which kind of reference the env file was checked against.
    pub reference: ReferenceKind,
    /// Rule findings, in schema declaration order (schema mode).
    pub issues: Vec<Issue>,
    /// Schema-free findings, in env file order.
    pub heuristic_issues: Vec<Issue>,
    /// Reference keys absent from the env file (example mode; one error each).
    pub missing: Vec<String>,
    /// Optional schema keys not set (schema mode; informational).
    pub missing_optional: Vec<String>,
    /// Env keys the reference does not declare (one warning each).
    pub extra: Vec<String>,
    /// Example-mode coverage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Coverage>,
    /// Total error-level findings.
    pub errors: usize,
    /// Total warning-level findings.
    pub warnings: usize,
}

impl CheckReport {
    /// Map the counts onto the three-way exit-status contract.
    pub fn outcome(&self) -> CheckOutcome {
        if self.errors > 0 {
            CheckOutcome::Errors
        } else if self.warnings > 0 {
            CheckOutcome::Warnings
        } else {
            CheckOutcome::Clean
        }
    }
}

/// Ties storage, the parsers, and the engines into file-level operations.
pub struct EnvDoctor<S = FsStorage> {
    storage: S,
    config: DoctorConfig,
}

impl EnvDoctor<FsStorage> {
    /// Create a doctor over the local filesystem with default file names.
    pub fn new() -> Self {
        Self::with_storage(FsStorage, DoctorConfig::default())
    }
}

impl Default for EnvDoctor<FsStorage> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Storage> EnvDoctor<S> {
    /// Create a doctor over a custom storage capability.
    pub fn with_storage(storage: S, config: DoctorConfig) -> Self {
        Self { storage, config }
    }

    /// The file-name configuration.
    pub fn config(&self) -> &DoctorConfig {
        &self.config
    }

    /// Read and parse an env file; `None` when absent.
    pub fn read_env(&self, path: &Path) -> Result<Option<EnvFile>> {
        Ok(self
            .storage
            .read_string(path)?
            .map(|content| EnvFile::parse(&content)))
    }

    /// Read and parse an env file, failing when absent.
    pub fn require_env(&self, path: &Path) -> Result<EnvFile> {
        self.read_env(path)?
            .ok_or_else(|| EnvDoctorError::NotFound(path.to_path_buf()))
    }

    /// Read and parse a schema file; `None` when absent.
    pub fn read_schema(&self, path: &Path) -> Result<Option<Schema>> {
        Ok(self
            .storage
            .read_string(path)?
            .map(|content| Schema::parse(&content)))
    }

    /// Resolve what to validate or reconcile against.
    ///
    /// An explicitly named schema file must exist. Otherwise the configured
    /// schema file is preferred, then the example file; when neither exists
    /// the caller gets a structural error before any engine runs.
    pub fn resolve_reference(
        &self,
        dir: &Path,
        schema_override: Option<&str>,
        example_override: Option<&str>,
    ) -> Result<Reference> {
        if let Some(name) = schema_override {
            let path = dir.join(name);
            let content = self
                .storage
                .read_string(&path)?
                .ok_or(EnvDoctorError::NotFound(path))?;
            return Ok(Reference::Schema(Schema::parse(&content)));
        }

        let schema_path = dir.join(&self.config.schema_file);
        if let Some(content) = self.storage.read_string(&schema_path)? {
            return Ok(Reference::Schema(Schema::parse(&content)));
        }

        let example_path = dir.join(example_override.unwrap_or(&self.config.example_file));
        if let Some(content) = self.storage.read_string(&example_path)? {
            return Ok(Reference::Example(EnvFile::parse(&content)));
        }

        Err(EnvDoctorError::NoReference(dir.to_path_buf()))
    }

    /// Validate the env file in `dir` against its schema or example.
    pub fn check(&self, dir: &Path, options: &CheckOptions) -> Result<CheckReport> {
        let env_name = options.env_file.as_deref().unwrap_or(&self.config.env_file);
        let env = self.require_env(&dir.join(env_name))?;
        let reference = self.resolve_reference(dir, None, options.example_file.as_deref())?;

        let mut report = CheckReport {
            reference: reference.kind(),
            issues: Vec::new(),
            heuristic_issues: Vec::new(),
            missing: Vec::new(),
            missing_optional: Vec::new(),
            extra: Vec::new(),
            coverage: None,
            errors: 0,
            warnings: 0,
        };

        match &reference {
            Reference::Schema(schema) => {
                report.issues = validation::validate(&env, schema);
                for issue in &report.issues {
                    if issue.is_error() {
                        report.errors += 1;
                    } else {
                        report.warnings += 1;
                    }
                }

                report.missing_optional = schema
                    .iter()
                    .filter(|(key, rule)| !rule.required && !env.contains(key))
                    .map(|(key, _)| key.to_string())
                    .collect();

                report.extra = env
                    .keys()
                    .filter(|key| !schema.contains(key))
                    .map(String::from)
                    .collect();
                report.warnings += report.extra.len();
            }
            Reference::Example(example) => {
                report.missing = example
                    .keys()
                    .filter(|key| !env.contains(key))
                    .map(String::from)
                    .collect();
                report.errors += report.missing.len();

                report.extra = env
                    .keys()
                    .filter(|key| !example.contains(key))
                    .map(String::from)
                    .collect();
                report.warnings += report.extra.len();

                report.coverage = Some(Coverage {
                    present: example.len() - report.missing.len(),
                    total: example.len(),
                });
            }
        }

        if options.heuristics {
            for (key, var) in &env.vars {
                for issue in validation::detect_issues(key, &var.value) {
                    if issue.is_error() {
                        report.errors += 1;
                    } else {
                        report.warnings += 1;
                    }
                    report.heuristic_issues.push(issue);
                }
            }
        }

        #[cfg(feature = "tracing")]
        debug!(
            errors = report.errors,
            warnings = report.warnings,
            "check complete"
        );

        Ok(report)
    }

    /// Write a computed plan as a single whole-file replacement.
    ///
    /// Returns `false`, without touching the file, when the plan is a no-op.
    pub fn write_plan(&self, path: &Path, plan: &ReconciliationPlan) -> Result<bool> {
        if plan.is_noop() {
            return Ok(false);
        }
        self.storage.write(path, plan.content.as_bytes())?;
        Ok(true)
    }

    /// Masked rendering of the env file in `dir`.
    pub fn mask(&self, dir: &Path, env_file: Option<&str>, mask_all: bool) -> Result<String> {
        let env_name = env_file.unwrap_or(&self.config.env_file);
        let path = dir.join(env_name);
        let content = self
            .storage
            .read_string(&path)?
            .ok_or(EnvDoctorError::NotFound(path))?;
        let schema = self.read_schema(&dir.join(&self.config.schema_file))?;
        Ok(mask::mask_content(&content, schema.as_ref(), mask_all))
    }

    /// Example scaffold from the env file in `dir`, with its variable count.
    pub fn example_scaffold(
        &self,
        dir: &Path,
        env_file: Option<&str>,
        strip_values: bool,
    ) -> Result<(String, usize)> {
        let env_name = env_file.unwrap_or(&self.config.env_file);
        let env = self.require_env(&dir.join(env_name))?;
        Ok((generate::example_from_env(&env, strip_values), env.len()))
    }

    /// Schema scaffold from the env file in `dir`, with its variable count.
    pub fn schema_scaffold(&self, dir: &Path, env_file: Option<&str>) -> Result<(String, usize)> {
        let env_name = env_file.unwrap_or(&self.config.env_file);
        let env = self.require_env(&dir.join(env_name))?;
        Ok((generate::schema_from_env(&env), env.len()))
    }

    /// Write generated content, refusing to overwrite without `force`.
    pub fn write_new(&self, path: &Path, content: &str, force: bool) -> Result<()> {
        if self.storage.exists(path) && !force {
            return Err(EnvDoctorError::AlreadyExists(path.to_path_buf()));
        }
        self.storage.write(path, content.as_bytes())
    }

    /// Write arbitrary content through the storage capability.
    pub fn write(&self, path: &Path, content: &str) -> Result<()> {
        self.storage.write(path, content.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn doctor() -> EnvDoctor {
        EnvDoctor::new()
    }

    #[test]
    fn test_check_against_schema() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".env"), "PORT=8080\nSTRAY=1\n").unwrap();
        fs::write(
            dir.path().join(".env.schema"),
            "PORT=required,number\nDB_URL=required,url\nOPT=string\n",
        )
        .unwrap();

        let report = doctor().check(dir.path(), &CheckOptions::default()).unwrap();

        assert_eq!(report.reference, ReferenceKind::Schema);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].key, "DB_URL");
        assert_eq!(report.missing_optional, vec!["OPT"]);
        assert_eq!(report.extra, vec!["STRAY"]);
        assert_eq!(report.outcome(), CheckOutcome::Errors);
    }

    #[test]
    fn test_check_against_example() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".env"), "A=1\nEXTRA=x\n").unwrap();
        fs::write(dir.path().join(".env.example"), "A=\nB=\n").unwrap();

        let report = doctor().check(dir.path(), &CheckOptions::default()).unwrap();

        assert_eq!(report.reference, ReferenceKind::Example);
        assert_eq!(report.missing, vec!["B"]);
        assert_eq!(report.extra, vec!["EXTRA"]);
        let coverage = report.coverage.unwrap();
        assert_eq!((coverage.present, coverage.total), (1, 2));
        assert_eq!(coverage.percent(), 50);
    }

    #[test]
    fn test_check_schema_preferred_over_example() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".env"), "A=1\n").unwrap();
        fs::write(dir.path().join(".env.schema"), "A=required\n").unwrap();
        fs::write(dir.path().join(".env.example"), "A=\nB=\n").unwrap();

        let report = doctor().check(dir.path(), &CheckOptions::default()).unwrap();
        assert_eq!(report.reference, ReferenceKind::Schema);
        assert_eq!(report.outcome(), CheckOutcome::Clean);
    }

    #[test]
    fn test_check_heuristics_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".env"), "API_KEY=changeme\n").unwrap();
        fs::write(dir.path().join(".env.schema"), "API_KEY=required\n").unwrap();

        let with = doctor().check(dir.path(), &CheckOptions::default()).unwrap();
        assert_eq!(with.heuristic_issues.len(), 1);
        assert_eq!(with.outcome(), CheckOutcome::Errors);

        let without = doctor()
            .check(
                dir.path(),
                &CheckOptions {
                    heuristics: false,
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(without.heuristic_issues.is_empty());
        assert_eq!(without.outcome(), CheckOutcome::Clean);
    }

    #[test]
    fn test_check_without_reference_is_structural_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".env"), "A=1\n").unwrap();

        let err = doctor()
            .check(dir.path(), &CheckOptions::default())
            .unwrap_err();
        assert!(matches!(err, EnvDoctorError::NoReference(_)));
    }

    #[test]
    fn test_check_missing_env_is_structural_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".env.schema"), "A=required\n").unwrap();

        let err = doctor()
            .check(dir.path(), &CheckOptions::default())
            .unwrap_err();
        assert!(matches!(err, EnvDoctorError::NotFound(_)));
    }

    #[test]
    fn test_resolve_reference_explicit_schema_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = doctor()
            .resolve_reference(dir.path(), Some("custom.schema"), None)
            .unwrap_err();
        assert!(matches!(err, EnvDoctorError::NotFound(_)));
    }

    #[test]
    fn test_write_plan_skips_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "A=1\n").unwrap();

        let env = EnvFile::parse("A=1\n");
        let schema = Schema::parse_dsl("A=string");
        let plan =
            crate::reconcile::plan_fix(Some(&env), &schema, crate::reconcile::FixOptions::default());

        let written = doctor().write_plan(&path, &plan).unwrap();
        assert!(!written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "A=1\n");
    }

    #[test]
    fn test_write_new_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env.example");
        fs::write(&path, "OLD=\n").unwrap();

        let d = doctor();
        let err = d.write_new(&path, "NEW=\n", false).unwrap_err();
        assert!(matches!(err, EnvDoctorError::AlreadyExists(_)));

        d.write_new(&path, "NEW=\n", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "NEW=\n");
    }
}
