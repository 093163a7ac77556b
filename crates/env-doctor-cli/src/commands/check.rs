//! Check command - validate .env against its schema or example.

use std::path::PathBuf;

use colored::Colorize;
use env_doctor::{CheckOptions, CheckOutcome, EnvDoctor, ReferenceKind};

use crate::report;

pub fn run(
    dir: PathBuf,
    env: Option<String>,
    example: Option<String>,
    strict: bool,
    no_heuristics: bool,
    json: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let doctor = EnvDoctor::new();

    let options = CheckOptions {
        env_file: env.clone(),
        example_file: example.clone(),
        heuristics: !no_heuristics,
    };
    let check = doctor.check(&dir, &options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&check)?);
    } else {
        let env_name = env.as_deref().unwrap_or(&doctor.config().env_file);
        let source = match check.reference {
            ReferenceKind::Schema => doctor.config().schema_file.clone(),
            ReferenceKind::Example => example
                .unwrap_or_else(|| doctor.config().example_file.clone()),
        };
        println!(
            "{}",
            report::heading(&format!("Checking {env_name} against {source}"))
        );

        if !check.issues.is_empty() {
            report::print_issues(&check.issues);
        }

        if !check.missing.is_empty() {
            println!("  {}", "Missing variables:".red());
            for key in &check.missing {
                println!("    {} {}", "✗".red(), key.bold());
            }
            println!();
        }

        if !check.missing_optional.is_empty() {
            println!(
                "  {}",
                format!(
                    "ℹ {} optional variable(s) not set: {}",
                    check.missing_optional.len(),
                    check.missing_optional.join(", ")
                )
                .dimmed()
            );
            println!();
        }

        if !check.extra.is_empty() {
            println!(
                "  {}",
                format!(
                    "⚠ {} variable(s) not in {source}: {}",
                    check.extra.len(),
                    check.extra.join(", ")
                )
                .yellow()
            );
            println!();
        }

        if let Some(coverage) = check.coverage {
            println!(
                "  {}",
                format!(
                    "Coverage: {}/{} ({}%)",
                    coverage.present,
                    coverage.total,
                    coverage.percent()
                )
                .dimmed()
            );
            println!();
        }

        if !check.heuristic_issues.is_empty() {
            println!("{}", report::heading("Heuristic Warnings"));
            report::print_issues(&check.heuristic_issues);
        }

        report::print_summary(check.errors, check.warnings);
    }

    let code = match check.outcome() {
        CheckOutcome::Errors => 1,
        CheckOutcome::Warnings if strict => 1,
        _ => 0,
    };
    Ok(code)
}
