//! Fix command - rewrite .env to match the schema.

use std::path::PathBuf;

use colored::Colorize;
use env_doctor::reconcile::{FixOptions, line_diff, plan_fix};
use env_doctor::EnvDoctor;

use crate::report;

pub fn run(
    dir: PathBuf,
    env: Option<String>,
    schema: Option<String>,
    sort: bool,
    remove_orphans: bool,
    dry_run: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let doctor = EnvDoctor::new();

    let schema_name = schema.unwrap_or_else(|| doctor.config().schema_file.clone());
    let schema_path = dir.join(&schema_name);
    let Some(schema) = doctor.read_schema(&schema_path)? else {
        return Err(format!(
            "Schema file not found: {}\nThe fix command requires a {schema_name} file.",
            schema_path.display()
        )
        .into());
    };

    let env_name = env.unwrap_or_else(|| doctor.config().env_file.clone());
    let env_path = dir.join(&env_name);
    let env = doctor.read_env(&env_path)?;

    let plan = plan_fix(
        env.as_ref(),
        &schema,
        FixOptions {
            sort,
            remove_orphans,
        },
    );

    if plan.is_noop() {
        println!(
            "{}",
            format!("\n✓ Nothing to fix - {env_name} is already in sync with schema!\n").green()
        );
        return Ok(0);
    }

    println!("{}", report::heading("env-doctor fix"));

    if !plan.added.is_empty() {
        report::print_fix_added(&plan.added);
    }

    if !plan.removed.is_empty() {
        println!(
            "  {} {} orphaned variable(s):",
            "Commented out".yellow(),
            plan.removed.len()
        );
        for removed in &plan.removed {
            println!("    {} {}", "-".yellow(), removed.key);
        }
        println!();
    }

    if plan.reordered {
        println!(
            "  {}",
            "↕ Reordered variables to match schema order".dimmed()
        );
        println!();
    }

    if !plan.original.is_empty() {
        let diff = line_diff(&plan.original, &plan.content);
        if diff.iter().any(|line| line.op != env_doctor::DiffOp::Context) {
            println!("{}", report::heading("Changes"));
            report::print_diff(&diff);
            println!();
        }
    }

    if dry_run {
        println!("  {}", "Dry run - no files were written.".dimmed());
        println!();
        return Ok(0);
    }

    doctor.write_plan(&env_path, &plan)?;
    println!("  {}", format!("✓ Written {env_name}").green());
    println!();

    Ok(0)
}
