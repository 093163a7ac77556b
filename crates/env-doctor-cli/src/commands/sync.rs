//! Sync command - append missing variables, preserving existing content.

use std::collections::HashMap;
use std::io::IsTerminal;
use std::path::PathBuf;

use colored::Colorize;
use env_doctor::reconcile::{plan_sync, prompt_requests};
use env_doctor::{EnvDoctor, ReferenceKind};

use crate::{prompt, report};

pub fn run(
    dir: PathBuf,
    file: Option<String>,
    schema: Option<String>,
    dry_run: bool,
    non_interactive: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let doctor = EnvDoctor::new();

    let reference = doctor.resolve_reference(&dir, schema.as_deref(), None)?;
    let env_name = file.unwrap_or_else(|| doctor.config().env_file.clone());
    let env_path = dir.join(&env_name);
    let env = doctor.read_env(&env_path)?;

    // Whether prompting is possible is decided here, before any request
    // goes out.
    let requests = prompt_requests(env.as_ref(), &reference);
    let mut answers: HashMap<String, String> = HashMap::new();
    if !requests.is_empty() && !non_interactive && !dry_run && std::io::stdin().is_terminal() {
        answers = prompt::ask(&requests)?;
    }

    let plan = plan_sync(env.as_ref(), &reference, &answers);

    let source = match reference.kind() {
        ReferenceKind::Schema => schema.unwrap_or_else(|| doctor.config().schema_file.clone()),
        ReferenceKind::Example => doctor.config().example_file.clone(),
    };
    println!(
        "{}",
        report::heading(&format!("Syncing {env_name} with {source}"))
    );

    if !plan.removed.is_empty() {
        report::print_orphans(&plan.removed, &source);
    }

    if !plan.added.is_empty() {
        report::print_sync_added(&plan.added);
    }

    if plan.added.is_empty() && plan.removed.is_empty() {
        println!("  {}", "✓ Already in sync!".green());
        println!();
        return Ok(0);
    }

    if dry_run {
        println!("  {}", "Dry run - no files were written.".dimmed());
        println!();
        return Ok(0);
    }

    // Orphans are reported but never touched; write only when adding.
    if !plan.added.is_empty() {
        doctor.write_plan(&env_path, &plan)?;
        println!(
            "  {}",
            format!(
                "✓ Written {env_name} ({} variable(s) added)",
                plan.added.len()
            )
            .green()
        );
        println!();
    }

    Ok(0)
}
