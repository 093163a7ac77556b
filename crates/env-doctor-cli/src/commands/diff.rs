//! Diff command - compare two env files key by key.

use std::path::{Path, PathBuf};

use colored::Colorize;
use env_doctor::reconcile::compare;
use env_doctor::EnvDoctor;

use crate::report;

pub fn run(
    file1: PathBuf,
    file2: PathBuf,
    values: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let doctor = EnvDoctor::new();

    let left = doctor.require_env(&file1)?;
    let right = doctor.require_env(&file2)?;

    let name1 = display_name(&file1);
    let name2 = display_name(&file2);

    println!(
        "{}",
        report::heading(&format!("Comparing {name1} ↔ {name2}"))
    );

    let comparison = compare(&left, &right);

    for key in &comparison.removed {
        println!(
            "  {} {}  {}",
            "-".red(),
            key,
            format!("(only in {name1})").dimmed()
        );
    }
    for key in &comparison.added {
        println!(
            "  {} {}  {}",
            "+".green(),
            key,
            format!("(only in {name2})").dimmed()
        );
    }
    for changed in &comparison.changed {
        if values {
            println!("  {} {}", "~".yellow(), changed.key);
            println!("    {} {}", format!("{name1}:").dimmed(), changed.left);
            println!("    {} {}", format!("{name2}:").dimmed(), changed.right);
        } else {
            println!(
                "  {} {}  {}",
                "~".yellow(),
                changed.key,
                "(different values)".dimmed()
            );
        }
    }

    println!();
    if comparison.is_identical() {
        println!("{}", "✓ Files are identical!".green());
        Ok(0)
    } else {
        println!(
            "{}",
            format!(
                "{} difference(s): {} added, {} removed, {} changed",
                comparison.difference_count(),
                comparison.added.len(),
                comparison.removed.len(),
                comparison.changed.len()
            )
            .dimmed()
        );
        Ok(1)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
