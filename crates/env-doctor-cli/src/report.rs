//! Colored rendering of issues, plans, and diffs.

use colored::Colorize;
use env_doctor::{AddedVar, DiffLine, DiffOp, Issue, RemovedVar};

/// Section heading, bold cyan with surrounding blank lines.
pub fn heading(text: &str) -> String {
    format!("\n{}\n", text.cyan().bold())
}

/// One issue line with a severity icon.
pub fn issue_line(issue: &Issue) -> String {
    let icon = if issue.is_error() {
        "✗".red().to_string()
    } else {
        "!".yellow().to_string()
    };
    format!("  {} {}: {}", icon, issue.key.bold(), issue.message)
}

pub fn print_issues(issues: &[Issue]) {
    for issue in issues {
        println!("{}", issue_line(issue));
    }
    println!();
}

/// Added variables, fix style: key plus fill provenance.
pub fn print_fix_added(added: &[AddedVar]) {
    println!(
        "  {} {} missing variable(s):",
        "Added".green(),
        added.len()
    );
    for var in added {
        let label = if var.has_default {
            format!("(default: {})", var.value).dimmed()
        } else {
            "(empty)".dimmed()
        };
        println!("    {} {} {}", "+".green(), var.key.bold(), label);
    }
    println!();
}

/// Added variables, sync style: full assignment plus provenance.
pub fn print_sync_added(added: &[AddedVar]) {
    println!("  Variables to add:");
    for var in added {
        let label = format!("({})", var.source.label()).dimmed();
        println!(
            "    {} {}={} {}",
            "+".green(),
            var.key.bold(),
            var.value,
            label
        );
    }
    println!();
}

/// Orphaned variables reported by sync.
pub fn print_orphans(orphans: &[RemovedVar], source: &str) {
    println!(
        "  {}",
        format!("⚠ Orphaned variables (not in {source}):").yellow()
    );
    for orphan in orphans {
        println!("    {} {}", "!".yellow(), orphan.key);
    }
    println!();
}

/// Added/removed lines of a line-level diff; context lines are skipped for
/// brevity.
pub fn print_diff(lines: &[DiffLine]) {
    for line in lines {
        match line.op {
            DiffOp::Added => println!("{}", format!("+ {}", line.text).green()),
            DiffOp::Removed => println!("{}", format!("- {}", line.text).red()),
            DiffOp::Context => {}
        }
    }
}

/// Closing summary line for check runs.
pub fn print_summary(errors: usize, warnings: usize) {
    if errors == 0 && warnings == 0 {
        println!("{}", "✓ All checks passed!".green());
    } else {
        let mut parts = Vec::new();
        if errors > 0 {
            parts.push(format!("{errors} error(s)").red().to_string());
        }
        if warnings > 0 {
            parts.push(format!("{warnings} warning(s)").yellow().to_string());
        }
        println!("Result: {}", parts.join(", "));
    }
}
