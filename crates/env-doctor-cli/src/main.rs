//! env-doctor CLI - diagnose, validate, and manage .env files.

mod cli;
mod commands;
mod prompt;
mod report;

use std::io::IsTerminal;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, ColorChoice, Commands};

fn main() {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);
    setup_color(cli.color);

    let result = match cli.command {
        Commands::Check {
            dir,
            env,
            example,
            strict,
            no_heuristics,
            json,
        } => commands::check::run(dir, env, example, strict, no_heuristics, json),

        Commands::Sync {
            dir,
            file,
            schema,
            dry_run,
            non_interactive,
        } => commands::sync::run(dir, file, schema, dry_run, non_interactive),

        Commands::Fix {
            dir,
            env,
            schema,
            sort,
            remove_orphans,
            dry_run,
        } => commands::fix::run(dir, env, schema, sort, remove_orphans, dry_run),

        Commands::Diff {
            file1,
            file2,
            values,
        } => commands::diff::run(file1, file2, values),

        Commands::Mask {
            dir,
            env,
            mask_all,
            output,
        } => commands::mask::run(dir, env, mask_all, output),

        Commands::Init {
            dir,
            env,
            output,
            strip_values,
            schema,
            force,
            dry_run,
        } => commands::init::run(dir, env, output, strip_values, schema, force, dry_run),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", format!("Error: {e}").red());
            std::process::exit(1);
        }
    }
}

/// Decide color enablement once, up front; nothing downstream reads the
/// environment for it.
fn setup_color(choice: ColorChoice) {
    let enabled = match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    };
    colored::control::set_override(enabled);
}

fn setup_tracing(verbose: u8) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let log_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.into()),
        ))
        .init();
}
