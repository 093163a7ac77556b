//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// env-doctor: diagnose, validate, and manage .env files
#[derive(Parser)]
#[command(name = "env-doctor")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// When to color output
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Verbose output (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate .env against .env.schema or .env.example
    Check {
        /// Project directory
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Env file name (default: .env)
        #[arg(long)]
        env: Option<String>,

        /// Example file name (default: .env.example)
        #[arg(long)]
        example: Option<String>,

        /// Exit with an error on warnings too
        #[arg(long)]
        strict: bool,

        /// Skip the schema-free heuristic checks
        #[arg(long)]
        no_heuristics: bool,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add variables missing from .env, preserving existing content
    Sync {
        /// Project directory
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Target env file (default: .env)
        #[arg(short, long)]
        file: Option<String>,

        /// Schema file (default: .env.schema, then .env.example)
        #[arg(short, long)]
        schema: Option<String>,

        /// Preview without writing
        #[arg(long)]
        dry_run: bool,

        /// Never prompt; use defaults or leave values empty
        #[arg(long)]
        non_interactive: bool,
    },

    /// Rewrite .env to match the schema's membership and order
    Fix {
        /// Project directory
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Env file name (default: .env)
        #[arg(long)]
        env: Option<String>,

        /// Schema file name (default: .env.schema)
        #[arg(long)]
        schema: Option<String>,

        /// Reorder variables to schema declaration order
        #[arg(long)]
        sort: bool,

        /// Comment out variables the schema does not declare
        #[arg(long)]
        remove_orphans: bool,

        /// Preview without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Compare two env files key by key
    Diff {
        /// First env file
        #[arg(value_name = "FILE1")]
        file1: PathBuf,

        /// Second env file
        #[arg(value_name = "FILE2")]
        file2: PathBuf,

        /// Show differing values, not just key names
        #[arg(long)]
        values: bool,
    },

    /// Print .env with sensitive values masked
    Mask {
        /// Project directory
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Env file name (default: .env)
        #[arg(long)]
        env: Option<String>,

        /// Mask every value, not just sensitive ones
        #[arg(long)]
        mask_all: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate .env.example (or a schema scaffold) from an existing .env
    Init {
        /// Project directory
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Env file name (default: .env)
        #[arg(long)]
        env: Option<String>,

        /// Output file name (default: .env.example, or .env.schema with --schema)
        #[arg(short, long)]
        output: Option<String>,

        /// Blank every value, not just sensitive ones
        #[arg(long)]
        strip_values: bool,

        /// Generate a .env.schema scaffold with inferred types instead
        #[arg(long)]
        schema: bool,

        /// Overwrite an existing output file
        #[arg(long)]
        force: bool,

        /// Print to stdout without writing
        #[arg(long)]
        dry_run: bool,
    },
}

/// When to emit ANSI colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}
