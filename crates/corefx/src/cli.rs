//! Clap derive structures for the `corefx` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use corefx_config::CORE_REST_PROPERTY;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// corefx -- bootstrap and inspect the CORE client configuration
#[derive(Debug, Parser)]
#[command(
    name = "corefx",
    version,
    about = "Bootstrap and inspect the CORE client configuration",
    long_about = "Creates ~/.core on first use, seeding config.json and the built-in\n\
        node-type icons, then reports the loaded configuration.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// CORE daemon REST endpoint for this invocation
    #[arg(long = CORE_REST_PROPERTY, env = "CORE_REST", value_name = "URL", global = true)]
    pub core_rest: Option<String>,

    /// Seed from an unpacked resource directory instead of the built-in assets
    #[arg(long, env = "COREFX_RESOURCES", value_name = "DIR", global = true)]
    pub resources: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', default_value = "table", global = true)]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load (creating on first run) and show the configuration
    Show,

    /// List the node types defined by the configuration
    #[command(alias = "nt")]
    NodeTypes,

    /// Show the home directory layout and its state
    Paths,

    /// Load the configuration and write it back, including --core-rest
    Save,
}
