//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Cryoprison - Jailbreak detection from declarative check catalogs.
#[derive(Debug, Parser)]
#[command(name = "cryoprison")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a check catalog (defaults to the built-in catalog)
    #[arg(short, long, global = true, env = "CRYOPRISON_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run every check and report jailbreak indicators
    ///
    /// Checks always run against the host's own paths (the empty root).
    /// Each `--root` adds another prefix to check; it never replaces the
    /// host paths.
    Scan(ScanArgs),

    /// List the expanded checks without running them
    List(ListArgs),

    /// Print the JSON Schema of the catalog format
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ScanArgs {
    /// Extra root path to expand every check against, in addition to the
    /// host paths (repeatable)
    #[arg(short, long = "root", value_name = "PATH")]
    pub roots: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Extra root path to expand every check against (repeatable)
    #[arg(short, long = "root", value_name = "PATH")]
    pub roots: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
