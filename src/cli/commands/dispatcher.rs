//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::catalog::CheckCatalog;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;

use super::completions::CompletionsCommand;
use super::list::ListCommand;
use super::scan::ScanCommand;
use super::schema::SchemaCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    catalog_path: Option<PathBuf>,
    use_color: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    ///
    /// Without a catalog path the built-in catalog is used.
    pub fn new(catalog_path: Option<PathBuf>, use_color: bool) -> Self {
        Self {
            catalog_path,
            use_color,
        }
    }

    /// Get the catalog path, if one was given.
    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }

    fn load_catalog(&self) -> Result<CheckCatalog> {
        match &self.catalog_path {
            Some(path) => CheckCatalog::load(path),
            None => CheckCatalog::builtin(),
        }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Commands::Scan(args) => {
                let cmd = ScanCommand::new(self.load_catalog()?, args.clone(), self.use_color);
                cmd.execute(out)
            }
            Commands::List(args) => {
                let cmd = ListCommand::new(self.load_catalog()?, args.clone(), self.use_color);
                cmd.execute(out)
            }
            Commands::Schema => SchemaCommand.execute(out),
            Commands::Completions(args) => CompletionsCommand::new(args.clone()).execute(out),
        }
    }
}
