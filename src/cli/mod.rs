//! Command-line interface for Cryoprison.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ListArgs, ScanArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, JAILBROKEN_EXIT_CODE};
