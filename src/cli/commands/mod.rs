//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod scan;
pub mod schema;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use scan::JAILBROKEN_EXIT_CODE;
