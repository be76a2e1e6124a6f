//! List command implementation.
//!
//! The `cryoprison list` command prints the expanded checks without
//! touching the filesystem.

use std::io::Write;

use crate::catalog::CheckCatalog;
use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::output::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    catalog: CheckCatalog,
    args: ListArgs,
    use_color: bool,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(catalog: CheckCatalog, args: ListArgs, use_color: bool) -> Self {
        Self {
            catalog,
            args,
            use_color,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let builders = self
            .catalog
            .clone()
            .with_extra_roots(self.args.roots.iter().cloned())
            .builders();

        match OutputFormat::from_json_flag(self.args.json) {
            OutputFormat::Json => JsonFormatter::new().format_checks(&builders, out)?,
            OutputFormat::Human => {
                HumanFormatter::new(self.use_color).format_checks(&builders, out)?
            }
        }

        Ok(CommandResult::success())
    }
}
