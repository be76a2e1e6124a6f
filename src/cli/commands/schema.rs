//! Schema command implementation.

use std::io::Write;

use crate::catalog::CheckCatalog;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// Prints the catalog JSON Schema.
pub struct SchemaCommand;

impl Command for SchemaCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let schema = CheckCatalog::json_schema();
        serde_json::to_writer_pretty(&mut *out, &schema).map_err(anyhow::Error::from)?;
        writeln!(out)?;
        Ok(CommandResult::success())
    }
}
