//! Scan command implementation.
//!
//! The `cryoprison scan` command builds inspectors from the catalog, runs
//! them, and reports any jailbreak indicators.

use std::io::Write;

use crate::catalog::CheckCatalog;
use crate::cli::args::ScanArgs;
use crate::detector::JailbreakDetector;
use crate::error::Result;
use crate::output::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};

use super::dispatcher::{Command, CommandResult};

/// Exit code used when a jailbreak indicator is found.
pub const JAILBROKEN_EXIT_CODE: i32 = 2;

/// The scan command implementation.
pub struct ScanCommand {
    catalog: CheckCatalog,
    args: ScanArgs,
    use_color: bool,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(catalog: CheckCatalog, args: ScanArgs, use_color: bool) -> Self {
        Self {
            catalog,
            args,
            use_color,
        }
    }
}

impl Command for ScanCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let catalog = self
            .catalog
            .clone()
            .with_extra_roots(self.args.roots.iter().cloned());
        let detector = JailbreakDetector::with_inspectors(catalog.inspectors()?);

        tracing::debug!(inspectors = detector.len(), "running scan");
        let report = detector.run();

        match OutputFormat::from_json_flag(self.args.json) {
            OutputFormat::Json => JsonFormatter::new().format_report(&report, out)?,
            OutputFormat::Human => {
                HumanFormatter::new(self.use_color).format_report(&report, out)?
            }
        }

        if report.is_jailbroken() {
            Ok(CommandResult::failure(JAILBROKEN_EXIT_CODE))
        } else {
            Ok(CommandResult::success())
        }
    }
}
