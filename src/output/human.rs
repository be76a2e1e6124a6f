//! Human-readable output formatter.
//!
//! Formats reports for terminal display with optional color support.

use console::style;

use super::ReportFormatter;
use crate::checks::Checks;
use crate::detector::DetectionReport;
use crate::inspector::InspectorKind;
use std::io::Write;

/// Formats output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: &str, failed: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }

        if failed {
            style(text).red().bold().to_string()
        } else {
            style(text).green().to_string()
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format_report<W: Write + ?Sized>(
        &self,
        report: &DetectionReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        for jailbreak in &report.jailbreaks {
            writeln!(
                writer,
                "{}[{}]: {}",
                self.paint("jailbreak", true),
                jailbreak.id,
                jailbreak.value
            )?;
        }

        if !report.jailbreaks.is_empty() {
            writeln!(writer)?;
        }

        if report.is_jailbroken() {
            writeln!(
                writer,
                "{} {} of {} inspection(s) failed",
                self.paint("Jailbreak detected:", true),
                report.jailbreaks.len(),
                report.inspected
            )
        } else {
            writeln!(
                writer,
                "{} {} inspection(s) passed",
                self.paint("No jailbreak detected:", false),
                report.inspected
            )
        }
    }

    fn format_checks<W: Write + ?Sized>(
        &self,
        builders: &[(InspectorKind, Checks)],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let mut total = 0;

        for (kind, checks) in builders {
            for check in checks.checks() {
                writeln!(
                    writer,
                    "{:<10} {:<20} {}",
                    kind.to_string(),
                    check.normalized_id(),
                    check.value()
                )?;
            }
            total += checks.len();
        }

        writeln!(writer)?;
        writeln!(writer, "{} check(s)", total)
    }
}
