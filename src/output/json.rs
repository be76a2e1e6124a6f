//! JSON output formatter.
//!
//! Formats reports as machine-readable JSON for tooling integration.

use super::ReportFormatter;
use crate::checks::Checks;
use crate::detector::DetectionReport;
use crate::inspector::InspectorKind;
use serde::Serialize;
use std::io::Write;

/// Formats output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    jailbroken: bool,
    #[serde(flatten)]
    report: &'a DetectionReport,
}

#[derive(Serialize)]
struct JsonCheck<'a> {
    kind: InspectorKind,
    check_id: String,
    value: &'a str,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_report<W: Write + ?Sized>(
        &self,
        report: &DetectionReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let output = JsonReport {
            jailbroken: report.is_jailbroken(),
            report,
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }

    fn format_checks<W: Write + ?Sized>(
        &self,
        builders: &[(InspectorKind, Checks)],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let checks: Vec<_> = builders
            .iter()
            .flat_map(|(kind, checks)| {
                checks.checks().iter().map(move |check| JsonCheck {
                    kind: *kind,
                    check_id: check.normalized_id(),
                    value: check.value(),
                })
            })
            .collect();

        serde_json::to_writer_pretty(&mut *writer, &checks)?;
        writeln!(writer)
    }
}
