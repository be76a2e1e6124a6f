//! Output formatters.
//!
//! This module provides formatters for detection reports and expanded
//! check listings, in human-readable and JSON form.

pub mod human;
pub mod json;

use crate::checks::Checks;
use crate::detector::DetectionReport;
use crate::inspector::InspectorKind;
use std::io::Write;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    /// Pick the format from a `--json` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Trait for formatting command output.
pub trait ReportFormatter {
    /// Format a detection report to the given writer.
    fn format_report<W: Write + ?Sized>(
        &self,
        report: &DetectionReport,
        writer: &mut W,
    ) -> std::io::Result<()>;

    /// Format expanded checks, grouped by inspector kind.
    fn format_checks<W: Write + ?Sized>(
        &self,
        builders: &[(InspectorKind, Checks)],
        writer: &mut W,
    ) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
