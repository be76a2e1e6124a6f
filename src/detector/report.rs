//! Detection report types.

use serde::Serialize;

use crate::inspector::Inspector;

/// A failed inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Jailbreak {
    /// Jailbreak identifier, e.g. `FILE_CYDIA_SHOULD_NOT_BE_PRESENT`.
    pub id: String,

    /// Normalized check id of the inspector that failed.
    pub check_id: String,

    /// Value the inspector was initialized with.
    pub value: String,
}

impl Jailbreak {
    /// Describe a failed inspector.
    pub fn from_inspector(inspector: &dyn Inspector) -> Self {
        Self {
            id: inspector.jailbreak_id(),
            check_id: inspector.check_id().to_string(),
            value: inspector.value().to_string(),
        }
    }
}

/// Outcome of running a set of inspectors.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DetectionReport {
    /// Number of inspectors that ran.
    pub inspected: usize,

    /// Failed inspections, in inspector order.
    pub jailbreaks: Vec<Jailbreak>,
}

impl DetectionReport {
    /// Whether any inspector found a jailbreak indicator.
    pub fn is_jailbroken(&self) -> bool {
        !self.jailbreaks.is_empty()
    }

    /// Number of inspectors that passed.
    pub fn passed(&self) -> usize {
        self.inspected.saturating_sub(self.jailbreaks.len())
    }
}
