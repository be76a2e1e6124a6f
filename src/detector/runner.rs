//! Inspector execution.

use super::report::{DetectionReport, Jailbreak};
use crate::inspector::Inspector;

/// Runs a collection of inspectors and aggregates their results.
#[derive(Debug, Default)]
pub struct JailbreakDetector {
    inspectors: Vec<Box<dyn Inspector>>,
}

impl JailbreakDetector {
    /// Create a detector with no inspectors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector from an existing inspector collection.
    pub fn with_inspectors(inspectors: impl IntoIterator<Item = Box<dyn Inspector>>) -> Self {
        Self {
            inspectors: inspectors.into_iter().collect(),
        }
    }

    /// Append more inspectors.
    pub fn add_inspectors(
        &mut self,
        inspectors: impl IntoIterator<Item = Box<dyn Inspector>>,
    ) -> &mut Self {
        self.inspectors.extend(inspectors);
        self
    }

    /// Number of inspectors.
    pub fn len(&self) -> usize {
        self.inspectors.len()
    }

    /// Whether there is nothing to inspect.
    pub fn is_empty(&self) -> bool {
        self.inspectors.is_empty()
    }

    /// Run every inspector, in order.
    pub fn run(&self) -> DetectionReport {
        let jailbreaks: Vec<_> = self
            .inspectors
            .iter()
            .filter(|inspector| !inspector.ok())
            .map(|inspector| {
                let jailbreak = Jailbreak::from_inspector(&**inspector);
                tracing::debug!(id = %jailbreak.id, value = %jailbreak.value, "jailbreak indicator found");
                jailbreak
            })
            .collect();

        tracing::debug!(
            inspected = self.inspectors.len(),
            jailbreaks = jailbreaks.len(),
            "detection finished"
        );

        DetectionReport {
            inspected: self.inspectors.len(),
            jailbreaks,
        }
    }
}
