//! File-based inspection.

use std::path::Path;

use super::types::{validate_check, Inspector};
use crate::error::Result;

/// Fails when a regular file exists at the checked path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileNotPresent {
    check_id: String,
    path: String,
}

impl Inspector for FileNotPresent {
    fn init(mut self, check_id: &str, value: &str) -> Result<Self> {
        validate_check(check_id, value)?;
        self.check_id = check_id.to_string();
        self.path = value.to_string();
        Ok(self)
    }

    fn check_id(&self) -> &str {
        &self.check_id
    }

    fn value(&self) -> &str {
        &self.path
    }

    fn jailbreak_id(&self) -> String {
        format!("FILE_{}_SHOULD_NOT_BE_PRESENT", self.check_id)
    }

    fn ok(&self) -> bool {
        let present = Path::new(&self.path).is_file();
        tracing::trace!(path = %self.path, present, "file inspection");
        !present
    }
}
