//! Directory-based inspection.

use std::path::Path;

use super::types::{validate_check, Inspector};
use crate::error::Result;

/// Fails when a directory exists at the checked path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryNotPresent {
    check_id: String,
    path: String,
}

impl Inspector for DirectoryNotPresent {
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
        format!("DIRECTORY_{}_SHOULD_NOT_BE_PRESENT", self.check_id)
    }

    fn ok(&self) -> bool {
        let present = Path::new(&self.path).is_dir();
        tracing::trace!(path = %self.path, present, "directory inspection");
        !present
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_directory_is_ok() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("apt");

        let inspector = DirectoryNotPresent::default()
            .init("APT", path.to_str().unwrap())
            .unwrap();

        assert!(inspector.ok());
    }

    #[test]
    fn present_directory_is_flagged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("private/var/lib/apt");
        fs::create_dir_all(&path).unwrap();

        let inspector = DirectoryNotPresent::default()
            .init("APT", path.to_str().unwrap())
            .unwrap();

        assert!(!inspector.ok());
    }

    #[test]
    fn file_does_not_count_as_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("apt");
        fs::write(&path, "").unwrap();

        let inspector = DirectoryNotPresent::default()
            .init("APT", path.to_str().unwrap())
            .unwrap();

        assert!(inspector.ok());
    }

    #[test]
    fn jailbreak_id_names_the_directory_check() {
        let inspector = DirectoryNotPresent::default().init("APT", "/x").unwrap();
        assert_eq!(
            inspector.jailbreak_id(),
            "DIRECTORY_APT_SHOULD_NOT_BE_PRESENT"
        );
    }
}
