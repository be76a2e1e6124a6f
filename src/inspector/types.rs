//! Inspector trait and shared validation.

use std::fmt::Debug;

use crate::error::{CryoprisonError, Result};

/// A single jailbreak test, built from one check.
///
/// Implementations are default-constructed and then initialized with the
/// normalized (upper-cased) check id and the fully expanded value. The
/// builder in [`crate::checks`] relies on exactly that two-step contract.
pub trait Inspector: Debug + Send + Sync {
    /// Initialize a freshly constructed inspector.
    fn init(self, check_id: &str, value: &str) -> Result<Self>
    where
        Self: Sized;

    /// The normalized check id this inspector was initialized with.
    fn check_id(&self) -> &str;

    /// The value (usually a path) this inspector was initialized with.
    fn value(&self) -> &str;

    /// Identifier reported when the inspection fails.
    fn jailbreak_id(&self) -> String {
        self.check_id().to_string()
    }

    /// Run the inspection. `true` means no jailbreak indicator was found.
    fn ok(&self) -> bool;
}

/// Reject empty check ids and values.
pub fn validate_check(check_id: &str, value: &str) -> Result<()> {
    if check_id.trim().is_empty() {
        return Err(CryoprisonError::InvalidCheck {
            check_id: check_id.to_string(),
            message: "check id is empty".to_string(),
        });
    }

    if value.trim().is_empty() {
        return Err(CryoprisonError::InvalidCheck {
            check_id: check_id.to_string(),
            message: "value is empty".to_string(),
        });
    }

    Ok(())
}
