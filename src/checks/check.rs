//! The check record.

use serde::Serialize;

/// A check identifies both the jailbreak and the parameter handed to the
/// inspector that tests for it.
///
/// The id keeps the caller's casing; it is upper-cased only when an
/// inspector is built. The value is already expanded with its root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    check_id: String,
    value: String,
}

impl Check {
    /// Create a check from an id and an expanded value.
    pub fn new(check_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            check_id: check_id.into(),
            value: value.into(),
        }
    }

    /// The check id, as given.
    pub fn check_id(&self) -> &str {
        &self.check_id
    }

    /// The expanded value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The id inspectors are initialized with.
    pub fn normalized_id(&self) -> String {
        upper_invariant(&self.check_id)
    }
}

/// Upper-case one character at a time, without locale rules.
///
/// Characters whose upper case is more than one character (`ß`, `ﬁ`) are
/// kept as they are, so the result has as many characters as the input.
pub fn upper_invariant(s: &str) -> String {
    s.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}
