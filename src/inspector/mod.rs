//! Inspectors: the individual jailbreak tests built from checks.

pub mod directory;
pub mod file;
pub mod kind;
pub mod types;

pub use directory::DirectoryNotPresent;
pub use file::FileNotPresent;
pub use kind::InspectorKind;
pub use types::{validate_check, Inspector};
