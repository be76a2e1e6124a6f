//! Cryoprison - Jailbreak detection from declarative checks.
//!
//! Checks are declared through the fluent [`checks::Checks`] builder (or a
//! YAML [`catalog`]), expanded against root paths, and materialized into
//! [`inspector::Inspector`]s that the [`detector`] runs.
//!
//! # Modules
//!
//! - [`catalog`] - YAML check catalogs
//! - [`checks`] - Check declarations and root expansion
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detector`] - Running inspectors and reporting jailbreaks
//! - [`error`] - Error types and result aliases
//! - [`inspector`] - The inspector trait and built-in inspectors
//! - [`output`] - Human and JSON formatters
//!
//! # Example
//!
//! ```
//! use cryoprison::checks::Checks;
//! use cryoprison::inspector::{FileNotPresent, Inspector};
//!
//! let inspectors = Checks::new()
//!     .add_roots(["/private"])
//!     .add("cydia", "/Applications/Cydia.app/Cydia")
//!     .get_inspectors::<FileNotPresent>()
//!     .unwrap();
//!
//! assert_eq!(inspectors.len(), 2);
//! assert_eq!(inspectors[0].check_id(), "CYDIA");
//! assert_eq!(inspectors[1].value(), "/private/Applications/Cydia.app/Cydia");
//! ```

pub mod catalog;
pub mod checks;
pub mod cli;
pub mod detector;
pub mod error;
pub mod inspector;
pub mod output;

pub use error::{CryoprisonError, Result};
