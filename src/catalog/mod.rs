//! Declarative check catalogs.
//!
//! A catalog is a YAML file listing root prefixes and checks. It is
//! expanded through [`crate::checks::Checks`] into inspectors:
//!
//! ```yaml
//! roots: ["/private"]
//! checks:
//!   - kind: file
//!     id: cydia
//!     values: ["/Applications/Cydia.app/Cydia"]
//! ```

pub mod loader;
pub mod schema;

pub use schema::{CatalogEntry, CheckCatalog};
