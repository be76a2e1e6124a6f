//! Built-in inspector kinds, as named in catalogs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{DirectoryNotPresent, FileNotPresent, Inspector};
use crate::checks::Checks;
use crate::error::Result;

/// Which built-in inspector a catalog entry instantiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InspectorKind {
    /// [`FileNotPresent`]
    File,
    /// [`DirectoryNotPresent`]
    Directory,
}

impl InspectorKind {
    /// Materialize the checks as inspectors of this kind.
    pub fn inspectors(&self, checks: &Checks) -> Result<Vec<Box<dyn Inspector>>> {
        match self {
            InspectorKind::File => checks.get_inspectors::<FileNotPresent>(),
            InspectorKind::Directory => checks.get_inspectors::<DirectoryNotPresent>(),
        }
    }
}

impl std::fmt::Display for InspectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InspectorKind::File => write!(f, "file"),
            InspectorKind::Directory => write!(f, "directory"),
        }
    }
}
