//! Catalog loading.

use std::fs;
use std::path::Path;

use super::schema::CheckCatalog;
use crate::error::{CryoprisonError, Result};

const BUILTIN_CATALOG: &str = include_str!("builtin.yml");

impl CheckCatalog {
    /// Parse a catalog from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        parse(content, Path::new("<inline>"))
    }

    /// Load a catalog from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CryoprisonError::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(path = %path.display(), "loading catalog");
        let content = fs::read_to_string(path)?;
        parse(&content, path)
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        parse(BUILTIN_CATALOG, Path::new("<builtin>"))
    }
}

fn parse(content: &str, path: &Path) -> Result<CheckCatalog> {
    if content.trim().is_empty() {
        return Ok(CheckCatalog::default());
    }

    serde_yaml::from_str(content).map_err(|e| CryoprisonError::CatalogParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
