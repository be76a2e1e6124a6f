//! Catalog schema definitions.
//!
//! These structs map directly to the YAML catalog format.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::checks::Checks;
use crate::error::Result;
use crate::inspector::{Inspector, InspectorKind};

/// Root structure of a check catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CheckCatalog {
    /// Root prefixes every check is expanded against, in addition to the
    /// empty root.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roots: Vec<String>,

    /// Check declarations.
    pub checks: Vec<CatalogEntry>,
}

/// One check declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogEntry {
    /// Inspector that runs the check.
    pub kind: InspectorKind,

    /// Check id, e.g. `cydia`.
    pub id: String,

    /// Values (usually paths) to check.
    pub values: Vec<String>,
}

impl CheckCatalog {
    /// Append roots after the catalog's own roots.
    pub fn with_extra_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roots.extend(roots.into_iter().map(Into::into));
        self
    }

    /// One builder per inspector kind, in order of first appearance.
    ///
    /// Roots are registered before any check, so every catalog check is
    /// expanded against the empty root and all catalog roots.
    pub fn builders(&self) -> Vec<(InspectorKind, Checks)> {
        let mut groups: Vec<(InspectorKind, Vec<&CatalogEntry>)> = Vec::new();

        for entry in &self.checks {
            match groups.iter_mut().find(|(kind, _)| *kind == entry.kind) {
                Some((_, entries)) => entries.push(entry),
                None => groups.push((entry.kind, vec![entry])),
            }
        }

        groups
            .into_iter()
            .map(|(kind, entries)| {
                let checks = entries.into_iter().fold(
                    Checks::new().add_roots(self.roots.iter().cloned()),
                    |checks, entry| checks.add_many(&entry.id, &entry.values),
                );
                (kind, checks)
            })
            .collect()
    }

    /// Build every inspector the catalog declares.
    pub fn inspectors(&self) -> Result<Vec<Box<dyn Inspector>>> {
        let mut inspectors = Vec::new();
        for (kind, checks) in self.builders() {
            tracing::debug!(%kind, checks = checks.len(), "materializing catalog checks");
            inspectors.extend(kind.inspectors(&checks)?);
        }
        Ok(inspectors)
    }

    /// JSON Schema describing the catalog format.
    pub fn json_schema() -> serde_json::Value {
        schemars::schema_for!(CheckCatalog).to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: InspectorKind, id: &str, values: &[&str]) -> CatalogEntry {
        CatalogEntry {
            kind,
            id: id.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn builders_group_by_kind_in_first_appearance_order() {
        let catalog = CheckCatalog {
            roots: vec![],
            checks: vec![
                entry(InspectorKind::Directory, "apt", &["/etc/apt"]),
                entry(InspectorKind::File, "su", &["/bin/su"]),
                entry(InspectorKind::Directory, "cydia", &["/Applications/Cydia.app"]),
            ],
        };

        let builders = catalog.builders();
        assert_eq!(builders.len(), 2);
        assert_eq!(builders[0].0, InspectorKind::Directory);
        assert_eq!(builders[0].1.len(), 2);
        assert_eq!(builders[1].0, InspectorKind::File);
        assert_eq!(builders[1].1.len(), 1);
    }

    #[test]
    fn builders_apply_all_roots() {
        let catalog = CheckCatalog {
            roots: vec!["/a".to_string()],
            checks: vec![entry(InspectorKind::File, "su", &["/bin/su", "/xbin/su"])],
        }
        .with_extra_roots(["/b"]);

        let builders = catalog.builders();
        let values: Vec<_> = builders[0].1.checks().iter().map(|c| c.value()).collect();
        assert_eq!(
            values,
            ["/bin/su", "/a/bin/su", "/b/bin/su", "/xbin/su", "/a/xbin/su", "/b/xbin/su"]
        );
    }

    #[test]
    fn inspectors_cover_every_expanded_check() {
        let catalog = CheckCatalog {
            roots: vec!["/r".to_string()],
            checks: vec![
                entry(InspectorKind::File, "su", &["/bin/su"]),
                entry(InspectorKind::Directory, "apt", &["/etc/apt"]),
            ],
        };

        let inspectors = catalog.inspectors().unwrap();
        let ids: Vec<_> = inspectors.iter().map(|i| i.jailbreak_id()).collect();
        assert_eq!(
            ids,
            [
                "FILE_SU_SHOULD_NOT_BE_PRESENT",
                "FILE_SU_SHOULD_NOT_BE_PRESENT",
                "DIRECTORY_APT_SHOULD_NOT_BE_PRESENT",
                "DIRECTORY_APT_SHOULD_NOT_BE_PRESENT",
            ]
        );
    }

    #[test]
    fn inspectors_propagate_invalid_checks() {
        let catalog = CheckCatalog {
            roots: vec![],
            checks: vec![entry(InspectorKind::File, "", &["/bin/su"])],
        };
        assert!(catalog.inspectors().is_err());
    }

    #[test]
    fn json_schema_names_catalog_fields() {
        let schema = CheckCatalog::json_schema();
        let text = schema.to_string();
        assert!(text.contains("roots"));
        assert!(text.contains("checks"));
        assert!(text.contains("directory"));
    }
}
