// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog loading and validation.
//!
//! The catalog ships embedded in the binary as JSON; an alternative
//! catalog can be loaded from a JSON or YAML file at runtime. Either
//! way the data is validated before it is installed, so a broken
//! catalog never reaches the views.

use crate::models::{catalog::Catalog, project::Project};
use anyhow::{bail, Context, Result};
use std::path::Path;

/// The catalog data compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Deserialize and validate the embedded catalog.
pub fn load_builtin() -> Result<Catalog> {
    let projects: Vec<Project> =
        serde_json::from_str(BUILTIN_CATALOG).context("embedded catalog is malformed")?;
    validated(projects)
}

/// Load a catalog from a JSON file.
pub fn import_json(path: &Path) -> Result<Catalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let projects: Vec<Project> = serde_json::from_str(&json)?;
    validated(projects)
}

/// Load a catalog from a YAML file.
pub fn import_yaml(path: &Path) -> Result<Catalog> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let projects: Vec<Project> = serde_yaml::from_str(&yaml)?;
    validated(projects)
}

/// Load a catalog from a file, dispatching on its extension.
pub fn import_catalog(path: &Path) -> Result<Catalog> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        other => bail!("unsupported catalog file extension: {:?}", other),
    }
}

/// Reject catalogs whose slugs cannot serve as route parameters.
fn validated(projects: Vec<Project>) -> Result<Catalog> {
    let catalog = Catalog::new(projects);
    if catalog.blank_id() {
        bail!("catalog contains a project with an empty id");
    }
    if let Some(id) = catalog.duplicate_id() {
        bail!("catalog contains duplicate project id {id:?}");
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::media::MediaKind;
    use crate::models::project::DESCRIPTION_PLACEHOLDER;

    #[test]
    fn builtin_catalog_loads_and_validates() {
        let catalog = load_builtin().unwrap();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.find("colabs").is_some());
        assert!(catalog.find("fashion-reels").is_some());
    }

    #[test]
    fn builtin_slugs_are_unique() {
        let catalog = load_builtin().unwrap();
        assert_eq!(catalog.duplicate_id(), None);
    }

    #[test]
    fn builtin_order_is_preserved() {
        let catalog = load_builtin().unwrap();
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            ["colabs", "shoplanes", "beechtree", "mondsub", "fashion-reels"]
        );
    }

    #[test]
    fn parses_full_project_shape() {
        let catalog = load_builtin().unwrap();
        let colabs = catalog.find("colabs").unwrap();
        assert_eq!(colabs.title, "COLABS");
        assert_eq!(colabs.category, "Photography & Direction");
        assert_eq!(colabs.year, "2024");
        assert!(colabs.video_hero);
        assert_eq!(colabs.media.len(), 9);
        assert_eq!(colabs.media[4].kind, MediaKind::Video);
        assert_eq!(colabs.theme.as_ref().unwrap().background, "#fafafa");
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let json = r#"[{
            "id": "bare",
            "title": "BARE",
            "category": "Minimal",
            "year": "2025",
            "coverImage": "https://example.com/bare.jpg"
        }]"#;
        let projects: Vec<Project> = serde_json::from_str(json).unwrap();
        let bare = &projects[0];
        assert!(bare.description.is_none());
        assert_eq!(bare.description_or_default(), DESCRIPTION_PLACEHOLDER);
        assert!(bare.theme.is_none());
        assert!(!bare.video_hero);
        assert!(bare.media.is_empty());
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let json = r#"[
            {"id": "twin", "title": "A", "category": "c", "year": "2025",
             "coverImage": "https://example.com/a.jpg"},
            {"id": "twin", "title": "B", "category": "c", "year": "2025",
             "coverImage": "https://example.com/b.jpg"}
        ]"#;
        let projects: Vec<Project> = serde_json::from_str(json).unwrap();
        assert!(validated(projects).is_err());
    }

    #[test]
    fn empty_slugs_are_rejected() {
        let json = r#"[{"id": "", "title": "A", "category": "c", "year": "2025",
                        "coverImage": "https://example.com/a.jpg"}]"#;
        let projects: Vec<Project> = serde_json::from_str(json).unwrap();
        assert!(validated(projects).is_err());
    }

    #[test]
    fn yaml_catalog_round_trips_through_serde() {
        let yaml = "
- id: yaml-entry
  title: YAML ENTRY
  category: Import
  year: '2025'
  coverImage: https://example.com/y.jpg
  media:
    - type: video
      id: vid-1
";
        let projects: Vec<Project> = serde_yaml::from_str(yaml).unwrap();
        let catalog = validated(projects).unwrap();
        let entry = catalog.find("yaml-entry").unwrap();
        assert_eq!(entry.media[0].kind, MediaKind::Video);
    }
}
