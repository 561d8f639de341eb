use anyhow::{Context, Result};
use std::path::Path;

use crate::catalog::LocalCatalog;
use crate::models::CourseSlot;
use crate::parsing::catalog_json;

/// Unified interface for loading term catalog data
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a term catalog from a file (currently JSON only)
    pub fn load_from_file(path: &Path) -> Result<Vec<CourseSlot>> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("File has no extension")?;

        match extension.to_lowercase().as_str() {
            "json" => catalog_json::parse_catalog_file(path)
                .context("Failed to parse catalog file"),
            _ => anyhow::bail!("Unsupported file format: {}", extension),
        }
    }

    /// Load a term catalog from a JSON string
    pub fn load_from_str(json: &str) -> Result<Vec<CourseSlot>> {
        catalog_json::parse_catalog_str(json).context("Failed to parse catalog string")
    }

    /// Load a term catalog file straight into a [`LocalCatalog`]
    pub fn load_into_catalog(path: &Path) -> Result<LocalCatalog> {
        let slots = Self::load_from_file(path)?;
        let catalog = LocalCatalog::new();
        for slot in slots {
            catalog.register_slot(slot);
        }
        Ok(catalog)
    }
}
