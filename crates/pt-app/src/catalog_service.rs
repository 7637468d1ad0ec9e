//! Catalog loading and introspection.

use std::path::Path;

use crate::error::{AppError, AppResult};
use pt_tables::{Catalog, CatalogDef};

/// Load a catalog from a normalized JSON or YAML file, validating every
/// table it defines.
pub fn load_catalog(path: &Path) -> AppResult<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::CatalogFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let def: CatalogDef = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        _ => {
            return Err(AppError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    let catalog = Catalog::from_def(&def)?;
    tracing::debug!(
        substances = catalog.substances().len(),
        tables = catalog.table_names().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Canonical names of every loaded table, for listing.
pub fn list_tables(catalog: &Catalog) -> Vec<String> {
    catalog.table_names()
}
