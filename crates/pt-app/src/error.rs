//! Error types for the pt-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read catalog file: {path}")]
    CatalogFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported catalog format: {path} (expected .json, .yaml, or .yml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Table error: {0}")]
    Table(#[from] pt_tables::TableError),

    #[error("Classification error: {0}")]
    State(#[from] pt_state::StateError),
}

/// Result type for pt-app operations.
pub type AppResult<T> = Result<T, AppError>;
