//! Error types for the page and content layers
//!
//! The binary edge uses `anyhow`; these enums are what the library modules
//! return so callers can match on the failure.

use crate::dom::ElementId;
use std::path::PathBuf;
use thiserror::Error;

/// Faults raised while wiring the controller to a page
#[derive(Debug, Error)]
pub enum PageError {
    #[error("required element is missing from the page: {0}")]
    MissingElement(ElementId),
}

/// Failures while loading menu content from disk
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("failed to read menu file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML menu: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON menu: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSV menu: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported menu format '{0}' (expected .yaml, .yml, .json or .csv)")]
    UnsupportedFormat(String),
}
