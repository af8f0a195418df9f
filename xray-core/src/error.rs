//! Errors from loading xray documents and layouts.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid xray JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("xray document must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("invalid layout TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }
}
