// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BusgraphError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown layout: {0} (expected circular, shell, force, spring, or kamada_kawai)")]
    UnknownLayout(String),

    #[error("Unknown time range: {0} (expected 1m, 3m, 1y, or max)")]
    UnknownTimeRange(String),
}

pub type Result<T> = std::result::Result<T, BusgraphError>;

// Allow `?` on std::io::Error by converting with an unknown path.
impl From<std::io::Error> for BusgraphError {
    fn from(source: std::io::Error) -> Self {
        BusgraphError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
