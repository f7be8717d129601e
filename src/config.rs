// src/config.rs
//! Optional `busgraph.toml` configuration. Every field has a default; CLI
//! flags override whatever the file provides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BusgraphError, Result};
use crate::types::LayoutKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub builder: BuilderConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Tuning for the ownership builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    #[serde(default = "default_doa_threshold")]
    pub doa_threshold: f64,
    #[serde(default = "default_min_shared_files")]
    pub min_shared_files: usize,
    /// Restrict to file paths containing this fragment.
    #[serde(default)]
    pub module: Option<String>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            doa_threshold: default_doa_threshold(),
            min_shared_files: default_min_shared_files(),
            module: None,
        }
    }
}

/// Tuning for the filter and layout stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_remove_isolated")]
    pub remove_isolated: bool,
    #[serde(default = "default_layout")]
    pub layout: LayoutKind,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            remove_isolated: default_remove_isolated(),
            layout: default_layout(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_doa_threshold() -> f64 {
    crate::graph::ownership::DEFAULT_DOA_THRESHOLD
}
fn default_min_shared_files() -> usize {
    crate::graph::ownership::DEFAULT_MIN_SHARED_FILES
}
fn default_threshold() -> f64 {
    0.4
}
fn default_remove_isolated() -> bool {
    true
}
fn default_layout() -> LayoutKind {
    LayoutKind::Spring
}
fn default_width() -> f64 {
    1200.0
}
fn default_height() -> f64 {
    800.0
}

impl Config {
    /// Loads configuration from `path`. A missing file yields defaults; a
    /// malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| BusgraphError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config: Config = toml::from_str(
            r#"
            [render]
            threshold = 0.7
            layout = "shell"
            "#,
        )
        .unwrap();
        assert!((config.render.threshold - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.render.layout, LayoutKind::Shell);
        // Untouched sections keep their defaults.
        assert_eq!(config.builder, BuilderConfig::default());
        assert!((config.render.width - 1200.0).abs() < f64::EPSILON);
    }
}
