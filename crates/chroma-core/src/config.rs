use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::coloring::Algorithm;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "chroma.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromaConfig {
    #[serde(default)]
    pub coloring: ColoringConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoringConfig {
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Size of the numbered palette used when a problem names no colors.
    #[serde(default = "default_palette_size")]
    pub palette_size: usize,
    #[serde(default = "default_true")]
    pub verify: bool,
}

impl Default for ColoringConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            palette_size: default_palette_size(),
            verify: default_true(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// `"pretty"` or `"text"`. Unset: pretty on a terminal, text when piped.
    #[serde(default)]
    pub format: Option<String>,
}

/// Load configuration from `path`, else `./chroma.toml` if it exists, else
/// defaults.
///
/// # Errors
///
/// Fails if an explicit `path` is missing, or the chosen file cannot be read
/// or parsed.
pub fn load_config(path: Option<&Path>) -> Result<ChromaConfig> {
    let path: PathBuf = match path {
        Some(explicit) => explicit.to_path_buf(),
        None => {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !local.exists() {
                return Ok(ChromaConfig::default());
            }
            local
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    parse_config(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse configuration TOML. Missing sections and keys take their defaults.
///
/// # Errors
///
/// Fails on invalid TOML or values of the wrong type.
pub fn parse_config(content: &str) -> Result<ChromaConfig> {
    Ok(toml::from_str::<ChromaConfig>(content)?)
}

const fn default_true() -> bool {
    true
}

const fn default_palette_size() -> usize {
    8
}
