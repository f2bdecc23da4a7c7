//! acul configuration file handling

use acul_theme::EngineOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "acul.toml";

/// Top-level configuration (acul.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AculConfig {
    #[serde(default)]
    pub engine: EngineOptions,
    #[serde(default)]
    pub output: OutputConfig,
}

/// How computed variables are printed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A CSS rule with one declaration per variable
    #[default]
    Css,
    /// A JSON object of variable name to value
    Json,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Selector the CSS rule is written for
    #[serde(default = "default_selector")]
    pub selector: String,
}

fn default_selector() -> String {
    ":root".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            selector: default_selector(),
        }
    }
}

impl AculConfig {
    /// Load from an explicit path, or `./acul.toml` when it exists.
    ///
    /// Falls back to defaults when no path is given and no file is present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if p.is_dir() => p.join(CONFIG_FILE),
            Some(p) => p.to_path_buf(),
            None => {
                let local = Path::new(CONFIG_FILE);
                if !local.exists() {
                    tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
                local.to_path_buf()
            }
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
