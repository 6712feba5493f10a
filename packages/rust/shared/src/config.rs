//! Application configuration for aortascreen.
//!
//! User config lives at `~/.aortascreen/aortascreen.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AortascreenError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "aortascreen.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".aortascreen";

// ---------------------------------------------------------------------------
// Config structs (matching aortascreen.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Lexicon additions.
    #[serde(default)]
    pub patterns: PatternsConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Header name of the column holding the titles.
    #[serde(default = "default_title_column")]
    pub title_column: String,

    /// Header name of the appended classification column.
    #[serde(default = "default_label_column")]
    pub label_column: String,

    /// Number of labeled rows shown in the console preview.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,

    /// Field delimiter: "auto", "comma", "tab", "semicolon", or "pipe".
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            title_column: default_title_column(),
            label_column: default_label_column(),
            preview_rows: default_preview_rows(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_title_column() -> String {
    "Title".into()
}
fn default_label_column() -> String {
    "Aortic Disease Category".into()
}
fn default_preview_rows() -> usize {
    10
}
fn default_delimiter() -> String {
    "auto".into()
}

/// `[patterns]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternsConfig {
    /// Extra phrases tested after the built-in lexicon.
    #[serde(default)]
    pub extra: Vec<String>,
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.aortascreen/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| AortascreenError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.aortascreen/aortascreen.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AortascreenError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        AortascreenError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| AortascreenError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| AortascreenError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| AortascreenError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("title_column"));
        assert!(toml_str.contains("Aortic Disease Category"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.defaults.title_column, "Title");
        assert_eq!(parsed.defaults.preview_rows, 10);
        assert_eq!(parsed.defaults.delimiter, "auto");
    }

    #[test]
    fn config_with_extra_patterns() {
        let toml_str = r#"
[defaults]
title_column = "Meeting Abstract Title"

[patterns]
extra = ["aortic coarctation", "stanford type a"]
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.defaults.title_column, "Meeting Abstract Title");
        assert_eq!(config.patterns.extra.len(), 2);
        assert_eq!(config.patterns.extra[0], "aortic coarctation");
        // Unspecified fields keep their defaults
        assert_eq!(config.defaults.label_column, "Aortic Disease Category");
    }

    #[test]
    fn empty_config_parses_to_defaults() {
        let config: AppConfig = toml::from_str("").expect("parse empty");
        assert_eq!(config.defaults.preview_rows, 10);
        assert!(config.patterns.extra.is_empty());
    }
}
