//! Configuration management for packout-estimator
//!
//! Config stored at: ~/.config/packout-estimator/config.json
//! (or `$PACKOUT_CONFIG_DIR/config.json` when that variable is set)

use std::path::{Path, PathBuf};

use packout_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CONTAINER;

pub const CONFIG_DIR_ENV: &str = "PACKOUT_CONFIG_DIR";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Container used when none is given on the command line
    #[serde(default = "default_container")]
    pub default_container: String,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// TOML file with additional container profiles
    #[serde(default)]
    pub profiles_path: Option<PathBuf>,

    /// Text encoding of manifest files (any WHATWG label)
    #[serde(default = "default_encoding")]
    pub manifest_encoding: String,
}

fn default_container() -> String {
    DEFAULT_CONTAINER.to_string()
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_container: default_container(),
            output_format: OutputFormat::default(),
            profiles_path: None,
            manifest_encoding: default_encoding(),
        }
    }
}

impl Config {
    /// Get the config directory path; `PACKOUT_CONFIG_DIR` overrides the platform default
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("packout-estimator");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Packout Estimator Configuration")?;
        writeln!(f, "===============================")?;
        writeln!(f)?;
        writeln!(f, "Default container:  {}", self.default_container)?;
        writeln!(f, "Output format:      {}", self.output_format)?;
        writeln!(
            f,
            "Profiles file:      {}",
            self.profiles_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        )?;
        writeln!(f, "Manifest encoding:  {}", self.manifest_encoding)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:        {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_container, "20ft Standard");
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.manifest_encoding, "utf-8");
        assert!(config.profiles_path.is_none());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{"output_format": "json"}"#).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.default_container, "20ft Standard");
        assert_eq!(config.manifest_encoding, "utf-8");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            default_container: "40ft High Cube".to_string(),
            output_format: OutputFormat::Json,
            profiles_path: Some(PathBuf::from("/tmp/profiles.toml")),
            manifest_encoding: "windows-1252".to_string(),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, packout_types::Error::Config(ConfigError::ParseError(_))));
    }
}
