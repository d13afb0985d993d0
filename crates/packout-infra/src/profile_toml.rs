//! Custom container profiles from TOML
//!
//! ```toml
//! [[containers]]
//! name = "53ft Domestic"
//! length_in = 630
//! width_in = 100
//! height_in = 110
//! max_weight_lb = 45000
//! ```

use std::fs;
use std::path::Path;

use packout_domain::model::ContainerProfile;
use packout_types::{ConfigError, Error, Result};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    containers: Vec<ContainerProfile>,
}

/// Load and validate container profiles from a TOML file
pub fn load_profiles(path: &Path) -> Result<Vec<ContainerProfile>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read container profiles file: {}",
            e
        )))
    })?;

    let profiles = parse_profiles(&content)?;
    debug!(path = %path.display(), count = profiles.len(), "container profiles loaded");
    Ok(profiles)
}

/// Parse container profiles from a TOML string
pub fn parse_profiles(toml_content: &str) -> Result<Vec<ContainerProfile>> {
    let file: ProfileFile = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse container profiles TOML: {}",
            e
        )))
    })?;

    for profile in &file.containers {
        profile.validate()?;
    }

    Ok(file.containers)
}
