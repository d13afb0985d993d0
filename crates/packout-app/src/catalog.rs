//! Lookup of container profiles by name: built-in presets plus user-supplied TOML profiles

use std::path::Path;

use packout_domain::model::ContainerProfile;
use packout_infra::profile_toml::load_profiles;
use packout_types::{Error, Result};

use crate::constants::{get_preset, normalize_container_name, preset_containers};

/// Presets plus custom profiles. A custom profile whose name matches a preset shadows it.
#[derive(Debug, Clone)]
pub struct ContainerCatalog {
    custom: Vec<ContainerProfile>,
}

impl ContainerCatalog {
    /// Catalog holding only the standard presets
    pub fn presets() -> Self {
        Self { custom: Vec::new() }
    }

    /// Add profiles; a later profile with the same normalized name replaces an earlier one
    pub fn with_profiles(mut self, custom: Vec<ContainerProfile>) -> Self {
        for profile in custom {
            let key = normalize_container_name(&profile.name);
            match self
                .custom
                .iter_mut()
                .find(|p| normalize_container_name(&p.name) == key)
            {
                Some(existing) => *existing = profile,
                None => self.custom.push(profile),
            }
        }
        self
    }

    /// Presets plus the profiles in `path`, if given
    pub fn load(profiles_path: Option<&Path>) -> Result<Self> {
        let catalog = Self::presets();
        match profiles_path {
            Some(path) => Ok(catalog.with_profiles(load_profiles(path)?)),
            None => Ok(catalog),
        }
    }

    fn find_custom(&self, name: &str) -> Option<&ContainerProfile> {
        let key = normalize_container_name(name);
        self.custom
            .iter()
            .find(|p| normalize_container_name(&p.name) == key)
    }

    /// Presets in display order (shadowed ones swapped for their custom replacement), then new customs
    pub fn all(&self) -> Vec<&ContainerProfile> {
        let mut profiles: Vec<&ContainerProfile> = preset_containers()
            .iter()
            .map(|preset| self.find_custom(&preset.name).unwrap_or(preset))
            .collect();
        profiles.extend(
            self.custom
                .iter()
                .filter(|p| get_preset(&p.name).is_none()),
        );
        profiles
    }

    pub fn names(&self) -> Vec<String> {
        self.all().into_iter().map(|p| p.name.clone()).collect()
    }

    pub fn find(&self, name: &str) -> Result<&ContainerProfile> {
        self.find_custom(name)
            .or_else(|| get_preset(name))
            .ok_or_else(|| Error::UnknownContainer {
                name: name.to_string(),
                available: self.names(),
            })
    }
}
