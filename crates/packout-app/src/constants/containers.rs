//! Standard ISO shipping container presets (interior dimensions in inches, payload in lbs)

use std::sync::LazyLock;

use packout_domain::model::ContainerProfile;

pub const DEFAULT_CONTAINER: &str = "20ft Standard";

static PRESET_CONTAINERS: LazyLock<Vec<ContainerProfile>> = LazyLock::new(|| {
    vec![
        ContainerProfile::new("20ft Standard", 233.0, 92.0, 94.0, 48000.0),
        ContainerProfile::new("40ft Standard", 472.0, 92.0, 94.0, 59500.0),
        ContainerProfile::new("40ft High Cube", 472.0, 92.0, 105.0, 59500.0),
    ]
});

/// All presets, in display order
pub fn preset_containers() -> &'static [ContainerProfile] {
    &PRESET_CONTAINERS
}

/// Lowercase and drop spaces, hyphens and underscores
pub fn normalize_container_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Get preset by name ("40ft High Cube", "40ft-highcube", ...)
pub fn get_preset(name: &str) -> Option<&'static ContainerProfile> {
    let normalized = normalize_container_name(name);
    PRESET_CONTAINERS
        .iter()
        .find(|p| normalize_container_name(&p.name) == normalized)
}
