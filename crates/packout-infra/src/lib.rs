//! Infrastructure layer - loaders for shipment manifests and container profiles

pub mod manifest_csv;
pub mod profile_toml;
