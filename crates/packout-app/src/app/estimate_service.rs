//! Estimate use case: resolve container, load manifest, estimate, optionally export

use std::path::{Path, PathBuf};

use packout_domain::model::{ContainerProfile, PackoutSummary};
use packout_domain::service::estimate;
use packout_infra::manifest_csv::load_manifest;
use packout_types::Result;
use tracing::{debug, info};

use crate::catalog::ContainerCatalog;
use crate::config::Config;
use crate::export::export_to_excel;

/// Per-run options; unset fields fall back to the config
#[derive(Debug, Clone, Default)]
pub struct EstimateRequest {
    /// Container name to look up in the catalog
    pub container: Option<String>,
    /// Inline profile, takes precedence over `container`
    pub custom_container: Option<ContainerProfile>,
    /// Extra TOML profiles for this run
    pub profiles_path: Option<PathBuf>,
    pub encoding: Option<String>,
    /// Write an Excel workbook here after estimating
    pub export_path: Option<PathBuf>,
}

/// Pick the container profile for a run.
///
/// Order: inline profile, then the requested name, then the configured default.
pub fn resolve_container(request: &EstimateRequest, config: &Config) -> Result<ContainerProfile> {
    if let Some(custom) = &request.custom_container {
        custom.validate()?;
        debug!(container = %custom.name, "using inline container profile");
        return Ok(custom.clone());
    }

    let profiles_path = request
        .profiles_path
        .as_deref()
        .or(config.profiles_path.as_deref());
    let catalog = ContainerCatalog::load(profiles_path)?;

    let name = request
        .container
        .as_deref()
        .unwrap_or(&config.default_container);
    let profile = catalog.find(name)?.clone();
    debug!(container = %profile.name, volume_in3 = profile.volume_in3(), "container resolved");
    Ok(profile)
}

pub fn run_estimate(
    manifest_path: &Path,
    request: &EstimateRequest,
    config: &Config,
) -> Result<PackoutSummary> {
    let container = resolve_container(request, config)?;

    let encoding = request
        .encoding
        .as_deref()
        .unwrap_or(&config.manifest_encoding);
    let lines = load_manifest(manifest_path, encoding)?;

    let summary = estimate(&lines, &container)?;
    info!(
        manifest = %manifest_path.display(),
        container = %container.name,
        lines = lines.len(),
        containers = summary.estimated_containers_rounded,
        "estimate complete"
    );

    if let Some(export_path) = &request.export_path {
        export_to_excel(&summary, export_path)?;
    }

    Ok(summary)
}
