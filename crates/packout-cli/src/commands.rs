//! Command handlers

use std::path::{Path, PathBuf};

use packout_app::app::{run_estimate, EstimateRequest};
use packout_app::catalog::ContainerCatalog;
use packout_app::config::Config;
use packout_domain::model::ContainerProfile;
use packout_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands, CustomContainerArgs};
use crate::output::{output_containers, output_summary};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Estimate {
            manifest,
            container,
            custom,
            encoding,
            export,
        } => cmd_estimate(
            &config,
            output_format,
            cli.profiles,
            manifest,
            container,
            custom,
            encoding,
            export,
        ),

        Commands::Containers => cmd_containers(&config, output_format, cli.profiles.as_deref()),

        Commands::Config {
            show,
            set_container,
            set_output,
            set_profiles,
            set_encoding,
            reset,
        } => cmd_config(
            config,
            cli.profiles.as_deref(),
            show,
            set_container,
            set_output,
            set_profiles,
            set_encoding,
            reset,
        ),
    }
}

fn custom_profile(args: &CustomContainerArgs) -> Option<ContainerProfile> {
    match (args.length, args.width, args.height, args.max_weight) {
        (Some(l), Some(w), Some(h), Some(max)) => Some(ContainerProfile::new(
            format!("Custom {}x{}x{}", l, w, h),
            l,
            w,
            h,
            max,
        )),
        _ => None,
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_estimate(
    config: &Config,
    output_format: OutputFormat,
    profiles: Option<PathBuf>,
    manifest: PathBuf,
    container: Option<String>,
    custom: CustomContainerArgs,
    encoding: Option<String>,
    export: Option<PathBuf>,
) -> Result<()> {
    let request = EstimateRequest {
        container,
        custom_container: custom_profile(&custom),
        profiles_path: profiles,
        encoding,
        export_path: export.clone(),
    };

    let summary = run_estimate(&manifest, &request, config)?;
    output_summary(output_format, &summary)?;

    if let Some(path) = export {
        eprintln!("Exported breakdown to {}", path.display());
    }
    Ok(())
}

fn cmd_containers(config: &Config, output_format: OutputFormat, profiles: Option<&Path>) -> Result<()> {
    let catalog = ContainerCatalog::load(profiles.or(config.profiles_path.as_deref()))?;
    output_containers(output_format, &catalog.all())
}

// --profiles is used for lookups here but only --set-profiles is saved
#[allow(clippy::too_many_arguments)]
fn cmd_config(
    mut config: Config,
    profiles: Option<&Path>,
    show: bool,
    set_container: Option<String>,
    set_output: Option<OutputFormat>,
    set_profiles: Option<PathBuf>,
    set_encoding: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        Config::default().save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut changed = false;

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(path) = set_profiles {
        ContainerCatalog::load(Some(&path))?;
        config.profiles_path = Some(path);
        changed = true;
    }
    if let Some(name) = set_container {
        // Store the catalog spelling of the name
        let catalog = ContainerCatalog::load(profiles.or(config.profiles_path.as_deref()))?;
        config.default_container = catalog.find(&name)?.name.clone();
        changed = true;
    }
    if let Some(encoding) = set_encoding {
        config.manifest_encoding = encoding;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
