//! CLI definition using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use packout_types::OutputFormat;

#[derive(Parser)]
#[command(name = "packout")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Estimate shipping containers needed for a product manifest")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// TOML file with extra container profiles (overrides config)
    #[arg(long, global = true)]
    pub profiles: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Inline container dimensions; all four must be given together
#[derive(Args, Debug, Clone)]
pub struct CustomContainerArgs {
    /// Interior length in inches
    #[arg(long, requires_all = ["width", "height", "max_weight"])]
    pub length: Option<f64>,

    /// Interior width in inches
    #[arg(long, requires_all = ["length", "height", "max_weight"])]
    pub width: Option<f64>,

    /// Interior height in inches
    #[arg(long, requires_all = ["length", "width", "max_weight"])]
    pub height: Option<f64>,

    /// Maximum payload in lbs
    #[arg(long, requires_all = ["length", "width", "height"])]
    pub max_weight: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate containers for a shipment manifest CSV
    Estimate {
        /// Path to manifest CSV (SKU,Length_in,Width_in,Height_in,Weight_lb,Qty,IsFuel,Stackable)
        manifest: PathBuf,

        /// Container type (e.g., "20ft Standard", "40ft High Cube"). Uses config value if not specified.
        #[arg(long, short = 'c')]
        container: Option<String>,

        #[command(flatten)]
        custom: CustomContainerArgs,

        /// Manifest text encoding (e.g., "utf-8", "windows-1252")
        #[arg(long)]
        encoding: Option<String>,

        /// Also write the breakdown to an Excel file
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// List available container types
    Containers,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default container type
        #[arg(long)]
        set_container: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set container profiles TOML file
        #[arg(long)]
        set_profiles: Option<PathBuf>,

        /// Set manifest text encoding
        #[arg(long)]
        set_encoding: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
