//! Packout Estimator - shipping container count estimation
//!
//! A CLI tool that reads a product shipment manifest and estimates how many
//! containers of a chosen type it needs, by volume and by weight.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
