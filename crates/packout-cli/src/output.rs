//! Output formatting module

use packout_domain::model::{ContainerProfile, PackoutSummary};
use packout_domain::service::{format_thousands, generate_packout_report};
use packout_types::{OutputFormat, Result};

pub fn output_summary(output_format: OutputFormat, summary: &PackoutSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(summary)?;
        println!("{}", content);
    } else {
        print!("{}", generate_packout_report(summary));
    }
    Ok(())
}

pub fn output_containers(output_format: OutputFormat, containers: &[&ContainerProfile]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(containers)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nContainer Types");
    println!("===============");
    println!(
        "{:<20} {:>8} {:>8} {:>8} {:>14} {:>12}",
        "Name", "L(in)", "W(in)", "H(in)", "Volume(in³)", "Max(lbs)"
    );
    println!("{}", "-".repeat(75));
    for c in containers {
        println!(
            "{:<20} {:>8} {:>8} {:>8} {:>14} {:>12}",
            c.name,
            c.length_in,
            c.width_in,
            c.height_in,
            format_thousands(c.volume_in3()),
            format_thousands(c.max_weight_lb)
        );
    }
    Ok(())
}
