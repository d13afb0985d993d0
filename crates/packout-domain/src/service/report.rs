//! Plain-text packout report

use crate::model::PackoutSummary;

/// Format with thousands separators and no decimals (e.g. `2,013,464`)
pub fn format_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 && digits != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

pub fn generate_packout_report(summary: &PackoutSummary) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("              Container Packout Report            \n");
    report.push_str("==================================================\n\n");

    report.push_str("[Packing Summary]\n");
    report.push_str(&format!("  Container type:            {}\n", summary.container.name));
    report.push_str(&format!(
        "  Product lines / units:     {} / {}\n",
        summary.sorted_lines.len(),
        format_thousands(summary.total_units as f64)
    ));
    report.push_str(&format!("  Fuel lines:                {}\n", summary.fuel_lines));
    report.push_str(&format!(
        "  Total shipment volume:     {} in³\n",
        format_thousands(summary.total_volume_in3)
    ));
    report.push_str(&format!(
        "  Container volume:          {} in³\n",
        format_thousands(summary.container_volume_in3)
    ));
    report.push_str(&format!(
        "  Total shipment weight:     {} lbs\n",
        format_thousands(summary.total_weight_lb)
    ));
    report.push_str(&format!(
        "  Max weight per container:  {} lbs\n",
        format_thousands(summary.container.max_weight_lb)
    ));
    report.push_str(&format!(
        "  Containers by volume:      {:.4}\n",
        summary.containers_by_volume
    ));
    report.push_str(&format!(
        "  Containers by weight:      {:.4}\n",
        summary.containers_by_weight
    ));
    report.push_str(&format!(
        "  Limiting factor:           {}\n",
        summary.limiting_factor.label()
    ));
    report.push('\n');
    report.push_str(&format!(
        "  Estimated containers needed: {}\n\n",
        summary.estimated_containers_rounded
    ));

    report.push_str("[Product Breakdown]\n");
    if summary.sorted_lines.is_empty() {
        report.push_str("  (no product lines)\n\n");
    } else {
        let rule = "-".repeat(104);
        report.push_str(&rule);
        report.push('\n');
        report.push_str(&format!(
            "{:<16} {:>8} {:>8} {:>8} {:>10} {:>7} {:>6} {:>9} {:>12} {:>14}\n",
            "SKU", "L(in)", "W(in)", "H(in)", "Wt(lb)", "Qty", "Fuel", "Stackable", "Vol(in³)", "Total(in³)"
        ));
        report.push_str(&rule);
        report.push('\n');
        for packed in &summary.sorted_lines {
            let line = &packed.line;
            report.push_str(&format!(
                "{:<16} {:>8.2} {:>8.2} {:>8.2} {:>10.2} {:>7} {:>6} {:>9} {:>12} {:>14}\n",
                truncate_str(&line.sku, 16),
                line.length_in,
                line.width_in,
                line.height_in,
                line.weight_lb,
                line.qty,
                yes_no(line.is_fuel),
                yes_no(line.stackable),
                format_thousands(packed.unit_volume_in3),
                format_thousands(packed.line_volume_in3)
            ));
        }
        report.push('\n');
    }

    if !summary.warnings.is_empty() {
        report.push_str("[Warnings]\n");
        for warning in &summary.warnings {
            report.push_str(&format!("  - {}\n", warning));
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
