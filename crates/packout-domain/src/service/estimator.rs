//! Container count estimation from aggregate volume and weight
//!
//! No placement or stacking geometry is attempted: the estimate is the larger
//! of the volume ratio and the weight ratio against a single container.

use std::cmp::Ordering;

use packout_types::{DataQualityError, Result, RowIssue};
use tracing::{debug, warn};

use crate::model::{
    ContainerProfile, EstimateWarning, LimitingFactor, PackedLine, PackoutSummary, ShipmentLine,
};

/// Normalize a Yes/No manifest cell. Only "yes" (any case) is true.
pub fn parse_yes_no(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("yes")
}

/// Smallest whole container count that covers `fractional`.
///
/// Exact fits are not bumped: 2.0 stays 2.
pub fn round_up_containers(fractional: f64) -> u64 {
    if fractional.fract() > 0.0 {
        fractional.trunc() as u64 + 1
    } else {
        fractional as u64
    }
}

/// Estimate how many `container`s the shipment `lines` need.
pub fn estimate(lines: &[ShipmentLine], container: &ContainerProfile) -> Result<PackoutSummary> {
    container.validate()?;

    let mut packed: Vec<PackedLine> = lines
        .iter()
        .enumerate()
        .map(|(input_index, line)| pack_line(input_index, line))
        .collect();
    validate_packed(&packed)?;

    let (total_volume_in3, total_weight_lb) = packed.iter().fold((0.0, 0.0), |(vol, wt), p| {
        (vol + p.line_volume_in3, wt + p.line_weight_lb)
    });
    let total_units = packed.iter().fold(0u64, |n, p| n.saturating_add(p.line.qty));
    let fuel_lines = packed.iter().filter(|p| p.line.is_fuel).count();

    let container_volume_in3 = container.volume_in3();
    let containers_by_volume = total_volume_in3 / container_volume_in3;
    let containers_by_weight = total_weight_lb / container.max_weight_lb;
    let estimated_containers_fractional = containers_by_volume.max(containers_by_weight);
    let estimated_containers_rounded = round_up_containers(estimated_containers_fractional);

    let limiting_factor = if estimated_containers_fractional == 0.0 {
        LimitingFactor::None
    } else if containers_by_volume > containers_by_weight {
        LimitingFactor::Volume
    } else {
        LimitingFactor::Weight
    };

    // sort_by is stable, so equal unit volumes keep manifest order
    packed.sort_by(|a, b| {
        b.unit_volume_in3
            .partial_cmp(&a.unit_volume_in3)
            .unwrap_or(Ordering::Equal)
    });

    let mut warnings = Vec::new();
    if lines.is_empty() {
        warn!(container = %container.name, "manifest has no product lines");
        warnings.push(EstimateWarning::EmptyInput);
    }

    debug!(
        container = %container.name,
        lines = lines.len(),
        total_volume_in3,
        total_weight_lb,
        containers_by_volume,
        containers_by_weight,
        estimated = estimated_containers_rounded,
        "packout estimated"
    );

    Ok(PackoutSummary {
        container: container.clone(),
        container_volume_in3,
        total_volume_in3,
        total_weight_lb,
        total_units,
        fuel_lines,
        containers_by_volume,
        containers_by_weight,
        estimated_containers_fractional,
        estimated_containers_rounded,
        limiting_factor,
        sorted_lines: packed,
        warnings,
    })
}

fn pack_line(input_index: usize, line: &ShipmentLine) -> PackedLine {
    let unit_volume_in3 = line.unit_volume_in3();
    let qty = line.qty as f64;
    PackedLine {
        line: line.clone(),
        input_index,
        unit_volume_in3,
        line_volume_in3: unit_volume_in3 * qty,
        line_weight_lb: line.weight_lb * qty,
    }
}

/// Check input fields, then the products and running totals built from them.
///
/// Finite inputs can still overflow (1e200 x 1e200), and `inf * 0` is NaN,
/// which `f64::max` would quietly discard.
fn validate_packed(packed: &[PackedLine]) -> Result<()> {
    let mut issues = Vec::new();
    let mut volume_total = 0.0_f64;
    let mut weight_total = 0.0_f64;

    for p in packed {
        let line = &p.line;
        let issue = |column: &str, value: f64, problem: &str| RowIssue {
            row: p.input_index + 1,
            line: None,
            sku: line.sku.clone(),
            column: column.to_string(),
            value: value.to_string(),
            problem: problem.to_string(),
        };

        let fields = [
            ("Length_in", line.length_in),
            ("Width_in", line.width_in),
            ("Height_in", line.height_in),
            ("Weight_lb", line.weight_lb),
        ];
        let before = issues.len();
        for (column, value) in fields {
            if !value.is_finite() {
                issues.push(issue(column, value, "is not a finite number"));
            } else if value < 0.0 {
                issues.push(issue(column, value, "is negative"));
            }
        }
        if issues.len() > before {
            continue;
        }

        let derived = [
            ("Volume_in3", p.unit_volume_in3),
            ("Total_Volume", p.line_volume_in3),
            ("Total_Weight", p.line_weight_lb),
        ];
        let before = issues.len();
        for (column, value) in derived {
            if !value.is_finite() {
                issues.push(issue(column, value, "overflows"));
            }
        }
        if issues.len() > before {
            continue;
        }

        // report only the row where a running total first overflows
        if volume_total.is_finite() {
            volume_total += p.line_volume_in3;
            if !volume_total.is_finite() {
                issues.push(issue(
                    "Total_Volume",
                    volume_total,
                    "pushes the shipment volume total past f64 range",
                ));
            }
        }
        if weight_total.is_finite() {
            weight_total += p.line_weight_lb;
            if !weight_total.is_finite() {
                issues.push(issue(
                    "Total_Weight",
                    weight_total,
                    "pushes the shipment weight total past f64 range",
                ));
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(DataQualityError::new(issues).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use packout_types::Error;
    use proptest::prelude::*;

    fn twenty_ft() -> ContainerProfile {
        ContainerProfile::new("20ft Standard", 233.0, 92.0, 94.0, 48000.0)
    }

    fn scenario_lines() -> Vec<ShipmentLine> {
        vec![
            ShipmentLine::new("SMALL", 5.0, 5.0, 5.0, 10.0, 100),
            ShipmentLine::new("LARGE", 10.0, 10.0, 10.0, 50.0, 10),
        ]
    }

    #[test]
    fn test_two_line_scenario() {
        let summary = estimate(&scenario_lines(), &twenty_ft()).unwrap();
        assert_eq!(summary.total_volume_in3, 22_500.0);
        assert_eq!(summary.total_weight_lb, 1_500.0);
        assert_eq!(summary.container_volume_in3, 2_013_464.0);
        assert!((summary.containers_by_volume - 22_500.0 / 2_013_464.0).abs() < 1e-12);
        assert_eq!(summary.containers_by_weight, 0.03125);
        assert_eq!(summary.estimated_containers_fractional, 0.03125);
        assert_eq!(summary.estimated_containers_rounded, 1);
        assert_eq!(summary.limiting_factor, LimitingFactor::Weight);
        assert_eq!(summary.sorted_lines[0].line.sku, "LARGE");
        assert_eq!(summary.sorted_lines[0].unit_volume_in3, 1000.0);
        assert_eq!(summary.sorted_lines[1].unit_volume_in3, 125.0);
        assert!(summary.warnings.is_empty());
    }

    #[test]
    fn test_empty_input_is_zero_with_warning() {
        let summary = estimate(&[], &twenty_ft()).unwrap();
        assert_eq!(summary.total_volume_in3, 0.0);
        assert_eq!(summary.total_weight_lb, 0.0);
        assert_eq!(summary.estimated_containers_rounded, 0);
        assert_eq!(summary.limiting_factor, LimitingFactor::None);
        assert_eq!(summary.warnings, vec![EstimateWarning::EmptyInput]);
        assert!(summary.sorted_lines.is_empty());
    }

    #[test]
    fn test_exact_fit_not_bumped() {
        // two containers' worth of weight, negligible volume
        let container = ContainerProfile::new("box", 100.0, 100.0, 100.0, 1000.0);
        let lines = vec![ShipmentLine::new("HEAVY", 1.0, 1.0, 1.0, 500.0, 4)];
        let summary = estimate(&lines, &container).unwrap();
        assert_eq!(summary.estimated_containers_fractional, 2.0);
        assert_eq!(summary.estimated_containers_rounded, 2);
    }

    #[test]
    fn test_volume_bound_shipment() {
        let container = ContainerProfile::new("box", 10.0, 10.0, 10.0, 1_000_000.0);
        let lines = vec![ShipmentLine::new("BULKY", 10.0, 10.0, 5.0, 1.0, 3)];
        let summary = estimate(&lines, &container).unwrap();
        assert_eq!(summary.containers_by_volume, 1.5);
        assert_eq!(summary.estimated_containers_rounded, 2);
        assert_eq!(summary.limiting_factor, LimitingFactor::Volume);
    }

    #[test]
    fn test_zero_qty_line_kept_but_contributes_nothing() {
        let lines = vec![
            ShipmentLine::new("NONE", 50.0, 50.0, 50.0, 999.0, 0),
            ShipmentLine::new("ONE", 1.0, 2.0, 3.0, 4.0, 1),
        ];
        let summary = estimate(&lines, &twenty_ft()).unwrap();
        assert_eq!(summary.total_volume_in3, 6.0);
        assert_eq!(summary.total_weight_lb, 4.0);
        assert_eq!(summary.sorted_lines.len(), 2);
        assert_eq!(summary.sorted_lines[0].line.sku, "NONE");
        assert_eq!(summary.sorted_lines[0].line_volume_in3, 0.0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let lines = vec![
            ShipmentLine::new("A", 2.0, 3.0, 4.0, 1.0, 1),
            ShipmentLine::new("B", 1.0, 1.0, 1.0, 1.0, 1),
            ShipmentLine::new("C", 4.0, 3.0, 2.0, 1.0, 1),
            ShipmentLine::new("D", 6.0, 4.0, 1.0, 1.0, 1),
        ];
        let summary = estimate(&lines, &twenty_ft()).unwrap();
        let order: Vec<&str> = summary.sorted_lines.iter().map(|p| p.line.sku.as_str()).collect();
        assert_eq!(order, vec!["A", "C", "D", "B"]);
        let indices: Vec<usize> = summary.sorted_lines.iter().map(|p| p.input_index).collect();
        assert_eq!(indices, vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_flags_carried_through() {
        let lines = vec![ShipmentLine::new("FUEL", 1.0, 1.0, 1.0, 1.0, 1).with_flags(true, false)];
        let summary = estimate(&lines, &twenty_ft()).unwrap();
        assert!(summary.sorted_lines[0].line.is_fuel);
        assert!(!summary.sorted_lines[0].line.stackable);
        assert_eq!(summary.fuel_lines, 1);
    }

    #[test]
    fn test_degenerate_container_rejected() {
        let container = ContainerProfile::new("broken", 0.0, 92.0, 94.0, 48000.0);
        let err = estimate(&scenario_lines(), &container).unwrap_err();
        assert!(matches!(err, Error::InvalidContainer { .. }));
    }

    #[test]
    fn test_negative_dimension_reports_row_and_sku() {
        let lines = vec![
            ShipmentLine::new("OK", 1.0, 1.0, 1.0, 1.0, 1),
            ShipmentLine::new("BAD", 1.0, -2.0, 1.0, f64::NAN, 1),
        ];
        let err = estimate(&lines, &twenty_ft()).unwrap_err();
        match err {
            Error::DataQuality(dq) => {
                assert_eq!(dq.rows(), vec![2]);
                assert_eq!(dq.issues.len(), 2);
                assert_eq!(dq.issues[0].sku, "BAD");
                assert_eq!(dq.issues[0].column, "Width_in");
                assert_eq!(dq.issues[1].column, "Weight_lb");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("Yes"));
        assert!(parse_yes_no("YES"));
        assert!(parse_yes_no(" yes "));
        assert!(!parse_yes_no("No"));
        assert!(!parse_yes_no("y"));
        assert!(!parse_yes_no(""));
        assert!(!parse_yes_no("true"));
    }

    #[test]
    fn test_round_up_containers() {
        assert_eq!(round_up_containers(0.0), 0);
        assert_eq!(round_up_containers(0.03125), 1);
        assert_eq!(round_up_containers(1.0), 1);
        assert_eq!(round_up_containers(1.0001), 2);
        assert_eq!(round_up_containers(3.0), 3);
    }

    #[test]
    fn test_unit_and_fuel_counts() {
        let lines = vec![
            ShipmentLine::new("FUEL", 1.0, 1.0, 1.0, 1.0, 4).with_flags(true, false),
            ShipmentLine::new("DRY", 1.0, 1.0, 1.0, 1.0, 6),
            ShipmentLine::new("FUEL-EMPTY", 1.0, 1.0, 1.0, 1.0, 0).with_flags(true, true),
        ];
        let summary = estimate(&lines, &twenty_ft()).unwrap();
        assert_eq!(summary.total_units, 10);
        assert_eq!(summary.fuel_lines, 2);
    }

    #[test]
    fn test_overflowing_unit_volume_with_zero_qty_rejected() {
        // inf * 0 would be NaN and silently lose the volume ratio
        let lines = vec![
            ShipmentLine::new("HUGE", 1e200, 1e200, 1.0, 1.0, 0),
            ShipmentLine::new("NORMAL", 10.0, 10.0, 10.0, 50.0, 10),
        ];
        let err = estimate(&lines, &twenty_ft()).unwrap_err();
        match err {
            Error::DataQuality(dq) => {
                assert_eq!(dq.rows(), vec![1]);
                assert_eq!(dq.issues[0].sku, "HUGE");
                assert_eq!(dq.issues[0].column, "Volume_in3");
                assert_eq!(dq.issues[0].problem, "overflows");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_overflowing_line_volume_rejected() {
        let lines = vec![ShipmentLine::new("HUGE", 1e200, 1e150, 1.0, 1.0, 1)];
        assert!(matches!(estimate(&lines, &twenty_ft()), Err(Error::DataQuality(_))));

        let lines = vec![ShipmentLine::new("MANY", 1e300, 1.0, 1.0, 1e300, u64::MAX)];
        let err = estimate(&lines, &twenty_ft()).unwrap_err();
        match err {
            Error::DataQuality(dq) => {
                let columns: Vec<&str> = dq.issues.iter().map(|i| i.column.as_str()).collect();
                assert_eq!(columns, vec!["Total_Volume", "Total_Weight"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_overflowing_running_total_blames_first_row_past_range() {
        let lines = vec![
            ShipmentLine::new("A", 1e308, 1.0, 1.0, 1.0, 1),
            ShipmentLine::new("B", 1.0, 1.0, 1.0, 1.0, 1),
            ShipmentLine::new("C", 1e308, 1.0, 1.0, 1.0, 1),
            ShipmentLine::new("D", 1e308, 1.0, 1.0, 1.0, 1),
        ];
        let err = estimate(&lines, &twenty_ft()).unwrap_err();
        match err {
            Error::DataQuality(dq) => {
                assert_eq!(dq.issues.len(), 1);
                assert_eq!(dq.issues[0].sku, "C");
                assert_eq!(dq.issues[0].row, 3);
                assert_eq!(dq.issues[0].column, "Total_Volume");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_large_but_finite_quantity_accepted() {
        let lines = vec![ShipmentLine::new("BOLT", 1.0, 1.0, 1.0, 0.01, 5_000_000_000)];
        let summary = estimate(&lines, &twenty_ft()).unwrap();
        assert_eq!(summary.total_units, 5_000_000_000);
        assert!(summary.estimated_containers_fractional.is_finite());
    }

    fn arb_line() -> impl Strategy<Value = ShipmentLine> {
        (
            "[A-Z]{1,4}",
            0u32..200,
            0u32..200,
            0u32..200,
            0u32..5000,
            0u64..1000,
        )
            .prop_map(|(sku, l, w, h, wt, qty)| {
                ShipmentLine::new(sku, f64::from(l), f64::from(w), f64::from(h), f64::from(wt), qty)
            })
    }

    proptest! {
        #[test]
        fn prop_totals_are_line_sums(lines in prop::collection::vec(arb_line(), 0..30)) {
            let summary = estimate(&lines, &twenty_ft()).unwrap();
            let vol: f64 = lines.iter().map(|l| l.unit_volume_in3() * l.qty as f64).sum();
            let wt: f64 = lines.iter().map(|l| l.weight_lb * l.qty as f64).sum();
            prop_assert_eq!(summary.total_volume_in3, vol);
            prop_assert_eq!(summary.total_weight_lb, wt);
        }

        #[test]
        fn prop_rounded_is_ceiling(lines in prop::collection::vec(arb_line(), 0..30)) {
            let summary = estimate(&lines, &twenty_ft()).unwrap();
            let frac = summary.estimated_containers_fractional;
            prop_assert_eq!(summary.estimated_containers_rounded as f64, frac.ceil());
        }

        #[test]
        fn prop_sorted_is_stable_permutation(lines in prop::collection::vec(arb_line(), 0..30)) {
            let summary = estimate(&lines, &twenty_ft()).unwrap();
            let mut indices: Vec<usize> = summary.sorted_lines.iter().map(|p| p.input_index).collect();
            for pair in summary.sorted_lines.windows(2) {
                prop_assert!(pair[0].unit_volume_in3 >= pair[1].unit_volume_in3);
                if pair[0].unit_volume_in3 == pair[1].unit_volume_in3 {
                    prop_assert!(pair[0].input_index < pair[1].input_index);
                }
            }
            for p in &summary.sorted_lines {
                prop_assert_eq!(&p.line, &lines[p.input_index]);
            }
            indices.sort_unstable();
            prop_assert_eq!(indices, (0..lines.len()).collect::<Vec<_>>());
        }

        #[test]
        fn prop_idempotent(lines in prop::collection::vec(arb_line(), 0..30)) {
            let first = estimate(&lines, &twenty_ft()).unwrap();
            let second = estimate(&lines, &twenty_ft()).unwrap();
            prop_assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }
    }
}
