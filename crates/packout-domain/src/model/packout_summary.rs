//! Estimation results

use serde::{Deserialize, Serialize};

use super::{ContainerProfile, ShipmentLine};

/// A manifest line annotated with its computed volume and weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedLine {
    #[serde(flatten)]
    pub line: ShipmentLine,
    /// Zero-based position in the input manifest
    pub input_index: usize,
    pub unit_volume_in3: f64,
    pub line_volume_in3: f64,
    pub line_weight_lb: f64,
}

/// Which capacity ran out first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitingFactor {
    Volume,
    Weight,
    None,
}

impl LimitingFactor {
    pub fn label(&self) -> &'static str {
        match self {
            LimitingFactor::Volume => "volume",
            LimitingFactor::Weight => "weight",
            LimitingFactor::None => "-",
        }
    }
}

/// Non-fatal conditions noticed during estimation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateWarning {
    /// The manifest held no lines; totals are all zero
    EmptyInput,
}

impl std::fmt::Display for EstimateWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimateWarning::EmptyInput => write!(f, "manifest contains no product lines"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackoutSummary {
    pub container: ContainerProfile,
    pub container_volume_in3: f64,
    pub total_volume_in3: f64,
    pub total_weight_lb: f64,
    /// Sum of Qty over all lines
    pub total_units: u64,
    /// Lines flagged IsFuel
    pub fuel_lines: usize,
    pub containers_by_volume: f64,
    pub containers_by_weight: f64,
    pub estimated_containers_fractional: f64,
    pub estimated_containers_rounded: u64,
    pub limiting_factor: LimitingFactor,
    /// Lines by descending unit volume, input order on ties
    pub sorted_lines: Vec<PackedLine>,
    #[serde(default)]
    pub warnings: Vec<EstimateWarning>,
}
