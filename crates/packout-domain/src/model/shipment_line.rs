use serde::{Deserialize, Serialize};

/// One row of a shipment manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentLine {
    pub sku: String,      // SKU
    pub length_in: f64,   // Length_in
    pub width_in: f64,    // Width_in
    pub height_in: f64,   // Height_in
    pub weight_lb: f64,   // Weight_lb (per unit)
    pub qty: u64,         // Qty
    pub is_fuel: bool,    // IsFuel
    pub stackable: bool,  // Stackable
}

impl ShipmentLine {
    /// Line with the given geometry and quantity, flags cleared
    pub fn new(
        sku: impl Into<String>,
        length_in: f64,
        width_in: f64,
        height_in: f64,
        weight_lb: f64,
        qty: u64,
    ) -> Self {
        Self {
            sku: sku.into(),
            length_in,
            width_in,
            height_in,
            weight_lb,
            qty,
            is_fuel: false,
            stackable: false,
        }
    }

    pub fn with_flags(mut self, is_fuel: bool, stackable: bool) -> Self {
        self.is_fuel = is_fuel;
        self.stackable = stackable;
        self
    }

    pub fn unit_volume_in3(&self) -> f64 {
        self.length_in * self.width_in * self.height_in
    }
}
