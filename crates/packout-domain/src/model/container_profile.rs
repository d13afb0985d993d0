//! Container capacity definitions

use serde::{Deserialize, Serialize};

use packout_types::{Error, Result};

/// Interior dimensions and payload limit of a shipping container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerProfile {
    pub name: String,
    pub length_in: f64,
    pub width_in: f64,
    pub height_in: f64,
    pub max_weight_lb: f64,
}

impl ContainerProfile {
    pub fn new(
        name: impl Into<String>,
        length_in: f64,
        width_in: f64,
        height_in: f64,
        max_weight_lb: f64,
    ) -> Self {
        Self {
            name: name.into(),
            length_in,
            width_in,
            height_in,
            max_weight_lb,
        }
    }

    pub fn volume_in3(&self) -> f64 {
        self.length_in * self.width_in * self.height_in
    }

    /// Reject profiles that cannot hold anything.
    ///
    /// Every dimension, the resulting volume and the payload limit must be
    /// finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        let dims = [
            ("length_in", self.length_in),
            ("width_in", self.width_in),
            ("height_in", self.height_in),
        ];
        for (field, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(self.invalid(format!("{} must be positive, got {}", field, value)));
            }
        }

        let volume = self.volume_in3();
        if !volume.is_finite() || volume <= 0.0 {
            return Err(self.invalid(format!("volume must be positive, got {}", volume)));
        }

        if !self.max_weight_lb.is_finite() || self.max_weight_lb <= 0.0 {
            return Err(self.invalid(format!(
                "max_weight_lb must be positive, got {}",
                self.max_weight_lb
            )));
        }

        Ok(())
    }

    fn invalid(&self, reason: String) -> Error {
        Error::InvalidContainer {
            name: self.name.clone(),
            reason,
        }
    }
}
