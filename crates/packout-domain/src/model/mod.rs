//! Domain model types

pub mod container_profile;
pub mod packout_summary;
pub mod shipment_line;

pub use container_profile::ContainerProfile;
pub use packout_summary::{EstimateWarning, LimitingFactor, PackedLine, PackoutSummary};
pub use shipment_line::ShipmentLine;
