//! Application use cases

pub mod estimate_service;

pub use estimate_service::{resolve_container, run_estimate, EstimateRequest};
