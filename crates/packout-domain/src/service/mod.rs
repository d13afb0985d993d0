//! Domain services

pub mod estimator;
pub mod report;

pub use estimator::{estimate, parse_yes_no, round_up_containers};
pub use report::{format_thousands, generate_packout_report};
