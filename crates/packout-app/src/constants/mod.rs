//! Constants for container packout estimation

pub mod containers;

pub use containers::{get_preset, normalize_container_name, preset_containers, DEFAULT_CONTAINER};
