//! Domain models and services for container packout estimation

pub mod model;
pub mod service;
