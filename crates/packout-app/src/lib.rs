//! Application service layer - use cases, config, container catalog, export

pub mod app;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod export;
