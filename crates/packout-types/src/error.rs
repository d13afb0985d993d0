//! Error types for packout-estimator

use std::fmt;

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),
}

/// A single offending field in a manifest row
#[derive(Debug, Clone, PartialEq)]
pub struct RowIssue {
    /// 1-based data row (header excluded)
    pub row: usize,
    /// Physical line in the source file, when the row came from a file
    pub line: Option<u64>,
    pub sku: String,
    pub column: String,
    pub value: String,
    pub problem: String,
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}", self.row)?;
        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }
        let sku = if self.sku.is_empty() { "<blank>" } else { self.sku.as_str() };
        write!(
            f,
            ", SKU {}: {} = {:?} {}",
            sku, self.column, self.value, self.problem
        )
    }
}

/// One or more manifest rows carry values the estimator cannot use
#[derive(Debug, Clone, PartialEq)]
pub struct DataQualityError {
    pub issues: Vec<RowIssue>,
}

impl DataQualityError {
    pub fn new(issues: Vec<RowIssue>) -> Self {
        Self { issues }
    }

    /// Distinct row numbers that failed, in ascending order
    pub fn rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.issues.iter().map(|i| i.row).collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }
}

impl fmt::Display for DataQualityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} invalid value(s) in {} row(s)",
            self.issues.len(),
            self.rows().len()
        )?;
        for issue in &self.issues {
            write!(f, "\n  {}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for DataQualityError {}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Data quality error: {0}")]
    DataQuality(#[from] DataQualityError),

    #[error("Invalid container profile '{name}': {reason}")]
    InvalidContainer { name: String, reason: String },

    #[error("Unknown container '{name}' (available: {})", .available.join(", "))]
    UnknownContainer { name: String, available: Vec<String> },

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
