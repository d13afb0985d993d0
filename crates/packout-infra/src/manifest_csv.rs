//! CSV loader for shipment manifests
//!
//! Expected header (column order is free, extra columns are ignored):
//! SKU,Length_in,Width_in,Height_in,Weight_lb,Qty,IsFuel,Stackable
//!
//! `IsFuel` and `Stackable` are optional; a missing column or blank cell reads as "No".
//! Any unusable numeric cell fails the whole load, after every row has been checked.

use std::io::Read;
use std::path::Path;

use encoding_rs::Encoding;
use packout_domain::model::ShipmentLine;
use packout_domain::service::parse_yes_no;
use packout_types::{ConfigError, DataQualityError, Error, Result, RowIssue};
use tracing::{debug, warn};

const COL_SKU: &str = "SKU";
const COL_LENGTH: &str = "Length_in";
const COL_WIDTH: &str = "Width_in";
const COL_HEIGHT: &str = "Height_in";
const COL_WEIGHT: &str = "Weight_lb";
const COL_QTY: &str = "Qty";
const COL_IS_FUEL: &str = "IsFuel";
const COL_STACKABLE: &str = "Stackable";

struct ColumnIndex {
    sku: usize,
    length: usize,
    width: usize,
    height: usize,
    weight: usize,
    qty: usize,
    is_fuel: Option<usize>,
    stackable: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| find(name).ok_or_else(|| Error::MissingColumn(name.to_string()));

        Ok(Self {
            sku: require(COL_SKU)?,
            length: require(COL_LENGTH)?,
            width: require(COL_WIDTH)?,
            height: require(COL_HEIGHT)?,
            weight: require(COL_WEIGHT)?,
            qty: require(COL_QTY)?,
            is_fuel: find(COL_IS_FUEL),
            stackable: find(COL_STACKABLE),
        })
    }
}

/// Load a manifest file, decoding it from `encoding_label` (e.g. "utf-8", "windows-1252").
///
/// A byte-order mark overrides the label.
pub fn load_manifest<P: AsRef<Path>>(path: P, encoding_label: &str) -> Result<Vec<ShipmentLine>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    let encoding = Encoding::for_label(encoding_label.trim().as_bytes())
        .ok_or_else(|| ConfigError::UnknownEncoding(encoding_label.to_string()))?;

    let bytes = std::fs::read(path)?;
    let (decoded, used, had_errors) = encoding.decode(&bytes);
    if had_errors {
        warn!(
            path = %path.display(),
            encoding = used.name(),
            "some characters could not be decoded and were replaced"
        );
    }

    let lines = parse_manifest(decoded.as_bytes())?;
    debug!(path = %path.display(), lines = lines.len(), "manifest loaded");
    Ok(lines)
}

/// Parse manifest rows from any UTF-8 reader
pub fn parse_manifest<R: Read>(reader: R) -> Result<Vec<ShipmentLine>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(|e| Error::Csv(e.to_string()))?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut lines = Vec::new();
    let mut issues = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| Error::Csv(e.to_string()))?;
        let row = RowContext {
            record: &record,
            row: row_idx + 1,
            line: record.position().map(|p| p.line()),
            sku: record.get(columns.sku).unwrap_or("").to_string(),
        };

        let length_in = row.dimension(columns.length, COL_LENGTH, &mut issues);
        let width_in = row.dimension(columns.width, COL_WIDTH, &mut issues);
        let height_in = row.dimension(columns.height, COL_HEIGHT, &mut issues);
        let weight_lb = row.dimension(columns.weight, COL_WEIGHT, &mut issues);
        let qty = row.quantity(columns.qty, &mut issues);

        if let (Some(length_in), Some(width_in), Some(height_in), Some(weight_lb), Some(qty)) =
            (length_in, width_in, height_in, weight_lb, qty)
        {
            let is_fuel = row.flag(columns.is_fuel);
            let stackable = row.flag(columns.stackable);
            lines.push(
                ShipmentLine::new(row.sku.clone(), length_in, width_in, height_in, weight_lb, qty)
                    .with_flags(is_fuel, stackable),
            );
        }
    }

    if !issues.is_empty() {
        return Err(DataQualityError::new(issues).into());
    }

    Ok(lines)
}

struct RowContext<'a> {
    record: &'a csv::StringRecord,
    row: usize,
    line: Option<u64>,
    sku: String,
}

impl RowContext<'_> {
    fn cell(&self, idx: usize) -> &str {
        self.record.get(idx).unwrap_or("")
    }

    fn flag(&self, idx: Option<usize>) -> bool {
        idx.map(|i| parse_yes_no(self.cell(i))).unwrap_or(false)
    }

    fn dimension(&self, idx: usize, column: &str, issues: &mut Vec<RowIssue>) -> Option<f64> {
        let raw = self.cell(idx);
        match parse_non_negative(raw) {
            Ok(value) => Some(value),
            Err(problem) => {
                issues.push(self.issue(column, raw, problem));
                None
            }
        }
    }

    fn quantity(&self, idx: usize, issues: &mut Vec<RowIssue>) -> Option<u64> {
        let raw = self.cell(idx);
        match parse_qty(raw) {
            Ok(value) => Some(value),
            Err(problem) => {
                issues.push(self.issue(COL_QTY, raw, problem));
                None
            }
        }
    }

    fn issue(&self, column: &str, raw: &str, problem: &str) -> RowIssue {
        RowIssue {
            row: self.row,
            line: self.line,
            sku: self.sku.clone(),
            column: column.to_string(),
            value: raw.to_string(),
            problem: problem.to_string(),
        }
    }
}

/// Drop thousands separators, but only when they group the integer part as `1,234,567`.
fn strip_thousands(s: &str) -> std::result::Result<String, &'static str> {
    let s = s.trim();
    if !s.contains(',') {
        return Ok(s.to_string());
    }

    let unsigned = s.strip_prefix(|c| c == '-' || c == '+').unwrap_or(s);
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let is_digits = |g: &str| g.chars().all(|c| c.is_ascii_digit());

    let mut groups = int_part.split(',');
    let leading_ok = groups
        .next()
        .is_some_and(|g| (1..=3).contains(&g.len()) && is_digits(g));
    let rest_ok = groups.all(|g| g.len() == 3 && is_digits(g));

    if leading_ok && rest_ok && !frac_part.contains(',') {
        Ok(s.replace(',', ""))
    } else {
        Err("is not a number")
    }
}

fn parse_number(s: &str) -> std::result::Result<f64, &'static str> {
    let cleaned = strip_thousands(s)?;
    if cleaned.is_empty() {
        return Err("is missing");
    }
    let value: f64 = cleaned.parse().map_err(|_| "is not a number")?;
    if !value.is_finite() {
        return Err("is not a finite number");
    }
    Ok(value)
}

fn parse_non_negative(s: &str) -> std::result::Result<f64, &'static str> {
    let value = parse_number(s)?;
    if value < 0.0 {
        return Err("is negative");
    }
    Ok(value)
}

/// Quantities must be whole; "12.0" is accepted as 12.
fn parse_qty(s: &str) -> std::result::Result<u64, &'static str> {
    let cleaned = strip_thousands(s)?;
    if let Ok(qty) = cleaned.parse::<u64>() {
        return Ok(qty);
    }
    let value = parse_non_negative(&cleaned)?;
    if value.fract() != 0.0 {
        return Err("is not a whole number");
    }
    if value >= u64::MAX as f64 {
        return Err("is too large");
    }
    Ok(value as u64)
}
