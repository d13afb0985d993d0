//! Excel export functionality

use std::path::Path;

use chrono::Local;
use packout_domain::model::PackoutSummary;
use packout_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::info;

fn xlsx_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export a packout summary to an Excel file
pub fn export_to_excel(summary: &PackoutSummary, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, summary)?;

    let breakdown_sheet = workbook.add_worksheet();
    write_breakdown_sheet(breakdown_sheet, summary)?;

    workbook.save(output_path).map_err(xlsx_err)?;
    info!(path = %output_path.display(), rows = summary.sorted_lines.len(), "excel export written");

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, summary: &PackoutSummary) -> Result<()> {
    sheet.set_name("Summary").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    let whole = Format::new().set_num_format("#,##0");
    let ratio = Format::new().set_num_format("0.0000");

    sheet
        .write_string_with_format(0, 0, "Container Packout Report", &header_format)
        .map_err(xlsx_err)?;
    sheet.write_string(1, 0, "Generated:").map_err(xlsx_err)?;
    sheet
        .write_string(1, 1, Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
        .map_err(xlsx_err)?;

    sheet.write_string(3, 0, "Container type:").map_err(xlsx_err)?;
    sheet
        .write_string(3, 1, &summary.container.name)
        .map_err(xlsx_err)?;

    let whole_rows = [
        ("Total shipment volume (in³):", summary.total_volume_in3),
        ("Container volume (in³):", summary.container_volume_in3),
        ("Total shipment weight (lbs):", summary.total_weight_lb),
        ("Max weight per container (lbs):", summary.container.max_weight_lb),
    ];
    let mut row = 4;
    for (label, value) in whole_rows {
        sheet.write_string(row, 0, label).map_err(xlsx_err)?;
        sheet
            .write_number_with_format(row, 1, value, &whole)
            .map_err(xlsx_err)?;
        row += 1;
    }

    let ratio_rows = [
        ("Containers by volume:", summary.containers_by_volume),
        ("Containers by weight:", summary.containers_by_weight),
        ("Containers (fractional):", summary.estimated_containers_fractional),
    ];
    for (label, value) in ratio_rows {
        sheet.write_string(row, 0, label).map_err(xlsx_err)?;
        sheet
            .write_number_with_format(row, 1, value, &ratio)
            .map_err(xlsx_err)?;
        row += 1;
    }

    sheet.write_string(row, 0, "Limiting factor:").map_err(xlsx_err)?;
    sheet
        .write_string(row, 1, summary.limiting_factor.label())
        .map_err(xlsx_err)?;
    row += 2;

    sheet
        .write_string_with_format(row, 0, "Estimated containers needed:", &header_format)
        .map_err(xlsx_err)?;
    sheet
        .write_number_with_format(row, 1, summary.estimated_containers_rounded as f64, &header_format)
        .map_err(xlsx_err)?;

    sheet.set_column_width(0, 34).map_err(xlsx_err)?;
    sheet.set_column_width(1, 20).map_err(xlsx_err)?;

    Ok(())
}

fn write_breakdown_sheet(sheet: &mut Worksheet, summary: &PackoutSummary) -> Result<()> {
    sheet.set_name("Breakdown").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    let whole = Format::new().set_num_format("#,##0");

    let headers = [
        "SKU",
        "Length_in",
        "Width_in",
        "Height_in",
        "Weight_lb",
        "Qty",
        "IsFuel",
        "Stackable",
        "Volume_in3",
        "Total_Volume",
        "Total_Weight",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    for (row_idx, packed) in summary.sorted_lines.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let line = &packed.line;

        sheet.write_string(row, 0, &line.sku).map_err(xlsx_err)?;
        sheet.write_number(row, 1, line.length_in).map_err(xlsx_err)?;
        sheet.write_number(row, 2, line.width_in).map_err(xlsx_err)?;
        sheet.write_number(row, 3, line.height_in).map_err(xlsx_err)?;
        sheet.write_number(row, 4, line.weight_lb).map_err(xlsx_err)?;
        sheet
            .write_number(row, 5, line.qty as f64)
            .map_err(xlsx_err)?;
        sheet.write_boolean(row, 6, line.is_fuel).map_err(xlsx_err)?;
        sheet.write_boolean(row, 7, line.stackable).map_err(xlsx_err)?;
        sheet
            .write_number_with_format(row, 8, packed.unit_volume_in3, &whole)
            .map_err(xlsx_err)?;
        sheet
            .write_number_with_format(row, 9, packed.line_volume_in3, &whole)
            .map_err(xlsx_err)?;
        sheet
            .write_number_with_format(row, 10, packed.line_weight_lb, &whole)
            .map_err(xlsx_err)?;
    }

    sheet.set_column_width(0, 24).map_err(xlsx_err)?;
    sheet.set_column_width(8, 14).map_err(xlsx_err)?;
    sheet.set_column_width(9, 14).map_err(xlsx_err)?;
    sheet.set_column_width(10, 14).map_err(xlsx_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use packout_domain::model::{ContainerProfile, ShipmentLine};
    use packout_domain::service::estimate;

    #[test]
    fn test_export_writes_workbook() {
        let container = ContainerProfile::new("20ft Standard", 233.0, 92.0, 94.0, 48000.0);
        let lines = vec![
            ShipmentLine::new("VP-100", 10.0, 10.0, 10.0, 50.0, 10).with_flags(true, false),
            ShipmentLine::new("VP-200", 5.0, 5.0, 5.0, 10.0, 100),
        ];
        let summary = estimate(&lines, &container).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packout.xlsx");
        export_to_excel(&summary, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let container = ContainerProfile::new("20ft Standard", 233.0, 92.0, 94.0, 48000.0);
        let summary = estimate(&[], &container).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("packout.xlsx");
        let err = export_to_excel(&summary, &path).unwrap_err();
        assert!(matches!(err, Error::Excel(_)));
    }
}
