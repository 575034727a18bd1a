//! Workbook to JSON export
//!
//! Each sheet becomes an array of flat records keyed by normalized header,
//! in sheet order and row order.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{SheetsError, SheetsResult};
use crate::schema::normalize_header;
use crate::workbook::{Cell, Sheet, Workbook, read_workbook};

/// One exported row
pub type Record = IndexMap<String, JsonValue>;

/// Sheet name to its records, in workbook order
pub type ExportedData = IndexMap<String, Vec<Record>>;

pub fn export_workbook(workbook: &Workbook) -> ExportedData {
    workbook
        .sheets()
        .iter()
        .map(|sheet| (sheet.name.clone(), export_sheet(sheet)))
        .collect()
}

pub fn export_sheet(sheet: &Sheet) -> Vec<Record> {
    let keys = header_keys(sheet.header());

    let records: Vec<Record> = sheet
        .data_rows()
        .filter(|(_, cells)| cells.iter().any(|cell| !cell.is_empty()))
        .map(|(_, cells)| {
            // Cells missing from a short row export as empty strings
            keys.iter()
                .enumerate()
                .map(|(i, key)| {
                    let value = cells
                        .get(i)
                        .map(Cell::to_json)
                        .unwrap_or_else(|| JsonValue::String(String::new()));
                    (key.clone(), value)
                })
                .collect()
        })
        .collect();

    debug!(
        "Exported {} of {} data rows from '{}'",
        records.len(),
        sheet.row_count().saturating_sub(1),
        sheet.name
    );
    records
}

/// Record keys for a header row. Blank header cells become `col_<i>`.
pub fn header_keys(header: &[Cell]) -> Vec<String> {
    header
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell.as_text() {
            Some(text) => normalize_header(&text),
            None => format!("col_{i}"),
        })
        .collect()
}

/// Pretty-printed JSON with two-space indentation
pub fn to_json_string(data: &ExportedData) -> SheetsResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// `lesson.xlsx` exports to `lesson.json` next to it
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// Read `input`, export every sheet and write the JSON to `output`
pub fn export_file(input: &Path, output: &Path) -> SheetsResult<ExportedData> {
    let workbook = read_workbook(input)?;
    let data = export_workbook(&workbook);

    let mut json = to_json_string(&data)?;
    json.push('\n');
    std::fs::write(output, json).map_err(|e| SheetsError::io(output, e))?;

    info!(
        "Exported {} sheets ({} records) to {}",
        data.len(),
        data.values().map(Vec::len).sum::<usize>(),
        output.display()
    );
    Ok(data)
}
