//! Sample StudyHub workbook
//!
//! Static content for every schema sheet, used by `create-sample` to give
//! authors a starting point that already passes validation.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde_yaml::Value as YamlValue;
use std::path::Path;
use tracing::info;

use crate::error::SheetsResult;
use crate::schema::schemas;
use crate::workbook::{Cell, Sheet, Workbook, WorkbookWriter};

pub const DEFAULT_SAMPLE_PATH: &str = "StudyHub_Sample_Data.xlsx";

type SampleRows = Vec<IndexMap<String, YamlValue>>;

// Embed the sample content at compile time
const SAMPLE_DATA_YAML: &str = include_str!("sample_data.yaml");

pub static SAMPLE_DATA: Lazy<IndexMap<String, SampleRows>> = Lazy::new(|| {
    serde_yaml::from_str(SAMPLE_DATA_YAML)
        .expect("Failed to parse embedded sample data - this is a bug")
});

/// Build the sample workbook: one sheet per schema entry, header row from the
/// schema's column list, one row per sample record.
pub fn sample_workbook() -> Workbook {
    let mut workbook = Workbook::new();

    for schema in schemas() {
        let mut sheet = Sheet::new(schema.name.clone());
        sheet.push_row(schema.columns.iter().map(String::as_str));

        if let Some(rows) = SAMPLE_DATA.get(&schema.name) {
            for record in rows {
                sheet.push_row(
                    schema
                        .columns
                        .iter()
                        .map(|column| record.get(column).map(yaml_to_cell).unwrap_or_default()),
                );
            }
        }

        workbook.push(sheet);
    }

    workbook
}

/// Write the styled sample workbook to `path`
pub fn create_sample(path: &Path) -> SheetsResult<Workbook> {
    let workbook = sample_workbook();
    WorkbookWriter::styled().write(&workbook, path)?;
    info!(
        "Wrote {} sample sheets to {}",
        workbook.sheets().len(),
        path.display()
    );
    Ok(workbook)
}

fn yaml_to_cell(value: &YamlValue) -> Cell {
    match value {
        YamlValue::String(s) => Cell::String(s.clone()),
        YamlValue::Bool(b) => Cell::Bool(*b),
        YamlValue::Number(n) => match n.as_i64() {
            Some(i) => Cell::Int(i),
            None => n.as_f64().map(Cell::Float).unwrap_or_default(),
        },
        _ => Cell::Empty,
    }
}
