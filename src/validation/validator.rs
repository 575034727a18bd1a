use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use super::report::{DataWarning, SchemaError, ValidationReport};
use crate::error::SheetsResult;
use crate::schema::{self, EnumCheck, SheetSchema, normalize_header};
use crate::workbook::{Cell, Sheet, Workbook, read_workbook};

/// Checks workbooks against a sheet table.
///
/// Every problem is collected; a missing sheet or column never stops the
/// remaining sheets from being checked.
pub struct Validator<'a> {
    schemas: &'a [SheetSchema],
}

impl Validator<'static> {
    /// Validator over the embedded StudyHub schema
    pub fn new() -> Self {
        Self {
            schemas: schema::schemas(),
        }
    }
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Validator<'a> {
    pub fn with_schemas(schemas: &'a [SheetSchema]) -> Self {
        Self { schemas }
    }

    pub fn validate_file(&self, path: &Path) -> SheetsResult<ValidationReport> {
        let workbook = read_workbook(path)?;
        Ok(self.validate(&workbook))
    }

    pub fn validate(&self, workbook: &Workbook) -> ValidationReport {
        let mut report = ValidationReport::new();

        for schema in self.schemas {
            match workbook.sheet(&schema.name) {
                Some(sheet) => self.validate_sheet(schema, sheet, &mut report),
                None => {
                    debug!("Sheet '{}' is missing", schema.name);
                    report.errors.push(SchemaError::MissingSheet {
                        sheet: schema.name.clone(),
                    });
                }
            }
        }

        info!(
            "Validated {} sheets: {} errors, {} warnings",
            self.schemas.len(),
            report.errors.len(),
            report.warnings.len()
        );
        report
    }

    fn validate_sheet(&self, schema: &SheetSchema, sheet: &Sheet, report: &mut ValidationReport) {
        debug!("Validating sheet '{}'...", schema.name);

        // Normalized header per column position; blank header cells are skipped
        let headers: Vec<Option<String>> = sheet
            .header()
            .iter()
            .map(|cell| cell.as_text().map(|text| normalize_header(&text)))
            .collect();
        let present: HashSet<&str> = headers.iter().flatten().map(String::as_str).collect();

        for required in &schema.required {
            if !present.contains(required.as_str()) {
                report.errors.push(SchemaError::MissingColumn {
                    sheet: schema.name.clone(),
                    column: required.clone(),
                });
            }
        }

        if sheet.row_count() < 2 {
            report.warnings.push(DataWarning::NoDataRows {
                sheet: schema.name.clone(),
            });
        }

        for check in &schema.checks {
            let column = headers
                .iter()
                .position(|header| header.as_deref() == Some(check.column.as_str()));
            if let Some(column) = column {
                check_column(schema, sheet, check, column, report);
            }
        }
    }
}

fn check_column(
    schema: &SheetSchema,
    sheet: &Sheet,
    check: &EnumCheck,
    column: usize,
    report: &mut ValidationReport,
) {
    for (row, cells) in sheet.data_rows() {
        let Some(cell) = cells.get(column).filter(|cell| has_checkable_value(cell)) else {
            continue;
        };
        let value = cell.to_string();
        if !check.domain.contains(&value) {
            debug!(
                "{} row {row}: '{value}' is not a valid {}",
                schema.name, check.domain
            );
            report.warnings.push(DataWarning::InvalidValue {
                sheet: schema.name.clone(),
                row,
                column: check.column.clone(),
                domain: check.domain,
                value,
            });
        }
    }
}

/// Blank cells, zero and `false` hold no enumerated value and are not checked
fn has_checkable_value(cell: &Cell) -> bool {
    match cell {
        Cell::Empty => false,
        Cell::String(s) => !s.is_empty(),
        Cell::Int(i) => *i != 0,
        Cell::Float(f) => *f != 0.0,
        Cell::Bool(b) => *b,
    }
}
