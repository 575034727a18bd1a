use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook as XlsxWorkbook, Worksheet};
use std::path::Path;
use tracing::debug;

use super::{Cell, Sheet, Workbook};
use crate::error::{SheetsError, SheetsResult};

const MAX_COLUMN_WIDTH: usize = 50;

/// Writes a [`Workbook`] to .xlsx, optionally with header styling and
/// content-fitted column widths.
#[derive(Debug, Clone, Default)]
pub struct WorkbookWriter {
    header_format: Option<Format>,
    cell_format: Option<Format>,
    fit_columns: bool,
}

impl WorkbookWriter {
    /// No formatting; cells only
    pub fn plain() -> Self {
        Self::default()
    }

    /// Bold white headers on blue, thin borders, widths fitted to content
    pub fn styled() -> Self {
        let header_format = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_font_size(11)
            .set_background_color(Color::RGB(0x0044_72C4))
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center);

        let cell_format = Format::new().set_border(FormatBorder::Thin);

        Self {
            header_format: Some(header_format),
            cell_format: Some(cell_format),
            fit_columns: true,
        }
    }

    pub fn write(&self, workbook: &Workbook, path: &Path) -> SheetsResult<()> {
        let mut xlsx = XlsxWorkbook::new();

        for sheet in workbook.sheets() {
            let worksheet = xlsx.add_worksheet();
            self.write_sheet(worksheet, sheet)
                .map_err(|e| SheetsError::write(path, e))?;
            debug!("Wrote sheet '{}' ({} rows)", sheet.name, sheet.row_count());
        }

        xlsx.save(path).map_err(|e| SheetsError::write(path, e))
    }

    fn write_sheet(
        &self,
        worksheet: &mut Worksheet,
        sheet: &Sheet,
    ) -> Result<(), rust_xlsxwriter::XlsxError> {
        worksheet.set_name(&sheet.name)?;

        for (row_index, row) in sheet.rows.iter().enumerate() {
            let format = if row_index == 0 {
                self.header_format.as_ref()
            } else {
                self.cell_format.as_ref()
            };

            for (col_index, cell) in row.iter().enumerate() {
                write_cell(worksheet, row_index as u32, col_index as u16, cell, format)?;
            }
        }

        if self.fit_columns {
            for (col_index, width) in column_widths(sheet).into_iter().enumerate() {
                worksheet.set_column_width(col_index as u16, width as f64)?;
            }
        }

        Ok(())
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    format: Option<&Format>,
) -> Result<(), rust_xlsxwriter::XlsxError> {
    match (cell, format) {
        (Cell::Empty, Some(format)) => {
            worksheet.write_blank(row, col, format)?;
        }
        (Cell::Empty, None) => {}
        (Cell::String(s), Some(format)) => {
            worksheet.write_string_with_format(row, col, s, format)?;
        }
        (Cell::String(s), None) => {
            worksheet.write_string(row, col, s)?;
        }
        (Cell::Int(i), Some(format)) => {
            worksheet.write_number_with_format(row, col, *i as f64, format)?;
        }
        (Cell::Int(i), None) => {
            worksheet.write_number(row, col, *i as f64)?;
        }
        (Cell::Float(f), Some(format)) => {
            worksheet.write_number_with_format(row, col, *f, format)?;
        }
        (Cell::Float(f), None) => {
            worksheet.write_number(row, col, *f)?;
        }
        (Cell::Bool(b), Some(format)) => {
            worksheet.write_boolean_with_format(row, col, *b, format)?;
        }
        (Cell::Bool(b), None) => {
            worksheet.write_boolean(row, col, *b)?;
        }
    }
    Ok(())
}

/// Widest text in each column plus padding, capped at 50 characters
fn column_widths(sheet: &Sheet) -> Vec<usize> {
    let columns = sheet.rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..columns)
        .map(|col| {
            let widest = sheet
                .rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.to_string().chars().count())
                .max()
                .unwrap_or(0);
            (widest + 2).min(MAX_COLUMN_WIDTH)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::read_workbook;

    fn subjects() -> Sheet {
        Sheet::new("Subjects")
            .with_row(["subject_id", "name", "icon"])
            .with_row(vec![Cell::from("phys-001"), Cell::from("Physics"), Cell::Empty])
            .with_row(vec![Cell::from("math-001"), Cell::Float(4.5), Cell::Bool(true)])
    }

    #[test]
    fn test_column_widths_are_padded_and_capped() {
        let sheet = Sheet::new("Notes")
            .with_row(["id", "text"])
            .with_row(vec![Cell::from("n1"), Cell::from("x".repeat(80))]);
        assert_eq!(column_widths(&sheet), vec![4, 50]);
    }

    #[test]
    fn test_written_workbook_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subjects.xlsx");
        let workbook = Workbook::new()
            .with_sheet(subjects())
            .with_sheet(Sheet::new("Topics").with_row(["topic_id"]));

        WorkbookWriter::styled().write(&workbook, &path).unwrap();
        let read = read_workbook(&path).unwrap();

        assert_eq!(read.sheet_names(), vec!["Subjects", "Topics"]);
        let sheet = read.sheet("Subjects").unwrap();
        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.rows[1][1], Cell::from("Physics"));
        assert!(sheet.rows[1][2].is_empty());
        assert_eq!(sheet.rows[2][1], Cell::Float(4.5));
        assert_eq!(sheet.rows[2][2], Cell::Bool(true));
    }

    #[test]
    fn test_invalid_sheet_name_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.xlsx");
        let workbook = Workbook::new().with_sheet(Sheet::new("bad/name"));

        let result = WorkbookWriter::plain().write(&workbook, &path);
        assert!(matches!(result, Err(SheetsError::Write { .. })));
    }
}
