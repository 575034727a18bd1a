use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;
use tracing::debug;

use super::{Cell, Sheet, Workbook};
use crate::error::{SheetsError, SheetsResult};

/// Read every sheet of a workbook, in tab order.
///
/// The format is picked from the file extension (.xlsx, .xlsm, .xlsb, .xls,
/// .ods). Any failure to open or parse the file is fatal.
pub fn read_workbook(path: &Path) -> SheetsResult<Workbook> {
    let mut source = open_workbook_auto(path).map_err(|e| SheetsError::open(path, e))?;

    let mut workbook = Workbook::new();
    for name in source.sheet_names() {
        let range = source
            .worksheet_range(&name)
            .map_err(|e| SheetsError::open(path, e))?;
        let sheet = sheet_from_range(name, &range);
        debug!(
            "Read sheet '{}' ({} rows)",
            sheet.name,
            sheet.row_count()
        );
        workbook.push(sheet);
    }

    Ok(workbook)
}

/// Calamine trims leading empty rows and columns from a range, so rebuild the
/// grid from A1 using absolute positions.
fn sheet_from_range(name: String, range: &Range<Data>) -> Sheet {
    let mut sheet = Sheet::new(name);
    let Some((last_row, last_col)) = range.end() else {
        return sheet;
    };

    for row in 0..=last_row {
        let cells = (0..=last_col).map(|col| {
            range
                .get_value((row, col))
                .map(Cell::from_data)
                .unwrap_or_default()
        });
        sheet.push_row(cells);
    }

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_open_error() {
        let result = read_workbook(Path::new("does-not-exist.xlsx"));
        assert!(matches!(result, Err(SheetsError::Open { .. })));
    }

    #[test]
    fn test_unsupported_extension_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "not a workbook").unwrap();

        let result = read_workbook(&path);
        assert!(matches!(result, Err(SheetsError::Open { .. })));
    }

    #[test]
    fn test_range_offset_is_rebuilt_from_a1() {
        let mut range: Range<Data> = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::String("topic_id".to_string()));
        range.set_value((2, 2), Data::Float(3.0));

        let sheet = sheet_from_range("Topics".to_string(), &range);
        assert_eq!(sheet.row_count(), 3);
        assert!(sheet.rows[0].iter().all(Cell::is_empty));
        assert_eq!(sheet.rows[1][1], Cell::from("topic_id"));
        assert_eq!(sheet.rows[2][2], Cell::Float(3.0));
        assert_eq!(sheet.rows[2][0], Cell::Empty);
    }

    #[test]
    fn test_empty_range_gives_empty_sheet() {
        let range: Range<Data> = Range::empty();
        let sheet = sheet_from_range("Blank".to_string(), &range);
        assert_eq!(sheet.row_count(), 0);
    }
}
