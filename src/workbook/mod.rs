//! In-memory workbook model
//!
//! A workbook is an ordered list of named sheets. Each sheet is a dense grid
//! of cells anchored at A1: row 0 is the header row, so spreadsheet row
//! numbers are always `index + 1`.
mod cell;
mod reader;
mod writer;

pub use cell::Cell;
pub use reader::read_workbook;
pub use writer::WorkbookWriter;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    pub fn with_sheet(mut self, sheet: Sheet) -> Self {
        self.push(sheet);
        self
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|sheet| sheet.name == name)
    }

    pub fn remove_sheet(&mut self, name: &str) -> Option<Sheet> {
        let index = self.sheets.iter().position(|sheet| sheet.name == name)?;
        Some(self.sheets.remove(index))
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn with_row<I, C>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.push_row(cells);
        self
    }

    pub fn push_row<I, C>(&mut self, cells: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// First row of the sheet; empty when the sheet has no rows
    pub fn header(&self) -> &[Cell] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Rows after the header, paired with their 1-based spreadsheet row number
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[Cell])> {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, row)| (index + 1, row.as_slice()))
    }

    /// Number of rows including the header (the sheet's last used row)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Remove a header column and the matching cell from every row
    pub fn remove_column(&mut self, index: usize) {
        for row in &mut self.rows {
            if index < row.len() {
                row.remove(index);
            }
        }
    }

    pub fn column_index(&self, normalized: &str) -> Option<usize> {
        self.header().iter().position(|cell| {
            cell.as_text()
                .map(|text| crate::schema::normalize_header(&text) == normalized)
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics() -> Sheet {
        Sheet::new("Topics")
            .with_row(["Topic ID", "subject_key", "topic_name"])
            .with_row(["phys-t001", "physics", "Work and Energy"])
            .with_row(["math-t001", "math", "Exponents"])
    }

    #[test]
    fn test_header_and_data_rows() {
        let sheet = topics();
        assert_eq!(sheet.header().len(), 3);
        let numbers: Vec<usize> = sheet.data_rows().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![2, 3]);
        assert_eq!(sheet.row_count(), 3);
    }

    #[test]
    fn test_empty_sheet_has_empty_header() {
        let sheet = Sheet::new("Empty");
        assert!(sheet.header().is_empty());
        assert_eq!(sheet.data_rows().count(), 0);
    }

    #[test]
    fn test_column_index_uses_normalized_header() {
        let sheet = topics();
        assert_eq!(sheet.column_index("topic_id"), Some(0));
        assert_eq!(sheet.column_index("topic_name"), Some(2));
        assert_eq!(sheet.column_index("order_index"), None);
    }

    #[test]
    fn test_remove_column() {
        let mut sheet = topics();
        sheet.remove_column(1);
        assert_eq!(sheet.header(), &[Cell::from("Topic ID"), Cell::from("topic_name")]);
        assert_eq!(sheet.rows[2], vec![Cell::from("math-t001"), Cell::from("Exponents")]);
    }

    #[test]
    fn test_workbook_lookup() {
        let mut workbook = Workbook::new().with_sheet(topics()).with_sheet(Sheet::new("Formulas"));
        assert_eq!(workbook.sheet_names(), vec!["Topics", "Formulas"]);
        assert!(workbook.sheet("Formulas").is_some());
        assert!(workbook.remove_sheet("Topics").is_some());
        assert!(workbook.sheet("Topics").is_none());
    }
}
