//! StudyHub workbook schema
//!
//! The sheet table is embedded at compile time and parsed once. It is not
//! user-extensible: every workbook is checked against the same nine sheets.
mod domain;
mod sheet;

pub use domain::{CONTENT_TYPES, Domain, SECTION_TYPES, VALID_ICONS};
pub use sheet::{EnumCheck, SheetSchema};

use once_cell::sync::Lazy;

// Embed the sheet table at compile time
const SHEET_SCHEMAS_YAML: &str = include_str!("sheets.yaml");

pub static SHEET_SCHEMAS: Lazy<Vec<SheetSchema>> = Lazy::new(|| {
    serde_yaml::from_str(SHEET_SCHEMAS_YAML)
        .expect("Failed to parse embedded sheet schemas - this is a bug")
});

/// All sheet schemas in workbook order
pub fn schemas() -> &'static [SheetSchema] {
    &SHEET_SCHEMAS
}

pub fn find_schema(name: &str) -> Option<&'static SheetSchema> {
    SHEET_SCHEMAS.iter().find(|schema| schema.name == name)
}

/// Normalize a header cell: lower-case, spaces to underscores.
///
/// "Subject ID" and "subject_id" name the same column.
pub fn normalize_header(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "_")
}
