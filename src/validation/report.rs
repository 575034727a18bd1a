use serde_json::{Value as JsonValue, json};
use thiserror::Error;

use crate::schema::Domain;

/// A schema violation. Any one of these makes the workbook unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Missing required sheet: {sheet}")]
    MissingSheet { sheet: String },

    #[error("{sheet}: Missing required column '{column}'")]
    MissingColumn { sheet: String, column: String },
}

/// Advisory problems with the data itself
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataWarning {
    #[error("{sheet}: No data rows found")]
    NoDataRows { sheet: String },

    #[error("{sheet} row {row}: {}", .domain.describe_invalid(.value))]
    InvalidValue {
        sheet: String,
        /// 1-based spreadsheet row number
        row: usize,
        column: String,
        domain: Domain,
        value: String,
    },
}

impl SchemaError {
    pub fn sheet(&self) -> &str {
        match self {
            SchemaError::MissingSheet { sheet } | SchemaError::MissingColumn { sheet, .. } => sheet,
        }
    }
}

impl DataWarning {
    pub fn sheet(&self) -> &str {
        match self {
            DataWarning::NoDataRows { sheet } | DataWarning::InvalidValue { sheet, .. } => sheet,
        }
    }
}

/// Everything found in one validation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<SchemaError>,
    pub warnings: Vec<DataWarning>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff there are no errors; warnings never fail validation.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    /// Location of every out-of-domain cell, for tools that fix data in place
    pub fn invalid_values(&self) -> Vec<JsonValue> {
        self.warnings
            .iter()
            .filter_map(|warning| match warning {
                DataWarning::InvalidValue {
                    sheet,
                    row,
                    column,
                    domain,
                    value,
                } => Some(json!({
                    "sheet": sheet,
                    "row": row,
                    "column": column,
                    "domain": domain,
                    "value": value,
                })),
                DataWarning::NoDataRows { .. } => None,
            })
            .collect()
    }

    pub fn to_json(&self) -> JsonValue {
        json!({
            "valid": self.is_valid(),
            "errors": self.error_messages(),
            "warnings": self.warning_messages(),
            "invalid_values": self.invalid_values(),
        })
    }
}
