use serde::{Deserialize, Serialize};

use super::domain::Domain;

/// Declared structure of one workbook sheet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetSchema {
    /// Sheet (tab) name, matched exactly
    pub name: String,

    /// Human-readable purpose of the sheet
    pub description: String,

    /// Full column list, in the order the sample workbook writes them
    pub columns: Vec<String>,

    /// Columns that must be present in the header row
    pub required: Vec<String>,

    /// Enumerated-value checks applied to data rows
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<EnumCheck>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnumCheck {
    pub column: String,
    pub domain: Domain,
}

impl SheetSchema {
    pub fn is_required(&self, column: &str) -> bool {
        self.required.iter().any(|c| c == column)
    }
}
