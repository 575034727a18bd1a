pub mod error;
pub mod export;
pub mod sample;
pub mod schema;
pub mod validation;
pub mod workbook;

pub use error::{SheetsError, SheetsResult};
