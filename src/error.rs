//! Error types shared by the reader, writer and exporter

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

pub type SheetsResult<T> = Result<T, SheetsError>;

#[derive(Error, Debug, Diagnostic)]
pub enum SheetsError {
    #[error("Error opening file {}: {source}", .path.display())]
    #[diagnostic(
        code(studyhub::open),
        help("check that the file exists and is a .xlsx, .xlsm, .xlsb, .xls or .ods workbook")
    )]
    Open {
        path: PathBuf,
        source: calamine::Error,
    },

    #[error("Failed to write workbook {}: {source}", .path.display())]
    #[diagnostic(code(studyhub::write))]
    Write {
        path: PathBuf,
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    #[diagnostic(code(studyhub::io))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize JSON: {0}")]
    #[diagnostic(code(studyhub::json))]
    Json(#[from] serde_json::Error),
}

impl SheetsError {
    pub fn open(path: impl Into<PathBuf>, source: calamine::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: rust_xlsxwriter::XlsxError) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
