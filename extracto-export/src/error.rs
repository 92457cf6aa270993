use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing a workbook
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("unknown export format: {0} (expected xlsx, csv or json)")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;
