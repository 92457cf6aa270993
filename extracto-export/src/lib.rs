//! extracto-export: workbook layout for extracted statements and CSV/JSON/XLSX writers

pub mod error;
pub mod sheet;
pub mod writer;
pub mod xlsx;

pub use error::ExportError;
pub use sheet::{Cell, SHEET_BY_CONCEPT, SHEET_BY_DESCRIPTION, SHEET_TRANSACTIONS, Sheet, Workbook};
pub use writer::{ExportFormat, write_csv_dir, write_json};
pub use xlsx::write_xlsx;
