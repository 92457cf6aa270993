//! extracto-ingest: statement text ingestion (page text to transaction records).

pub mod line;
pub mod statement;

pub use line::parse_line;
pub use statement::{Extraction, LineFailure, extract_lines, extract_pages, split_pages};
