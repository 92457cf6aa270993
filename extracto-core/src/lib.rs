//! extracto-core: transaction records, locale amount conversion, and summary aggregation

pub mod aggregate;
pub mod amount;
pub mod error;
pub mod record;

pub use aggregate::{GroupKey, StatementSummary, SummaryRow, by_concept, by_description, summarize, summarize_by};
pub use amount::{AmountField, OUT_OF_RANGE, format_amount, parse_amount};
pub use error::ParseFailure;
pub use record::{TransactionRecord, derive_concept, split_amount};
