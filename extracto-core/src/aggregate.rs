//! Grouped credit/debit totals over a statement's transactions.
//!
//! Both tables are sorted by summed credit, largest first. Groups with equal
//! credit are ordered by key so the output never depends on hash order.
//!
//! Sums that would pass `Decimal::MAX` are capped there and logged.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::warn;

use crate::record::TransactionRecord;

/// Which record field a summary groups on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Concept,
    Description,
}

impl GroupKey {
    /// The grouping value of a record
    pub fn of(self, record: &TransactionRecord) -> &str {
        match self {
            GroupKey::Concept => record.concept(),
            GroupKey::Description => record.description(),
        }
    }
}

/// Totals for every record sharing one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub key: String,
    pub credit: Decimal,
    pub debit: Decimal,
}

/// Both summary tables of one statement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementSummary {
    pub by_concept: Vec<SummaryRow>,
    pub by_description: Vec<SummaryRow>,
}

impl StatementSummary {
    pub fn is_empty(&self) -> bool {
        self.by_concept.is_empty() && self.by_description.is_empty()
    }

    /// Total credit across all groups
    pub fn total_credit(&self) -> Decimal {
        self.by_concept
            .iter()
            .fold(Decimal::ZERO, |acc, r| add_capped(acc, r.credit, "credit", "<total>"))
    }

    /// Total debit across all groups
    pub fn total_debit(&self) -> Decimal {
        self.by_concept
            .iter()
            .fold(Decimal::ZERO, |acc, r| add_capped(acc, r.debit, "debit", "<total>"))
    }
}

// Inputs are non-negative, so the only way out of range is up.
fn add_capped(total: Decimal, value: Decimal, column: &str, key: &str) -> Decimal {
    total.checked_add(value).unwrap_or_else(|| {
        warn!(column, key, "sum exceeds decimal range, capped at maximum");
        Decimal::MAX
    })
}

/// Group records by `key`, summing credit and debit per group.
pub fn summarize_by(records: &[TransactionRecord], key: GroupKey) -> Vec<SummaryRow> {
    let mut groups: HashMap<&str, (Decimal, Decimal)> = HashMap::new();

    for record in records {
        let group = key.of(record);
        let totals = groups
            .entry(group)
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        totals.0 = add_capped(totals.0, record.credit(), "credit", group);
        totals.1 = add_capped(totals.1, record.debit(), "debit", group);
    }

    let mut rows: Vec<SummaryRow> = groups
        .into_iter()
        .map(|(k, (credit, debit))| SummaryRow {
            key: k.to_string(),
            credit,
            debit,
        })
        .collect();

    rows.sort_by(|a, b| b.credit.cmp(&a.credit).then_with(|| a.key.cmp(&b.key)));
    rows
}

pub fn by_concept(records: &[TransactionRecord]) -> Vec<SummaryRow> {
    summarize_by(records, GroupKey::Concept)
}

pub fn by_description(records: &[TransactionRecord]) -> Vec<SummaryRow> {
    summarize_by(records, GroupKey::Description)
}

/// Build both summary tables.
pub fn summarize(records: &[TransactionRecord]) -> StatementSummary {
    StatementSummary {
        by_concept: by_concept(records),
        by_description: by_description(records),
    }
}
