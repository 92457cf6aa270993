//! Tabular layout of an extracted statement.
//!
//! A workbook has three sheets, always in this order:
//!   Transacciones        Fecha, Descripción, Crédito, Débito, Saldo, Concepto
//!   Resumen Concepto     Concepto, Crédito, Débito
//!   Resumen Descripción  Descripción, Crédito, Débito

use std::fmt;

use extracto_core::{StatementSummary, SummaryRow, TransactionRecord};
use rust_decimal::Decimal;

pub const SHEET_TRANSACTIONS: &str = "Transacciones";
pub const SHEET_BY_CONCEPT: &str = "Resumen Concepto";
pub const SHEET_BY_DESCRIPTION: &str = "Resumen Descripción";

/// One cell. Amounts stay numeric so spreadsheet writers can store numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(Decimal),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }
}

/// Plain form used by CSV: text as-is, numbers with `.` as decimal point.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(d) => write!(f, "{d}"),
        }
    }
}

/// A named table of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    fn new(name: &str, headers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// The first `n` rows (fewer if the sheet is shorter)
    pub fn head(&self, n: usize) -> &[Vec<Cell>] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn summary(name: &str, key_header: &str, rows: &[SummaryRow]) -> Self {
        let mut sheet = Sheet::new(name, &[key_header, "Crédito", "Débito"]);
        sheet.rows = rows
            .iter()
            .map(|r| vec![Cell::text(&r.key), Cell::Number(r.credit), Cell::Number(r.debit)])
            .collect();
        sheet
    }
}

/// The three sheets of a processed statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Lay out records (in encounter order) and both summaries.
    pub fn new(records: &[TransactionRecord], summary: &StatementSummary) -> Self {
        let mut transactions = Sheet::new(
            SHEET_TRANSACTIONS,
            &["Fecha", "Descripción", "Crédito", "Débito", "Saldo", "Concepto"],
        );
        transactions.rows = records
            .iter()
            .map(|r| {
                vec![
                    Cell::text(r.date()),
                    Cell::text(r.description()),
                    Cell::Number(r.credit()),
                    Cell::Number(r.debit()),
                    Cell::Number(r.balance()),
                    Cell::text(r.concept()),
                ]
            })
            .collect();

        Self {
            sheets: vec![
                transactions,
                Sheet::summary(SHEET_BY_CONCEPT, "Concepto", &summary.by_concept),
                Sheet::summary(SHEET_BY_DESCRIPTION, "Descripción", &summary.by_description),
            ],
        }
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}
