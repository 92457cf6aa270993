//! Transaction records parsed from statement lines

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::amount::format_amount;

/// One statement line turned into a transaction.
///
/// Built only through [`TransactionRecord::new`], so the credit/debit split
/// and the concept always agree with the amount and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// `DD/MM/YY` exactly as printed (not checked against the calendar)
    date: String,
    /// Free text between the date and the amount, trimmed
    description: String,
    credit: Decimal,
    debit: Decimal,
    /// Running balance as printed
    balance: Decimal,
    /// First three words of the description
    concept: String,
}

impl TransactionRecord {
    /// Create a record from a signed amount.
    pub fn new(
        date: impl Into<String>,
        description: impl AsRef<str>,
        amount: Decimal,
        balance: Decimal,
    ) -> Self {
        let description = description.as_ref().trim().to_string();
        let concept = derive_concept(&description);
        let (credit, debit) = split_amount(amount);

        Self {
            date: date.into(),
            description,
            credit,
            debit,
            balance,
            concept,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn credit(&self) -> Decimal {
        self.credit
    }

    pub fn debit(&self) -> Decimal {
        self.debit
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn concept(&self) -> &str {
        &self.concept
    }

    /// The signed amount as printed: `credit - debit`.
    pub fn amount(&self) -> Decimal {
        self.credit - self.debit
    }

    /// Returns true if money came in
    pub fn is_credit(&self) -> bool {
        self.credit > Decimal::ZERO
    }

    /// Returns true if money went out
    pub fn is_debit(&self) -> bool {
        self.debit > Decimal::ZERO
    }

    /// The date as a calendar day, when `DD/MM/YY` names a real one.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%d/%m/%y").ok()
    }

    /// Render the record back into statement-line form.
    pub fn to_line(&self) -> String {
        format!(
            "{} {} {} {}",
            self.date,
            self.description,
            format_amount(self.amount()),
            format_amount(self.balance)
        )
    }
}

/// Split a signed amount into `(credit, debit)`, both non-negative.
pub fn split_amount(amount: Decimal) -> (Decimal, Decimal) {
    if amount > Decimal::ZERO {
        (amount, Decimal::ZERO)
    } else if amount < Decimal::ZERO {
        (Decimal::ZERO, -amount)
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    }
}

/// First three whitespace-separated words, joined by single spaces.
pub fn derive_concept(description: &str) -> String {
    description
        .split_whitespace()
        .take(3)
        .collect::<Vec<_>>()
        .join(" ")
}
