//! Statement line parser.
//!
//! Expected extracted-text rows (date, description, amount, balance):
//!   15/03/24   PAGO PROVEEDOR XYZ                -1.234,56     10.000,00
//!   16/03/24   CREDITO HABERES EMPRESA SA        250.000,00   260.000,00
//!
//! Anything else (headers, page totals, disclaimers) simply does not match.

use std::sync::OnceLock;

use extracto_core::{AmountField, ParseFailure, TransactionRecord, parse_amount};
use regex::Regex;

fn txn_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // DATE DESCRIPTION AMOUNT BALANCE
        Regex::new(concat!(
            r"^(?P<date>\d{2}/\d{2}/\d{2})\s+",
            r"(?P<desc>.*?)\s+",
            r"(?P<amount>[\-0-9\.,]+)\s+",
            r"(?P<balance>[\-0-9\.,]+)$"
        ))
        .expect("statement line regex")
    })
}

/// Parse one line of statement text.
///
/// Returns `Ok(None)` when the line is not a transaction row, and a
/// [`ParseFailure`] when it is shaped like one but a numeric token is unusable.
pub fn parse_line(line: &str) -> Result<Option<TransactionRecord>, ParseFailure> {
    let Some(caps) = txn_re().captures(line.trim()) else {
        return Ok(None);
    };

    let amount = parse_amount(AmountField::Amount, &caps["amount"])?;
    let balance = parse_amount(AmountField::Balance, &caps["balance"])?;

    Ok(Some(TransactionRecord::new(
        &caps["date"],
        &caps["desc"],
        amount,
        balance,
    )))
}
