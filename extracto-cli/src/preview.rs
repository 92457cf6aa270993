//! Terminal preview of an extracted statement, read off the export sheets.

use anyhow::Result;
use extracto_core::format_amount;
use extracto_export::{Cell, SHEET_BY_DESCRIPTION, SHEET_TRANSACTIONS, Sheet, Workbook};
use extracto_ingest::Extraction;
use std::io::Write;

/// How much of each table `print_preview` shows
#[derive(Debug, Clone, Copy)]
pub struct PreviewLimits {
    pub transactions: usize,
    pub descriptions: usize,
}

pub fn print_preview<W: Write>(out: &mut W, ex: &Extraction, limits: PreviewLimits) -> Result<()> {
    let summary = ex.summary();
    writeln!(
        out,
        "Parsed {} transactions from {} pages ({} lines)",
        ex.records.len(),
        ex.pages_seen,
        ex.lines_seen
    )?;
    if let Some((first, last)) = ex.period() {
        writeln!(out, "Period: {first} to {last}")?;
    }
    writeln!(
        out,
        "Credits: {} | Debits: {}",
        format_amount(summary.total_credit()),
        format_amount(summary.total_debit())
    )?;

    if !ex.failures.is_empty() {
        writeln!(out, "\nSkipped {} line(s) with malformed amounts:", ex.failures.len())?;
        for f in &ex.failures {
            writeln!(out, "  page {}, line {}: {}", f.page, f.line_no, f.failure)?;
        }
    }

    let workbook = Workbook::new(&ex.records, &summary);
    for sheet in &workbook.sheets {
        let limit = match sheet.name.as_str() {
            SHEET_TRANSACTIONS => limits.transactions,
            SHEET_BY_DESCRIPTION => limits.descriptions,
            _ => sheet.len(),
        };
        write_sheet(out, sheet, limit)?;
    }

    Ok(())
}

fn write_sheet<W: Write>(out: &mut W, sheet: &Sheet, limit: usize) -> Result<()> {
    let shown = sheet.head(limit);
    if shown.len() < sheet.len() {
        writeln!(out, "\n## {} (first {} of {})\n", sheet.name, shown.len(), sheet.len())?;
    } else {
        writeln!(out, "\n## {}\n", sheet.name)?;
    }
    writeln!(out, "{}", sheet.headers.join(" | "))?;
    for row in shown {
        let cells: Vec<String> = row
            .iter()
            .map(|c| match c {
                Cell::Text(s) => s.clone(),
                Cell::Number(d) => format_amount(*d),
            })
            .collect();
        writeln!(out, "- {}", cells.join(" | "))?;
    }
    Ok(())
}
