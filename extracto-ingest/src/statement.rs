//! Whole-statement extraction: page texts in, ordered records out.
//!
//! Pages are read in order and each page line by line; a page boundary
//! carries no meaning beyond the position it gives failed lines.

use chrono::NaiveDate;
use extracto_core::{ParseFailure, StatementSummary, TransactionRecord, summarize};
use tracing::{debug, info, warn};

use crate::line::parse_line;

/// A line that looked like a transaction but could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// 1-based page number
    pub page: usize,
    /// 1-based line number within the page
    pub line_no: usize,
    pub line: String,
    pub failure: ParseFailure,
}

/// Everything pulled out of one statement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Records in the order their lines were encountered
    pub records: Vec<TransactionRecord>,
    /// Skipped lines with malformed amounts
    pub failures: Vec<LineFailure>,
    pub pages_seen: usize,
    pub lines_seen: usize,
}

impl Extraction {
    /// Concept and description summaries of the extracted records.
    pub fn summary(&self) -> StatementSummary {
        summarize(&self.records)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest calendar dates among the records.
    ///
    /// Records whose date is not a real calendar day are ignored.
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().filter_map(|r| r.calendar_date());
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    fn feed(&mut self, page: usize, line_no: usize, line: &str) {
        self.lines_seen += 1;
        match parse_line(line) {
            Ok(Some(record)) => self.records.push(record),
            Ok(None) => {}
            Err(failure) => {
                warn!(page, line_no, %failure, "skipping line with malformed amount");
                self.failures.push(LineFailure {
                    page,
                    line_no,
                    line: line.trim().to_string(),
                    failure,
                });
            }
        }
    }
}

/// Parse an ordered sequence of lines, treated as a single page.
pub fn extract_lines<I, S>(lines: I) -> Extraction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Extraction {
        pages_seen: 1,
        ..Default::default()
    };
    for (i, line) in lines.into_iter().enumerate() {
        out.feed(1, i + 1, line.as_ref());
    }
    debug!(
        lines = out.lines_seen,
        records = out.records.len(),
        failures = out.failures.len(),
        "extracted lines"
    );
    out
}

/// Parse page texts in page order, then line order.
///
/// Pages with no text are skipped.
pub fn extract_pages<I, S>(pages: I) -> Extraction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Extraction::default();
    for (p, page) in pages.into_iter().enumerate() {
        let text = page.as_ref();
        if text.is_empty() {
            continue;
        }
        out.pages_seen += 1;
        for (i, line) in text.split('\n').enumerate() {
            out.feed(p + 1, i + 1, line);
        }
    }
    info!(
        pages = out.pages_seen,
        lines = out.lines_seen,
        records = out.records.len(),
        failures = out.failures.len(),
        "extracted statement"
    );
    out
}

/// Split a `pdftotext` dump into page texts on form feeds.
pub fn split_pages(text: &str) -> Vec<&str> {
    text.split('\u{c}').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_extract_lines_keeps_order_and_skips_noise() {
        let lines = [
            "BANCO EJEMPLO S.A.",
            "FECHA DESCRIPCION IMPORTE SALDO",
            "01/03/24 CREDITO HABERES 100.000,00 100.000,00",
            "02/03/24 PAGO TARJETA VISA -20.000,00 80.000,00",
            "TOTAL DEL PERIODO",
        ];

        let ex = extract_lines(lines);
        assert_eq!(ex.lines_seen, 5);
        assert_eq!(ex.records.len(), 2);
        assert_eq!(ex.records[0].description(), "CREDITO HABERES");
        assert_eq!(ex.records[1].debit(), dec!(20000.00));
        assert!(ex.failures.is_empty());
    }

    #[test]
    fn test_malformed_line_is_recorded_and_skipped() {
        let lines = [
            "01/03/24 A 1,00 1,00",
            "02/03/24 B --1,00 0,00",
            "03/03/24 C 2,00 3,00",
        ];

        let ex = extract_lines(lines);
        assert_eq!(ex.records.len(), 2);
        assert_eq!(ex.failures.len(), 1);
        assert_eq!(ex.failures[0].line_no, 2);
        assert_eq!(ex.failures[0].failure.token, "--1,00");
    }

    #[test]
    fn test_pages_in_order_and_empty_pages_skipped() {
        let pages = vec![
            "HOJA 1\n01/03/24 PRIMERO 1,00 1,00".to_string(),
            String::new(),
            "HOJA 3\r\n05/03/24 TERCERO -1,00 0,00\r\n".to_string(),
        ];

        let ex = extract_pages(&pages);
        assert_eq!(ex.pages_seen, 2);
        let descs: Vec<_> = ex.records.iter().map(|r| r.description()).collect();
        assert_eq!(descs, vec!["PRIMERO", "TERCERO"]);
    }

    #[test]
    fn test_failure_positions_are_per_page() {
        let pages = ["X\nY", "TITULO\n09/03/24 MAL 1-2 3,00"];
        let ex = extract_pages(pages);
        assert_eq!(ex.failures.len(), 1);
        assert_eq!(ex.failures[0].page, 2);
        assert_eq!(ex.failures[0].line_no, 2);
    }

    #[test]
    fn test_empty_input() {
        let ex = extract_pages(Vec::<String>::new());
        assert!(ex.is_empty());
        assert!(ex.failures.is_empty());
        assert!(ex.summary().is_empty());
        assert_eq!(ex.period(), None);
    }

    #[test]
    fn test_summary_of_max_sized_amounts() {
        let ex = extract_lines([
            "01/03/24 X 79.228.162.514.264.337.593.543.950.335 1,00",
            "02/03/24 X 79.228.162.514.264.337.593.543.950.335 1,00",
        ]);
        assert_eq!(ex.records.len(), 2);
        assert!(ex.failures.is_empty());

        let summary = ex.summary();
        assert_eq!(summary.by_concept[0].credit, rust_decimal::Decimal::MAX);
        assert_eq!(summary.total_credit(), rust_decimal::Decimal::MAX);
    }

    #[test]
    fn test_split_pages_on_form_feed() {
        let pages = split_pages("uno\n\u{c}dos\n\u{c}");
        assert_eq!(pages, vec!["uno\n", "dos\n", ""]);
    }

    #[test]
    fn test_period() {
        let ex = extract_lines([
            "10/03/24 B 1,00 1,00",
            "02/03/24 A 1,00 2,00",
            "31/02/24 NO EXISTE 1,00 3,00",
            "28/03/24 C 1,00 4,00",
        ]);
        assert_eq!(
            ex.period(),
            Some((
                NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 28).unwrap()
            ))
        );
    }
}
