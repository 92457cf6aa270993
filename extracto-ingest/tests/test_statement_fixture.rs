use extracto_core::{TransactionRecord, by_concept};
use extracto_ingest::{extract_lines, extract_pages, parse_line, split_pages};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::PathBuf;

fn fixture_text() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("statement.txt");
    std::fs::read_to_string(path).unwrap()
}

fn extract_fixture() -> extracto_ingest::Extraction {
    let text = fixture_text();
    extract_pages(split_pages(&text))
}

/// Real-layout regression: two pages, headers, totals and one bad amount.
#[test]
fn test_fixture_records_in_encounter_order() {
    let ex = extract_fixture();

    assert_eq!(ex.pages_seen, 2);
    assert_eq!(ex.records.len(), 9);

    let dates: Vec<_> = ex.records.iter().map(|r| r.date()).collect();
    assert_eq!(
        dates,
        vec![
            "01/03/24", "02/03/24", "04/03/24", "05/03/24", "07/03/24", "11/03/24", "12/03/24",
            "15/03/24", "20/03/24"
        ]
    );

    let pago = &ex.records[7];
    assert_eq!(pago.description(), "PAGO PROVEEDOR XYZ");
    assert_eq!(pago.debit(), dec!(1234.56));
    assert_eq!(pago.balance(), dec!(988153.19));

    // invoice numbers look numeric but stay in the description
    assert_eq!(ex.records[1].description(), "PAGO PROVEEDOR XYZ FACTURA 0001-0042");
    assert_eq!(ex.records[1].debit(), dec!(100.00));
}

#[test]
fn test_fixture_bad_amount_is_reported() {
    let ex = extract_fixture();
    assert_eq!(ex.failures.len(), 1);

    let f = &ex.failures[0];
    assert_eq!(f.page, 2);
    assert_eq!(f.line_no, 6);
    assert_eq!(f.failure.token, "--4.000,00");
}

#[test]
fn test_fixture_totals_match_statement_footer() {
    let summary = extract_fixture().summary();
    assert_eq!(summary.total_credit(), dec!(875000.00));
    assert_eq!(summary.total_debit(), dec!(36846.81));
}

#[test]
fn test_fixture_concept_summary() {
    let summary = extract_fixture().summary();

    let rows: Vec<_> = summary
        .by_concept
        .iter()
        .map(|r| (r.key.as_str(), r.credit, r.debit))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("CREDITO HABERES EMPRESA", dec!(850000.00), Decimal::ZERO),
            ("TRANSFERENCIA RECIBIDA DE", dec!(25000.00), Decimal::ZERO),
            ("AJUSTE", Decimal::ZERO, Decimal::ZERO),
            ("DEBITO AUTOMATICO SEGURO", Decimal::ZERO, dec!(35250.75)),
            ("IMPUESTO LEY 25413", Decimal::ZERO, dec!(211.50)),
            ("PAGO PROVEEDOR XYZ", Decimal::ZERO, dec!(1384.56)),
        ]
    );
}

#[test]
fn test_fixture_description_summary_ties() {
    let summary = extract_fixture().summary();
    let keys: Vec<_> = summary.by_description.iter().map(|r| r.key.as_str()).collect();

    assert_eq!(keys.len(), 9);
    assert_eq!(keys[0], "CREDITO HABERES EMPRESA SA");
    // equal credit, ordered by key
    assert_eq!(keys[1], "TRANSFERENCIA RECIBIDA DE ANA GOMEZ");
    assert_eq!(keys[2], "TRANSFERENCIA RECIBIDA DE JUAN PEREZ");
    assert_eq!(keys[3], "AJUSTE");
}

#[test]
fn test_every_record_has_one_side() {
    for r in &extract_fixture().records {
        assert!(r.credit() >= Decimal::ZERO && r.debit() >= Decimal::ZERO);
        assert!(r.credit().is_zero() || r.debit().is_zero(), "both sides set: {:?}", r);
        assert_eq!(r.credit() - r.debit(), r.amount());
    }
}

#[test]
fn test_rendered_lines_parse_back() {
    let ex = extract_fixture();
    let rendered: Vec<String> = ex.records.iter().map(TransactionRecord::to_line).collect();
    let again = extract_lines(&rendered);
    assert_eq!(again.records, ex.records);
}

#[test]
fn test_concept_merges_debits() {
    let records: Vec<_> = [
        "01/05/24 PAGO PROVEEDOR XYZ -100,00 900,00",
        "02/05/24 PAGO PROVEEDOR XYZ -50,00 850,00",
    ]
    .iter()
    .filter_map(|l| parse_line(l).unwrap())
    .collect();

    let rows = by_concept(&records);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].key, "PAGO PROVEEDOR XYZ");
    assert_eq!(rows[0].debit, dec!(150.0));
    assert_eq!(rows[0].credit, Decimal::ZERO);
}

#[test]
fn test_empty_statement() {
    let ex = extract_lines(Vec::<&str>::new());
    assert!(ex.records.is_empty());
    let summary = ex.summary();
    assert!(summary.by_concept.is_empty());
    assert!(summary.by_description.is_empty());
}
