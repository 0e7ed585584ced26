#![allow(dead_code)]

use std::path::PathBuf;

use billed_core::{Bill, BillStatus};
use tempfile::TempDir;

pub const RECEIPT_URL: &str =
    "https://test.storage.tld/v0/b/billable-677b6.a/o/justificatifs%2Fpreview-facture-free-201801-pdf-1.jpg";

/// The four bills used across the page tests, in store order (not date order).
pub fn fixture_bills() -> Vec<Bill> {
    let mut hotel = Bill::new(
        "47qAXb6fIm2zOKkLzMro",
        "Hôtel et logement",
        "encore",
        "2004-04-04",
        400.0,
        BillStatus::Pending,
    )
    .with_file(RECEIPT_URL, "preview-facture-free-201801-pdf-1.jpg");
    hotel.vat = Some("80".into());
    hotel.pct = Some(20);
    hotel.commentary = Some("séminaire billed".into());
    hotel.email = Some("a@a".into());

    vec![
        Bill::new("BeKy5Mo4jkmdfPGYpTxZ", "Transports", "test1", "2001-01-01", 100.0, BillStatus::Refused)
            .with_file(RECEIPT_URL, "1592770761.jpeg"),
        Bill::new("UIUZtnPQvnbFnB0ozvJh", "Services en ligne", "test3", "2003-01-01", 300.0, BillStatus::Accepted)
            .with_file(RECEIPT_URL, "facture-client-php-exportee.png"),
        hotel,
        Bill::new("qcCK3SzECmaZAGRrHjaC", "Restaurants et bars", "test2", "2002-02-02", 200.0, BillStatus::Refused)
            .with_file(RECEIPT_URL, "preview-facture-free-201801-pdf-1.jpg"),
    ]
}

/// Writes `bills` as a JSON array into a fresh temp dir.
pub fn write_bills_file(bills: &[Bill]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("bills.json");
    let json = serde_json::to_string_pretty(bills).expect("encode bills");
    std::fs::write(&path, json).expect("write bills file");
    (dir, path)
}
