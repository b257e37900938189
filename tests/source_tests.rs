//! Data source adapters feeding the table.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::fmt::Write;

use xltable::source::{self, Delimiter, MAX_SOURCE_ROWS, PHOTO_COLUMNS};
use xltable::{CellValue, PaginatedTable, TableConfig, TableError, TableHost};

/// JSON feed of `n` photo records with ids `1..=n`.
fn photo_feed(n: usize) -> String {
    let mut out = String::from("[");
    for id in 1..=n {
        if id > 1 {
            out.push(',');
        }
        write!(
            out,
            r#"{{"albumId":1,"id":{id},"title":"t{id}","url":"https://u/{id}","thumbnailUrl":"https://th/{id}"}}"#
        )
        .unwrap();
    }
    out.push(']');
    out
}

#[test]
fn test_feed_truncated_to_max_rows() {
    let rows = source::rows_from_json(&photo_feed(MAX_SOURCE_ROWS + 3)).unwrap();
    assert_eq!(rows.len(), MAX_SOURCE_ROWS);
    assert_eq!(rows.last().unwrap()[0], CellValue::Number(5000.0));
}

#[test]
fn test_feed_loads_into_table() {
    let rows = source::rows_from_slice(photo_feed(47).as_bytes()).unwrap();
    let table = PaginatedTable::new(rows, &TableConfig::default()).unwrap();
    assert_eq!(table.column_count(), PHOTO_COLUMNS);
    assert_eq!(table.total_pages(), 5);
    assert_eq!(table.cell(46, 4), Some(&CellValue::from("Row 47 Extra Data")));
}

#[test]
fn test_ragged_csv_rejected_by_table() {
    let rows = source::rows_from_delimited("1,a\n2\n", Delimiter::Comma);
    let err = PaginatedTable::new(rows, &TableConfig::default()).unwrap_err();
    assert!(matches!(err, TableError::RaggedRow { row: 1, .. }));
}

#[test]
fn test_host_stays_loading_after_bad_feed() {
    let mut host = TableHost::new(TableConfig::default(), 300.0).unwrap();
    match source::rows_from_json("<html>502</html>") {
        Ok(rows) => host.load_rows(rows).unwrap(),
        Err(e) => host.load_failed(&e.to_string()),
    }
    assert!(!host.is_ready());
    assert!(host.view().is_none());
}
