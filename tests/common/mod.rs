//! Common test utilities.
//!
//! Builders for row sets and tables, plus a `ViewHooks` implementation that
//! records every side effect the engine requests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]

use std::cell::RefCell;
use std::rc::Rc;

use xltable::{CellValue, NavigationError, PaginatedTable, Row, TableConfig, ViewHooks};

// ============================================================================
// Row builders
// ============================================================================

/// `n` rows shaped like the photo feed: `[id, title, url, thumb, extra]`.
/// Row `i` has id `i + 1`.
#[must_use]
pub fn photo_rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| {
            let id = i + 1;
            vec![
                CellValue::Number(id as f64),
                CellValue::Text(format!("title {id}")),
                CellValue::Text(format!("https://via.placeholder.com/600/{id}")),
                CellValue::Text(format!("https://via.placeholder.com/150/{id}")),
                CellValue::Text(format!("Row {id} Extra Data")),
            ]
        })
        .collect()
}

/// Id cell of a row built by [`photo_rows`].
#[must_use]
pub fn row_id(row: &Row) -> usize {
    row[0].as_number().expect("id cell") as usize
}

// ============================================================================
// Table builders
// ============================================================================

#[must_use]
pub fn config(rows_per_page: usize, page_group_size: usize) -> TableConfig {
    TableConfig::default()
        .with_rows_per_page(rows_per_page)
        .with_page_group_size(page_group_size)
}

/// A table of `n` photo rows.
#[must_use]
pub fn table(n: usize, rows_per_page: usize, page_group_size: usize) -> PaginatedTable {
    PaginatedTable::new(photo_rows(n), &config(rows_per_page, page_group_size))
        .expect("valid table")
}

/// A table of `n` photo rows with recording hooks installed.
#[must_use]
pub fn recorded_table(
    n: usize,
    rows_per_page: usize,
    page_group_size: usize,
) -> (PaginatedTable, Recorder) {
    let recorder = Recorder::default();
    let table = table(n, rows_per_page, page_group_size).with_hooks(Box::new(recorder.clone()));
    (table, recorder)
}

/// Snapshot of every pagination value, for "nothing moved" assertions.
#[must_use]
pub fn pagination_state(table: &PaginatedTable) -> (usize, usize, usize, usize) {
    (
        table.current_page(),
        table.current_group(),
        table.total_pages(),
        table.total_groups(),
    )
}

// ============================================================================
// Recording hooks
// ============================================================================

#[derive(Debug, Default)]
pub struct Recorded {
    pub scroll_resets: usize,
    pub notices: Vec<NavigationError>,
}

/// Cloneable handle; the clone installed in the table and the one kept by
/// the test share the same log.
#[derive(Debug, Default, Clone)]
pub struct Recorder(Rc<RefCell<Recorded>>);

impl Recorder {
    pub fn scroll_resets(&self) -> usize {
        self.0.borrow().scroll_resets
    }

    pub fn notices(&self) -> Vec<NavigationError> {
        self.0.borrow().notices.clone()
    }
}

impl ViewHooks for Recorder {
    fn reset_scroll(&mut self) {
        self.0.borrow_mut().scroll_resets += 1;
    }

    fn invalid_page(&mut self, error: &NavigationError) {
        self.0.borrow_mut().notices.push(error.clone());
    }
}
