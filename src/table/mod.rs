//! Paginated table engine.
//!
//! `PaginatedTable` owns the working copy of every row and two cursors,
//! `current_page` and `current_group`. Everything else the UI needs (page
//! counts, the group's page range, the visible slice) is derived on demand
//! from the row count and those cursors, so it can never go stale.
//!
//! Invariants after every public operation:
//! - `current_page < total_pages()` unless the table is empty
//! - `current_group == current_page / page_group_size`
//! - `visible_rows().len() <= rows_per_page`
//! - cell edits never touch pagination state

mod edit;
mod hooks;
mod navigation;

pub use hooks::{NoopHooks, ViewHooks};
pub use navigation::{parse_page_number, PageChange};

use tracing::info;

use crate::error::{Result, TableError};
use crate::types::{CellValue, Row, TableConfig};

/// The pagination/windowing engine.
pub struct PaginatedTable {
    rows: Vec<Row>,
    columns: usize,
    rows_per_page: usize,
    page_group_size: usize,
    current_page: usize,
    current_group: usize,
    goto_input: String,
    hooks: Box<dyn ViewHooks>,
}

impl std::fmt::Debug for PaginatedTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedTable")
            .field("rows", &self.rows.len())
            .field("columns", &self.columns)
            .field("rows_per_page", &self.rows_per_page)
            .field("page_group_size", &self.page_group_size)
            .field("current_page", &self.current_page)
            .field("current_group", &self.current_group)
            .field("goto_input", &self.goto_input)
            .finish_non_exhaustive()
    }
}

impl PaginatedTable {
    /// Take ownership of `rows` and start on page 0, group 0.
    ///
    /// The engine keeps the only copy; callers holding the original data
    /// must clone before handing it over.
    ///
    /// # Errors
    /// Returns an error if `config` is invalid or the rows are ragged.
    pub fn new(rows: Vec<Row>, config: &TableConfig) -> Result<Self> {
        config.validate()?;
        let columns = match config.columns {
            Some(c) => c,
            None => rows.first().map_or(0, Vec::len),
        };
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != columns)
        {
            return Err(TableError::RaggedRow {
                row,
                expected: columns,
                found,
            });
        }

        info!(
            rows = rows.len(),
            columns,
            rows_per_page = config.rows_per_page,
            page_group_size = config.page_group_size,
            "table loaded"
        );

        Ok(Self {
            rows,
            columns,
            rows_per_page: config.rows_per_page,
            page_group_size: config.page_group_size,
            current_page: 0,
            current_group: 0,
            goto_input: String::new(),
            hooks: Box::new(NoopHooks),
        })
    }

    /// Copy `rows` into a new engine. Later changes to `rows` are not seen
    /// by the engine and edits in the engine are not seen in `rows`.
    ///
    /// # Errors
    /// Same as [`PaginatedTable::new`].
    pub fn from_slice(rows: &[Row], config: &TableConfig) -> Result<Self> {
        Self::new(rows.to_vec(), config)
    }

    /// Install the presentation-side callbacks.
    #[must_use]
    pub fn with_hooks(mut self, hooks: Box<dyn ViewHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    // ---- Configuration ----

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn page_group_size(&self) -> usize {
        self.page_group_size
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    // ---- Dataset ----

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The full working copy, in load order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    // ---- Cursors ----

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn current_group(&self) -> usize {
        self.current_group
    }

    /// Text typed into the go-to box but not yet submitted.
    pub fn goto_input(&self) -> &str {
        &self.goto_input
    }

    // ---- Derived values ----

    /// `ceil(row_count / rows_per_page)`; zero only for an empty table.
    pub fn total_pages(&self) -> usize {
        self.rows.len().div_ceil(self.rows_per_page)
    }

    /// `ceil(total_pages / page_group_size)`.
    pub fn total_groups(&self) -> usize {
        self.total_pages().div_ceil(self.page_group_size)
    }

    /// First page index of the current group.
    pub fn group_start_page(&self) -> usize {
        self.current_group * self.page_group_size
    }

    /// One past the last page index of the current group.
    pub fn group_end_page(&self) -> usize {
        (self.group_start_page() + self.page_group_size).min(self.total_pages())
    }

    /// Page indices to show as individual buttons.
    pub fn page_range(&self) -> std::ops::Range<usize> {
        self.group_start_page()..self.group_end_page()
    }

    /// Absolute index of the first row on the current page.
    pub fn page_start_index(&self) -> usize {
        self.current_page * self.rows_per_page
    }

    /// Rows on the current page, borrowed from the working copy.
    pub fn visible_rows(&self) -> &[Row] {
        let start = self.page_start_index().min(self.rows.len());
        let end = (start + self.rows_per_page).min(self.rows.len());
        self.rows.get(start..end).unwrap_or_default()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page + 1 < self.total_pages()
    }

    pub fn has_previous_group(&self) -> bool {
        self.current_group > 0
    }

    pub fn has_next_group(&self) -> bool {
        self.current_group + 1 < self.total_groups()
    }
}
