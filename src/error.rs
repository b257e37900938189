//! Structured error types for xltable.
//!
//! Navigation failures are user-facing and recoverable; everything else in
//! `TableError` is reported at load/configuration time.

/// All errors that can occur while loading or configuring a table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Configuration value outside its allowed range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A row whose length differs from the table's column count.
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The data source delivered something that is not a row list.
    #[error("Data source: {0}")]
    Source(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rows were already delivered for this table.
    #[error("Table data already loaded")]
    AlreadyLoaded,

    /// A page navigation that failed validation.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Validation failure for a page jump. State is never changed when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// The go-to text did not start with a decimal integer.
    #[error("Invalid page number! \"{0}\" is not a number.")]
    NotANumber(String),

    /// A 0-based page index outside `[0, total_pages)`.
    #[error("Invalid page number! Page {page} is outside 1..={total_pages}.", page = .requested.saturating_add(1))]
    OutOfRange { requested: i64, total_pages: usize },

    /// The table has no pages at all.
    #[error("Invalid page number! The table is empty.")]
    Empty,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(target_arch = "wasm32")]
impl From<TableError> for wasm_bindgen::JsValue {
    fn from(e: TableError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<NavigationError> for wasm_bindgen::JsValue {
    fn from(e: NavigationError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
