//! Data source adapters.
//!
//! The table itself only needs a flat `Vec<Row>`. These helpers turn the
//! formats a host is likely to have on hand into one:
//! - the JSON photo-record feed the demo page loads (`rows_from_json`)
//! - CSV/TSV text (`rows_from_delimited`)
//! - a browser `fetch` of the JSON feed (wasm32 only)

mod delimited;
#[cfg(target_arch = "wasm32")]
mod fetch;

pub use delimited::{rows_from_delimited, Delimiter};
#[cfg(target_arch = "wasm32")]
pub use fetch::fetch_rows;

use serde::Deserialize;

use crate::error::{Result, TableError};
use crate::types::{CellValue, Row};

/// Upper bound on rows taken from a feed.
pub const MAX_SOURCE_ROWS: usize = 5000;

/// Columns produced by [`PhotoRecord::into_row`].
pub const PHOTO_COLUMNS: usize = 5;

/// One record of the photo feed. Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

impl PhotoRecord {
    /// `[id, title, url, thumbnailUrl, "Row {id} Extra Data"]`
    #[allow(clippy::cast_precision_loss)]
    pub fn into_row(self) -> Row {
        let extra = format!("Row {} Extra Data", self.id);
        vec![
            CellValue::Number(self.id as f64),
            CellValue::Text(self.title),
            CellValue::Text(self.url),
            CellValue::Text(self.thumbnail_url),
            CellValue::Text(extra),
        ]
    }
}

/// Parse a JSON array of photo records into rows, keeping at most
/// [`MAX_SOURCE_ROWS`].
///
/// # Errors
/// Returns `TableError::Json` if `text` is not an array of records.
pub fn rows_from_json(text: &str) -> Result<Vec<Row>> {
    let records: Vec<PhotoRecord> = serde_json::from_str(text)?;
    Ok(records_to_rows(records))
}

/// Same as [`rows_from_json`] for raw bytes.
///
/// # Errors
/// Returns `TableError::Json` if `data` is not an array of records.
pub fn rows_from_slice(data: &[u8]) -> Result<Vec<Row>> {
    let records: Vec<PhotoRecord> = serde_json::from_slice(data)?;
    Ok(records_to_rows(records))
}

/// Parse a JSON array of arrays of scalars, e.g. `[[1, "a"], [2, "b"]]`.
///
/// # Errors
/// Returns `TableError::Source` when a cell is neither a number nor a string.
pub fn rows_from_json_rows(text: &str) -> Result<Vec<Row>> {
    serde_json::from_str(text)
        .map_err(|e| TableError::Source(format!("expected an array of rows: {e}")))
}

fn records_to_rows(records: Vec<PhotoRecord>) -> Vec<Row> {
    records
        .into_iter()
        .take(MAX_SOURCE_ROWS)
        .map(PhotoRecord::into_row)
        .collect()
}
