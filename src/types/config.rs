use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Default number of rows on one page.
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;
/// Default number of page buttons shown together.
pub const DEFAULT_PAGE_GROUP_SIZE: usize = 5;
/// Default row height in CSS pixels.
pub const DEFAULT_ROW_HEIGHT: f32 = 40.0;

/// Table configuration, fixed for the table's lifetime.
///
/// Deserializes from a JS options object or JSON with camelCase keys; missing
/// keys take the defaults above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    pub rows_per_page: usize,
    pub page_group_size: usize,
    pub row_height: f32,
    /// Column count. Inferred from the first row when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<usize>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            page_group_size: DEFAULT_PAGE_GROUP_SIZE,
            row_height: DEFAULT_ROW_HEIGHT,
            columns: None,
        }
    }
}

impl TableConfig {
    pub fn with_rows_per_page(mut self, rows_per_page: usize) -> Self {
        self.rows_per_page = rows_per_page;
        self
    }

    pub fn with_page_group_size(mut self, page_group_size: usize) -> Self {
        self.page_group_size = page_group_size;
        self
    }

    pub fn with_row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Check every field against its allowed range.
    ///
    /// # Errors
    /// Returns `TableError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.rows_per_page == 0 {
            return Err(TableError::InvalidConfig(
                "rowsPerPage must be at least 1".into(),
            ));
        }
        if self.page_group_size == 0 {
            return Err(TableError::InvalidConfig(
                "pageGroupSize must be at least 1".into(),
            ));
        }
        if !self.row_height.is_finite() || self.row_height <= 0.0 {
            return Err(TableError::InvalidConfig(format!(
                "rowHeight must be positive, got {}",
                self.row_height
            )));
        }
        if self.columns == Some(0) {
            return Err(TableError::InvalidConfig(
                "columns must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
