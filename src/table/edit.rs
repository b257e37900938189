//! Cell edits.
//!
//! The only way the working copy changes after load. Edits replace one cell
//! in place and never touch row count, row width or the cursors.

use tracing::trace;

use super::PaginatedTable;
use crate::types::CellValue;

impl PaginatedTable {
    /// Store `value` at absolute (`row`, `column`) exactly as given.
    ///
    /// # Panics
    /// Indices come from the table's own pagination state, so an
    /// out-of-range `row` or `column` is a caller bug and panics.
    pub fn edit_cell(&mut self, row: usize, column: usize, value: CellValue) {
        let row_count = self.rows.len();
        let columns = self.columns;
        let cell = self.rows.get_mut(row).and_then(|r| r.get_mut(column));
        assert!(
            cell.is_some(),
            "cell ({row}, {column}) outside {row_count}x{columns} table"
        );
        if let Some(cell) = cell {
            trace!(row, column, "cell edited");
            *cell = value;
        }
    }

    /// Edit a cell addressed relative to the current page, as a rendered
    /// row would: `visible_row` 0 is the first row of the visible slice.
    ///
    /// # Panics
    /// If the translated position is outside the table.
    pub fn edit_visible_cell(&mut self, visible_row: usize, column: usize, value: CellValue) {
        let row = self.page_start_index() + visible_row;
        self.edit_cell(row, column, value);
    }
}
