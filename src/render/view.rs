use serde::Serialize;

use crate::layout::Viewport;
use crate::table::PaginatedTable;
use crate::types::Row;

/// One numbered page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageButton {
    /// Label shown on the button (1-based).
    pub page_number: usize,
    /// Page index passed back to `go_to_page` on click (0-based).
    pub page_index: usize,
    pub is_current: bool,
}

/// Enablement of the four arrow controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavControls {
    pub previous_page: bool,
    pub next_page: bool,
    pub previous_group: bool,
    pub next_group: bool,
}

/// Everything needed to draw one frame of the table.
///
/// Borrows the visible rows from the engine instead of copying them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<'a> {
    pub rows: &'a [Row],
    /// Absolute index of `rows[0]`; row keys are `first_row_index + i`.
    pub first_row_index: usize,
    pub page_buttons: Vec<PageButton>,
    pub controls: NavControls,
    pub current_page: usize,
    pub total_pages: usize,
    pub current_group: usize,
    pub total_groups: usize,
    pub go_to_input: &'a str,
    pub container_height: f32,
    pub content_height: f32,
    pub row_height: f32,
    pub scroll_top: f32,
}

impl<'a> PageView<'a> {
    /// Derive the view from the engine's current state.
    pub fn build(table: &'a PaginatedTable, viewport: &Viewport) -> Self {
        let rows = table.visible_rows();
        let current = table.current_page();
        let page_buttons = table
            .page_range()
            .map(|page_index| PageButton {
                page_number: page_index + 1,
                page_index,
                is_current: page_index == current,
            })
            .collect();

        PageView {
            rows,
            first_row_index: table.page_start_index(),
            page_buttons,
            controls: NavControls {
                previous_page: table.has_previous_page(),
                next_page: table.has_next_page(),
                previous_group: table.has_previous_group(),
                next_group: table.has_next_group(),
            },
            current_page: current,
            total_pages: table.total_pages(),
            current_group: table.current_group(),
            total_groups: table.total_groups(),
            go_to_input: table.goto_input(),
            container_height: viewport.height,
            content_height: viewport.content_height(rows.len()),
            row_height: viewport.row_height,
            scroll_top: viewport.scroll_top,
        }
    }

    /// Button for the current page, if the table has any pages.
    pub fn current_button(&self) -> Option<&PageButton> {
        self.page_buttons.iter().find(|b| b.is_current)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
