//! Main XlTable struct - the WASM entry point for the paginated table.
//!
//! This module provides the exported `XlTable` struct that handles:
//! - Taking the rows from the data source (or a failure report)
//! - Forwarding page, group and go-to commands to the engine
//! - Forwarding cell edits typed into the rendered inputs
//! - Handing the current `PageView` to JavaScript for drawing
//!
//! Every state change ends by invoking the registered render callback. The
//! callback runs while the table is still mutably borrowed, so it must only
//! schedule a redraw (`requestAnimationFrame`) and read `view()` from there.

mod dom;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::host::TableHost;
use crate::layout::Viewport;
use crate::source;
use crate::table::{PageChange, PaginatedTable};
use crate::types::{CellValue, Row, TableConfig};
use dom::{DomHooks, DomState};

/// The table exported to JavaScript.
#[wasm_bindgen]
pub struct XlTable {
    host: TableHost,
    dom: Rc<RefCell<DomState>>,
    render_callback: Option<Function>,
}

#[wasm_bindgen]
impl XlTable {
    /// Create a table in its loading state.
    ///
    /// `options` is `{ rowsPerPage, pageGroupSize, rowHeight, columns }`,
    /// every key optional; `undefined` takes all defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue, container_height: f32) -> Result<XlTable, JsValue> {
        XlTable::with_config(parse_options(options)?, container_height)
    }

    /// Create a table sized from the window's inner height.
    pub fn new_for_window(options: JsValue) -> Result<XlTable, JsValue> {
        let config = parse_options(options)?;
        let viewport = Viewport::from_window_height(window_inner_height(), config.row_height);
        XlTable::with_config(config, viewport.height)
    }

    /// Deliver rows as an array of arrays of numbers/strings.
    pub fn load(&mut self, rows: JsValue) -> Result<(), JsValue> {
        let rows: Vec<Row> = serde_wasm_bindgen::from_value(rows)
            .map_err(|e| JsValue::from_str(&format!("Invalid rows: {e}")))?;
        self.host.load_rows(rows)?;
        self.request_render();
        Ok(())
    }

    /// Deliver rows as the JSON text of a photo-record feed.
    pub fn load_photos_json(&mut self, text: &str) -> Result<(), JsValue> {
        let rows = source::rows_from_json(text)?;
        self.host.load_rows(rows)?;
        self.request_render();
        Ok(())
    }

    /// Report that the data source failed. The table stays in its loading state.
    pub fn load_failed(&mut self, reason: &str) {
        web_sys::console::error_1(&JsValue::from_str(&format!(
            "Error fetching data: {reason}"
        )));
        self.host.load_failed(reason);
    }

    pub fn is_ready(&self) -> bool {
        self.host.is_ready()
    }

    /// The current frame as a plain JS object, or `null` while loading.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        match self.host.view() {
            Some(view) => serde_wasm_bindgen::to_value(&view)
                .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}"))),
            None => Ok(JsValue::NULL),
        }
    }

    // ---- Navigation ----

    /// Page button click (0-based). Returns whether the jump was accepted.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.navigate(|t| t.go_to_page(page).ok())
    }

    pub fn previous_page(&mut self) -> bool {
        self.navigate(|t| t.previous_page())
    }

    pub fn next_page(&mut self) -> bool {
        self.navigate(|t| t.next_page())
    }

    pub fn change_group(&mut self, group: usize) -> bool {
        self.navigate(|t| t.change_group(group))
    }

    pub fn previous_group(&mut self) -> bool {
        self.navigate(|t| t.previous_group())
    }

    pub fn next_group(&mut self) -> bool {
        self.navigate(|t| t.next_group())
    }

    /// Keystroke in the go-to box.
    pub fn set_goto_input(&mut self, text: &str) {
        if let Some(table) = self.host.table_mut() {
            table.set_goto_input(text);
            self.request_render();
        }
    }

    /// "Go" click. Failures are shown through the notice callback.
    pub fn submit_goto(&mut self) -> bool {
        self.navigate(|t| t.submit_goto().ok())
    }

    // ---- Editing ----

    /// Input change on a rendered cell. `visible_row` is relative to the page.
    pub fn edit_visible_cell(&mut self, visible_row: usize, column: usize, value: &str) {
        if let Some(table) = self.host.table_mut() {
            table.edit_visible_cell(visible_row, column, CellValue::from(value));
            self.request_render();
        }
    }

    /// Edit by absolute row index with any scalar value.
    pub fn edit_cell(&mut self, row: usize, column: usize, value: JsValue) -> Result<(), JsValue> {
        let value: CellValue = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Invalid cell value: {e}")))?;
        if let Some(table) = self.host.table_mut() {
            table.edit_cell(row, column, value);
            self.request_render();
        }
        Ok(())
    }

    // ---- Host wiring ----

    /// Apply a new container height (CSS pixels).
    pub fn resize(&mut self, container_height: f32) {
        self.host.resize(container_height);
        self.request_render();
    }

    /// Re-measure from the window after a `resize` event.
    pub fn resize_to_window(&mut self) {
        let row_height = self.host.config().row_height;
        let viewport = Viewport::from_window_height(window_inner_height(), row_height);
        self.resize(viewport.height);
    }

    /// Track the container's scroll offset (from its `scroll` event).
    pub fn on_scroll(&mut self, scroll_top: f32) {
        self.host.scroll_to(scroll_top);
    }

    pub fn set_scroll_container(&mut self, element: Option<HtmlElement>) {
        self.dom.borrow_mut().scroll_container = element;
    }

    /// Register a callback receiving the text of a failed go-to request.
    /// Without one, failures use `window.alert`.
    ///
    /// The callback runs inside the navigation call. Calling back into this
    /// table from it throws; defer any such call with `requestAnimationFrame`
    /// or `queueMicrotask`.
    pub fn set_notice_callback(&mut self, callback: Option<Function>) {
        self.dom.borrow_mut().notice_callback = callback;
    }

    /// Register a JS callback invoked after every state change.
    ///
    /// The callback runs before the triggering method returns, while the
    /// table is still borrowed, so it must request a render on the next
    /// animation frame rather than draw directly:
    /// `table.set_render_callback(() => requestAnimationFrame(() => draw(table.view())))`.
    pub fn set_render_callback(&mut self, callback: Option<Function>) {
        self.render_callback = callback;
    }
}

impl XlTable {
    fn with_config(config: TableConfig, container_height: f32) -> Result<XlTable, JsValue> {
        console_error_panic_hook::set_once();

        let mut host = TableHost::new(config, container_height)?;
        let dom = Rc::new(RefCell::new(DomState::default()));
        host.set_view_hooks(Box::new(DomHooks {
            state: Rc::clone(&dom),
        }));

        Ok(XlTable {
            host,
            dom,
            render_callback: None,
        })
    }

    fn navigate<F>(&mut self, command: F) -> bool
    where
        F: FnOnce(&mut PaginatedTable) -> Option<PageChange>,
    {
        let Some(table) = self.host.table_mut() else {
            return false;
        };
        let changed = command(table).is_some();
        // The go-to buffer is cleared even on failure, so always redraw.
        self.request_render();
        changed
    }

    fn request_render(&self) {
        if let Some(ref callback) = self.render_callback {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                dom::report_callback_error("render", &e);
            }
        }
    }
}

/// Fetch the photo feed at `url` and return its rows as a JS array.
///
/// Pass the result to `XlTable.load`, or the error text to
/// `XlTable.load_failed`.
#[wasm_bindgen]
pub async fn fetch_table_rows(url: String) -> Result<JsValue, JsValue> {
    let rows = source::fetch_rows(&url).await?;
    serde_wasm_bindgen::to_value(&rows)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

fn parse_options(options: JsValue) -> Result<TableConfig, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(TableConfig::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid options: {e}")))
}

#[allow(clippy::cast_possible_truncation)]
fn window_inner_height() -> f32 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .map_or(0.0, |h| h as f32)
}
