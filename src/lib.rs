//! xltable - paginated, editable table for the web
//!
//! Pages through a large in-memory row set in fixed-size chunks instead of
//! creating an element per row:
//! - Page, group and "go to page" navigation with validated transitions
//! - In-place cell editing on an owned copy of the rows
//! - A borrowed render model (`PageView`) for whatever draws the table
//! - Browser bindings via WebAssembly (`XlTable`)
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { XlTable, fetch_table_rows } from 'xltable';
//! await init();
//! const table = XlTable.new_for_window({ rowsPerPage: 10, pageGroupSize: 5 });
//! // Callbacks run while the table is busy; read `view()` on the next frame.
//! table.set_render_callback(() => requestAnimationFrame(() => draw(table.view())));
//! try {
//!   table.load(await fetch_table_rows(url));
//! } catch (e) {
//!   table.load_failed(String(e));
//! }
//! ```
//!
//! # Usage (Rust)
//!
//! ```
//! use xltable::{CellValue, PaginatedTable, TableConfig};
//!
//! let rows = (0..47u32).map(|i| vec![CellValue::from(i)]).collect();
//! let mut table = PaginatedTable::new(rows, &TableConfig::default()).unwrap();
//! table.go_to_page(4).unwrap();
//! assert_eq!(table.visible_rows().len(), 7);
//! ```

pub mod error;
pub mod host;
pub mod layout;
pub mod render;
pub mod source;
pub mod table;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::{NavigationError, Result, TableError};
pub use host::{LoadState, TableHost};
pub use layout::Viewport;
pub use render::{NavControls, PageButton, PageView};
pub use table::{PageChange, PaginatedTable, ViewHooks};
pub use types::*;

#[cfg(target_arch = "wasm32")]
pub use viewer::XlTable;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
