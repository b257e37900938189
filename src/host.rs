//! Lifecycle around the engine: waiting for data, ready, or stuck after a
//! failed load.
//!
//! The host owns the viewport and shares it with the engine's hooks so that a
//! page jump scrolls the container back to the top. All access goes through
//! `&mut self`; a multi-threaded embedder must put the whole host behind one
//! lock.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{error, info};

use crate::error::{NavigationError, Result, TableError};
use crate::layout::Viewport;
use crate::render::PageView;
use crate::table::{NoopHooks, PaginatedTable, ViewHooks};
use crate::types::{Row, TableConfig};

/// Where the one-time data delivery stands.
#[derive(Debug)]
pub enum LoadState {
    /// Waiting for the data source.
    Loading,
    /// Rows arrived; the table is interactive.
    Ready(PaginatedTable),
    /// The data source failed. The table stays in its loading display.
    Failed(String),
}

/// Hooks installed into the engine by the host.
struct HostHooks {
    viewport: Rc<RefCell<Viewport>>,
    view: Rc<RefCell<Box<dyn ViewHooks>>>,
}

impl ViewHooks for HostHooks {
    fn reset_scroll(&mut self) {
        self.viewport.borrow_mut().reset_scroll();
        self.view.borrow_mut().reset_scroll();
    }

    fn invalid_page(&mut self, error: &NavigationError) {
        self.view.borrow_mut().invalid_page(error);
    }
}

/// A table that may not have its data yet.
pub struct TableHost {
    config: TableConfig,
    viewport: Rc<RefCell<Viewport>>,
    view: Rc<RefCell<Box<dyn ViewHooks>>>,
    state: LoadState,
}

impl TableHost {
    /// Create a host in the loading state.
    ///
    /// # Errors
    /// Returns `TableError::InvalidConfig` if `config` is out of range.
    pub fn new(config: TableConfig, container_height: f32) -> Result<Self> {
        config.validate()?;
        let viewport = Viewport::new(container_height, config.row_height);
        Ok(Self {
            config,
            viewport: Rc::new(RefCell::new(viewport)),
            view: Rc::new(RefCell::new(Box::new(NoopHooks))),
            state: LoadState::Loading,
        })
    }

    /// Replace the presentation hooks. Takes effect immediately, whether or
    /// not data has arrived.
    pub fn set_view_hooks(&mut self, hooks: Box<dyn ViewHooks>) {
        *self.view.borrow_mut() = hooks;
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }

    pub fn table(&self) -> Option<&PaginatedTable> {
        match &self.state {
            LoadState::Ready(table) => Some(table),
            _ => None,
        }
    }

    pub fn table_mut(&mut self) -> Option<&mut PaginatedTable> {
        match &mut self.state {
            LoadState::Ready(table) => Some(table),
            _ => None,
        }
    }

    /// Deliver the rows. Accepted once, and only while loading.
    ///
    /// # Errors
    /// `TableError::AlreadyLoaded` after a previous delivery or failure, or
    /// any error from [`PaginatedTable::new`].
    pub fn load_rows(&mut self, rows: Vec<Row>) -> Result<()> {
        if !matches!(self.state, LoadState::Loading) {
            return Err(TableError::AlreadyLoaded);
        }
        let hooks = HostHooks {
            viewport: Rc::clone(&self.viewport),
            view: Rc::clone(&self.view),
        };
        let table = PaginatedTable::new(rows, &self.config)?.with_hooks(Box::new(hooks));
        self.viewport.borrow_mut().reset_scroll();
        info!(pages = table.total_pages(), "table ready");
        self.state = LoadState::Ready(table);
        Ok(())
    }

    /// Record a data source failure. The host never retries and keeps
    /// showing its loading state.
    pub fn load_failed(&mut self, reason: &str) {
        error!(reason, "data source failed; table stays in loading state");
        if matches!(self.state, LoadState::Loading) {
            self.state = LoadState::Failed(reason.to_string());
        }
    }

    /// Apply a new container height from the host window.
    pub fn resize(&mut self, container_height: f32) {
        let visible = self.visible_row_count();
        self.viewport.borrow_mut().resize(container_height, visible);
    }

    /// Scroll the container. Returns the applied delta.
    pub fn scroll_to(&mut self, y: f32) -> f32 {
        let visible = self.visible_row_count();
        self.viewport.borrow_mut().scroll_to(y, visible)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.borrow().clone()
    }

    /// The frame to draw, or `None` while loading.
    pub fn view(&self) -> Option<PageView<'_>> {
        let table = self.table()?;
        let viewport = self.viewport.borrow();
        Some(PageView::build(table, &viewport))
    }

    fn visible_row_count(&self) -> usize {
        self.table().map_or(0, |t| t.visible_rows().len())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::CellValue;

    fn rows(n: u32) -> Vec<Row> {
        (0..n).map(|i| vec![CellValue::from(i)]).collect()
    }

    #[test]
    fn test_not_ready_until_rows_arrive() {
        let mut host = TableHost::new(TableConfig::default(), 400.0).unwrap();
        assert!(host.view().is_none());
        host.load_rows(rows(12)).unwrap();
        assert!(host.is_ready());
        assert_eq!(host.view().unwrap().total_pages, 2);
    }

    #[test]
    fn test_failed_source_stays_loading() {
        let mut host = TableHost::new(TableConfig::default(), 400.0).unwrap();
        host.load_failed("HTTP 500");
        assert!(host.view().is_none());
        assert!(matches!(host.state(), LoadState::Failed(reason) if reason == "HTTP 500"));
        assert!(matches!(
            host.load_rows(rows(3)),
            Err(TableError::AlreadyLoaded)
        ));
    }

    #[test]
    fn test_second_load_rejected() {
        let mut host = TableHost::new(TableConfig::default(), 400.0).unwrap();
        host.load_rows(rows(3)).unwrap();
        assert!(matches!(
            host.load_rows(rows(3)),
            Err(TableError::AlreadyLoaded)
        ));
    }

    #[test]
    fn test_page_jump_resets_container_scroll() {
        let config = TableConfig::default().with_row_height(40.0);
        let mut host = TableHost::new(config, 100.0).unwrap();
        host.load_rows(rows(30)).unwrap();
        host.scroll_to(150.0);
        assert_eq!(host.viewport().scroll_top, 150.0);
        host.table_mut().unwrap().go_to_page(1).unwrap();
        assert_eq!(host.viewport().scroll_top, 0.0);
    }

    #[test]
    fn test_resize_before_load() {
        let mut host = TableHost::new(TableConfig::default(), 400.0).unwrap();
        host.resize(250.0);
        assert_eq!(host.viewport().height, 250.0);
    }
}
