//! Page and group navigation.
//!
//! Every command validates against the current row count before writing
//! anything, so a rejected command leaves both cursors untouched.

use tracing::{debug, warn};

use super::PaginatedTable;
use crate::error::NavigationError;

/// A committed page transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub from: usize,
    pub to: usize,
}

impl PageChange {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Parse the leading decimal integer of `text`.
///
/// Leading whitespace and a single `+`/`-` sign are accepted and anything
/// after the digits is ignored, so `" 3"`, `"3abc"` and `"3.9"` all give 3.
/// Returns `None` when no digit follows the optional sign. Values that do not
/// fit in `i64` saturate.
pub fn parse_page_number(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, trimmed.get(1..).unwrap_or_default()),
        Some(b'+') => (false, trimmed.get(1..).unwrap_or_default()),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in digits.bytes().map_while(|b| (b as char).to_digit(10)) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { value.saturating_neg() } else { value })
}

impl PaginatedTable {
    /// Jump to the 0-based page `target`.
    ///
    /// On success both cursors move and the view is asked to scroll back to
    /// the top. On failure nothing moves and the view is asked to show a
    /// notice. The go-to buffer is cleared either way.
    ///
    /// # Errors
    /// `NavigationError::OutOfRange` or `NavigationError::Empty`.
    pub fn go_to_page(&mut self, target: usize) -> Result<PageChange, NavigationError> {
        let checked = self.check_page(i64::try_from(target).unwrap_or(i64::MAX));
        self.finish_jump(checked)
    }

    /// Jump to the page named by 1-based `text`, as typed into the go-to box.
    ///
    /// # Errors
    /// `NavigationError::NotANumber` when `text` has no leading integer,
    /// otherwise the same errors as [`PaginatedTable::go_to_page`].
    pub fn go_to_page_from_text(&mut self, text: &str) -> Result<PageChange, NavigationError> {
        let checked = match parse_page_number(text) {
            Some(page_number) => self.check_page(page_number.saturating_sub(1)),
            None => Err(NavigationError::NotANumber(text.to_string())),
        };
        self.finish_jump(checked)
    }

    /// Replace the go-to buffer with what the user has typed so far.
    pub fn set_goto_input(&mut self, text: &str) {
        text.clone_into(&mut self.goto_input);
    }

    /// Submit the go-to buffer.
    ///
    /// # Errors
    /// Same as [`PaginatedTable::go_to_page_from_text`].
    pub fn submit_goto(&mut self) -> Result<PageChange, NavigationError> {
        let text = std::mem::take(&mut self.goto_input);
        self.go_to_page_from_text(&text)
    }

    /// Show group `target` starting from its first page.
    ///
    /// Group buttons are disabled at the boundaries, so an out-of-range
    /// group is ignored without a notice and `None` is returned.
    pub fn change_group(&mut self, target: usize) -> Option<PageChange> {
        if target >= self.total_groups() {
            debug!(group = target, total_groups = self.total_groups(), "group change ignored");
            return None;
        }
        let from = self.current_page;
        self.current_group = target;
        self.current_page = target * self.page_group_size;
        debug!(from, to = self.current_page, group = target, "group changed");
        Some(PageChange {
            from,
            to: self.current_page,
        })
    }

    pub fn previous_page(&mut self) -> Option<PageChange> {
        if !self.has_previous_page() {
            return None;
        }
        self.go_to_page(self.current_page - 1).ok()
    }

    pub fn next_page(&mut self) -> Option<PageChange> {
        if !self.has_next_page() {
            return None;
        }
        self.go_to_page(self.current_page + 1).ok()
    }

    pub fn previous_group(&mut self) -> Option<PageChange> {
        let target = self.current_group.checked_sub(1)?;
        self.change_group(target)
    }

    pub fn next_group(&mut self) -> Option<PageChange> {
        self.change_group(self.current_group + 1)
    }

    fn check_page(&self, target: i64) -> Result<usize, NavigationError> {
        let total_pages = self.total_pages();
        if total_pages == 0 {
            return Err(NavigationError::Empty);
        }
        match usize::try_from(target) {
            Ok(page) if page < total_pages => Ok(page),
            _ => Err(NavigationError::OutOfRange {
                requested: target,
                total_pages,
            }),
        }
    }

    fn finish_jump(
        &mut self,
        checked: Result<usize, NavigationError>,
    ) -> Result<PageChange, NavigationError> {
        self.goto_input.clear();
        match checked {
            Ok(page) => {
                let from = self.current_page;
                self.current_page = page;
                self.current_group = page / self.page_group_size;
                self.hooks.reset_scroll();
                debug!(from, to = page, group = self.current_group, "page changed");
                Ok(PageChange { from, to: page })
            }
            Err(e) => {
                warn!(error = %e, "page navigation rejected");
                self.hooks.invalid_page(&e);
                Err(e)
            }
        }
    }
}
