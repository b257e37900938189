//! Side effects the engine asks of the presentation layer.

use crate::error::NavigationError;

/// Callbacks into whatever is drawing the table.
///
/// The engine never touches the DOM or any window state itself; it calls
/// these after a transition has been committed (or rejected).
pub trait ViewHooks {
    /// A page jump succeeded; scroll the table container back to the top.
    fn reset_scroll(&mut self) {}

    /// A go-to request failed validation; show `error` to the user.
    fn invalid_page(&mut self, _error: &NavigationError) {}
}

/// Hooks that do nothing. Installed by default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl ViewHooks for NoopHooks {}
