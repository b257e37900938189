//! DOM side effects requested by the engine.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::error::NavigationError;
use crate::table::ViewHooks;

/// DOM handles registered from JavaScript after construction.
#[derive(Default)]
pub(crate) struct DomState {
    /// Element whose `scrollTop` is reset on a page jump.
    pub(crate) scroll_container: Option<HtmlElement>,
    /// Called with the notice text when a go-to request fails.
    pub(crate) notice_callback: Option<Function>,
}

/// `ViewHooks` backed by the DOM.
pub(crate) struct DomHooks {
    pub(crate) state: Rc<RefCell<DomState>>,
}

impl ViewHooks for DomHooks {
    fn reset_scroll(&mut self) {
        if let Some(ref container) = self.state.borrow().scroll_container {
            container.set_scroll_top(0);
        }
    }

    fn invalid_page(&mut self, error: &NavigationError) {
        let message = error.to_string();
        let callback = self.state.borrow().notice_callback.clone();
        match callback {
            Some(callback) => {
                if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(&message)) {
                    report_callback_error("notice", &e);
                }
            }
            None => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&message);
                }
            }
        }
    }
}

/// Log an exception thrown by a JS callback. A callback that reads the table
/// synchronously fails here with "recursive use of an object".
pub(crate) fn report_callback_error(kind: &str, error: &JsValue) {
    warn!(kind, "JS callback threw");
    let label = JsValue::from_str(&format!("xltable {kind} callback failed:"));
    web_sys::console::error_2(&label, error);
}
