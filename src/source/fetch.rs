//! Browser fetch of the photo-record feed.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::{Result, TableError};
use crate::types::Row;

/// Fetch `url` once and convert the JSON body into rows.
///
/// No retry is attempted; the caller decides what a failure means.
///
/// # Errors
/// Returns `TableError::Source` for network/HTTP failures and
/// `TableError::Json` for a malformed body.
pub async fn fetch_rows(url: &str) -> Result<Vec<Row>> {
    let window = web_sys::window().ok_or_else(|| TableError::Source("no window".into()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(TableError::Source(format!(
            "GET {url} returned HTTP {}",
            response.status()
        )));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let text = text
        .as_string()
        .ok_or_else(|| TableError::Source("response body is not text".into()))?;
    super::rows_from_json(&text)
}

fn js_error(value: JsValue) -> TableError {
    TableError::Source(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}
