//! HTTP helpers for the notification list and mark-read endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning an error, since these endpoints are only
//! reachable from a page.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, WidgetError>` so the controller can log the cause
//! and fall back to the fixed messages the widget shows on failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{MarkReadResponse, Notification};
use crate::config::WidgetConfig;
use crate::error::WidgetError;

pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Value of cookie `name` in a `document.cookie` string, or `""` when absent.
pub fn cookie_value(cookies: &str, name: &str) -> String {
    for pair in cookies.split(';') {
        let Some(rest) = pair.trim_start().strip_prefix(name) else {
            continue;
        };
        let Some(value) = rest.trim_start().strip_prefix('=') else {
            continue;
        };
        let value = value.trim_start();
        if !value.is_empty() {
            return value.to_owned();
        }
    }
    String::new()
}

/// Headers sent with every mark-read request.
pub fn mark_read_headers(csrf_token: &str) -> [(&'static str, String); 2] {
    [
        (REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE.to_owned()),
        (CSRF_HEADER, csrf_token.to_owned()),
    ]
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn decode_list_body(body: &str) -> Result<Vec<Notification>, WidgetError> {
    let list: super::types::NotificationList = serde_json::from_str(body)?;
    Ok(list.into_items())
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn decode_mark_read_body(body: &str) -> Result<MarkReadResponse, WidgetError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    Ok(MarkReadResponse::from_value(&value))
}

/// Decide a response's outcome from its body. A non-OK status is logged but
/// does not fail a response whose body still decodes; when the body does not
/// decode, the status is the reported cause.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn decode_response<T>(
    status: u16,
    body: &str,
    decode: fn(&str) -> Result<T, WidgetError>,
) -> Result<T, WidgetError> {
    let ok = (200..300).contains(&status);
    match decode(body) {
        Ok(value) => {
            if !ok {
                log::warn!("server answered {status}; using its JSON body");
            }
            Ok(value)
        }
        Err(_) if !ok => Err(WidgetError::Status(status)),
        Err(e) => Err(e),
    }
}

/// Fetch the initial notification list.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a notification
/// list, whatever the status.
pub async fn fetch_notifications(config: &WidgetConfig) -> Result<Vec<Notification>, WidgetError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.list_url).send().await?;
        let body = resp.text().await?;
        decode_response(resp.status(), &body, decode_list_body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(WidgetError::Network("not available outside the browser".to_owned()))
    }
}

/// Mark one notification read and return the server's unread count.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not JSON, whatever
/// the status.
pub async fn mark_read(config: &WidgetConfig, id: &str) -> Result<MarkReadResponse, WidgetError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.mark_read_endpoint(id);
        let token = cookie_value(&document_cookies(), &config.csrf_cookie);
        let mut req = gloo_net::http::Request::post(&url);
        for (name, value) in mark_read_headers(&token) {
            req = req.header(name, &value);
        }
        let resp = req.send().await?;
        let body = resp.text().await?;
        decode_response(resp.status(), &body, decode_mark_read_body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, id);
        Err(WidgetError::Network("not available outside the browser".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
fn document_cookies() -> String {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default()
}
