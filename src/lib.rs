//! # notif-bell
//!
//! Leptos + WASM notification bell for server-rendered pages.
//!
//! The crate loads the current notification list, follows a push stream for
//! new ones, keeps an unread badge up to date and marks items read when they
//! are clicked. State, markup, wire types and configuration are plain Rust
//! and build natively; the browser glue in `dom` and `widget` is only
//! compiled with the `hydrate` feature.

pub mod config;
pub mod error;
pub mod net;
pub mod render;
pub mod state;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod widget;

/// WASM entry point: start the widget once the document has been parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    console_error_panic_hook::set_once();
    // Install once at full verbosity; `widget::boot` narrows it to the configured level.
    if console_log::init_with_level(log::Level::Trace).is_ok() {
        log::set_max_level(crate::config::WidgetConfig::default().log_level.to_level_filter());
    }
    let _ = leptos::task::Executor::init_wasm_bindgen();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let ready_state = js_sys::Reflect::get(&document, &"readyState".into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    if ready_state == "loading" {
        let on_ready = Closure::once_into_js(widget::boot);
        if document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            .is_err()
        {
            log::warn!("could not wait for DOMContentLoaded; notification widget not started");
        }
    } else {
        widget::boot();
    }
}
