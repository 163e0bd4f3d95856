//! Widget configuration: endpoints, element ids, cookie name and timing.
//!
//! DESIGN
//! ======
//! Defaults match the routes the server exposes. A host page can override the
//! network-facing values through `data-*` attributes on the widget root; a
//! value that fails to parse is ignored and the default stays in force.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_LIST_URL: &str = "/notifications/list/";
pub const DEFAULT_MARK_READ_URL: &str = "/notifications/mark-read/";
pub const DEFAULT_STREAM_PATH: &str = "/ws/notifications/";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_NAV_DELAY_MS: u64 = 120;

/// Element ids the host page must provide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementIds {
    pub root: String,
    pub toggle: String,
    pub menu: String,
    pub list: String,
    pub badge: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            root: "notificationsRoot".to_owned(),
            toggle: "notifToggle".to_owned(),
            menu: "notifMenu".to_owned(),
            list: "notifList".to_owned(),
            badge: "notifBadge".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    pub ids: ElementIds,
    pub list_url: String,
    /// Prefix; the notification id and a trailing slash are appended.
    pub mark_read_url: String,
    pub stream_path: String,
    pub stream_enabled: bool,
    pub csrf_cookie: String,
    /// Pause between a successful mark-read and following the link.
    pub navigation_delay: Duration,
    pub log_level: log::Level,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            list_url: DEFAULT_LIST_URL.to_owned(),
            mark_read_url: DEFAULT_MARK_READ_URL.to_owned(),
            stream_path: DEFAULT_STREAM_PATH.to_owned(),
            stream_enabled: true,
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_owned(),
            navigation_delay: Duration::from_millis(DEFAULT_NAV_DELAY_MS),
            log_level: log::Level::Info,
        }
    }
}

impl WidgetConfig {
    /// Build a config from root-element attributes.
    ///
    /// `attr` is called with full attribute names such as `data-list-url`.
    pub fn from_attributes<F>(attr: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let text = |name: &str| attr(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        if let Some(url) = text("data-list-url") {
            config.list_url = url;
        }
        if let Some(url) = text("data-mark-read-url") {
            config.mark_read_url = ensure_trailing_slash(url);
        }
        if let Some(path) = text("data-stream-path") {
            config.stream_path = if path.starts_with('/') { path } else { format!("/{path}") };
        }
        if let Some(flag) = text("data-stream") {
            config.stream_enabled = !matches!(flag.to_ascii_lowercase().as_str(), "off" | "false" | "0");
        }
        if let Some(name) = text("data-csrf-cookie") {
            config.csrf_cookie = name;
        }
        if let Some(ms) = text("data-nav-delay-ms").and_then(|v| v.parse::<u64>().ok()) {
            config.navigation_delay = Duration::from_millis(ms);
        }
        if let Some(level) = text("data-log-level").and_then(|v| v.parse::<log::Level>().ok()) {
            config.log_level = level;
        }
        config
    }

    pub fn mark_read_endpoint(&self, id: &str) -> String {
        format!("{}{id}/", self.mark_read_url)
    }

    /// Push-stream URL for a page served from `protocol` (e.g. `"https:"`) and `host`.
    pub fn stream_url(&self, protocol: &str, host: &str) -> String {
        let scheme = if protocol == "https:" { "wss" } else { "ws" };
        format!("{scheme}://{host}{}", self.stream_path)
    }
}

fn ensure_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
