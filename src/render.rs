//! Pure markup for the notification list and badge.
//!
//! Titles and messages are inserted verbatim: the server owns that content
//! and already sends it as display-ready HTML text.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::state::widget::{ItemTime, ListedNotification};

pub const EMPTY_MARKUP: &str = r#"<div class="text-sm text-gray-500 p-2">No notifications</div>"#;
pub const LOAD_FAILED_MARKUP: &str = r#"<div class="text-sm text-gray-500 p-2">Unable to load notifications</div>"#;
pub const INVALID_DATE: &str = "Invalid Date";
pub const FALLBACK_HREF: &str = "#";

const READ_CLASS: &str = "text-gray-500";
const UNREAD_CLASS: &str = "text-gray-800 font-medium";
const LOCALE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// CSS `display` value for the badge.
pub fn badge_display(visible: bool) -> &'static str {
    if visible { "inline-flex" } else { "none" }
}

/// Link target for an item; empty and missing urls both fall back to `#`.
pub fn link_target(url: Option<&str>) -> &str {
    url.filter(|u| !u.is_empty()).unwrap_or(FALLBACK_HREF)
}

/// Render `dt` the way `Date.prototype.toLocaleString` does for en-US.
pub fn format_local(dt: &DateTime<FixedOffset>) -> String {
    dt.format(LOCALE_FORMAT).to_string()
}

/// Parse a server timestamp and show it in the viewer's offset.
pub fn format_timestamp(raw: Option<&str>, offset: FixedOffset) -> String {
    raw.and_then(|s| parse_timestamp(s.trim(), offset))
        .map_or_else(|| INVALID_DATE.to_owned(), |dt| format_local(&dt))
}

fn parse_timestamp(raw: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&offset));
    }
    // Without a zone the browser reads date-times as local time.
    for layout in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
            return offset.from_local_datetime(&naive).single();
        }
    }
    // Date-only values are UTC midnight.
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(&offset))
}

fn display_time(time: &ItemTime, offset: FixedOffset) -> String {
    match time {
        ItemTime::Server(raw) => format_timestamp(raw.as_deref(), offset),
        ItemTime::Received(at) => format_local(&at.with_timezone(&offset)),
    }
}

/// One clickable item block carrying its id as `data-id`.
pub fn render_item(item: &ListedNotification, offset: FixedOffset) -> String {
    let read_class = if item.is_read { READ_CLASS } else { UNREAD_CLASS };
    format!(
        r#"<a href="{href}" data-id="{id}" class="block p-2 hover:bg-gray-50 {read_class}"><div class="text-sm">{title}</div><div class="text-xs text-gray-500">{message}</div><div class="text-xs text-gray-400 mt-1">{time}</div></a>"#,
        href = link_target(item.url.as_deref()),
        id = item.id,
        title = item.title,
        message = item.message,
        time = display_time(&item.time, offset),
    )
}

/// Full list markup in the given order; the empty message when there is nothing to show.
pub fn render_list(items: &[ListedNotification], offset: FixedOffset) -> String {
    if items.is_empty() {
        return EMPTY_MARKUP.to_owned();
    }
    items.iter().map(|item| render_item(item, offset)).collect()
}
