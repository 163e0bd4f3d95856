//! Widget state record and its event-driven transitions.
//!
//! DESIGN
//! ======
//! Each event source (toggle click, initial load, push message, mark-read
//! response) maps to one `WidgetEvent`. `apply` mutates the record and
//! returns the minimal list of DOM `Patch`es that bring the page in line,
//! so the browser glue never reads state back out of rendered markup.
//!
//! Events are applied strictly in arrival order. A push that lands while a
//! mark-read request is in flight is counted, then overwritten by the
//! server's authoritative unread count when that response arrives.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use std::time::Duration;

use chrono::{DateTime, FixedOffset};

use crate::net::types::{Notification, NotificationId, PushPayload};
use crate::render;

/// What a rendered item shows as its time.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemTime {
    /// Raw `created_at` from the list endpoint.
    Server(Option<String>),
    /// Client clock when a pushed item arrived.
    Received(DateTime<FixedOffset>),
}

/// A notification as displayed in the dropdown.
#[derive(Clone, Debug, PartialEq)]
pub struct ListedNotification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub url: Option<String>,
    pub is_read: bool,
    pub time: ItemTime,
}

impl From<Notification> for ListedNotification {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            title: n.title,
            message: n.message,
            url: n.url,
            is_read: n.is_read,
            time: ItemTime::Server(n.created_at),
        }
    }
}

impl ListedNotification {
    /// Pushed items are always unread and stamped with the arrival time.
    pub fn from_push(payload: PushPayload, received_at: DateTime<FixedOffset>) -> Self {
        Self {
            id: payload.id,
            title: payload.title,
            message: payload.message,
            url: payload.url,
            is_read: false,
            time: ItemTime::Received(received_at),
        }
    }
}

/// Static message occupying the list instead of items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    Empty,
    LoadFailed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BadgeState {
    pub count: u32,
    pub visible: bool,
}

impl BadgeState {
    pub fn text(self) -> String {
        self.count.to_string()
    }

    fn patch(self) -> Patch {
        Patch::Badge { text: self.text(), visible: self.visible }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WidgetEvent {
    MenuToggled,
    InitialLoadSucceeded(Vec<Notification>),
    InitialLoadFailed,
    PushReceived {
        payload: PushPayload,
        received_at: DateTime<FixedOffset>,
    },
    MarkReadSucceeded {
        id: NotificationId,
        href: String,
        unread: Option<u32>,
    },
}

/// A single DOM mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum Patch {
    Menu { open: bool },
    ReplaceList(String),
    PrependItem(String),
    Badge { text: String, visible: bool },
    Navigate { href: String, delay: Duration },
}

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetState {
    /// Newest first once pushes arrive; otherwise server order.
    pub items: Vec<ListedNotification>,
    pub placeholder: Option<Placeholder>,
    pub badge: BadgeState,
    pub menu_open: bool,
    pub navigation_delay: Duration,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new(false, Duration::from_millis(crate::config::DEFAULT_NAV_DELAY_MS))
    }
}

impl WidgetState {
    pub fn new(menu_open: bool, navigation_delay: Duration) -> Self {
        Self {
            items: Vec::new(),
            placeholder: None,
            badge: BadgeState::default(),
            menu_open,
            navigation_delay,
        }
    }

    /// Correlation ids in display order.
    pub fn correlation_ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.id.as_str()).collect()
    }

    pub fn unread_in_list(&self) -> usize {
        self.items.iter().filter(|item| !item.is_read).count()
    }

    /// Apply one event; `offset` is the viewer's local UTC offset for timestamps.
    pub fn apply(&mut self, event: WidgetEvent, offset: FixedOffset) -> Vec<Patch> {
        match event {
            WidgetEvent::MenuToggled => {
                self.menu_open = !self.menu_open;
                vec![Patch::Menu { open: self.menu_open }]
            }
            WidgetEvent::InitialLoadSucceeded(rows) => self.replace_items(rows, offset),
            WidgetEvent::InitialLoadFailed => {
                self.items.clear();
                self.placeholder = Some(Placeholder::LoadFailed);
                vec![Patch::ReplaceList(render::LOAD_FAILED_MARKUP.to_owned())]
            }
            WidgetEvent::PushReceived { payload, received_at } => self.prepend_push(payload, received_at, offset),
            WidgetEvent::MarkReadSucceeded { id, href, unread } => self.finish_mark_read(&id, href, unread, offset),
        }
    }

    fn replace_items(&mut self, rows: Vec<Notification>, offset: FixedOffset) -> Vec<Patch> {
        self.items = rows.into_iter().map(ListedNotification::from).collect();
        if self.items.is_empty() {
            self.placeholder = Some(Placeholder::Empty);
            self.badge = BadgeState { count: 0, visible: false };
            return vec![Patch::ReplaceList(render::EMPTY_MARKUP.to_owned()), self.badge.patch()];
        }

        self.placeholder = None;
        let unread = u32::try_from(self.unread_in_list()).unwrap_or(u32::MAX);
        self.badge = BadgeState { count: unread, visible: true };
        vec![
            Patch::ReplaceList(render::render_list(&self.items, offset)),
            self.badge.patch(),
        ]
    }

    fn prepend_push(
        &mut self,
        payload: PushPayload,
        received_at: DateTime<FixedOffset>,
        offset: FixedOffset,
    ) -> Vec<Patch> {
        let item = ListedNotification::from_push(payload, received_at);
        let list_patch = if self.items.is_empty() {
            // Placeholder text is dropped; only item blocks survive a push.
            self.items.push(item);
            Patch::ReplaceList(render::render_list(&self.items, offset))
        } else {
            let markup = render::render_item(&item, offset);
            self.items.insert(0, item);
            Patch::PrependItem(markup)
        };
        self.placeholder = None;
        self.badge = BadgeState {
            count: self.badge.count.saturating_add(1),
            visible: true,
        };
        vec![list_patch, self.badge.patch()]
    }

    fn finish_mark_read(
        &mut self,
        id: &NotificationId,
        href: String,
        unread: Option<u32>,
        offset: FixedOffset,
    ) -> Vec<Patch> {
        let mut patches = Vec::with_capacity(3);

        let mut restyled = false;
        for item in self.items.iter_mut().filter(|item| &item.id == id && !item.is_read) {
            item.is_read = true;
            restyled = true;
        }
        if restyled {
            patches.push(Patch::ReplaceList(render::render_list(&self.items, offset)));
        }

        if let Some(count) = unread {
            self.badge = BadgeState { count, visible: count != 0 };
            patches.push(self.badge.patch());
        }

        patches.push(Patch::Navigate { href, delay: self.navigation_delay });
        patches
    }
}
