//! Notification widget controller.
//!
//! Wires the three input sources (initial fetch, push stream, clicks) to
//! `WidgetState::apply` and pushes the resulting patches into the DOM. All
//! handlers run on the page's single event loop, so the state signal is never
//! touched concurrently.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged and absorbed. The user sees at most the fixed
//! "Unable to load notifications" message; nothing is retried.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use leptos::prelude::{Owner, RwSignal, Update};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::config::{ElementIds, WidgetConfig};
use crate::dom::{Dom, clicked_item};
use crate::net::api;
use crate::net::push_client::spawn_push_client;
use crate::state::widget::{WidgetEvent, WidgetState};

thread_local! {
    static WIDGET_OWNER: RefCell<Option<Owner>> = const { RefCell::new(None) };
}

#[derive(Clone)]
pub struct Controller {
    state: RwSignal<WidgetState>,
    dom: Dom,
    config: Rc<WidgetConfig>,
}

impl Controller {
    /// Single entry point for every state change.
    pub fn dispatch(&self, event: WidgetEvent) {
        let offset = local_offset();
        let patches = self.state.try_update(|s| s.apply(event, offset)).unwrap_or_default();
        for patch in patches {
            self.dom.apply(patch);
        }
    }

    fn load_initial(&self) {
        let ctrl = self.clone();
        leptos::task::spawn_local(async move {
            match api::fetch_notifications(&ctrl.config).await {
                Ok(rows) => {
                    log::debug!("loaded {} notifications", rows.len());
                    ctrl.dispatch(WidgetEvent::InitialLoadSucceeded(rows));
                }
                Err(e) => {
                    log::warn!("notification list failed: {e}");
                    ctrl.dispatch(WidgetEvent::InitialLoadFailed);
                }
            }
        });
    }

    fn open_push_stream(&self) {
        if !self.config.stream_enabled {
            log::info!("push stream disabled; fetch-only mode");
            return;
        }
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return;
        };
        let protocol = location.protocol().unwrap_or_default();
        let host = location.host().unwrap_or_default();
        let url = self.config.stream_url(&protocol, &host);

        let ctrl = self.clone();
        let opened = spawn_push_client(&url, move |payload| {
            ctrl.dispatch(WidgetEvent::PushReceived { payload, received_at: now() });
        });
        if let Err(e) = opened {
            log::debug!("{e}; fetch-only mode");
        }
    }

    fn install_toggle(&self) {
        let ctrl = self.clone();
        let cb = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
            ctrl.dispatch(WidgetEvent::MenuToggled);
        });
        if self
            .dom
            .toggle
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not bind menu toggle");
        }
        cb.forget();
    }

    fn install_mark_read(&self) {
        let ctrl = self.clone();
        let cb = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            let Some(item) = clicked_item(ev.target()) else {
                return;
            };
            ev.prevent_default();

            let ctrl = ctrl.clone();
            leptos::task::spawn_local(async move {
                match api::mark_read(&ctrl.config, item.id.as_str()).await {
                    Ok(resp) => ctrl.dispatch(WidgetEvent::MarkReadSucceeded {
                        id: item.id,
                        href: item.href,
                        unread: resp.unread,
                    }),
                    Err(e) => log::warn!("mark-read {} failed: {e}", item.id),
                }
            });
        });
        if self
            .dom
            .list
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not bind item clicks");
        }
        cb.forget();
    }
}

/// Locate the widget and start it. A page without the widget root is a no-op.
pub fn boot() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let ids = ElementIds::default();
    let dom = match Dom::locate(&document, &ids) {
        Ok(Some(dom)) => dom,
        Ok(None) => return,
        Err(e) => {
            log::warn!("notification widget not started: {e}");
            return;
        }
    };
    let config = WidgetConfig::from_attributes(|name| dom.root_attribute(name));
    log::set_max_level(config.log_level.to_level_filter());
    mount(dom, config);
}

fn mount(dom: Dom, config: WidgetConfig) {
    let owner = Owner::new();
    owner.set();
    let state = RwSignal::new(WidgetState::new(dom.menu_is_open(), config.navigation_delay));
    WIDGET_OWNER.with(|slot| *slot.borrow_mut() = Some(owner));

    let ctrl = Controller { state, dom, config: Rc::new(config) };
    ctrl.install_toggle();
    ctrl.install_mark_read();
    ctrl.load_initial();
    ctrl.open_push_stream();
    log::info!("notification widget mounted");
}

/// The viewer's current UTC offset as reported by the browser.
#[allow(clippy::cast_possible_truncation)]
fn local_offset() -> FixedOffset {
    let minutes_behind_utc = js_sys::Date::new_0().get_timezone_offset();
    FixedOffset::west_opt((minutes_behind_utc * 60.0) as i32).unwrap_or(Utc.fix())
}

#[allow(clippy::cast_possible_truncation)]
fn now() -> DateTime<FixedOffset> {
    let offset = local_offset();
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64)
        .unwrap_or_default()
        .with_timezone(&offset)
}
