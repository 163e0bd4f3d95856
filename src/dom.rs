//! Browser DOM binding for the widget's host elements.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page supplies the markup; this module only finds the five
//! elements, applies `Patch`es to them and reads click targets back out.
//! Requires a browser environment.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement};

use crate::config::ElementIds;
use crate::error::WidgetError;
use crate::net::types::NotificationId;
use crate::render::badge_display;
use crate::state::widget::Patch;

const HIDDEN_CLASS: &str = "hidden";
const ITEM_SELECTOR: &str = "a[data-id]";

/// The widget's host elements.
#[derive(Clone, Debug)]
pub struct Dom {
    pub root: Element,
    pub toggle: Element,
    pub menu: Element,
    pub list: Element,
    pub badge: HtmlElement,
}

/// The item block a click landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickedItem {
    pub id: NotificationId,
    pub href: String,
}

impl Dom {
    /// Find the widget root; `Ok(None)` when this page has no widget.
    ///
    /// # Errors
    ///
    /// Returns `WidgetError::Dom` naming the first required child that is missing.
    pub fn locate(document: &Document, ids: &ElementIds) -> Result<Option<Self>, WidgetError> {
        let Some(root) = document.get_element_by_id(&ids.root) else {
            return Ok(None);
        };
        let find = |id: &str| document.get_element_by_id(id).ok_or_else(|| WidgetError::Dom(id.to_owned()));
        let badge = find(ids.badge.as_str())?
            .dyn_into::<HtmlElement>()
            .map_err(|_| WidgetError::Dom(ids.badge.clone()))?;
        Ok(Some(Self {
            root,
            toggle: find(ids.toggle.as_str())?,
            menu: find(ids.menu.as_str())?,
            list: find(ids.list.as_str())?,
            badge,
        }))
    }

    pub fn menu_is_open(&self) -> bool {
        !self.menu.class_list().contains(HIDDEN_CLASS)
    }

    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.get_attribute(name)
    }

    /// Apply one patch. Navigation patches are scheduled, not performed inline.
    pub fn apply(&self, patch: Patch) {
        match patch {
            Patch::Menu { open } => {
                let _ = self.menu.class_list().toggle_with_force(HIDDEN_CLASS, !open);
            }
            Patch::ReplaceList(html) => self.list.set_inner_html(&html),
            Patch::PrependItem(html) => {
                if self.list.insert_adjacent_html("afterbegin", &html).is_err() {
                    log::warn!("could not prepend notification markup");
                }
            }
            Patch::Badge { text, visible } => {
                self.badge.set_text_content(Some(&text));
                if self.badge.style().set_property("display", badge_display(visible)).is_err() {
                    log::warn!("could not set badge visibility");
                }
            }
            Patch::Navigate { href, delay } => {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(delay).await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&href);
                    }
                });
            }
        }
    }
}

/// The item block containing `target`, if the click landed inside one.
pub fn clicked_item(target: Option<web_sys::EventTarget>) -> Option<ClickedItem> {
    let element = target?.dyn_into::<Element>().ok()?;
    let anchor = element.closest(ITEM_SELECTOR).ok()??;
    let id = NotificationId::new(anchor.get_attribute("data-id").unwrap_or_default());
    let href = anchor
        .dyn_ref::<HtmlAnchorElement>()
        .map(HtmlAnchorElement::href)
        .or_else(|| anchor.get_attribute("href"))
        .unwrap_or_default();
    Some(ClickedItem { id, href })
}
