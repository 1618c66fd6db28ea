use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, Window};

use super::dom::{self, Listeners};
use crate::behavior::viewport::{
    anchor_scroll_top, back_to_top_visible, navbar_scrolled, parallax_transform,
};
use crate::config::{classes, selectors};

/// Scroll-position reactions: navbar state, back-to-top button, hero
/// parallax, plus smooth in-page anchor navigation.
pub struct ViewportController {
    _listeners: Listeners,
}

impl ViewportController {
    pub fn attach(window: &Window, document: &Document) -> Self {
        let mut listeners = Listeners::default();

        if let Some(navbar) = dom::query(document, selectors::NAVBAR) {
            let window_clone = window.clone();
            let update = move || {
                dom::set_class(&navbar, classes::SCROLLED, navbar_scrolled(dom::scroll_y(&window_clone)));
            };
            // Initial check, the page may load already scrolled
            update();
            listeners.listen(window, "scroll", move |_| update());
        }

        if let Some(button) = dom::by_id(document, selectors::BACK_TO_TOP) {
            {
                let window_clone = window.clone();
                let button = button.clone();
                listeners.listen(window, "scroll", move |_| {
                    dom::set_class(&button, classes::VISIBLE, back_to_top_visible(dom::scroll_y(&window_clone)));
                });
            }
            let window_clone = window.clone();
            listeners.listen(&button, "click", move |_| {
                dom::smooth_scroll_to(&window_clone, 0.0);
            });
        }

        if let Some(hero_bg) = dom::query(document, selectors::HERO_BG) {
            let window_clone = window.clone();
            listeners.listen(window, "scroll", move |_| {
                dom::set_style(&hero_bg, "transform", &parallax_transform(dom::scroll_y(&window_clone)));
            });
        }

        for anchor in dom::query_all(document, selectors::ANCHORS) {
            let window_clone = window.clone();
            let document = document.clone();
            let href = anchor.get_attribute("href").unwrap_or_default();
            listeners.listen(&anchor, "click", move |e: Event| {
                e.prevent_default();
                // A bare "#" is not a valid selector; query_selector errors and we skip
                let target = document
                    .query_selector(&href)
                    .ok()
                    .flatten()
                    .and_then(|target| target.dyn_into::<HtmlElement>().ok());
                if let Some(target) = target {
                    dom::smooth_scroll_to(&window_clone, anchor_scroll_top(target.offset_top() as f64));
                }
            });
        }

        log::debug!("viewport reactors attached ({} listeners)", listeners.len());
        Self { _listeners: listeners }
    }
}
