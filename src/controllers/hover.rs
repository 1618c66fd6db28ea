use wasm_bindgen::JsCast;
use web_sys::{Document, Event, MouseEvent};

use super::dom::{self, Listeners};
use crate::behavior::viewport::pointer_offset;
use crate::config::selectors;

/// Feeds the pointer position into `--mouse-x` / `--mouse-y` so the card
/// glow can follow it in CSS.
pub struct HoverController {
    _listeners: Listeners,
}

impl HoverController {
    pub fn attach(document: &Document) -> Self {
        let mut listeners = Listeners::default();
        for card in dom::query_all(document, selectors::HOVER_CARDS) {
            let card_clone = card.clone();
            listeners.listen(&card, "mousemove", move |e: Event| {
                let Some(e) = e.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = card_clone.get_bounding_client_rect();
                let (x, y) = pointer_offset(
                    (e.client_x() as f64, e.client_y() as f64),
                    (rect.left(), rect.top()),
                );
                dom::set_style(&card_clone, "--mouse-x", &format!("{}px", x));
                dom::set_style(&card_clone, "--mouse-y", &format!("{}px", y));
            });
        }
        Self { _listeners: listeners }
    }
}
