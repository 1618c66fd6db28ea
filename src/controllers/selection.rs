use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, Event};

use super::dom::{self, Listeners};
use crate::behavior::selection::Selection;
use crate::config::{classes, selectors, SELECTION_CLEAR_MS};

/// Highlights the last clicked rail card for a few seconds.
pub struct SelectionController {
    _listeners: Listeners,
    _pending: Rc<RefCell<Option<Timeout>>>,
}

impl SelectionController {
    pub fn attach(document: &Document) -> Self {
        let cards: Rc<Vec<Element>> = Rc::new(
            dom::query_all(document, selectors::RAIL)
                .iter()
                .flat_map(|rail| dom::query_all_in(rail, selectors::SELECTABLE_CARDS))
                .collect(),
        );
        let selection = Rc::new(RefCell::new(Selection::<usize>::new()));
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let mut listeners = Listeners::default();

        for (index, card) in cards.iter().enumerate() {
            let document = document.clone();
            let cards = cards.clone();
            let selection = selection.clone();
            let pending = pending.clone();
            listeners.listen(card, "click", move |e: Event| {
                // Keep the document-level handler from clearing us straight away
                e.stop_propagation();

                let selected = selection.borrow_mut().select(index);
                // Dropping the old handle cancels it
                pending.borrow_mut().take();
                clear_marked(&document);
                if let Some(previous) = selected.cleared {
                    log::debug!("card {} replaced by {}", previous, index);
                }
                dom::set_class(&cards[index], classes::SELECTED, true);

                let cards = cards.clone();
                let selection = selection.clone();
                let timeout = Timeout::new(SELECTION_CLEAR_MS, move || {
                    if let Some(expired) = selection.borrow_mut().expire(selected.token) {
                        dom::set_class(&cards[expired], classes::SELECTED, false);
                    }
                });
                *pending.borrow_mut() = Some(timeout);
            });
        }

        {
            let document_clone = document.clone();
            let pending = pending.clone();
            listeners.listen(document, "click", move |_| {
                selection.borrow_mut().clear();
                pending.borrow_mut().take();
                clear_marked(&document_clone);
            });
        }

        log::debug!("selection tracking {} cards", cards.len());
        Self {
            _listeners: listeners,
            _pending: pending,
        }
    }
}

/// Selector for highlighted cards of the tracked kinds only.
fn marked_cards_selector() -> String {
    selectors::SELECTABLE_CARDS
        .split(',')
        .map(|card| format!("{}.{}", card.trim(), classes::SELECTED))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Removes the highlight from every tracked card carrying it, including
/// slides the carousel duplicated for looping.
fn clear_marked(document: &Document) {
    for card in dom::query_all(document, &marked_cards_selector()) {
        dom::set_class(&card, classes::SELECTED, false);
    }
}
