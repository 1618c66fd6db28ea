use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Node};

use super::dom::{self, Listeners};
use crate::behavior::menu::{closes_on_click, scroll_lock, Toggle};
use crate::config::{classes, selectors};

/// Elements the mobile menu state is painted onto.
struct MenuView {
    toggle: Element,
    panel: Element,
    navbar: Option<Element>,
    body: Option<HtmlElement>,
}

impl MenuView {
    fn render(&self, state: Toggle) {
        let open = state.is_open();
        dom::set_class(&self.toggle, classes::ACTIVE, open);
        dom::set_class(&self.panel, classes::ACTIVE, open);
        if let Some(navbar) = &self.navbar {
            dom::set_class(navbar, classes::MENU_OPEN, open);
        }
        if let Some(body) = &self.body {
            dom::set_style(body, "overflow", scroll_lock(state));
        }
    }

    fn contains(&self, target: Option<&Node>) -> (bool, bool) {
        (self.panel.contains(target), self.toggle.contains(target))
    }
}

/// Mobile navigation panel with page scroll locked while it is open.
pub struct MenuController {
    _listeners: Listeners,
}

impl MenuController {
    pub fn attach(document: &Document) -> Self {
        let mut listeners = Listeners::default();
        let toggle = dom::by_id(document, selectors::MOBILE_TOGGLE);
        let panel = dom::by_id(document, selectors::NAV_MENU);
        let (Some(toggle), Some(panel)) = (toggle, panel) else {
            log::debug!("no mobile menu on page");
            return Self { _listeners: listeners };
        };

        let view = Rc::new(MenuView {
            toggle: toggle.clone(),
            panel,
            navbar: dom::query(document, selectors::NAVBAR),
            body: document.body(),
        });
        let state = Rc::new(RefCell::new(Toggle::default()));

        {
            let view = view.clone();
            let state = state.clone();
            listeners.listen(&toggle, "click", move |e: Event| {
                e.stop_propagation();
                state.borrow_mut().toggle();
                view.render(*state.borrow());
            });
        }

        for link in dom::query_all(document, selectors::NAV_LINKS) {
            let view = view.clone();
            let state = state.clone();
            listeners.listen(&link, "click", move |_| {
                state.borrow_mut().close();
                view.render(*state.borrow());
            });
        }

        listeners.listen(document, "click", move |e: Event| {
            let target = e.target().and_then(|target| target.dyn_into::<Node>().ok());
            let (inside_menu, on_toggle) = view.contains(target.as_ref());
            if closes_on_click(*state.borrow(), inside_menu, on_toggle) {
                state.borrow_mut().close();
                view.render(*state.borrow());
            }
        });

        Self { _listeners: listeners }
    }
}
