use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use crate::behavior::reveal::{is_revealable, RevealSet};
use crate::config::{classes, selectors, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::error::PageError;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Fades sections in the first time they scroll into view.
pub struct RevealController {
    observer: Option<IntersectionObserver>,
    _callback: Option<ObserverCallback>,
    revealed: Rc<RefCell<RevealSet>>,
}

impl RevealController {
    pub fn attach(document: &Document) -> Self {
        let sections: Rc<Vec<Element>> = Rc::new(
            dom::query_all(document, selectors::SECTIONS)
                .into_iter()
                .filter(|section| is_revealable(&section.id()))
                .collect(),
        );
        let revealed = Rc::new(RefCell::new(RevealSet::new()));

        let callback = {
            let sections = sections.clone();
            let revealed = revealed.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let Some(index) = sections.iter().position(|section| *section == target) else {
                        continue;
                    };
                    if revealed.borrow_mut().observe(index, entry.is_intersecting()) {
                        dom::set_class(&target, classes::VISIBLE, true);
                        observer.unobserve(&target);
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let observer = match observer(&callback) {
            Ok(observer) => observer,
            Err(e) => {
                // Without an observer nothing would ever un-fade, so leave sections as they are
                log::warn!("section reveal disabled: {}", e);
                return Self {
                    observer: None,
                    _callback: None,
                    revealed,
                };
            }
        };

        for section in sections.iter() {
            dom::set_class(section, classes::FADE_IN, true);
            observer.observe(section);
        }
        log::debug!("observing {} sections for reveal", sections.len());

        Self {
            observer: Some(observer),
            _callback: Some(callback),
            revealed,
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.borrow().len()
    }
}

fn observer(callback: &ObserverCallback) -> Result<IntersectionObserver, PageError> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    Ok(IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )?)
}

impl Drop for RevealController {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}
