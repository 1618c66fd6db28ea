use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::js_sys::{Math, Number};
use web_sys::{Document, Element, Window};

use super::dom::{self, Listeners};
use crate::behavior::stats::StatTicker;
use crate::config::{classes, HERO_STATS, STAT_TICK_MS};

/// Hero counters. Started once the window has loaded; they then tick for as
/// long as the controller lives.
pub struct StatsController {
    _listeners: Listeners,
    intervals: Rc<RefCell<Vec<Interval>>>,
}

impl StatsController {
    pub fn attach(window: &Window, document: &Document) -> Self {
        let mut listeners = Listeners::default();
        let intervals = Rc::new(RefCell::new(Vec::new()));

        let start = {
            let document = document.clone();
            let intervals = intervals.clone();
            move || {
                if let Some(body) = document.body() {
                    dom::set_class(&body, classes::LOADED, true);
                }
                *intervals.borrow_mut() = start_tickers(&document);
            }
        };

        // The wasm bundle can finish after `load` has already fired
        if document.ready_state() == "complete" {
            start();
        } else {
            listeners.listen(window, "load", move |_| start());
        }

        Self {
            _listeners: listeners,
            intervals,
        }
    }

    pub fn running(&self) -> usize {
        self.intervals.borrow().len()
    }
}

fn start_tickers(document: &Document) -> Vec<Interval> {
    HERO_STATS
        .iter()
        .filter_map(|config| {
            let Some(element) = dom::by_id(document, config.element_id) else {
                log::debug!("stat '{}' not on page", config.element_id);
                return None;
            };
            let mut ticker = StatTicker::new(*config);
            display(&element, ticker.value());
            Some(Interval::new(STAT_TICK_MS, move || {
                let value = ticker.tick(Math::random());
                display(&element, value);
            }))
        })
        .collect()
}

/// Counter text with the browser locale's digit grouping.
pub fn format_stat(value: i64) -> String {
    // "default" picks the browser's locale
    Number::from(value as f64).to_locale_string("default").into()
}

fn display(element: &Element, value: i64) {
    element.set_text_content(Some(&format_stat(value)));
}
