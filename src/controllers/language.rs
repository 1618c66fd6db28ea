use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Event};

use super::dom::{self, Listeners};
use crate::behavior::menu::Toggle;
use crate::config::{classes, selectors, TRANSLATIONS_JSON};
use crate::error::PageError;
use crate::i18n::preference::{BrowserStorage, LanguagePreference};
use crate::i18n::{Language, Translations};

/// Sets `<html lang dir>`. Runs before the first render so right-to-left
/// pages never flash left-to-right.
pub fn apply_document_language(lang: Language) -> Result<(), PageError> {
    let root = dom::document()?
        .document_element()
        .ok_or_else(|| PageError::Missing("html".to_string()))?;
    root.set_attribute("lang", lang.code())?;
    root.set_attribute("dir", lang.direction().as_str())?;
    Ok(())
}

/// Rewrites every `data-i18n` element. Keys with no translation anywhere are
/// left as rendered. Returns how many elements were updated.
pub fn apply_translations(document: &Document, lang: Language, translations: &Translations) -> usize {
    let mut updated = 0;
    for element in dom::query_all(document, selectors::TRANSLATABLE) {
        let Some(key) = element.get_attribute(selectors::TRANSLATION_ATTR) else {
            continue;
        };
        match translations.lookup(lang, &key) {
            Some(text) => {
                element.set_text_content(Some(text));
                updated += 1;
            }
            None => log::debug!("no translation for '{}'", key),
        }
    }
    updated
}

/// Persists the choice and reloads so direction-dependent layout (the
/// carousels especially) starts over.
pub fn switch_language(
    preference: &mut LanguagePreference<BrowserStorage>,
    lang: Language,
) -> Result<(), PageError> {
    preference.set(lang)?;
    log::info!("language set to {}, reloading", lang.code());
    dom::window()?.location().reload()?;
    Ok(())
}

/// Localizes the page and drives the language dropdown.
pub struct LanguageController {
    _listeners: Listeners,
}

impl LanguageController {
    pub fn attach(document: &Document, lang: Language) -> Self {
        localize(document, lang);

        let mut listeners = Listeners::default();
        let button = dom::by_id(document, selectors::LANG_BUTTON);
        let menu = dom::by_id(document, selectors::LANG_MENU);
        if let (Some(button), Some(menu)) = (button, menu) {
            attach_dropdown(&mut listeners, document, button, menu, lang);
        } else {
            log::warn!("language dropdown not found, switcher disabled");
        }

        Self { _listeners: listeners }
    }
}

fn localize(document: &Document, lang: Language) {
    if let Err(e) = apply_document_language(lang) {
        log::warn!("could not set document language: {}", e);
    }
    match Translations::from_json(TRANSLATIONS_JSON) {
        Ok(translations) => {
            let updated = apply_translations(document, lang, &translations);
            log::debug!("translated {} elements into {}", updated, lang.code());
        }
        Err(e) => log::warn!("translations unavailable, keeping default text: {}", e),
    }
}

fn attach_dropdown(
    listeners: &mut Listeners,
    document: &Document,
    button: Element,
    menu: Element,
    lang: Language,
) {
    let state = Rc::new(RefCell::new(Toggle::default()));
    let menu = Rc::new(menu);

    {
        let state = state.clone();
        let menu = menu.clone();
        listeners.listen(&button, "click", move |e: Event| {
            e.stop_propagation();
            let open = state.borrow_mut().toggle();
            dom::set_class(&menu, classes::ACTIVE, open);
        });
    }

    {
        let state = state.clone();
        let menu = menu.clone();
        listeners.listen(document, "click", move |_| {
            if state.borrow_mut().close() {
                dom::set_class(&menu, classes::ACTIVE, false);
            }
        });
    }

    let preference = Rc::new(RefCell::new(LanguagePreference::new(BrowserStorage::open())));
    for option in dom::query_all(document, selectors::LANG_OPTIONS) {
        let code = option.get_attribute("data-lang").unwrap_or_default();
        let Some(choice) = Language::from_code(&code) else {
            log::warn!("ignoring unsupported language option '{}'", code);
            continue;
        };
        dom::set_class(&option, classes::ACTIVE, choice == lang);

        let preference = preference.clone();
        listeners.listen(&option, "click", move |e: Event| {
            e.stop_propagation();
            if let Err(e) = switch_language(&mut preference.borrow_mut(), choice) {
                log::error!("failed to switch language: {}", e);
            }
        });
    }

    if let Some(current) = dom::query(document, selectors::CURRENT_LANG) {
        current.set_text_content(Some(&lang.code().to_uppercase()));
    }
}
