//! Controller behavior against a real DOM. Run with
//! `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::js_sys::Number;
use web_sys::{Document, Element, HtmlElement};

use novatv_landing::components::hero::Hero;
use novatv_landing::controllers::dom;
use novatv_landing::controllers::language::{
    apply_document_language, apply_translations, LanguageController,
};
use novatv_landing::controllers::menu::MenuController;
use novatv_landing::controllers::reveal::RevealController;
use novatv_landing::controllers::selection::SelectionController;
use novatv_landing::controllers::stats::{format_stat, StatsController};
use novatv_landing::i18n::{Language, Translations};

wasm_bindgen_test_configure!(run_in_browser);

fn page(markup: &str) -> Document {
    let document = dom::document().unwrap();
    document.body().unwrap().set_inner_html(markup);
    document
}

fn element(document: &Document, selector: &str) -> Element {
    dom::query(document, selector).unwrap()
}

fn click(element: &Element) {
    element.dyn_ref::<HtmlElement>().unwrap().click();
}

fn selected(document: &Document) -> usize {
    dom::query_all(document, ".active-selection").len()
}

const RAILS: &str = r#"
    <div class="swiper movies-swiper">
        <div class="movie-card" id="a"></div>
        <div class="movie-card" id="b"></div>
    </div>
    <div class="swiper sports-swiper">
        <div class="sport-event-card-fixed" id="c"></div>
    </div>
    <p id="outside"></p>
"#;

#[wasm_bindgen_test]
fn translations_replace_tagged_text() {
    let document = page(r#"<h1 data-i18n="title">Hello</h1><p data-i18n="missing">Keep me</p>"#);
    let translations = Translations::from_json(r#"{"en": {"title": "Hello"}, "ar": {"title": "مرحبا"}}"#).unwrap();

    assert_eq!(apply_translations(&document, Language::Ar, &translations), 1);
    assert_eq!(element(&document, "h1").text_content().as_deref(), Some("مرحبا"));
    assert_eq!(element(&document, "p").text_content().as_deref(), Some("Keep me"));
}

#[wasm_bindgen_test]
fn document_direction_follows_language() {
    let root = dom::document().unwrap().document_element().unwrap();
    apply_document_language(Language::Ar).unwrap();
    assert_eq!(root.get_attribute("dir").as_deref(), Some("rtl"));
    assert_eq!(root.get_attribute("lang").as_deref(), Some("ar"));
    apply_document_language(Language::Es).unwrap();
    assert_eq!(root.get_attribute("dir").as_deref(), Some("ltr"));
    apply_document_language(Language::En).unwrap();
}

#[wasm_bindgen_test]
fn one_card_highlighted_across_rails() {
    let document = page(RAILS);
    let _controller = SelectionController::attach(&document);

    click(&element(&document, "#a"));
    assert!(dom::has_class(&element(&document, "#a"), "active-selection"));
    click(&element(&document, "#c"));
    assert_eq!(selected(&document), 1);
    assert!(dom::has_class(&element(&document, "#c"), "active-selection"));

    click(&element(&document, "#outside"));
    assert_eq!(selected(&document), 0);
}

#[wasm_bindgen_test]
async fn highlight_clears_itself() {
    let document = page(RAILS);
    let _controller = SelectionController::attach(&document);

    click(&element(&document, "#b"));
    TimeoutFuture::new(2_000).await;
    // Re-selecting restarts the clock
    click(&element(&document, "#b"));
    TimeoutFuture::new(1_500).await;
    assert_eq!(selected(&document), 1);
    TimeoutFuture::new(1_600).await;
    assert_eq!(selected(&document), 0);
}

#[wasm_bindgen_test]
fn mobile_menu_locks_and_restores_scroll() {
    let document = page(
        r#"<nav class="navbar">
            <button id="mobileToggle"></button>
            <div id="navMenu"><ul class="nav-links"><li><a id="link">x</a></li></ul></div>
        </nav>"#,
    );
    let _controller = MenuController::attach(&document);
    let body = document.body().unwrap();

    click(&element(&document, "#mobileToggle"));
    assert!(dom::has_class(&element(&document, ".navbar"), "menu-open"));
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");

    click(&element(&document, "#link"));
    assert!(!dom::has_class(&element(&document, "#navMenu"), "active"));
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "");
}

#[wasm_bindgen_test]
fn pricing_section_is_never_faded() {
    let document = page(r#"<section id="features"></section><section id="pricing"></section>"#);
    let _controller = RevealController::attach(&document);

    assert!(dom::has_class(&element(&document, "#features"), "fade-in"));
    assert!(!dom::has_class(&element(&document, "#pricing"), "fade-in"));
    assert!(!dom::has_class(&element(&document, "#pricing"), "visible"));
}

#[wasm_bindgen_test]
fn outside_click_leaves_untracked_elements_alone() {
    let document = page(&format!(r#"{}<div class="banner active-selection" id="banner"></div>"#, RAILS));
    let _controller = SelectionController::attach(&document);

    click(&element(&document, "#a"));
    click(&element(&document, "#outside"));
    assert!(!dom::has_class(&element(&document, "#a"), "active-selection"));
    assert!(dom::has_class(&element(&document, "#banner"), "active-selection"));
}

#[wasm_bindgen_test]
fn language_dropdown_marks_current_and_toggles() {
    let document = page(
        r#"<button id="langDropdownBtn"><span class="current-lang">EN</span></button>
        <div id="langDropdownMenu">
            <button class="lang-option" data-lang="en">English</button>
            <button class="lang-option" data-lang="ar">العربية</button>
        </div>
        <p id="outside"></p>"#,
    );
    let controller = LanguageController::attach(&document, Language::Ar);

    assert_eq!(element(&document, ".current-lang").text_content().as_deref(), Some("AR"));
    assert!(dom::has_class(&element(&document, "[data-lang=ar]"), "active"));
    assert!(!dom::has_class(&element(&document, "[data-lang=en]"), "active"));

    let menu = element(&document, "#langDropdownMenu");
    click(&element(&document, "#langDropdownBtn"));
    assert!(dom::has_class(&menu, "active"));
    click(&element(&document, "#langDropdownBtn"));
    assert!(!dom::has_class(&menu, "active"));

    click(&element(&document, "#langDropdownBtn"));
    click(&element(&document, "#outside"));
    assert!(!dom::has_class(&menu, "active"));

    drop(controller);
    apply_document_language(Language::En).unwrap();
}

#[wasm_bindgen_test]
fn stats_show_grouped_minimum_on_load() {
    let document = page(r#"<span id="channelsCount"></span>"#);
    let window = dom::window().unwrap();
    let controller = StatsController::attach(&window, &document);

    let expected: String = Number::from(15_000.0).to_locale_string("default").into();
    assert_eq!(element(&document, "#channelsCount").text_content(), Some(expected));
    assert!(dom::has_class(&document.body().unwrap(), "loaded"));
    assert_eq!(controller.running(), 1);

    drop(controller);
    dom::set_class(&document.body().unwrap(), "loaded", false);
}

#[wasm_bindgen_test]
async fn hero_renders_counters_already_grouped() {
    let document = page(r#"<div id="root"></div>"#);
    yew::Renderer::<Hero>::with_root(element(&document, "#root")).render();
    TimeoutFuture::new(0).await;

    assert_eq!(
        element(&document, "#channelsCount").text_content(),
        Some(format_stat(15_000))
    );
}
