use log::Level;

use crate::behavior::stats::StatConfig;
use crate::carousel::RailSpec;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose controller logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Language preference
pub const LANGUAGE_STORAGE_KEY: &str = "language";
pub const TRANSLATIONS_JSON: &str = include_str!("../assets/i18n/translations.json");

// Viewport reactions, all in CSS px of vertical scroll
pub const NAVBAR_SCROLLED_AFTER: f64 = 50.0;
pub const BACK_TO_TOP_AFTER: f64 = 500.0;
pub const PARALLAX_FACTOR: f64 = 0.5;
pub const ANCHOR_OFFSET: f64 = 80.0;

// Section reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_EXCLUDED_SECTION: &str = "pricing";

// Timers
pub const STAT_TICK_MS: u32 = 2_000;
pub const SELECTION_CLEAR_MS: u32 = 3_000;

pub const HERO_STATS: [StatConfig; 3] = [
    StatConfig::new("channelsCount", 15_000, 500),
    StatConfig::new("showsCount", 17_200, 300),
    StatConfig::new("moviesCount", 68_000, 2_000),
];

pub const RAILS: [RailSpec; 3] = [
    RailSpec::new(".platforms-swiper", 3_000),
    RailSpec::new(".movies-swiper", 4_000),
    RailSpec::new(".sports-swiper", 3_500),
];
pub const RAIL_SPACING: u32 = 20; // Matches the CSS gap between slides

// Markup contract
pub mod selectors {
    pub const NAVBAR: &str = ".navbar";
    pub const HERO_BG: &str = ".hero-bg";
    pub const BACK_TO_TOP: &str = "backToTop";
    pub const ANCHORS: &str = "a[href^=\"#\"]";
    pub const SECTIONS: &str = "section";
    pub const TRANSLATABLE: &str = "[data-i18n]";
    pub const TRANSLATION_ATTR: &str = "data-i18n";

    pub const MOBILE_TOGGLE: &str = "mobileToggle";
    pub const NAV_MENU: &str = "navMenu";
    pub const NAV_LINKS: &str = ".nav-links a, .cta-btn";

    pub const LANG_BUTTON: &str = "langDropdownBtn";
    pub const LANG_MENU: &str = "langDropdownMenu";
    pub const LANG_OPTIONS: &str = ".lang-option";
    pub const CURRENT_LANG: &str = ".current-lang";

    pub const HOVER_CARDS: &str = ".feature-card, .platform-card, .pricing-card, .sport-card";
    pub const RAIL: &str = ".swiper";
    pub const SELECTABLE_CARDS: &str = ".platform-content-card, .movie-card, .sport-event-card-fixed";
}

// Presentation classes toggled by the controllers
pub mod classes {
    pub const SCROLLED: &str = "scrolled";
    pub const VISIBLE: &str = "visible";
    pub const FADE_IN: &str = "fade-in";
    pub const ACTIVE: &str = "active";
    pub const MENU_OPEN: &str = "menu-open";
    pub const SELECTED: &str = "active-selection";
    pub const LOADED: &str = "loaded";
}
