//! Browser-side controllers. Each one finds its elements, registers its
//! listeners and timers on `attach`, and releases all of them when dropped.

pub mod dom;
pub mod hover;
pub mod language;
pub mod menu;
pub mod reveal;
pub mod selection;
pub mod stats;
pub mod viewport;

use crate::carousel::Rails;
use crate::error::PageError;
use crate::i18n::Language;

use self::hover::HoverController;
use self::language::LanguageController;
use self::menu::MenuController;
use self::reveal::RevealController;
use self::selection::SelectionController;
use self::stats::StatsController;
use self::viewport::ViewportController;

/// Every behavior on the landing page, attached once after the first render.
pub struct LandingController {
    _language: LanguageController,
    reveal: RevealController,
    _viewport: ViewportController,
    _stats: StatsController,
    _hover: HoverController,
    _menu: MenuController,
    _selection: SelectionController,
    _rails: Rails,
}

impl LandingController {
    pub fn attach(lang: Language) -> Result<Self, PageError> {
        let window = dom::window()?;
        let document = dom::document()?;

        let language = LanguageController::attach(&document, lang);
        let reveal = RevealController::attach(&document);
        let viewport = ViewportController::attach(&window, &document);
        let stats = StatsController::attach(&window, &document);
        let hover = HoverController::attach(&document);
        let menu = MenuController::attach(&document);
        // Card listeners go on before the rails clone their slides
        let selection = SelectionController::attach(&document);
        let rails = Rails::start();

        log::info!(
            "landing page attached in {} ({} stat tickers running)",
            lang.code(),
            stats.running()
        );
        Ok(Self {
            _language: language,
            reveal,
            _viewport: viewport,
            _stats: stats,
            _hover: hover,
            _menu: menu,
            _selection: selection,
            _rails: rails,
        })
    }
}

impl Drop for LandingController {
    fn drop(&mut self) {
        log::debug!(
            "detaching landing page ({} sections revealed)",
            self.reveal.revealed_count()
        );
    }
}
