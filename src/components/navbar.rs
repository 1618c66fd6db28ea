use yew::prelude::*;

use crate::i18n::Language;

const NAV_LINKS: [(&str, &str, &str); 5] = [
    ("#features", "nav.features", "Features"),
    ("#channels", "nav.channels", "Channels"),
    ("#movies", "nav.movies", "Movies"),
    ("#sports", "nav.sports", "Sports"),
    ("#pricing", "nav.pricing", "Pricing"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="#home" class="logo">
                    {"Nova"}<span class="logo-accent">{"TV"}</span>
                </a>

                <div class="nav-menu" id="navMenu">
                    <ul class="nav-links">
                        { for NAV_LINKS.iter().map(|(href, key, text)| html! {
                            <li><a href={*href} data-i18n={*key}>{*text}</a></li>
                        }) }
                    </ul>
                    <a href="#pricing" class="cta-btn" data-i18n="nav.cta">{"Get Started"}</a>
                </div>

                <div class="lang-dropdown">
                    <button class="lang-btn" id="langDropdownBtn" aria-label="Language">
                        <span class="current-lang">{"EN"}</span>
                        <span class="lang-caret">{"▾"}</span>
                    </button>
                    <div class="lang-menu" id="langDropdownMenu">
                        { for Language::ALL.iter().map(|lang| html! {
                            <button class="lang-option" data-lang={lang.code()}>{lang.label()}</button>
                        }) }
                    </div>
                </div>

                <button class="mobile-toggle" id="mobileToggle" aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}
