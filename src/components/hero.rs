use yew::prelude::*;

use crate::config::HERO_STATS;
use crate::controllers::stats::format_stat;

// Labels for HERO_STATS, in the same order
const STAT_LABELS: [(&str, &str); 3] = [
    ("stats.channels", "Live Channels"),
    ("stats.shows", "TV Shows"),
    ("stats.movies", "Movies"),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero" id="home">
            <div class="hero-bg"></div>
            <div class="hero-content">
                <span class="hero-badge" data-i18n="hero.badge">{"Now streaming in 4K"}</span>
                <h1 class="hero-title" data-i18n="hero.title">{"Every channel. Every match. One subscription."}</h1>
                <p class="hero-subtitle" data-i18n="hero.subtitle">
                    {"Live TV, the latest movies and every big game on all your devices, without the cable box."}
                </p>
                <div class="hero-actions">
                    <a href="#pricing" class="btn btn-primary" data-i18n="hero.cta_primary">{"Start watching"}</a>
                    <a href="#features" class="btn btn-secondary" data-i18n="hero.cta_secondary">{"Learn more"}</a>
                </div>
                <div class="hero-stats">
                    { for HERO_STATS.iter().zip(STAT_LABELS.iter()).map(|(stat, (key, label))| html! {
                        <div class="stat">
                            <span class="stat-number" id={stat.element_id}>{format_stat(stat.min)}</span>
                            <span class="stat-label" data-i18n={*key}>{*label}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
