use yew::prelude::*;

use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::rail::{Rail, RailItem};

const FEATURES: [(&str, &str, &str, &str, &str); 3] = [
    ("📺", "features.quality.title", "Crystal clear 4K", "features.quality.text", "Sharp picture on every channel with adaptive streaming that keeps up with your connection."),
    ("📱", "features.devices.title", "Any device", "features.devices.text", "Smart TVs, phones, tablets and browsers. Pick up where you left off on any screen."),
    ("🛟", "features.support.title", "Support around the clock", "features.support.text", "Real people ready to help, any hour of the day, in your language."),
];

const PLATFORMS: &[RailItem] = &[
    ("rail.platforms.news", "News"),
    ("rail.platforms.kids", "Kids"),
    ("rail.platforms.docs", "Documentaries"),
    ("rail.platforms.music", "Music"),
    ("rail.platforms.lifestyle", "Lifestyle"),
    ("rail.platforms.international", "International"),
];

const MOVIES: &[RailItem] = &[
    ("rail.movies.action", "Action"),
    ("rail.movies.comedy", "Comedy"),
    ("rail.movies.drama", "Drama"),
    ("rail.movies.thriller", "Thriller"),
    ("rail.movies.animation", "Animation"),
    ("rail.movies.scifi", "Science Fiction"),
];

const SPORTS: &[RailItem] = &[
    ("rail.sports.football", "Football"),
    ("rail.sports.basketball", "Basketball"),
    ("rail.sports.tennis", "Tennis"),
    ("rail.sports.motorsport", "Motorsport"),
    ("rail.sports.boxing", "Boxing"),
    ("rail.sports.cricket", "Cricket"),
];

struct Plan {
    name: (&'static str, &'static str),
    price: &'static str,
    period: (&'static str, &'static str),
    featured: bool,
}

const PLANS: [Plan; 2] = [
    Plan {
        name: ("pricing.monthly", "Monthly"),
        price: "$12.99",
        period: ("pricing.per_month", "/ month"),
        featured: false,
    },
    Plan {
        name: ("pricing.yearly", "Yearly"),
        price: "$99.99",
        period: ("pricing.per_year", "/ year"),
        featured: true,
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <Navbar />
            <Hero />

            <section class="features" id="features">
                <div class="section-header">
                    <h2 class="section-title" data-i18n="features.title">{"Why viewers switch"}</h2>
                    <p class="section-subtitle" data-i18n="features.subtitle">{"Everything you watch, in one place."}</p>
                </div>
                <div class="features-grid">
                    { for FEATURES.iter().map(|(icon, title_key, title, text_key, text)| html! {
                        <div class="feature-card">
                            <div class="feature-icon">{*icon}</div>
                            <h3 data-i18n={*title_key}>{*title}</h3>
                            <p data-i18n={*text_key}>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <Rail
                id="channels"
                rail_class="platforms-swiper"
                card_class="platform-content-card"
                title={("platforms.title", "Channels for everyone")}
                subtitle={("platforms.subtitle", "Thousands of live channels from around the world.")}
                items={PLATFORMS}
            />
            <Rail
                id="movies"
                rail_class="movies-swiper"
                card_class="movie-card"
                title={("movies.title", "Blockbusters on demand")}
                subtitle={("movies.subtitle", "New releases every week, in every genre.")}
                items={MOVIES}
            />
            <Rail
                id="sports"
                rail_class="sports-swiper"
                card_class="sport-event-card-fixed"
                title={("sports.title", "Never miss a game")}
                subtitle={("sports.subtitle", "Every league, live and in HD.")}
                items={SPORTS}
            />

            <section class="pricing" id="pricing">
                <div class="section-header">
                    <h2 class="section-title" data-i18n="pricing.title">{"Simple pricing"}</h2>
                    <p class="section-subtitle" data-i18n="pricing.subtitle">{"One plan, every channel. Cancel anytime."}</p>
                </div>
                <div class="pricing-grid">
                    { for PLANS.iter().map(|plan| html! {
                        <div class={classes!("pricing-card", plan.featured.then(|| "featured"))}>
                            {
                                if plan.featured {
                                    html! { <span class="pricing-badge" data-i18n="pricing.popular">{"Best value"}</span> }
                                } else {
                                    html! {}
                                }
                            }
                            <h3 data-i18n={plan.name.0}>{plan.name.1}</h3>
                            <div class="price">
                                <span class="amount">{plan.price}</span>
                                <span class="period" data-i18n={plan.period.0}>{plan.period.1}</span>
                            </div>
                            <a href="#home" class="btn btn-primary" data-i18n="pricing.choose">{"Choose plan"}</a>
                        </div>
                    }) }
                </div>
            </section>

            <footer class="footer">
                <p class="footer-tagline" data-i18n="footer.tagline">{"Television, without the wires."}</p>
                <p class="footer-rights" data-i18n="footer.rights">{"© NovaTV. All rights reserved."}</p>
            </footer>

            <button class="back-to-top" id="backToTop" aria-label="Back to top">{"↑"}</button>
        </div>
    }
}
