use yew::prelude::*;

/// One card: translation key and its English text.
pub type RailItem = (&'static str, &'static str);

#[derive(Properties, PartialEq)]
pub struct RailProps {
    /// Section id the navbar links point at.
    pub id: &'static str,
    /// Per-rail class the carousel is started on, e.g. `movies-swiper`.
    pub rail_class: &'static str,
    /// Card class the selection highlight tracks.
    pub card_class: &'static str,
    pub title: RailItem,
    pub subtitle: RailItem,
    pub items: &'static [RailItem],
}

#[function_component(Rail)]
pub fn rail(props: &RailProps) -> Html {
    let (title_key, title) = props.title;
    let (subtitle_key, subtitle) = props.subtitle;

    html! {
        <section class="rail-section" id={props.id}>
            <div class="section-header">
                <h2 class="section-title" data-i18n={title_key}>{title}</h2>
                <p class="section-subtitle" data-i18n={subtitle_key}>{subtitle}</p>
            </div>
            <div class={classes!("swiper", props.rail_class)}>
                <div class="swiper-wrapper">
                    { for props.items.iter().map(|(key, text)| html! {
                        <div class="swiper-slide">
                            <div class={props.card_class}>
                                <span class="card-title" data-i18n={*key}>{*text}</span>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
