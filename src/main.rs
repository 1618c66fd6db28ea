use log::{error, info};
use yew::prelude::*;

use novatv_landing::config;
use novatv_landing::controllers::language::apply_document_language;
use novatv_landing::i18n::preference::{BrowserStorage, LanguagePreference};
use novatv_landing::i18n::Language;
use novatv_landing::pages::landing::Landing;
use novatv_landing::LandingController;

#[derive(Properties, PartialEq)]
struct AppProps {
    language: Language,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let language = props.language;

    // Bind behaviors once the landing markup is in the document
    use_effect_with_deps(
        move |_| {
            let controller = match LandingController::attach(language) {
                Ok(controller) => Some(controller),
                Err(e) => {
                    error!("landing page behaviors not attached: {}", e);
                    None
                }
            };
            move || drop(controller)
        },
        (),
    );

    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let language = LanguagePreference::new(BrowserStorage::open()).get();
    // Direction first, before anything is drawn
    if let Err(e) = apply_document_language(language) {
        error!("could not set document language: {}", e);
    }

    info!("Starting landing page in {}", language.code());
    yew::Renderer::<App>::with_props(AppProps { language }).render();
}
