//! Continuous-scroll rails backed by the Swiper library loaded in
//! `index.html`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::{RAILS, RAIL_SPACING};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Swiper)]
    type SwiperInstance;

    #[wasm_bindgen(constructor, js_class = "Swiper", catch)]
    fn new(selector: &str, options: &JsValue) -> Result<SwiperInstance, JsValue>;

    #[wasm_bindgen(method, structural)]
    fn destroy(this: &SwiperInstance, delete_instance: bool, clean_styles: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RailSpec {
    pub selector: &'static str,
    pub speed: u32,
}

impl RailSpec {
    pub const fn new(selector: &'static str, speed: u32) -> Self {
        Self { selector, speed }
    }
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlidesPerView {
    Auto,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Autoplay {
    pub delay: u32,
    pub disable_on_interaction: bool,
    pub pause_on_mouse_enter: bool,
}

/// Options object handed to the `Swiper` constructor.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RailOptions {
    pub r#loop: bool,
    pub slides_per_view: SlidesPerView,
    pub space_between: u32,
    pub speed: u32,
    pub autoplay: Autoplay,
    pub free_mode: bool,
    pub free_mode_momentum: bool,
    pub grab_cursor: bool,
    pub allow_touch_move: bool,
}

impl RailOptions {
    /// Endless linear drift: zero autoplay delay, paused on hover, free drag
    /// without momentum.
    pub fn continuous(speed: u32) -> Self {
        Self {
            r#loop: true,
            slides_per_view: SlidesPerView::Auto,
            space_between: RAIL_SPACING,
            speed,
            autoplay: Autoplay {
                delay: 0,
                disable_on_interaction: false,
                pause_on_mouse_enter: true,
            },
            free_mode: true,
            free_mode_momentum: false,
            grab_cursor: true,
            allow_touch_move: true,
        }
    }
}

/// The three running rails. Dropping destroys them.
pub struct Rails {
    instances: Vec<SwiperInstance>,
}

impl Rails {
    pub fn start() -> Self {
        let instances = RAILS.iter().filter_map(start_rail).collect::<Vec<_>>();
        log::info!("started {} of {} carousel rails", instances.len(), RAILS.len());
        Self { instances }
    }
}

fn start_rail(spec: &RailSpec) -> Option<SwiperInstance> {
    let options = match serde_wasm_bindgen::to_value(&RailOptions::continuous(spec.speed)) {
        Ok(options) => options,
        Err(e) => {
            log::warn!("could not encode options for {}: {}", spec.selector, e);
            return None;
        }
    };
    match SwiperInstance::new(spec.selector, &options) {
        Ok(instance) => Some(instance),
        Err(e) => {
            log::warn!("carousel {} not started: {:?}", spec.selector, e);
            None
        }
    }
}

impl Drop for Rails {
    fn drop(&mut self) {
        for instance in self.instances.drain(..) {
            instance.destroy(true, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn options_use_swiper_names() {
        let value = serde_json::to_value(RailOptions::continuous(3_000)).unwrap();
        assert_eq!(
            value,
            json!({
                "loop": true,
                "slidesPerView": "auto",
                "spaceBetween": 20,
                "speed": 3000,
                "autoplay": {
                    "delay": 0,
                    "disableOnInteraction": false,
                    "pauseOnMouseEnter": true
                },
                "freeMode": true,
                "freeModeMomentum": false,
                "grabCursor": true,
                "allowTouchMove": true
            })
        );
    }

    #[test]
    fn each_rail_has_its_own_speed() {
        let speeds: Vec<(&str, u32)> = RAILS
            .iter()
            .map(|rail| (rail.selector, RailOptions::continuous(rail.speed).speed))
            .collect();
        assert_eq!(
            speeds,
            vec![
                (".platforms-swiper", 3_000),
                (".movies-swiper", 4_000),
                (".sports-swiper", 3_500),
            ]
        );
    }
}
