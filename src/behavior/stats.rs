//! Bounded random walk behind the hero counters.

/// Draws are mapped onto `-10..=19`.
const DELTA_SPAN: f64 = 30.0;
const DELTA_SHIFT: i64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatConfig {
    pub element_id: &'static str,
    pub min: i64,
    pub range: i64,
}

impl StatConfig {
    pub const fn new(element_id: &'static str, min: i64, range: i64) -> Self {
        Self { element_id, min, range }
    }

    pub fn max(&self) -> i64 {
        self.min + self.range
    }
}

/// Maps a uniform draw in `[0, 1)` onto the step size.
pub fn delta_from_draw(draw: f64) -> i64 {
    // Out-of-range draws are pinned so a bad source can't escape the span
    let draw = if draw.is_finite() { draw.clamp(0.0, 0.999_999_999) } else { 0.0 };
    (draw * DELTA_SPAN).floor() as i64 - DELTA_SHIFT
}

/// One tick: apply the drawn delta and clamp to `[min, min + range]`.
pub fn step(value: i64, config: &StatConfig, draw: f64) -> i64 {
    (value + delta_from_draw(draw)).clamp(config.min, config.max())
}

#[derive(Clone, Debug)]
pub struct StatTicker {
    config: StatConfig,
    value: i64,
}

impl StatTicker {
    pub fn new(config: StatConfig) -> Self {
        Self { config, value: config.min }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn tick(&mut self, draw: f64) -> i64 {
        self.value = step(self.value, &self.config, draw);
        self.value
    }
}
