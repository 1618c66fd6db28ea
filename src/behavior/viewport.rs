use crate::config::{ANCHOR_OFFSET, BACK_TO_TOP_AFTER, NAVBAR_SCROLLED_AFTER, PARALLAX_FACTOR};

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_AFTER
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_AFTER
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y))
}

/// Where to scroll so an anchor target clears the fixed navbar.
pub fn anchor_scroll_top(target_offset_top: f64) -> f64 {
    target_offset_top - ANCHOR_OFFSET
}

/// Pointer position relative to a card's top-left corner.
pub fn pointer_offset(client: (f64, f64), rect_origin: (f64, f64)) -> (f64, f64) {
    (client.0 - rect_origin.0, client.1 - rect_origin.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_threshold_crosses_both_ways() {
        assert!(!navbar_scrolled(0.0));
        assert!(navbar_scrolled(51.0));
        assert!(!navbar_scrolled(49.0));
        assert!(!navbar_scrolled(50.0));
    }

    #[test]
    fn back_to_top_appears_after_500() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(500.0));
        assert!(back_to_top_visible(500.5));
    }

    #[test]
    fn parallax_is_half_the_scroll() {
        assert_eq!(parallax_offset(200.0), 100.0);
        assert_eq!(parallax_transform(200.0), "translateY(100px)");
        assert_eq!(parallax_transform(301.0), "translateY(150.5px)");
        assert_eq!(parallax_transform(0.0), "translateY(0px)");
    }

    #[test]
    fn anchors_leave_room_for_navbar() {
        assert_eq!(anchor_scroll_top(1200.0), 1120.0);
        assert_eq!(anchor_scroll_top(40.0), -40.0);
    }

    #[test]
    fn pointer_offset_is_relative_to_rect() {
        assert_eq!(pointer_offset((130.0, 75.0), (100.0, 50.0)), (30.0, 25.0));
    }
}
