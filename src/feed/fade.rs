//! Scroll-position arithmetic for the feed's fade effects
//!
//! All distances are CSS pixels relative to the viewport.

/// Height of the sticky tab bar
pub const TAB_HEIGHT: f64 = 80.0;

/// Distance above the tab bar at which the header fade starts
pub const FADE_OFFSET: f64 = 300.0;

/// Scroll distance over which the header fade completes
pub const SCROLL_DISTANCE: f64 = 150.0;

/// Height of the band at the bottom of the viewport where cards fade in
pub const CARD_FADE_BAND: f64 = 200.0;

/// Right-arrow slack when deciding whether the tab strip can scroll
const ARROW_SLACK: f64 = 10.0;

/// Header fade progress in `[0, 1]` given the tab bar's top edge
pub fn scroll_progress(tabs_top: f64) -> f64 {
    let distance_from_top = tabs_top - TAB_HEIGHT;
    if distance_from_top > FADE_OFFSET {
        0.0
    } else {
        ((FADE_OFFSET - distance_from_top) / SCROLL_DISTANCE).clamp(0.0, 1.0)
    }
}

/// Opacity of a card entering from the bottom of the viewport
pub fn card_opacity(card_top: f64, viewport_height: f64) -> f64 {
    if card_top > viewport_height - CARD_FADE_BAND {
        ((viewport_height - card_top) / CARD_FADE_BAND).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Whether the tab bar is stuck to the top of the viewport
pub fn is_sticky(tabs_top: f64) -> bool {
    tabs_top == 0.0
}

/// Visibility of the tab strip's scroll arrows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabArrows {
    pub left: bool,
    pub right: bool,
}

/// Which scroll arrows to show for a horizontally scrolling tab strip
pub fn tab_arrows(scroll_left: f64, scroll_width: f64, client_width: f64) -> TabArrows {
    TabArrows {
        left: scroll_left > 0.0,
        right: scroll_left < scroll_width - client_width - ARROW_SLACK,
    }
}
