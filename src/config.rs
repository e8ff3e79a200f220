use log::Level;

use crate::motion::scroll::Anchor;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty driver lifecycle logs while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Outbound shop links all live under this host.
pub const SHOP_BASE_URL: &str = "https://www.engelmann-schlepper.de";

// Feature cards
pub const TYPEWRITER_TICK_MS: u32 = 40;
pub const SHUFFLE_INTERVAL_MS: u32 = 3_000;
pub const TREE_COUNT_TARGET: u32 = 130;
pub const COUNT_UP_DURATION_MS: f64 = 2_500.0;

// Nav turns solid after this many pixels
pub const NAV_SCROLL_THRESHOLD: f64 = 100.0;
pub const ACTIVE_SECTION_ROOT_MARGIN: &str = "-50% 0px -50% 0px";
pub const TRACKED_SECTIONS: [&str; 3] = ["kollektion", "features", "philosophie"];

// Scroll triggers, written the way the designers spec them: "<element edge> <viewport edge>"
pub const STACK_START: Anchor = Anchor::new(0.0, 1.0); // top bottom
pub const STACK_END: Anchor = Anchor::new(0.0, 0.0); // top top
pub const PARALLAX_START: Anchor = Anchor::new(0.0, 1.0); // top bottom
pub const PARALLAX_END: Anchor = Anchor::new(1.0, 0.0); // bottom top
pub const REVEAL_AT: Anchor = Anchor::new(0.0, 0.85); // top 85%
