//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

use std::time::Duration;

/// Dynamic header configuration
pub mod header {
    use super::*;

    /// Delay between marking the title as changing and swapping the text
    pub const SETTLE_DELAY: Duration = Duration::from_millis(150);

    /// Debounce delay for scroll-driven section resolution
    pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(50);

    /// Debounce delay for resize-driven relayout and resolution
    pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);
}

/// Pointer trail configuration
pub mod trail {
    /// Fraction of the remaining gap closed per tick
    pub const LERP_FACTOR: f64 = 0.2;

    /// Default number of follower dots behind the primary marker
    pub const FOLLOWER_DOTS: usize = 3;

    /// Follower counts above this are clamped when loading preferences
    pub const MAX_FOLLOWERS: usize = 8;

    /// Starting coordinate, off-screen so the marker slides in instead of
    /// popping at the origin
    pub const OFFSCREEN: f64 = -100.0;

    /// Motion below this magnitude counts as settled
    pub const SETTLE_EPSILON: f64 = 1e-3;
}

/// UI configuration
pub mod ui {
    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".romlog";

    /// Preferences file name inside the config directory
    pub const PREFS_FILE_NAME: &str = "config.toml";
}
