//! Romlog Core - document model and interaction logic for the romlog TUI
//!
//! This crate provides everything the terminal frontend hosts:
//! - Changelog document model and TOML loader
//! - Active-section resolution for the scroll-driven header title
//! - Pointer trail interpolation
//! - Trailing debounce and header transition state
//! - User preferences

pub mod changelog;
pub mod constants;
pub mod debounce;
pub mod header;
pub mod paths;
pub mod prefs;
pub mod section;
pub mod share;
pub mod trail;

// Re-exports for convenience
pub use changelog::{Changelog, ChangelogError, Device, RomEntry, SiteInfo};
pub use debounce::Debounce;
pub use header::HeaderTitle;
pub use prefs::Preferences;
pub use section::{Section, SectionResolver};
pub use trail::{TrailChain, TrailPoint};
