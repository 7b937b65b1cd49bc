//! Input handlers for the TUI
//!
//! Keyboard and mouse routing plus the share/clipboard path. All handlers
//! extend `App` so state stays in one place.

pub mod keyboard;
pub mod mouse;
pub mod share;
