//! UI components for the romlog TUI
//!
//! Rendering pieces: header bar, document view, nav sidebar, toast, status
//! bar, and the pointer trail overlay.

pub mod cursor;
pub mod document;
pub mod header_bar;
pub mod sidebar;
pub mod status_bar;
pub mod toast;

pub use cursor::render_trail;
pub use document::render_document;
pub use header_bar::{render_header_bar, HEADER_ROWS};
pub use sidebar::{render_sidebar, SidebarState};
pub use status_bar::render_status_bar;
pub use toast::{render_toast, Toast, ToastSlot};
