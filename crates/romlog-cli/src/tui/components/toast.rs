//! Toast notification
//!
//! A single transient notification in the top-right corner, used for
//! share/copy feedback. A new toast replaces the current one outright; the
//! lifetime bar along the bottom border drains as it expires.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::theme::Theme;

/// How long a toast stays up
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Toast height including borders
const TOAST_HEIGHT: u16 = 3;

/// Kind of feedback being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn color(self, theme: &Theme) -> Color {
        match self {
            ToastKind::Success => theme.success,
            ToastKind::Error => theme.error,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
        }
    }
}

/// One notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    created_at: Instant,
}

impl Toast {
    /// Positive confirmation (copied, saved)
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    /// Failure feedback
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TOAST_DURATION
    }

    /// Remaining lifetime, 1.0 down to 0.0
    fn remaining(&self) -> f32 {
        let elapsed = self.created_at.elapsed().as_secs_f32();
        (1.0 - elapsed / TOAST_DURATION.as_secs_f32()).max(0.0)
    }
}

/// Holds the toast currently on screen, if any
#[derive(Debug, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
}

impl ToastSlot {
    /// Show a toast, replacing whatever is up
    pub fn show(&mut self, toast: Toast) {
        self.current = Some(toast);
    }

    /// Drop the toast once expired; returns true if it was removed
    pub fn tick(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Toast::is_expired) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// The toast to draw, if one is active
    pub fn active(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

/// Draw the active toast in the top-right corner of `area`
pub fn render_toast(buf: &mut Buffer, area: Rect, slot: &ToastSlot, theme: &Theme) {
    let Some(toast) = slot.active() else {
        return;
    };

    let inner_width = (toast.message.width() + 4) as u16;
    let width = inner_width.min(area.width.saturating_sub(2)).max(8);
    if area.height < TOAST_HEIGHT + 4 {
        return;
    }
    let x = area.x + area.width.saturating_sub(width + 1);
    // Just below the fixed header
    let y = area.y + 3;
    let toast_area = Rect::new(x, y, width, TOAST_HEIGHT);

    let color = toast.kind.color(theme);
    let border_style = Style::default().fg(color);

    // Clear the box
    for cy in toast_area.top()..toast_area.bottom() {
        for cx in toast_area.left()..toast_area.right() {
            if let Some(cell) = buf.cell_mut((cx, cy)) {
                cell.set_char(' ');
                cell.set_bg(theme.bg);
            }
        }
    }

    // Borders
    let top = toast_area.top();
    let bottom = toast_area.bottom() - 1;
    for (cx, ch) in [(toast_area.left(), '╭'), (toast_area.right() - 1, '╮')] {
        if let Some(cell) = buf.cell_mut((cx, top)) {
            cell.set_char(ch).set_style(border_style);
        }
    }
    for (cx, ch) in [(toast_area.left(), '╰'), (toast_area.right() - 1, '╯')] {
        if let Some(cell) = buf.cell_mut((cx, bottom)) {
            cell.set_char(ch).set_style(border_style);
        }
    }
    for cx in toast_area.left() + 1..toast_area.right() - 1 {
        if let Some(cell) = buf.cell_mut((cx, top)) {
            cell.set_char('─').set_style(border_style);
        }
    }
    for cy in top + 1..bottom {
        for cx in [toast_area.left(), toast_area.right() - 1] {
            if let Some(cell) = buf.cell_mut((cx, cy)) {
                cell.set_char('│').set_style(border_style);
            }
        }
    }

    // Bottom border doubles as the lifetime bar
    let track = toast_area.width.saturating_sub(2);
    let filled = (track as f32 * toast.remaining()) as u16;
    for (i, cx) in (toast_area.left() + 1..toast_area.right() - 1).enumerate() {
        if let Some(cell) = buf.cell_mut((cx, bottom)) {
            if (i as u16) < filled {
                cell.set_char('━').set_fg(color);
            } else {
                cell.set_char('─').set_fg(theme.dim);
            }
        }
    }

    // Icon and message on the content row
    let content_y = top + 1;
    let mut cx = toast_area.left() + 2;
    if let Some(cell) = buf.cell_mut((cx, content_y)) {
        cell.set_char(toast.kind.icon().chars().next().unwrap_or('*'))
            .set_fg(color);
    }
    cx += 2;
    for ch in toast.message.chars() {
        if cx >= toast_area.right() - 1 {
            break;
        }
        if let Some(cell) = buf.cell_mut((cx, content_y)) {
            cell.set_char(ch).set_fg(theme.text);
        }
        cx += unicode_width::UnicodeWidthChar::width(ch).unwrap_or(1) as u16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_toast_replaces_current() {
        let mut slot = ToastSlot::default();
        slot.show(Toast::success("copied"));
        slot.show(Toast::error("failed"));

        assert_eq!(slot.active().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn test_fresh_toast_survives_tick() {
        let mut slot = ToastSlot::default();
        slot.show(Toast::success("copied"));

        assert!(!slot.tick());
        assert!(slot.active().is_some());
    }

    #[test]
    fn test_expired_toast_is_removed() {
        let mut slot = ToastSlot::default();
        let mut toast = Toast::success("copied");
        toast.created_at = Instant::now() - TOAST_DURATION;
        slot.show(toast);

        assert!(slot.tick());
        assert!(slot.active().is_none());
    }
}
