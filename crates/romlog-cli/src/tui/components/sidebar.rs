//! Navigation sidebar
//!
//! A collapsible panel listing the device sections. Opening and closing
//! animate the width a few columns per tick; selecting an entry jumps the
//! document to that section and closes the panel again.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

use romlog_core::Changelog;

use crate::tui::theme::Theme;

/// Sidebar width when fully expanded
pub const SIDEBAR_WIDTH: u16 = 30;

/// Sidebar state with open/close animation
#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    /// Whether the sidebar is logically open
    pub visible: bool,
    /// Current animated width (0 to SIDEBAR_WIDTH)
    current_width: u16,
    /// Width being animated toward (0 or SIDEBAR_WIDTH)
    target_width: u16,
    /// Highlighted entry
    pub selected: usize,
}

impl SidebarState {
    /// Toggle open/closed
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        self.target_width = if self.visible { SIDEBAR_WIDTH } else { 0 };
    }

    /// Close if open (Escape, click outside, link followed)
    pub fn close(&mut self) {
        if self.visible {
            self.toggle();
        }
    }

    /// Step the width toward its target; returns true while animating
    pub fn tick(&mut self) -> bool {
        if self.current_width == self.target_width {
            return false;
        }
        // Larger steps while far from the target, so opening feels snappy
        // and the last columns ease in
        let remaining = self
            .target_width
            .abs_diff(self.current_width);
        let step = (remaining / 4).clamp(2, 6);

        if self.current_width < self.target_width {
            self.current_width = (self.current_width + step).min(self.target_width);
        } else {
            self.current_width = self.current_width.saturating_sub(step);
        }
        self.current_width != self.target_width
    }

    /// Current width for layout
    pub fn width(&self) -> u16 {
        self.current_width
    }

    /// Move the highlight down
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Move the highlight up
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Map a click row inside the panel to an entry index
    pub fn entry_at(&self, click_y: u16, area: Rect, len: usize) -> Option<usize> {
        // Entries start below the top border, the heading, and its gap row
        let first_row = area.y + 3;
        if click_y < first_row {
            return None;
        }
        let idx = (click_y - first_row) as usize;
        (idx < len).then_some(idx)
    }
}

/// Render the sidebar panel over the left side of `area`
pub fn render_sidebar(
    buf: &mut Buffer,
    area: Rect,
    changelog: &Changelog,
    theme: &Theme,
    state: &SidebarState,
) {
    if area.width < 6 || area.height < 4 {
        return;
    }

    let block = Block::default()
        .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg));
    let inner = block.inner(area);
    block.render(area, buf);

    // Clear the panel interior (it overlays the document)
    for y in inner.top()..inner.bottom() {
        for x in inner.left()..inner.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ');
                cell.set_bg(theme.bg);
            }
        }
    }

    let heading_style = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    draw_text(buf, inner.x + 1, inner.y, inner.right(), "Devices", heading_style);

    for (idx, device) in changelog.devices.iter().enumerate() {
        let y = inner.y + 2 + idx as u16;
        if y >= inner.bottom() {
            break;
        }
        let selected = idx == state.selected;
        let style = if selected {
            Style::default()
                .fg(theme.title)
                .bg(theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        if selected {
            for x in inner.left()..inner.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(theme.selection_bg);
                }
            }
        }
        let marker = if selected { "▸ " } else { "  " };
        let entry = format!("{marker}{} ({})", device.name, device.roms.len());
        draw_text(buf, inner.x + 1, y, inner.right(), &entry, style);
    }
}

/// Write a clipped single line of text into the buffer
fn draw_text(buf: &mut Buffer, x: u16, y: u16, max_x: u16, text: &str, style: Style) {
    let mut cx = x;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(1) as u16;
        if cx + w > max_x {
            break;
        }
        if let Some(cell) = buf.cell_mut((cx, y)) {
            cell.set_char(ch).set_style(style);
        }
        cx += w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_animates_open_then_closed() {
        let mut state = SidebarState::default();
        state.toggle();
        assert!(state.visible);

        let mut ticks = 0;
        while state.tick() {
            ticks += 1;
            assert!(ticks < 64, "open animation must settle");
        }
        assert_eq!(state.width(), SIDEBAR_WIDTH);

        state.toggle();
        while state.tick() {}
        assert_eq!(state.width(), 0);
        assert!(!state.visible);
    }

    #[test]
    fn test_tick_is_idle_when_settled() {
        let mut state = SidebarState::default();
        assert!(!state.tick());
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = SidebarState::default();
        state.select_prev();
        assert_eq!(state.selected, 0);

        state.select_next(2);
        state.select_next(2);
        state.select_next(2);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_entry_at_maps_rows_below_heading() {
        let state = SidebarState::default();
        let area = Rect::new(0, 3, 30, 10);

        assert_eq!(state.entry_at(4, area, 5), None);
        assert_eq!(state.entry_at(6, area, 5), Some(0));
        assert_eq!(state.entry_at(8, area, 5), Some(2));
        assert_eq!(state.entry_at(12, area, 5), None);
    }
}
