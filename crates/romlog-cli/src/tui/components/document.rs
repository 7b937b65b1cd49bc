//! Document view
//!
//! Renders the visible slice of the laid-out changelog plus a scrollbar.
//! Lines come straight from the layout cache, so what the mouse handlers
//! hit-test against is exactly what is drawn.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Paragraph, Widget},
};

use crate::tui::layout::DocumentLayout;
use crate::tui::theme::Theme;

/// Render the document slice starting at `scroll` into `area`
pub fn render_document(
    buf: &mut Buffer,
    area: Rect,
    layout: &DocumentLayout,
    scroll: usize,
    theme: &Theme,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let background = Paragraph::new("").style(Style::default().bg(theme.bg));
    background.render(area, buf);

    if layout.total_lines() == 0 {
        let empty = Paragraph::new("No device sections in this changelog.")
            .style(Style::default().fg(theme.dim).bg(theme.bg));
        empty.render(area, buf);
        return;
    }

    let start = scroll.min(layout.total_lines().saturating_sub(1));
    let end = (start + area.height as usize).min(layout.total_lines());
    let visible = Text::from(layout.lines[start..end].to_vec());
    Paragraph::new(visible)
        .style(Style::default().bg(theme.bg))
        .render(area, buf);

    render_scrollbar(
        buf,
        area,
        scroll,
        layout.total_lines(),
        area.height as usize,
        theme,
    );
}

/// Draw a minimal scrollbar along the right edge when the document
/// overflows the viewport
fn render_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: usize,
    total: usize,
    visible: usize,
    theme: &Theme,
) {
    if total <= visible || area.width == 0 {
        return;
    }

    let x = area.right() - 1;
    let track = area.height as usize;
    let thumb_len = ((visible * track) / total).max(1);
    let max_offset = total - visible;
    let thumb_top = (offset.min(max_offset) * track.saturating_sub(thumb_len)) / max_offset.max(1);

    for row in 0..track {
        let y = area.y + row as u16;
        let (ch, color) = if row >= thumb_top && row < thumb_top + thumb_len {
            ('┃', theme.accent)
        } else {
            ('│', theme.border)
        };
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(ch).set_fg(color);
        }
    }
}
