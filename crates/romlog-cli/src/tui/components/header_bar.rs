//! Fixed header bar
//!
//! Shows the active section title (or the site title when nothing is
//! active). While a title swap is pending the current text is dimmed, the
//! terminal's stand-in for the frontend fade.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme::Theme;

/// Rows occupied by the fixed header (border included)
pub const HEADER_ROWS: u16 = 3;

/// Render the header bar across the top of the screen
pub fn render_header_bar(f: &mut Frame, area: Rect, title: &str, changing: bool, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg));

    let title_style = if changing {
        Style::default().fg(theme.dim).add_modifier(Modifier::ITALIC)
    } else {
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD)
    };

    // Blank line above the title keeps it vertically centered in the bar
    let text = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(title.to_string(), title_style)),
    ])
    .alignment(Alignment::Center)
    .block(block);
    f.render_widget(text, area);

    // Menu hint in the top-left corner
    let hint = Paragraph::new(Line::from(Span::styled(
        " ☰ m",
        Style::default().fg(theme.dim),
    )));
    f.render_widget(hint, Rect::new(area.x, area.y, 5.min(area.width), 1));
}
