//! Status bar - bottom row with document info and key hints

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme::Theme;

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    file_name: &str,
    device_count: usize,
) {
    let bg = Paragraph::new("").style(Style::default().bg(theme.selection_bg));
    f.render_widget(bg, area);

    let left = Line::from(vec![
        Span::raw(" "),
        Span::styled(file_name.to_string(), Style::default().fg(theme.dim)),
        Span::styled(
            format!(" │ {device_count} devices"),
            Style::default().fg(theme.dim),
        ),
    ]);
    f.render_widget(Paragraph::new(left), area);

    let right = Line::from(Span::styled(
        "m menu  s share  j/k scroll  q quit ",
        Style::default().fg(theme.dim),
    ));
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), area);
}
