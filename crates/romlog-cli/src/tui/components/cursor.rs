//! Pointer trail overlay
//!
//! Draws the smoothed pointer marker and its follower dots on top of
//! everything else. Positions come from the trail chain in cell
//! coordinates; anything off-screen (including the initial off-surface
//! position) simply lands outside the area and is skipped.

use ratatui::{buffer::Buffer, layout::Rect};

use romlog_core::{TrailChain, TrailPoint};

use crate::tui::theme::Theme;

/// Glyph for the primary marker
const MARKER: char = '◆';

/// Glyph for follower dots
const DOT: char = '·';

/// Render the trail overlay into the full frame area
pub fn render_trail(buf: &mut Buffer, area: Rect, trail: &TrailChain, theme: &Theme) {
    if !trail.is_visible() {
        return;
    }

    // Followers first so the primary marker wins overlapping cells
    for (idx, point) in trail.points().iter().enumerate().rev() {
        let glyph = if idx == 0 { MARKER } else { DOT };
        let color = if idx == 0 { theme.trail } else { theme.dim };
        if let Some((x, y)) = cell_position(*point, area) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(glyph).set_fg(color);
            }
        }
    }
}

/// Round a trail point to a cell inside the area
fn cell_position(point: TrailPoint, area: Rect) -> Option<(u16, u16)> {
    if !point.x.is_finite() || !point.y.is_finite() {
        return None;
    }
    let x = point.x.round();
    let y = point.y.round();
    if x < f64::from(area.left())
        || x >= f64::from(area.right())
        || y < f64::from(area.top())
        || y >= f64::from(area.bottom())
    {
        return None;
    }
    Some((x as u16, y as u16))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_position_clips_to_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(cell_position(TrailPoint::new(10.4, 5.6), area), Some((10, 6)));
        assert_eq!(cell_position(TrailPoint::new(-100.0, -100.0), area), None);
        assert_eq!(cell_position(TrailPoint::new(80.0, 5.0), area), None);
        assert_eq!(cell_position(TrailPoint::new(f64::NAN, 5.0), area), None);
    }
}
