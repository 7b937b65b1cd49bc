//! Mouse event handling
//!
//! Pointer motion feeds the trail target (and nothing else - the smoothing
//! happens on the tick). Wheel and click events are routed by the screen
//! areas cached during the last draw.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::tui::app::App;

/// Lines moved per wheel notch
const WHEEL_STEP: i64 = 3;

impl App {
    /// Main mouse dispatcher
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if let Some(trail) = &mut self.trail {
                    trail.set_target(f64::from(mouse.column), f64::from(mouse.row));
                }
            }
            MouseEventKind::ScrollDown => self.handle_wheel(mouse.column, mouse.row, WHEEL_STEP),
            MouseEventKind::ScrollUp => self.handle_wheel(mouse.column, mouse.row, -WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_left_click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    /// Wheel scrolling, routed to the sidebar list when over it
    fn handle_wheel(&mut self, x: u16, y: u16, delta: i64) {
        let over_sidebar = self
            .areas
            .sidebar
            .is_some_and(|area| area.contains(Position::new(x, y)));

        if self.sidebar.visible && over_sidebar {
            if delta > 0 {
                self.sidebar.select_next(self.changelog.devices.len());
            } else {
                self.sidebar.select_prev();
            }
        } else {
            self.scroll_by(delta, Instant::now());
        }
    }

    /// Left click: sidebar entries first, then share glyphs in the document
    fn handle_left_click(&mut self, x: u16, y: u16) {
        if self.sidebar.visible {
            if let Some(area) = self.areas.sidebar {
                if area.contains(Position::new(x, y)) {
                    let device_count = self.changelog.devices.len();
                    if let Some(idx) = self.sidebar.entry_at(y, area, device_count) {
                        self.sidebar.selected = idx;
                        self.jump_to_section(idx, Instant::now());
                        self.sidebar.close();
                    }
                    return;
                }
            }
            // Click outside the open panel closes it
            self.sidebar.close();
            return;
        }

        let doc = self.areas.document;
        if !doc.contains(Position::new(x, y)) {
            return;
        }
        let doc_line = self.scroll_offset + (y - doc.y) as usize;
        let doc_col = x - doc.x;
        if let Some(hit) = self.layout.share_hit_at(doc_line, doc_col) {
            self.share_card(hit.device, hit.rom);
        }
    }
}
