//! Keyboard event handlers
//!
//! Sidebar-open keys are routed first so the panel behaves like a modal
//! list; everything else drives the document.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::tui::app::App;

impl App {
    /// Main keyboard dispatcher
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.sidebar.visible {
            self.handle_sidebar_key(code);
            return;
        }

        let now = Instant::now();
        let page = self.viewport_height().saturating_sub(2).max(1) as i64;
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('m') | KeyCode::Tab => self.sidebar.toggle(),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1, now),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1, now),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page, now),
            KeyCode::PageUp => self.scroll_by(-page, now),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_to(0, now),
            KeyCode::Char('G') | KeyCode::End => {
                self.scroll_to(self.layout.total_lines(), now);
            }
            KeyCode::Char('s') => self.share_card_in_view(),
            _ => {}
        }
    }

    /// Keys while the sidebar is open
    fn handle_sidebar_key(&mut self, code: KeyCode) {
        let device_count = self.changelog.devices.len();
        match code {
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Tab => self.sidebar.close(),
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.sidebar.select_next(device_count),
            KeyCode::Char('k') | KeyCode::Up => self.sidebar.select_prev(),
            KeyCode::Enter => {
                let selected = self.sidebar.selected;
                self.jump_to_section(selected, Instant::now());
                self.sidebar.close();
            }
            _ => {}
        }
    }
}
