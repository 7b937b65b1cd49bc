//! Main TUI application
//!
//! Application state and the event loop. Input handling lives in the
//! handlers/ module; this file owns the tick fan-out: debounced section
//! resolution, header settling, trail interpolation, toast expiry, and
//! sidebar animation all advance here, and nowhere else.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
        EventStream, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tracing::{info, warn};

use romlog_core::constants::header as header_consts;
use romlog_core::{Changelog, Debounce, HeaderTitle, Preferences, SectionResolver, TrailChain};

use crate::tui::components::{
    render_document, render_header_bar, render_sidebar, render_status_bar, render_toast,
    render_trail, SidebarState, ToastSlot, HEADER_ROWS,
};
use crate::tui::layout::DocumentLayout;
use crate::tui::theme::Theme;

/// Poll timeout between ticks (roughly 60fps)
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Cached screen areas for hit testing
#[derive(Debug, Default, Clone, Copy)]
pub struct ScreenAreas {
    pub document: Rect,
    pub sidebar: Option<Rect>,
}

/// Application state
pub struct App {
    pub theme: Theme,
    pub changelog: Changelog,
    pub file_name: String,

    pub layout: DocumentLayout,
    pub scroll_offset: usize,

    // Scroll-driven header title. The resolver is None when the document
    // has no sections; the feature is then disabled for the whole session.
    pub resolver: Option<SectionResolver>,
    pub header: HeaderTitle,
    pub scroll_debounce: Debounce,
    pub resize_debounce: Debounce,

    // Pointer trail (None when disabled in preferences)
    pub trail: Option<TrailChain>,

    pub sidebar: SidebarState,
    pub toast: ToastSlot,
    pub areas: ScreenAreas,

    pub should_quit: bool,
    // Dirty-tracking: skip drawing frames where nothing changed
    needs_redraw: bool,
}

impl App {
    /// Create the app around a loaded changelog
    pub fn new(changelog: Changelog, prefs: Preferences, theme: Theme, file_name: String) -> Self {
        // Nominal width; the real one is applied before the first draw
        let layout = DocumentLayout::build(&changelog, 80, &theme);

        let resolver = if changelog.devices.is_empty() {
            warn!("no device sections found, dynamic header title disabled");
            None
        } else {
            Some(SectionResolver::new(
                layout.sections(&changelog),
                changelog.site.title.clone(),
            ))
        };

        let trail = if prefs.trail.enabled {
            Some(TrailChain::new(prefs.trail.followers, prefs.trail.factor))
        } else {
            info!("pointer trail disabled in preferences");
            None
        };

        let header = HeaderTitle::new(changelog.site.title.clone(), header_consts::SETTLE_DELAY);

        Self {
            theme,
            changelog,
            file_name,
            layout,
            scroll_offset: 0,
            resolver,
            header,
            scroll_debounce: Debounce::new(header_consts::SCROLL_DEBOUNCE),
            resize_debounce: Debounce::new(header_consts::RESIZE_DEBOUNCE),
            trail,
            sidebar: SidebarState::default(),
            toast: ToastSlot::default(),
            areas: ScreenAreas::default(),
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Rebuild the layout when the width changed and refresh the resolver's
    /// section spans from it
    pub fn ensure_layout(&mut self, width: u16) {
        if self.layout.width() == width {
            return;
        }
        self.layout = DocumentLayout::build(&self.changelog, width, &self.theme);
        let sections = self.layout.sections(&self.changelog);
        if let Some(resolver) = &mut self.resolver {
            resolver.set_sections(sections);
        }
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Resolve the active section and hand the label to the header
    pub fn resolve_sections(&mut self, now: Instant) {
        let Some(resolver) = &self.resolver else {
            return;
        };
        let label = resolver.resolve(self.scroll_offset as f64, f64::from(HEADER_ROWS));
        self.header.request(label, now);
    }

    /// Viewport height of the document area in lines
    pub fn viewport_height(&self) -> usize {
        self.areas.document.height as usize
    }

    fn max_scroll(&self) -> usize {
        self.layout
            .total_lines()
            .saturating_sub(self.viewport_height())
    }

    /// Scroll relatively and schedule a debounced resolution
    pub fn scroll_by(&mut self, delta: i64, now: Instant) {
        let current = self.scroll_offset as i64;
        let next = (current + delta).clamp(0, self.max_scroll() as i64) as usize;
        if next != self.scroll_offset {
            self.scroll_offset = next;
            self.scroll_debounce.trigger(now);
            self.needs_redraw = true;
        }
    }

    /// Jump straight to a line with an immediate resolution (used when a
    /// sidebar link is followed)
    pub fn scroll_to(&mut self, line: usize, now: Instant) {
        self.scroll_offset = line.min(self.max_scroll());
        self.resolve_sections(now);
        self.needs_redraw = true;
    }

    /// Scroll to a device section's header
    pub fn jump_to_section(&mut self, device_idx: usize, now: Instant) {
        if let Some(anchor) = self
            .layout
            .anchors
            .iter()
            .copied()
            .find(|anchor| anchor.device == device_idx)
        {
            self.scroll_to(anchor.top, now);
        }
    }

    /// Queue a toast for the next frames
    pub fn show_toast(&mut self, toast: crate::tui::components::Toast) {
        self.toast.show(toast);
        self.needs_redraw = true;
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            // Focus reporting doubles as pointer enter/leave for the trail
            EnableFocusChange
        )?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        // Async event stream so ticks keep flowing while no input arrives
        let mut event_stream = EventStream::new();

        // Lay out for the real width and resolve once immediately so the
        // header is correct before any scroll happens
        let size = terminal.size()?;
        self.ensure_layout(size.width);
        self.resolve_sections(Instant::now());
        self.needs_redraw = true;

        loop {
            let now = Instant::now();

            // Debounced reactions
            if self.scroll_debounce.fire(now) {
                self.resolve_sections(now);
            }
            if self.resize_debounce.fire(now) {
                let size = terminal.size()?;
                self.ensure_layout(size.width);
                self.resolve_sections(now);
                self.needs_redraw = true;
            }

            // Animations and expiries
            if self.header.poll(now) {
                self.needs_redraw = true;
            }
            if let Some(trail) = &mut self.trail {
                if trail.tick() {
                    self.needs_redraw = true;
                }
            }
            if self.toast.tick() {
                self.needs_redraw = true;
            }
            if self.sidebar.tick() {
                self.needs_redraw = true;
            }

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased; // Prefer events over the tick when both are ready

                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            Event::Key(key) => {
                                if key.kind == KeyEventKind::Press
                                    || key.kind == KeyEventKind::Repeat
                                {
                                    self.handle_key(key.code, key.modifiers);
                                    self.needs_redraw = true;
                                }
                            }
                            Event::Mouse(mouse) => {
                                self.handle_mouse(mouse);
                                self.needs_redraw = true;
                            }
                            Event::Resize(_, _) => {
                                self.resize_debounce.trigger(Instant::now());
                                self.needs_redraw = true;
                            }
                            Event::FocusLost => {
                                if let Some(trail) = &mut self.trail {
                                    trail.pointer_left();
                                }
                                self.needs_redraw = true;
                            }
                            Event::FocusGained => {
                                if let Some(trail) = &mut self.trail {
                                    trail.pointer_entered();
                                }
                                self.needs_redraw = true;
                            }
                            _ => {}
                        }
                    }
                }
                _ = tokio::time::sleep(TICK_INTERVAL) => {
                    // Timeout - continue for animations and debouncers
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Draw one frame
    fn ui(&mut self, f: &mut Frame) {
        let area = f.area();
        let header_area = Rect::new(area.x, area.y, area.width, HEADER_ROWS.min(area.height));
        let status_rows = u16::from(area.height > HEADER_ROWS + 1);
        let doc_area = Rect::new(
            area.x,
            area.y + header_area.height,
            area.width,
            area.height
                .saturating_sub(header_area.height + status_rows),
        );
        self.areas.document = doc_area;

        render_header_bar(
            f,
            header_area,
            self.header.text(),
            self.header.is_changing(),
            &self.theme,
        );
        render_document(
            f.buffer_mut(),
            doc_area,
            &self.layout,
            self.scroll_offset,
            &self.theme,
        );
        if status_rows > 0 {
            let status_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
            render_status_bar(
                f,
                status_area,
                &self.theme,
                &self.file_name,
                self.changelog.devices.len(),
            );
        }

        // Sidebar overlays the document while open or animating
        let sidebar_width = self.sidebar.width().min(area.width);
        if sidebar_width > 0 {
            let sidebar_area = Rect::new(doc_area.x, doc_area.y, sidebar_width, doc_area.height);
            render_sidebar(
                f.buffer_mut(),
                sidebar_area,
                &self.changelog,
                &self.theme,
                &self.sidebar,
            );
            self.areas.sidebar = Some(sidebar_area);
        } else {
            self.areas.sidebar = None;
        }

        render_toast(f.buffer_mut(), area, &self.toast, &self.theme);

        // Trail last so the marker floats over everything
        if let Some(trail) = &self.trail {
            render_trail(f.buffer_mut(), area, trail, &self.theme);
        }
    }
}
