//! Document layout
//!
//! Builds the styled line list for a changelog once per width, and derives
//! the geometry the reactive pieces need from that same pass: section spans
//! for the header resolver and hit boxes for the share glyphs. Keeping one
//! source for line accounting means scroll math never drifts from what is
//! actually on screen.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use romlog_core::{share, Changelog, Section};

use crate::tui::theme::Theme;

/// Share glyph drawn at the end of a card title row
pub const SHARE_GLYPH: &str = "[share]";

/// Left indent for card rows
const CARD_INDENT: &str = "  ";

/// Indent for note bullets
const NOTE_INDENT: &str = "    ";

/// Where a device section landed in the laid-out document
#[derive(Debug, Clone, Copy)]
pub struct SectionAnchor {
    /// Device index into the changelog
    pub device: usize,
    /// First line of the section header
    pub top: usize,
    /// Lines covered by the section
    pub height: usize,
}

/// Hit box of one card's share glyph
#[derive(Debug, Clone, Copy)]
pub struct ShareHit {
    /// Document line of the card title row
    pub line: usize,
    /// First column of the glyph
    pub x_start: u16,
    /// One past the last column of the glyph
    pub x_end: u16,
    pub device: usize,
    pub rom: usize,
}

/// Styled document lines plus the geometry derived from them
pub struct DocumentLayout {
    pub lines: Vec<Line<'static>>,
    pub anchors: Vec<SectionAnchor>,
    pub share_hits: Vec<ShareHit>,
    width: u16,
}

impl DocumentLayout {
    /// Lay out a changelog for a given content width
    pub fn build(changelog: &Changelog, width: u16, theme: &Theme) -> Self {
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut anchors = Vec::new();
        let mut share_hits = Vec::new();

        let rule_width = width.max(20) as usize;
        let note_width = (width.max(20) as usize).saturating_sub(NOTE_INDENT.len() + 4);

        let header_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        let rule_style = Style::default().fg(theme.border);
        let name_style = Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD);
        let dim_style = Style::default().fg(theme.dim);
        let note_style = Style::default().fg(theme.text);
        let share_style = Style::default().fg(theme.accent);

        for (device_idx, device) in changelog.devices.iter().enumerate() {
            if device_idx > 0 {
                lines.push(Line::from(""));
            }
            let top = lines.len();

            // Section header: "── Pixel 7 ──────"
            let used = 3 + device.name.width() + 1;
            lines.push(Line::from(vec![
                Span::styled("── ", rule_style),
                Span::styled(device.name.clone(), header_style),
                Span::styled(" ", rule_style),
                Span::styled("─".repeat(rule_width.saturating_sub(used)), rule_style),
            ]));
            lines.push(Line::from(""));

            for (rom_idx, rom) in device.roms.iter().enumerate() {
                // Card title row ending in the share glyph
                let mut spans = vec![
                    Span::raw(CARD_INDENT),
                    Span::styled("▪ ", share_style),
                    Span::styled(rom.name.clone(), name_style),
                ];
                if let Some(version) = &rom.version {
                    spans.push(Span::styled(format!(" · {version}"), dim_style));
                }
                spans.push(Span::raw("  "));

                let prefix_width: usize =
                    spans.iter().map(|span| span.content.width()).sum();
                share_hits.push(ShareHit {
                    line: lines.len(),
                    x_start: prefix_width as u16,
                    x_end: (prefix_width + SHARE_GLYPH.width()) as u16,
                    device: device_idx,
                    rom: rom_idx,
                });
                spans.push(Span::styled(SHARE_GLYPH, share_style));
                lines.push(Line::from(spans));

                // Byline: author credit and build date
                let mut byline = String::new();
                if let Some(author) = &rom.author {
                    byline.push_str("by ");
                    byline.push_str(&share::clean_author(author));
                }
                if let Some(date) = &rom.date {
                    if !byline.is_empty() {
                        byline.push_str(" · ");
                    }
                    byline.push_str(date);
                }
                if !byline.is_empty() {
                    lines.push(Line::from(vec![
                        Span::raw(NOTE_INDENT),
                        Span::styled(byline, dim_style),
                    ]));
                }

                for note in &rom.notes {
                    for (wrapped_idx, wrapped) in
                        textwrap::wrap(note, note_width.max(10)).iter().enumerate()
                    {
                        let bullet = if wrapped_idx == 0 { "• " } else { "  " };
                        lines.push(Line::from(vec![
                            Span::raw(NOTE_INDENT),
                            Span::styled(bullet, dim_style),
                            Span::styled(wrapped.to_string(), note_style),
                        ]));
                    }
                }
                lines.push(Line::from(""));
            }

            anchors.push(SectionAnchor {
                device: device_idx,
                top,
                height: lines.len() - top,
            });
        }

        Self {
            lines,
            anchors,
            share_hits,
            width,
        }
    }

    /// Width this layout was built for
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Total document height in lines
    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Section spans for the resolver, in document order
    pub fn sections(&self, changelog: &Changelog) -> Vec<Section> {
        self.anchors
            .iter()
            .map(|anchor| {
                Section::new(
                    changelog.devices[anchor.device].name.clone(),
                    anchor.top as f64,
                    anchor.height as f64,
                )
            })
            .collect()
    }

    /// Share glyph under a document coordinate, if any
    pub fn share_hit_at(&self, line: usize, x: u16) -> Option<ShareHit> {
        self.share_hits
            .iter()
            .copied()
            .find(|hit| hit.line == line && x >= hit.x_start && x < hit.x_end)
    }

    /// Card share target at or after a document line (for the share key);
    /// scrolled past the last card, the last one is offered
    pub fn share_hit_near(&self, line: usize) -> Option<ShareHit> {
        self.share_hits
            .iter()
            .copied()
            .find(|hit| hit.line >= line)
            .or_else(|| self.share_hits.last().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::THEME_REGISTRY;

    fn sample_layout() -> (Changelog, DocumentLayout) {
        let changelog = Changelog::sample();
        let layout = DocumentLayout::build(&changelog, 80, THEME_REGISTRY.get_or_default(""));
        (changelog, layout)
    }

    #[test]
    fn test_one_anchor_per_device_in_order() {
        let (changelog, layout) = sample_layout();
        assert_eq!(layout.anchors.len(), changelog.devices.len());
        assert!(layout
            .anchors
            .windows(2)
            .all(|pair| pair[0].top + pair[0].height <= pair[1].top));
    }

    #[test]
    fn test_sections_carry_device_names_ascending() {
        let (changelog, layout) = sample_layout();
        let sections = layout.sections(&changelog);
        assert_eq!(sections[0].label, changelog.devices[0].name);
        assert!(sections.windows(2).all(|pair| pair[0].top < pair[1].top));
    }

    #[test]
    fn test_share_hit_per_card_inside_its_section() {
        let (changelog, layout) = sample_layout();
        let card_count: usize = changelog.devices.iter().map(|d| d.roms.len()).sum();
        assert_eq!(layout.share_hits.len(), card_count);

        for hit in &layout.share_hits {
            let anchor = layout.anchors[hit.device];
            assert!(hit.line >= anchor.top && hit.line < anchor.top + anchor.height);
        }
    }

    #[test]
    fn test_share_hit_at_respects_glyph_bounds() {
        let (_, layout) = sample_layout();
        let hit = layout.share_hits[0];

        assert!(layout.share_hit_at(hit.line, hit.x_start).is_some());
        assert!(layout.share_hit_at(hit.line, hit.x_end).is_none());
        assert!(layout.share_hit_at(hit.line + 1, hit.x_start).is_none());
    }

    #[test]
    fn test_share_hit_near_falls_back_to_last_card() {
        let (_, layout) = sample_layout();
        let first = layout.share_hits[0];
        let last = *layout.share_hits.last().unwrap();

        assert_eq!(layout.share_hit_near(0).unwrap().line, first.line);
        assert_eq!(
            layout.share_hit_near(layout.total_lines() + 100).unwrap().line,
            last.line
        );
    }

    #[test]
    fn test_narrow_width_does_not_panic() {
        let changelog = Changelog::sample();
        let layout = DocumentLayout::build(&changelog, 5, THEME_REGISTRY.get_or_default(""));
        assert!(layout.total_lines() > 0);
    }

    #[test]
    fn test_empty_changelog_builds_empty_layout() {
        let changelog = Changelog::parse("[site]\ntitle = \"T\"\n").unwrap();
        let layout = DocumentLayout::build(&changelog, 80, THEME_REGISTRY.get_or_default(""));
        assert_eq!(layout.total_lines(), 0);
        assert!(layout.sections(&changelog).is_empty());
        assert!(layout.share_hit_near(0).is_none());
    }
}
