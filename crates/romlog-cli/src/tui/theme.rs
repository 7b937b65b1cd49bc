//! Color themes for the TUI

use once_cell::sync::Lazy;
use ratatui::style::Color;

/// A named color theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub display_name: &'static str,
    pub bg: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub title: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
    pub selection_bg: Color,
    pub trail: Color,
}

/// Registry of all built-in themes
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    fn new() -> Self {
        Self {
            themes: vec![midnight(), paper(), terminal()],
        }
    }

    /// Look up a theme by name, falling back to the first registered one
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes
            .iter()
            .find(|theme| theme.name == name)
            .unwrap_or(&self.themes[0])
    }

    /// All registered themes in display order
    pub fn list(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    /// Number of registered themes
    pub fn count(&self) -> usize {
        self.themes.len()
    }
}

/// Global theme registry
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

fn midnight() -> Theme {
    Theme {
        name: "midnight",
        display_name: "Midnight (default)",
        bg: Color::Rgb(13, 17, 23),
        text: Color::Rgb(201, 209, 217),
        dim: Color::Rgb(110, 118, 129),
        accent: Color::Rgb(88, 166, 255),
        title: Color::Rgb(255, 255, 255),
        border: Color::Rgb(48, 54, 61),
        success: Color::Rgb(63, 185, 80),
        error: Color::Rgb(248, 81, 73),
        selection_bg: Color::Rgb(33, 38, 45),
        trail: Color::Rgb(88, 166, 255),
    }
}

fn paper() -> Theme {
    Theme {
        name: "paper",
        display_name: "Paper (light)",
        bg: Color::Rgb(246, 244, 239),
        text: Color::Rgb(40, 40, 40),
        dim: Color::Rgb(130, 125, 115),
        accent: Color::Rgb(0, 95, 175),
        title: Color::Rgb(20, 20, 20),
        border: Color::Rgb(200, 195, 185),
        success: Color::Rgb(0, 128, 60),
        error: Color::Rgb(190, 30, 30),
        selection_bg: Color::Rgb(230, 226, 218),
        trail: Color::Rgb(0, 95, 175),
    }
}

fn terminal() -> Theme {
    // Native terminal colors for users who theme their emulator
    Theme {
        name: "terminal",
        display_name: "Terminal (native colors)",
        bg: Color::Reset,
        text: Color::Reset,
        dim: Color::DarkGray,
        accent: Color::Cyan,
        title: Color::White,
        border: Color::DarkGray,
        success: Color::Green,
        error: Color::Red,
        selection_bg: Color::DarkGray,
        trail: Color::Cyan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let theme = THEME_REGISTRY.get_or_default("no-such-theme");
        assert_eq!(theme.name, "midnight");
    }

    #[test]
    fn test_registered_themes_resolve_by_name() {
        for theme in THEME_REGISTRY.list() {
            assert_eq!(THEME_REGISTRY.get_or_default(theme.name).name, theme.name);
        }
    }
}
