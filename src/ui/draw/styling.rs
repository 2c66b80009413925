//! Styling utilities and color schemes
//!
//! Method colors plus the light and dark palettes the theme toggle switches between.

use crate::types::HttpMethod;
use ratatui::style::{Color, Modifier, Style};

/// Get the color for an HTTP method
pub fn get_method_color(method: HttpMethod) -> Color {
    match method {
        HttpMethod::Get => Color::Green,
        HttpMethod::Post => Color::Blue,
        HttpMethod::Put => Color::Yellow,
        HttpMethod::Delete => Color::Red,
        HttpMethod::Patch => Color::Cyan,
    }
}

/// Colors for one theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub selection_bg: Color,
    pub modal_bg: Color,
}

impl Palette {
    pub fn new(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                bg: Color::Reset,
                fg: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::Gray,
                selection_bg: Color::Rgb(50, 50, 60),
                modal_bg: Color::Rgb(30, 30, 30),
            }
        } else {
            Self {
                bg: Color::Rgb(245, 245, 245),
                fg: Color::Black,
                muted: Color::Rgb(120, 120, 120),
                accent: Color::Blue,
                border: Color::Rgb(90, 90, 90),
                selection_bg: Color::Rgb(210, 220, 235),
                modal_bg: Color::Rgb(230, 230, 230),
            }
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Border style for a block, highlighted while it takes input
    pub fn border(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }
}

/// Status code color, by class
pub fn status_color(code: u16) -> Color {
    match code {
        200..=299 => Color::Green,
        300..=399 => Color::Yellow,
        _ => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color_classes() {
        assert_eq!(status_color(204), Color::Green);
        assert_eq!(status_color(301), Color::Yellow);
        assert_eq!(status_color(404), Color::Red);
        assert_eq!(status_color(503), Color::Red);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Palette::new(true).fg, Palette::new(false).fg);
    }
}
