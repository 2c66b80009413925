//! Reusable UI components
//!
//! - Header (title, send spinner, theme)
//! - Footer (status message and command help)

use super::styling::Palette;
use crate::state::AppState;
use crate::types::InputMode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Render the application header with send status and theme
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    spinner_index: usize,
    palette: &Palette,
) {
    let mut spans = vec![Span::styled(
        "lazy request tui",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];

    if state.is_sending() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(
                "{} Sending ({})",
                SPINNER[spinner_index % SPINNER.len()],
                state.in_flight
            ),
            Style::default().fg(Color::Yellow),
        ));
    }

    let theme = if state.dark_mode { "dark" } else { "light" };
    spans.push(Span::styled(
        format!("  | theme: {theme}"),
        Style::default().fg(palette.muted),
    ));

    let header = Paragraph::new(Line::from(spans))
        .style(palette.base())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        );

    frame.render_widget(header, area);
}

/// Render the footer with the last status message and command help
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let help = footer_help(&state.input_mode);

    let mut spans = Vec::new();
    if let Some(ref message) = state.status_message {
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(palette.accent),
        ));
        spans.push(Span::styled(" | ", Style::default().fg(palette.muted)));
    }
    spans.push(Span::styled(help, Style::default().fg(Color::Yellow)));

    let footer = Paragraph::new(Line::from(spans)).style(palette.base()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(false))
            .title("Commands"),
    );

    frame.render_widget(footer, area);
}

fn footer_help(mode: &InputMode) -> &'static str {
    match mode {
        InputMode::Normal => {
            "m:Method u:URL Space:Send s:Save o:Import x:Clear | Tab:Headers/Body e:Edit a:Add d:Remove f:Format | y:Copy t:Theme q:Quit"
        }
        InputMode::EditingUrl => "Enter/Esc:Done Ctrl+W:Delete segment Ctrl+L:Clear",
        InputMode::EditingHeader => "Tab:Key/Value Enter/Esc:Done Ctrl+L:Clear",
        InputMode::EditingBody => "Esc:Done Ctrl+F:Format JSON Ctrl+L:Clear",
        InputMode::EnteringImportPath => "Enter:Import Esc:Cancel",
        InputMode::Alert => "Enter/Esc:Dismiss",
    }
}
