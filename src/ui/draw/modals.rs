//! Modal dialog rendering
//!
//! - Import path modal
//! - Alert modal (import failures)

use super::styling::Palette;
use crate::state::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Centered rectangle of at most `max_width` columns
fn modal_area(frame: &Frame, max_width: f32, height: u16) -> Rect {
    let area = frame.area();

    let width = (area.width as f32 * 0.6).min(max_width) as u16;
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;

    Rect {
        x,
        y,
        width,
        height: height.min(area.height),
    }
}

/// Render the import path modal
pub fn render_import_path_modal(frame: &mut Frame, state: &AppState, palette: &Palette) {
    let modal_area = modal_area(frame, 80.0, 7);

    // Clear the background behind the modal
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" Import Request ")
        .borders(Borders::ALL)
        .border_style(palette.border(true))
        .style(Style::default().bg(palette.modal_bg).fg(palette.fg));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let label = Paragraph::new("File path:").style(Style::default().fg(palette.accent));
    frame.render_widget(label, chunks[0]);

    let input = Paragraph::new(format!("{}_", state.import_path_input)).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(input, chunks[1]);

    let help = Paragraph::new("Enter: Import  |  Ctrl+L: Clear  |  Esc: Cancel")
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Render a blocking alert
pub fn render_alert_modal(frame: &mut Frame, message: &str, palette: &Palette) {
    let modal_area = modal_area(frame, 60.0, 7);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" Alert ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(palette.modal_bg).fg(palette.fg));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let text = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, chunks[0]);

    let help = Paragraph::new("Enter: OK")
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[1]);
}
