//! Main panels: request line, headers/body editor, response pane

use super::styling::{Palette, get_method_color, status_color};
use crate::state::AppState;
use crate::types::{EditorTab, HeaderField, InputMode, ResponseResult};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

/// Render the method selector and URL field on one line
pub fn render_request_line(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let method = state.draft.method;
    let editing = state.input_mode == InputMode::EditingUrl;

    let url_span = if state.draft.url.is_empty() && !editing {
        Span::styled(
            "Press [u] to enter a URL",
            Style::default().fg(palette.muted),
        )
    } else if editing {
        Span::styled(
            format!("{}_", state.draft.url),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled(state.draft.url.clone(), Style::default().fg(palette.fg))
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{:<7}", method.as_str()),
            Style::default()
                .fg(get_method_color(method))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(palette.muted)),
        url_span,
    ]);

    let paragraph = Paragraph::new(line).style(palette.base()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(editing))
            .title(" Request "),
    );

    frame.render_widget(paragraph, area);
}

/// Render the tabbed editor (headers table or body text)
pub fn render_editor(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let editing = matches!(
        state.input_mode,
        InputMode::EditingHeader | InputMode::EditingBody
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(editing))
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // Spacing
            Constraint::Min(0),    // Content
        ])
        .split(inner);

    render_tab_bar(frame, chunks[0], state, palette);

    match state.active_tab {
        EditorTab::Headers => render_headers_table(frame, chunks[2], state, palette),
        EditorTab::Body => render_body(frame, chunks[2], state, palette),
    }
}

/// Render the tab bar showing [ Headers ] [ Body ]
fn render_tab_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let tab_style = |tab: EditorTab| {
        if state.active_tab == tab {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.fg)
        }
    };

    let header_count = state
        .draft
        .headers
        .iter()
        .filter(|row| !row.key.is_empty())
        .count();
    let headers_label = if header_count > 0 {
        format!("Headers ({header_count})")
    } else {
        "Headers".to_string()
    };

    let tabs = Line::from(vec![
        Span::styled("[ ", Style::default().fg(palette.muted)),
        Span::styled(headers_label, tab_style(EditorTab::Headers)),
        Span::styled(" ] [ ", Style::default().fg(palette.muted)),
        Span::styled("Body", tab_style(EditorTab::Body)),
        Span::styled(" ]", Style::default().fg(palette.muted)),
    ]);

    frame.render_widget(Paragraph::new(tabs), area);
}

fn render_headers_table(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let editing = state.input_mode == InputMode::EditingHeader;

    let rows: Vec<Row> = state
        .draft
        .headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let selected = idx == state.selected_header;

            let cell = |text: &str, field: HeaderField| {
                let active = selected && editing && state.header_field == field;
                if active {
                    Cell::from(format!("{text}_")).style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if text.is_empty() {
                    let placeholder = match field {
                        HeaderField::Key => "key",
                        HeaderField::Value => "value",
                    };
                    Cell::from(placeholder).style(Style::default().fg(palette.muted))
                } else {
                    Cell::from(text.to_string())
                }
            };

            let row = Row::new(vec![
                Cell::from(if selected { "▶" } else { " " }),
                cell(&header.key, HeaderField::Key),
                cell(&header.value, HeaderField::Value),
            ]);

            if selected {
                row.style(Style::default().bg(palette.selection_bg))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Percentage(40),
            Constraint::Percentage(60),
        ],
    )
    .header(
        Row::new(vec!["", "Key", "Value"]).style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .style(Style::default().fg(palette.fg));

    frame.render_widget(table, area);
}

fn render_body(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let editing = state.input_mode == InputMode::EditingBody;
    let method = state.draft.method;

    let mut lines: Vec<Line> = Vec::new();

    if !method.supports_body() {
        lines.push(Line::from(Span::styled(
            format!("{method} requests are sent without a body"),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    }

    if state.draft.body.is_empty() && !editing {
        lines.push(Line::from(Span::styled(
            "Press [e] to edit the body",
            Style::default().fg(palette.muted),
        )));
    } else {
        let text = if editing {
            format!("{}_", state.draft.body)
        } else {
            state.draft.body.clone()
        };
        let style = if editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(palette.fg)
        };
        for line in text.split('\n') {
            lines.push(Line::from(Span::styled(line.to_string(), style)));
        }
    }

    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(content, area);
}

/// Render the response pane
pub fn render_response(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let title = response_title(state);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(false))
        .title(title)
        .style(palette.base());

    if state.yank_flash {
        block = block.border_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
    }

    let lines: Vec<Line> = match state.response {
        Some(ref response) => {
            let style = match response.result {
                ResponseResult::Error(_) => Style::default().fg(Color::Red),
                _ => Style::default().fg(palette.fg),
            };
            response
                .result
                .render()
                .lines()
                .map(|line| Line::from(Span::styled(line.to_string(), style)))
                .collect()
        }
        None => vec![Line::from(Span::styled(
            "Press [Space] to send the request",
            Style::default().fg(palette.muted),
        ))],
    };

    let scroll = u16::try_from(state.response_scroll).unwrap_or(u16::MAX);
    let content = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(content, area);
}

fn response_title(state: &AppState) -> Line<'static> {
    let mut spans = vec![Span::raw(" Response ")];

    if let Some(ref response) = state.response {
        if let Some((code, ref reason)) = response.status {
            spans.push(Span::styled(
                format!("{code} {reason} "),
                Style::default()
                    .fg(status_color(code))
                    .add_modifier(Modifier::BOLD),
            ));
        } else if response.result.is_error() {
            spans.push(Span::styled(
                "Error ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }
        spans.push(Span::raw(format!("{}ms ", response.duration.as_millis())));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApiResponse;
    use std::time::Duration;

    fn title_text(state: &AppState) -> String {
        response_title(state)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    #[test]
    fn test_title_without_response() {
        assert_eq!(title_text(&AppState::default()), " Response ");
    }

    #[test]
    fn test_title_shows_status_and_duration() {
        let mut state = AppState::default();
        state.response = Some(ApiResponse {
            result: ResponseResult::Text("ok".to_string()),
            status: Some((201, "Created".to_string())),
            duration: Duration::from_millis(42),
        });

        assert_eq!(title_text(&state), " Response 201 Created 42ms ");
    }

    #[test]
    fn test_title_for_network_error() {
        let mut state = AppState::default();
        state.response = Some(ApiResponse::error(
            "Request failed: refused".to_string(),
            Duration::from_millis(3),
        ));

        assert_eq!(title_text(&state), " Response Error 3ms ");
    }
}
