//! Text entry handlers
//!
//! Keys typed, or text pasted, while the URL field, a header cell or the body
//! is being edited. Every keystroke goes straight into the draft.

use super::helpers::{apply, multi_line, normalize_quotes, single_line};
use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::InputMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, RwLock};

/// Handle a key while editing the URL
pub fn handle_url_input(key: KeyEvent, state: &Arc<RwLock<AppState>>) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => apply(state, AppAction::StopEditing),
        KeyCode::Backspace => apply(state, AppAction::BackspaceUrl),
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::DeleteWordUrl)
        }
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::ClearUrl)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::AppendToUrl(c.to_string()));
        }
        _ => {}
    }
}

/// Handle a key while editing a header cell
pub fn handle_header_input(key: KeyEvent, state: &Arc<RwLock<AppState>>) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => apply(state, AppAction::StopEditing),
        KeyCode::Tab | KeyCode::BackTab => apply(state, AppAction::ToggleHeaderField),
        KeyCode::Backspace => apply(state, AppAction::BackspaceHeader),
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::ClearHeaderField)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::AppendToHeader(c.to_string()));
        }
        _ => {}
    }
}

/// Handle a key while editing the body
pub fn handle_body_input(key: KeyEvent, state: &Arc<RwLock<AppState>>) {
    match key.code {
        KeyCode::Esc => apply(state, AppAction::StopEditing),
        KeyCode::Enter => apply(state, AppAction::AppendToBody("\n".to_string())),
        KeyCode::Tab => apply(state, AppAction::AppendToBody("  ".to_string())),
        KeyCode::Backspace => apply(state, AppAction::BackspaceBody),
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::ClearBody)
        }
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::FormatBody)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(
                state,
                AppAction::AppendToBody(normalize_quotes(&c.to_string())),
            );
        }
        _ => {}
    }
}

/// Handle a bracketed paste. Text lands in whatever field is being edited;
/// the input mode never changes.
pub fn handle_paste(text: &str, state: &Arc<RwLock<AppState>>) {
    let Ok(input_mode) = state.read().map(|s| s.input_mode.clone()) else {
        return;
    };

    let action = match input_mode {
        InputMode::EditingUrl => AppAction::AppendToUrl(single_line(text)),
        InputMode::EditingHeader => AppAction::AppendToHeader(single_line(text)),
        InputMode::EditingBody => AppAction::AppendToBody(multi_line(text)),
        InputMode::EnteringImportPath => AppAction::AppendToImportPath(single_line(text)),
        InputMode::Normal | InputMode::Alert => {
            tracing::debug!("paste ignored outside a text field");
            return;
        }
    };

    tracing::debug!(chars = text.chars().count(), "pasted input");
    apply(state, action);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HeaderRow;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_in(mode: AppAction) -> Arc<RwLock<AppState>> {
        let state = Arc::new(RwLock::new(AppState::default()));
        apply(&state, mode);
        state
    }

    #[test]
    fn test_enter_after_typing_stops_url_editing() {
        let state = state_in(AppAction::StartEditingUrl);

        handle_url_input(key(KeyCode::Char('x')), &state);
        handle_url_input(key(KeyCode::Enter), &state);

        let s = state.read().unwrap();
        assert_eq!(s.draft.url, "x");
        assert_eq!(s.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_pasted_url_line_break_dropped_then_enter_still_works() {
        let state = state_in(AppAction::StartEditingUrl);

        handle_paste("http://host/x\n", &state);
        assert_eq!(state.read().unwrap().draft.url, "http://host/x");
        assert_eq!(state.read().unwrap().input_mode, InputMode::EditingUrl);

        handle_url_input(key(KeyCode::Enter), &state);
        assert_eq!(state.read().unwrap().input_mode, InputMode::Normal);
    }

    #[test]
    fn test_paste_into_header_cell() {
        let state = state_in(AppAction::StartEditingHeader);

        handle_paste("Authorization\r\n", &state);
        handle_header_input(key(KeyCode::Tab), &state);
        handle_paste("Bearer abc", &state);

        assert_eq!(
            state.read().unwrap().draft.headers,
            vec![HeaderRow::new("Authorization", "Bearer abc")]
        );
    }

    #[test]
    fn test_paste_into_body_keeps_lines() {
        let state = state_in(AppAction::StartEditingBody);

        handle_paste("{\r\n  \u{201C}a\u{201D}: 1\r\n}", &state);
        handle_body_input(key(KeyCode::Backspace), &state);

        assert_eq!(state.read().unwrap().draft.body, "{\n  \"a\": 1\n");
    }

    #[test]
    fn test_paste_into_import_path() {
        let state = state_in(AppAction::EnterImportPathMode(String::new()));

        handle_paste("/tmp/saved.txt\n", &state);

        assert_eq!(state.read().unwrap().import_path_input, "/tmp/saved.txt");
    }

    #[test]
    fn test_paste_ignored_in_normal_mode() {
        let state = Arc::new(RwLock::new(AppState::default()));

        handle_paste("q", &state);

        let s = state.read().unwrap();
        assert_eq!(s.draft.url, "");
        assert_eq!(s.input_mode, InputMode::Normal);
    }
}
