//! Event handling system for lazy-request-tui
//!
//! Key presses are translated into `AppAction`s that are applied to `AppState`
//! through `apply_action` in actions.rs. Work that goes beyond the state (the
//! network, the filesystem, the clipboard) is dispatched from here.
//!
//! Input modes:
//! - Normal: commands and navigation
//! - EditingUrl / EditingHeader / EditingBody: text entry into the draft
//! - EnteringImportPath: the import modal
//! - Alert: blocking message, only dismiss keys pass
//!
//! Pastes arrive whole as `Event::Paste` (bracketed paste is enabled in main)
//! and go to the field being edited.
//!
//! # Lock Management
//!
//! Handlers take the state lock for as short as possible and never hold it
//! across a call that locks again.

mod editing;
mod execution;
mod files;
mod helpers;
mod yank;

pub use helpers::apply;

use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::{EditorTab, InputMode};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What a normal-mode key asks for
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Action(AppAction),
    Send,
    Save,
    Import,
    Yank,
    Quit,
}

/// Event handler for managing user input and state updates
#[derive(Debug)]
pub struct EventHandler {
    pub should_quit: bool,
    export_path: PathBuf,
    client: reqwest::Client,
}

impl EventHandler {
    pub fn new(export_path: PathBuf, client: reqwest::Client) -> Self {
        Self {
            should_quit: false,
            export_path,
            client,
        }
    }

    /// Main event handling loop - dispatches to appropriate handlers based on input mode
    pub fn handle_events(&mut self, state: Arc<RwLock<AppState>>) -> Result<()> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(());
        }

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            Event::Paste(text) => {
                editing::handle_paste(&text, &state);
                return Ok(());
            }
            _ => return Ok(()),
        };

        let Ok(input_mode) = state.read().map(|s| s.input_mode.clone()) else {
            return Ok(());
        };

        match input_mode {
            InputMode::Alert => files::handle_alert_input(key, &state),
            InputMode::EnteringImportPath => files::handle_import_path_input(key, &state),
            InputMode::EditingUrl => editing::handle_url_input(key, &state),
            InputMode::EditingHeader => editing::handle_header_input(key, &state),
            InputMode::EditingBody => editing::handle_body_input(key, &state),
            InputMode::Normal => {
                let Ok(active_tab) = state.read().map(|s| s.active_tab) else {
                    return Ok(());
                };
                if let Some(command) = normal_key_command(key, active_tab) {
                    self.run(command, &state);
                }
            }
        }

        Ok(())
    }

    fn run(&mut self, command: Command, state: &Arc<RwLock<AppState>>) {
        match command {
            Command::Action(action) => apply(state, action),
            Command::Send => execution::handle_send(state, &self.client),
            Command::Save => files::handle_save(state, &self.export_path),
            Command::Import => files::handle_import_dialog(state, &self.export_path),
            Command::Yank => yank::handle_yank_response(state),
            Command::Quit => {
                tracing::info!("quit requested");
                self.should_quit = true;
            }
        }
    }
}

/// Map a key pressed in normal mode to what it does
fn normal_key_command(key: KeyEvent, active_tab: EditorTab) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let command = match key.code {
        KeyCode::Char('c') if ctrl => Command::Quit,
        KeyCode::Char('u') if ctrl => Command::Action(AppAction::ScrollUp),
        KeyCode::Char('d') if ctrl => Command::Action(AppAction::ScrollDown),
        KeyCode::PageUp => Command::Action(AppAction::ScrollUp),
        KeyCode::PageDown => Command::Action(AppAction::ScrollDown),
        _ if ctrl => return None,

        KeyCode::Char('q') => Command::Quit,

        // Method selector
        KeyCode::Char('m') => Command::Action(AppAction::NextMethod),
        KeyCode::Char('M') => Command::Action(AppAction::PreviousMethod),

        KeyCode::Char('u') | KeyCode::Char('i') => Command::Action(AppAction::StartEditingUrl),

        KeyCode::Char(' ') | KeyCode::Enter => Command::Send,
        KeyCode::Char('s') => Command::Save,
        KeyCode::Char('o') => Command::Import,
        KeyCode::Char('x') => Command::Action(AppAction::ClearAll),
        KeyCode::Char('t') => Command::Action(AppAction::ToggleTheme),
        KeyCode::Char('y') => Command::Yank,

        // Editor tabs
        KeyCode::Tab | KeyCode::BackTab => Command::Action(AppAction::ToggleTab),
        KeyCode::Char('1') => Command::Action(AppAction::SwitchTab(EditorTab::Headers)),
        KeyCode::Char('2') => Command::Action(AppAction::SwitchTab(EditorTab::Body)),

        KeyCode::Char('e') => match active_tab {
            EditorTab::Headers => Command::Action(AppAction::StartEditingHeader),
            EditorTab::Body => Command::Action(AppAction::StartEditingBody),
        },

        // Header rows only react on the Headers tab
        KeyCode::Char('j') | KeyCode::Down if active_tab == EditorTab::Headers => {
            Command::Action(AppAction::SelectHeaderDown)
        }
        KeyCode::Char('k') | KeyCode::Up if active_tab == EditorTab::Headers => {
            Command::Action(AppAction::SelectHeaderUp)
        }
        KeyCode::Char('a') if active_tab == EditorTab::Headers => {
            Command::Action(AppAction::AddHeader)
        }
        KeyCode::Char('d') if active_tab == EditorTab::Headers => {
            Command::Action(AppAction::RemoveSelectedHeader)
        }

        KeyCode::Char('f') if active_tab == EditorTab::Body => {
            Command::Action(AppAction::FormatBody)
        }

        _ => return None,
    };

    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_send_keys() {
        assert_eq!(
            normal_key_command(key(KeyCode::Char(' ')), EditorTab::Headers),
            Some(Command::Send)
        );
        assert_eq!(
            normal_key_command(key(KeyCode::Enter), EditorTab::Body),
            Some(Command::Send)
        );
    }

    #[test]
    fn test_edit_key_follows_active_tab() {
        assert_eq!(
            normal_key_command(key(KeyCode::Char('e')), EditorTab::Headers),
            Some(Command::Action(AppAction::StartEditingHeader))
        );
        assert_eq!(
            normal_key_command(key(KeyCode::Char('e')), EditorTab::Body),
            Some(Command::Action(AppAction::StartEditingBody))
        );
    }

    #[test]
    fn test_ctrl_d_scrolls_but_d_removes_row() {
        assert_eq!(
            normal_key_command(ctrl('d'), EditorTab::Headers),
            Some(Command::Action(AppAction::ScrollDown))
        );
        assert_eq!(
            normal_key_command(key(KeyCode::Char('d')), EditorTab::Headers),
            Some(Command::Action(AppAction::RemoveSelectedHeader))
        );
    }

    #[test]
    fn test_row_keys_ignored_on_body_tab() {
        assert_eq!(normal_key_command(key(KeyCode::Char('a')), EditorTab::Body), None);
        assert_eq!(normal_key_command(key(KeyCode::Char('j')), EditorTab::Body), None);
    }

    #[test]
    fn test_unbound_ctrl_keys_do_nothing() {
        assert_eq!(normal_key_command(ctrl('s'), EditorTab::Headers), None);
        assert_eq!(normal_key_command(ctrl('c'), EditorTab::Headers), Some(Command::Quit));
    }

    #[test]
    fn test_run_applies_actions() {
        let mut handler = EventHandler::new(PathBuf::from("request.txt"), reqwest::Client::new());
        let state = Arc::new(RwLock::new(AppState::default()));

        handler.run(Command::Action(AppAction::ToggleTheme), &state);
        assert!(!state.read().unwrap().dark_mode);

        handler.run(Command::Import, &state);
        let s = state.read().unwrap();
        assert_eq!(s.input_mode, InputMode::EnteringImportPath);
        assert_eq!(s.import_path_input, "request.txt");
        drop(s);

        handler.run(Command::Quit, &state);
        assert!(handler.should_quit);
    }
}
