//! Save and import handlers
//!
//! - Writing the draft to the export file
//! - The import path modal
//! - The blocking alert shown when an import fails

use super::helpers::{apply, apply_many};
use crate::actions::AppAction;
use crate::format::{self, IMPORT_FAILED_MESSAGE};
use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Write the current draft to `path`
pub fn handle_save(state: &Arc<RwLock<AppState>>, path: &Path) {
    let draft = match state.read() {
        Ok(s) => s.draft.clone(),
        Err(_) => return,
    };

    let message = match format::export_to_file(&draft, path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "request saved");
            format!("Saved to {}", path.display())
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to save request");
            format!("Save failed: {e}")
        }
    };

    apply(state, AppAction::SetStatus(message));
}

/// Open the import modal, prefilled with the export path
pub fn handle_import_dialog(state: &Arc<RwLock<AppState>>, default_path: &Path) {
    apply(
        state,
        AppAction::EnterImportPathMode(default_path.display().to_string()),
    );
}

/// Handle import path modal input
pub fn handle_import_path_input(key: KeyEvent, state: &Arc<RwLock<AppState>>) {
    match key.code {
        KeyCode::Enter => {
            let path = match state.read() {
                Ok(s) => s.import_path_input.trim().to_string(),
                Err(_) => return,
            };
            apply(state, AppAction::ExitImportPathMode);

            if path.is_empty() {
                tracing::debug!("empty import path, nothing to do");
                return;
            }
            import_from(state, Path::new(&path));
        }
        KeyCode::Esc => {
            apply(state, AppAction::ExitImportPathMode);
            tracing::debug!("import cancelled");
        }
        KeyCode::Backspace => apply(state, AppAction::BackspaceImportPath),
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply_many(
                state,
                vec![
                    AppAction::ExitImportPathMode,
                    AppAction::EnterImportPathMode(String::new()),
                ],
            );
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::AppendToImportPath(c.to_string()));
        }
        _ => {}
    }
}

/// Apply a request file to the draft. Sections applied before a failure stay.
pub fn import_from(state: &Arc<RwLock<AppState>>, path: &Path) {
    // Read before locking so a slow file never blocks the UI or a finishing send
    let result = format::read_request_file(path).and_then(|text| {
        let Ok(mut s) = state.write() else {
            return Ok(());
        };
        let result = format::import_into(&mut s.draft, &text);
        s.selected_header = 0;
        result
    });

    match result {
        Ok(()) => {
            tracing::info!(path = %path.display(), "request imported");
            apply(
                state,
                AppAction::SetStatus(format!("Imported {}", path.display())),
            );
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "import failed");
            apply(state, AppAction::ShowAlert(IMPORT_FAILED_MESSAGE.to_string()));
        }
    }
}

/// Only Enter or Esc get past the alert
pub fn handle_alert_input(key: KeyEvent, state: &Arc<RwLock<AppState>>) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        apply(state, AppAction::DismissAlert);
    }
}
