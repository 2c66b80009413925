//! Helper functions for event handling
//!
//! - State locking helpers (apply actions)
//! - Cleaning up pasted text

use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use std::sync::{Arc, RwLock};

/// Apply a single action to state
pub fn apply(state: &Arc<RwLock<AppState>>, action: AppAction) {
    if let Ok(mut s) = state.write() {
        apply_action(action, &mut s);
    }
}

/// Apply multiple actions to state under one lock
pub fn apply_many(state: &Arc<RwLock<AppState>>, actions: Vec<AppAction>) {
    if let Ok(mut s) = state.write() {
        for action in actions {
            apply_action(action, &mut s);
        }
    }
}

/// Pasted text for a single-line field: line breaks and other control
/// characters are dropped
pub fn single_line(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// Pasted text for the body: CRLF becomes LF, smart quotes become plain ones
pub fn multi_line(text: &str) -> String {
    normalize_quotes(&text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Replace typographic quotes that terminals paste from rich text
pub fn normalize_quotes(text: &str) -> String {
    text.replace(['\u{201C}', '\u{201D}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'")
}
