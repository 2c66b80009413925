//! Yank (copy) handler
//!
//! Copies the response pane, exactly as rendered, to the system clipboard.

use super::helpers::apply;
use crate::actions::AppAction;
use crate::state::AppState;
use arboard::Clipboard;
use std::sync::{Arc, RwLock};
use std::time::Duration;

const FLASH_DURATION: Duration = Duration::from_millis(200);

/// Yank the rendered response to the clipboard
pub fn handle_yank_response(state: &Arc<RwLock<AppState>>) {
    let Some(text) = yankable_text(state) else {
        tracing::debug!("no response available to yank");
        return;
    };

    let copied = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone()));

    match copied {
        Ok(()) => {
            tracing::debug!(bytes = text.len(), "response yanked");
            if let Ok(mut s) = state.write() {
                s.yank_flash = true;
                s.status_message = Some("Response copied to clipboard".to_string());
            }

            let state = state.clone();
            tokio::spawn(async move {
                tokio::time::sleep(FLASH_DURATION).await;
                if let Ok(mut s) = state.write() {
                    s.yank_flash = false;
                }
            });
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to copy to clipboard");
            apply(state, AppAction::SetStatus(format!("Clipboard unavailable: {e}")));
        }
    }
}

fn yankable_text(state: &Arc<RwLock<AppState>>) -> Option<String> {
    let s = state.read().ok()?;
    s.response.as_ref().map(|response| response.result.render())
}
