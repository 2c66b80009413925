//! Request execution handler (Space/Enter key)

use crate::request::send_background;
use crate::state::AppState;
use std::sync::{Arc, RwLock};

/// Fire the current draft. Earlier sends still pending are left to finish.
pub fn handle_send(state: &Arc<RwLock<AppState>>, client: &reqwest::Client) {
    if send_background(state.clone(), client.clone()) {
        if let Ok(s) = state.read() {
            tracing::debug!(in_flight = s.in_flight, "send dispatched");
        }
    }
}
