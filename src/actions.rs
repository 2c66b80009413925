use crate::state::AppState;
use crate::types::{EditorTab, HeaderField, HttpMethod, InputMode};

/// Represents all possible state-changing actions in the application
/// This pattern separates input handling from state mutations, making the code
/// more testable
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Method selector
    SetMethod(HttpMethod),
    NextMethod,
    PreviousMethod,

    // URL field
    StartEditingUrl,
    AppendToUrl(String),
    BackspaceUrl,
    DeleteWordUrl,
    ClearUrl,

    // Headers table
    SelectHeaderUp,
    SelectHeaderDown,
    AddHeader,
    RemoveSelectedHeader,
    StartEditingHeader,
    ToggleHeaderField,
    AppendToHeader(String),
    BackspaceHeader,
    ClearHeaderField,

    // Body text area
    StartEditingBody,
    AppendToBody(String),
    BackspaceBody,
    ClearBody,
    FormatBody,

    /// Leave any editing mode
    StopEditing,

    // Editor tabs
    SwitchTab(EditorTab),
    ToggleTab,

    /// Reset draft, response and tab
    ClearAll,

    ToggleTheme,

    // Import path modal
    EnterImportPathMode(String),
    AppendToImportPath(String),
    BackspaceImportPath,
    ExitImportPathMode,

    // Blocking notification
    ShowAlert(String),
    DismissAlert,

    SetStatus(String),

    // Response pane
    ScrollUp,
    ScrollDown,
}

/// Lines moved per scroll action (Ctrl+U / Ctrl+D)
const SCROLL_STEP: usize = 5;

/// Apply an action to the application state
/// All state mutations should go through this function to maintain consistency
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        AppAction::SetMethod(method) => {
            state.draft = state.draft.with_method(method);
        }
        AppAction::NextMethod => {
            state.draft = state.draft.with_method(state.draft.method.next());
        }
        AppAction::PreviousMethod => {
            state.draft = state.draft.with_method(state.draft.method.prev());
        }

        AppAction::StartEditingUrl => {
            state.input_mode = InputMode::EditingUrl;
        }
        AppAction::AppendToUrl(text) => {
            let url = format!("{}{}", state.draft.url, text);
            state.draft = state.draft.with_url(url);
        }
        AppAction::BackspaceUrl => {
            let mut url = state.draft.url.clone();
            url.pop();
            state.draft = state.draft.with_url(url);
        }
        AppAction::DeleteWordUrl => {
            let mut url = state.draft.url.clone();
            delete_url_segment(&mut url);
            state.draft = state.draft.with_url(url);
        }
        AppAction::ClearUrl => {
            state.draft = state.draft.with_url("");
        }

        AppAction::SelectHeaderUp => {
            state.selected_header = state.selected_header.saturating_sub(1);
        }
        AppAction::SelectHeaderDown => {
            if state.selected_header + 1 < state.draft.headers.len() {
                state.selected_header += 1;
            }
        }
        AppAction::AddHeader => {
            state.draft = state.draft.add_header();
            state.selected_header = state.draft.headers.len() - 1;
        }
        AppAction::RemoveSelectedHeader => {
            // The table always keeps one row to type into
            if state.draft.headers.len() > 1 {
                state.draft = state.draft.remove_header(state.selected_header);
                state.clamp_selected_header();
            }
        }
        AppAction::StartEditingHeader => {
            state.active_tab = EditorTab::Headers;
            state.clamp_selected_header();
            state.header_field = HeaderField::Key;
            state.input_mode = InputMode::EditingHeader;
        }
        AppAction::ToggleHeaderField => {
            state.header_field = match state.header_field {
                HeaderField::Key => HeaderField::Value,
                HeaderField::Value => HeaderField::Key,
            };
        }
        AppAction::AppendToHeader(text) => {
            let current = selected_header_text(state);
            state.draft = state.draft.edit_header(
                state.selected_header,
                state.header_field,
                format!("{current}{text}"),
            );
        }
        AppAction::BackspaceHeader => {
            let mut current = selected_header_text(state);
            current.pop();
            state.draft = state
                .draft
                .edit_header(state.selected_header, state.header_field, current);
        }
        AppAction::ClearHeaderField => {
            state.draft = state
                .draft
                .edit_header(state.selected_header, state.header_field, "");
        }

        AppAction::StartEditingBody => {
            state.active_tab = EditorTab::Body;
            state.input_mode = InputMode::EditingBody;
        }
        AppAction::AppendToBody(text) => {
            let body = format!("{}{}", state.draft.body, text);
            state.draft = state.draft.with_body(body);
        }
        AppAction::BackspaceBody => {
            let mut body = state.draft.body.clone();
            body.pop();
            state.draft = state.draft.with_body(body);
        }
        AppAction::ClearBody => {
            state.draft = state.draft.with_body("");
        }
        AppAction::FormatBody => match format_json(&state.draft.body) {
            Ok(pretty) => {
                state.draft = state.draft.with_body(pretty);
                state.status_message = Some("Body formatted".to_string());
            }
            Err(e) => {
                state.status_message = Some(e);
            }
        },

        AppAction::StopEditing => {
            state.input_mode = InputMode::Normal;
        }

        AppAction::SwitchTab(tab) => {
            state.active_tab = tab;
        }
        AppAction::ToggleTab => {
            state.active_tab = match state.active_tab {
                EditorTab::Headers => EditorTab::Body,
                EditorTab::Body => EditorTab::Headers,
            };
        }

        AppAction::ClearAll => {
            state.draft = state.draft.cleared();
            state.response = None;
            state.active_tab = EditorTab::Headers;
            state.selected_header = 0;
            state.header_field = HeaderField::Key;
            state.response_scroll = 0;
        }

        AppAction::ToggleTheme => {
            state.dark_mode = !state.dark_mode;
        }

        AppAction::EnterImportPathMode(default_path) => {
            state.input_mode = InputMode::EnteringImportPath;
            state.import_path_input = default_path;
        }
        AppAction::AppendToImportPath(text) => {
            state.import_path_input.push_str(&text);
        }
        AppAction::BackspaceImportPath => {
            state.import_path_input.pop();
        }
        AppAction::ExitImportPathMode => {
            state.input_mode = InputMode::Normal;
            state.import_path_input.clear();
        }

        AppAction::ShowAlert(message) => {
            state.alert = Some(message);
            state.input_mode = InputMode::Alert;
        }
        AppAction::DismissAlert => {
            state.alert = None;
            state.input_mode = InputMode::Normal;
        }

        AppAction::SetStatus(message) => {
            state.status_message = Some(message);
        }

        AppAction::ScrollUp => {
            state.response_scroll = state.response_scroll.saturating_sub(SCROLL_STEP);
        }
        AppAction::ScrollDown => {
            // The last response line stays on screen
            let last_line = state.response_line_count().saturating_sub(1);
            state.response_scroll = state
                .response_scroll
                .saturating_add(SCROLL_STEP)
                .min(last_line);
        }
    }
}

fn selected_header_text(state: &AppState) -> String {
    state
        .draft
        .headers
        .get(state.selected_header)
        .map(|row| match state.header_field {
            HeaderField::Key => row.key.clone(),
            HeaderField::Value => row.value.clone(),
        })
        .unwrap_or_default()
}

/// Pretty-print `text` as JSON with 2-space indentation
pub fn format_json(text: &str) -> Result<String, String> {
    serde_json::from_str::<serde_json::Value>(text)
        .map_err(|e| format!("Invalid JSON: {e}"))
        .and_then(|value| {
            serde_json::to_string_pretty(&value).map_err(|e| format!("Invalid JSON: {e}"))
        })
}

/// Ctrl+W in the URL field: drop back to the previous `/`, `:`, `.`, `?`, `&` or space
fn delete_url_segment(s: &mut String) {
    let trimmed_len = s.trim_end_matches(['/', ':', '.', '?', '&', ' ']).len();
    s.truncate(trimmed_len);

    if let Some(pos) = s.rfind(['/', ':', '.', '?', '&', ' ']) {
        s.truncate(pos + 1);
    } else {
        s.clear();
    }
}
