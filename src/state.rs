use crate::draft::RequestDraft;
use crate::types::{ApiResponse, EditorTab, HeaderField, InputMode};

#[derive(Debug, Clone)]
pub struct AppState {
    /// The request being composed
    pub draft: RequestDraft,

    /// Single response slot; the most recently finished send wins
    pub response: Option<ApiResponse>,

    /// Sends started but not yet finished (drives the spinner only)
    pub in_flight: usize,

    pub input_mode: InputMode,
    pub active_tab: EditorTab,

    /// Row highlighted in the headers table
    pub selected_header: usize,
    /// Cell being typed into while editing a header row
    pub header_field: HeaderField,

    pub import_path_input: String,

    /// Blocking message shown in a modal
    pub alert: Option<String>,

    /// One-line feedback in the footer (saved, imported, copied...)
    pub status_message: Option<String>,

    pub dark_mode: bool,

    /// Scroll offset for the response pane (lines)
    pub response_scroll: usize,

    /// Briefly set after copying the response to the clipboard
    pub yank_flash: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            draft: RequestDraft::default(),
            response: None,
            in_flight: 0,
            input_mode: InputMode::Normal,
            active_tab: EditorTab::Headers,
            selected_header: 0,
            header_field: HeaderField::Key,
            import_path_input: String::new(),
            alert: None,
            status_message: None,
            dark_mode: true,
            response_scroll: 0,
            yank_flash: false,
        }
    }
}

impl AppState {
    pub fn is_sending(&self) -> bool {
        self.in_flight > 0
    }

    /// Lines in the rendered response pane, before wrapping
    pub fn response_line_count(&self) -> usize {
        self.response
            .as_ref()
            .map_or(0, |response| response.result.render().lines().count())
    }

    /// Keep the header selection inside the table after rows change
    pub fn clamp_selected_header(&mut self) {
        let last = self.draft.headers.len().saturating_sub(1);
        if self.selected_header > last {
            self.selected_header = last;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResponseResult;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_response_line_count_follows_render() {
        let mut state = AppState::default();
        assert_eq!(state.response_line_count(), 0);

        state.response = Some(ApiResponse {
            result: ResponseResult::Json(json!({"a": 1, "b": 2})),
            status: Some((200, "OK".to_string())),
            duration: Duration::ZERO,
        });
        // {, "a", "b", }
        assert_eq!(state.response_line_count(), 4);
    }
}
