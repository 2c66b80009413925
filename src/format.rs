//! Plain-text request files
//!
//! A saved request is four labelled sections in fixed order:
//!
//! ```text
//! URL: https://example.com/api
//! Method: POST
//! Headers: [
//!   {
//!     "key": "X-Test",
//!     "value": "1"
//!   }
//! ]
//! Body: {"a":1}
//! ```
//!
//! Import is tolerant: every section is optional and missing sections leave
//! the draft untouched. Sections are applied in file order, so a failure part
//! way through keeps whatever was already applied.

use crate::draft::RequestDraft;
use crate::types::{HeaderRow, HttpMethod};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const URL_LABEL: &str = "URL:";
const METHOD_LABEL: &str = "Method:";
const HEADERS_LABEL: &str = "Headers:";
const BODY_LABEL: &str = "Body:";

/// Shown to the user for any import failure
pub const IMPORT_FAILED_MESSAGE: &str = "Failed to import file. Please check the format.";

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported method `{0}`")]
    UnknownMethod(String),

    #[error("header entry {index} is not a key/value object")]
    InvalidHeaderRow { index: usize },
}

/// Serialize the draft into the saved-request text
pub fn export_text(draft: &RequestDraft) -> String {
    let headers = serde_json::to_string_pretty(&draft.named_headers())
        .unwrap_or_else(|_| "[]".to_string());

    format!(
        "{URL_LABEL} {}\n{METHOD_LABEL} {}\n{HEADERS_LABEL} {}\n{BODY_LABEL} {}",
        draft.url, draft.method, headers, draft.body
    )
}

/// Write the saved-request text to `path`
pub fn export_to_file(draft: &RequestDraft, path: &Path) -> std::io::Result<()> {
    fs::write(path, export_text(draft))
}

/// Read the raw text of a saved request
pub fn read_request_file(path: &Path) -> Result<String, ImportError> {
    fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply the sections found in `text` to `draft`, in order URL, Method,
/// Headers, Body. On error the sections before the failing one stay applied.
pub fn import_into(draft: &mut RequestDraft, text: &str) -> Result<(), ImportError> {
    let sections = Sections::parse(text);

    if let Some(url) = sections.url {
        *draft = draft.with_url(url.trim());
    }

    if let Some(method) = sections.method {
        let name = method.trim().to_uppercase();
        let method: HttpMethod = name.parse().map_err(|_| ImportError::UnknownMethod(name))?;
        *draft = draft.with_method(method);
    }

    if let Some(block) = sections.headers {
        let headers = parse_header_rows(block.trim())?;
        *draft = RequestDraft {
            headers,
            ..draft.clone()
        };
    }

    if let Some(body) = sections.body {
        *draft = draft.with_body(body.trim());
    }

    Ok(())
}

/// Raw text captured for each label; `None` when the label is absent
#[derive(Debug, Default, PartialEq)]
struct Sections<'a> {
    url: Option<&'a str>,
    method: Option<&'a str>,
    headers: Option<&'a str>,
    body: Option<&'a str>,
}

impl<'a> Sections<'a> {
    fn parse(text: &'a str) -> Self {
        let lines = split_lines(text);

        let url = find_label(&lines, URL_LABEL, 0).map(|idx| &lines[idx].1[URL_LABEL.len()..]);
        let method =
            find_label(&lines, METHOD_LABEL, 0).map(|idx| &lines[idx].1[METHOD_LABEL.len()..]);

        // Headers only count when a Body label follows them
        let headers = find_label(&lines, HEADERS_LABEL, 0).and_then(|idx| {
            let start = lines[idx].0 + HEADERS_LABEL.len();
            find_label(&lines, BODY_LABEL, idx + 1).map(|body_idx| &text[start..lines[body_idx].0])
        });

        let body = find_label(&lines, BODY_LABEL, 0)
            .map(|idx| &text[lines[idx].0 + BODY_LABEL.len()..]);

        Self {
            url,
            method,
            headers,
            body,
        }
    }
}

/// Each line with the byte offset it starts at, terminator stripped
fn split_lines(text: &str) -> Vec<(usize, &str)> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for raw in text.split_inclusive('\n') {
        lines.push((offset, raw.trim_end_matches(['\n', '\r'])));
        offset += raw.len();
    }
    lines
}

/// Index of the first line at or after `from` that starts with `label`
fn find_label(lines: &[(usize, &str)], label: &str, from: usize) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, (_, line))| line.starts_with(label))
        .map(|(idx, _)| idx)
}

/// Parse the headers block. Anything that is not a non-empty JSON array
/// falls back to a single empty row.
fn parse_header_rows(block: &str) -> Result<Vec<HeaderRow>, ImportError> {
    let items = match serde_json::from_str::<Value>(block) {
        Ok(Value::Array(items)) if !items.is_empty() => items,
        _ => return Ok(vec![HeaderRow::default()]),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| header_row_from_value(index, item))
        .collect()
}

fn header_row_from_value(index: usize, item: Value) -> Result<HeaderRow, ImportError> {
    let Value::Object(map) = item else {
        return Err(ImportError::InvalidHeaderRow { index });
    };

    let field = |name: &str| match map.get(name) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ImportError::InvalidHeaderRow { index }),
    };

    Ok(HeaderRow {
        key: field("key")?,
        value: field("value")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HeaderField;

    fn example_draft() -> RequestDraft {
        RequestDraft {
            method: HttpMethod::Post,
            url: "https://example.com/api".to_string(),
            headers: vec![HeaderRow::new("X-Test", "1")],
            body: "{\"a\":1}".to_string(),
        }
    }

    #[test]
    fn test_export_example() {
        let text = export_text(&example_draft());
        assert_eq!(
            text,
            "URL: https://example.com/api\n\
             Method: POST\n\
             Headers: [\n  {\n    \"key\": \"X-Test\",\n    \"value\": \"1\"\n  }\n]\n\
             Body: {\"a\":1}"
        );
    }

    #[test]
    fn test_export_skips_unnamed_rows() {
        let draft = example_draft()
            .add_header()
            .edit_header(1, HeaderField::Value, "orphan");
        let text = export_text(&draft);
        assert!(!text.contains("orphan"));
    }

    #[test]
    fn test_export_empty_headers() {
        let text = export_text(&RequestDraft::default());
        assert_eq!(text, "URL: \nMethod: GET\nHeaders: []\nBody: ");
    }

    #[test]
    fn test_round_trip_example() {
        let original = example_draft();
        let mut imported = RequestDraft::default();
        import_into(&mut imported, &export_text(&original)).unwrap();
        assert_eq!(imported, original);
    }

    #[test]
    fn test_round_trip_keeps_header_order() {
        let original = RequestDraft {
            method: HttpMethod::Put,
            url: "http://localhost:8080/items/7".to_string(),
            headers: vec![
                HeaderRow::new("Content-Type", "application/json"),
                HeaderRow::new("Authorization", "Bearer abc"),
                HeaderRow::new("X-Trace", ""),
            ],
            body: "{\n  \"name\": \"widget\"\n}".to_string(),
        };

        let mut imported = RequestDraft::default();
        import_into(&mut imported, &export_text(&original)).unwrap();
        assert_eq!(imported, original);
    }

    #[test]
    fn test_import_normalizes_method_case() {
        let mut draft = RequestDraft::default();
        import_into(&mut draft, "URL: http://x\nMethod:  patch  \n").unwrap();
        assert_eq!(draft.method, HttpMethod::Patch);
        assert_eq!(draft.url, "http://x");
    }

    #[test]
    fn test_import_missing_sections_leave_draft_unchanged() {
        let mut draft = example_draft();
        import_into(&mut draft, "Method: DELETE\n").unwrap();

        assert_eq!(draft.method, HttpMethod::Delete);
        assert_eq!(draft.url, "https://example.com/api");
        assert_eq!(draft.headers, vec![HeaderRow::new("X-Test", "1")]);
        assert_eq!(draft.body, "{\"a\":1}");
    }

    #[test]
    fn test_import_unparseable_headers_fall_back() {
        let mut draft = example_draft();
        let text = "URL: http://new\nMethod: PUT\nHeaders: {not json\nBody: hello\n";
        import_into(&mut draft, text).unwrap();

        assert_eq!(draft.url, "http://new");
        assert_eq!(draft.method, HttpMethod::Put);
        assert_eq!(draft.headers, vec![HeaderRow::default()]);
        assert_eq!(draft.body, "hello");
    }

    #[test]
    fn test_import_non_array_headers_fall_back() {
        let mut draft = example_draft();
        import_into(&mut draft, "Headers: {\"key\": \"A\"}\nBody: x").unwrap();
        assert_eq!(draft.headers, vec![HeaderRow::default()]);
    }

    #[test]
    fn test_import_empty_array_falls_back() {
        let mut draft = example_draft();
        import_into(&mut draft, "Headers: []\nBody: x").unwrap();
        assert_eq!(draft.headers, vec![HeaderRow::default()]);
    }

    #[test]
    fn test_import_headers_without_body_label_ignored() {
        let mut draft = example_draft();
        import_into(&mut draft, "Headers: [{\"key\": \"A\", \"value\": \"1\"}]\n").unwrap();
        assert_eq!(draft.headers, vec![HeaderRow::new("X-Test", "1")]);
    }

    #[test]
    fn test_import_body_keeps_inner_lines() {
        let mut draft = RequestDraft::default();
        import_into(&mut draft, "Body: \n  line one\nNote: second line\n\n").unwrap();
        assert_eq!(draft.body, "line one\nNote: second line");
    }

    #[test]
    fn test_import_handles_crlf() {
        let mut draft = RequestDraft::default();
        let text = "URL: http://win\r\nMethod: POST\r\nHeaders: [{\"key\":\"A\",\"value\":\"b\"}]\r\nBody: data\r\n";
        import_into(&mut draft, text).unwrap();

        assert_eq!(draft.url, "http://win");
        assert_eq!(draft.method, HttpMethod::Post);
        assert_eq!(draft.headers, vec![HeaderRow::new("A", "b")]);
        assert_eq!(draft.body, "data");
    }

    #[test]
    fn test_import_unknown_method_keeps_url() {
        let mut draft = example_draft();
        let result = import_into(&mut draft, "URL: http://partial\nMethod: TRACE\nBody: new\n");

        assert!(matches!(result, Err(ImportError::UnknownMethod(ref m)) if m == "TRACE"));
        // URL applied before the failure, body after it was not
        assert_eq!(draft.url, "http://partial");
        assert_eq!(draft.method, HttpMethod::Post);
        assert_eq!(draft.body, "{\"a\":1}");
    }

    #[test]
    fn test_import_invalid_header_entry() {
        let mut draft = example_draft();
        let result = import_into(&mut draft, "Method: GET\nHeaders: [{\"key\":\"A\"}, 5]\nBody: new");

        assert!(matches!(result, Err(ImportError::InvalidHeaderRow { index: 1 })));
        assert_eq!(draft.method, HttpMethod::Get);
        assert_eq!(draft.headers, vec![HeaderRow::new("X-Test", "1")]);
        assert_eq!(draft.body, "{\"a\":1}");
    }

    #[test]
    fn test_import_missing_fields_become_empty() {
        let mut draft = RequestDraft::default();
        import_into(&mut draft, "Headers: [{\"key\":\"Only-Key\"}]\nBody:").unwrap();
        assert_eq!(draft.headers, vec![HeaderRow::new("Only-Key", "")]);
        assert_eq!(draft.body, "");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.txt");

        export_to_file(&example_draft(), &path).unwrap();

        let mut draft = RequestDraft::default();
        import_into(&mut draft, &read_request_file(&path).unwrap()).unwrap();
        assert_eq!(draft, example_draft());
    }

    #[test]
    fn test_read_request_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.txt");

        let err = read_request_file(&path).unwrap_err();

        assert!(matches!(err, ImportError::Read { path: ref p, .. } if *p == path));
        assert!(err.to_string().contains("gone.txt"));
    }
}
