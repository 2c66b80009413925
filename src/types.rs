use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// The fixed set of methods the composer can send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Check if this method carries a request body (POST/PUT/PATCH)
    pub fn supports_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }

    /// Next method in selector order, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous method in selector order, wrapping around
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "PATCH" => Ok(HttpMethod::Patch),
            other => Err(format!("Unsupported method: {other}")),
        }
    }
}

/// One editable key/value row in the headers table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRow {
    pub key: String,
    pub value: String,
}

impl HeaderRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Which half of a header row is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    Key,
    Value,
}

/// Outcome of sending a request
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseResult {
    /// Body of a response declared as JSON
    Json(serde_json::Value),
    /// Any other body, verbatim
    Text(String),
    /// Network, URL or parse failure
    Error(String),
}

impl ResponseResult {
    /// Text shown in the response pane
    pub fn render(&self) -> String {
        match self {
            ResponseResult::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            ResponseResult::Text(text) => text.clone(),
            ResponseResult::Error(message) => {
                let value = serde_json::json!({ "error": message });
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResponseResult::Error(_))
    }
}

/// Represents the completed exchange kept in the response slot
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub result: ResponseResult,

    /// HTTP status code and reason, absent when no response arrived
    pub status: Option<(u16, String)>,

    /// Time taken from send to fully read body
    pub duration: Duration,
}

impl ApiResponse {
    /// Creates an error response with the given error message
    pub fn error(message: String, duration: Duration) -> Self {
        Self {
            result: ResponseResult::Error(message),
            status: None,
            duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    /// Typing into the URL field
    EditingUrl,
    /// Typing into one cell of the headers table
    EditingHeader,
    /// Typing into the body text area
    EditingBody,
    /// Entering the path of a file to import
    EnteringImportPath,
    /// Blocking notification; only dismiss keys are handled
    Alert,
}

/// Tracks which tab is active in the request editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorTab {
    Headers,
    Body,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse_is_case_insensitive() {
        assert_eq!("post".parse::<HttpMethod>(), Ok(HttpMethod::Post));
        assert_eq!("  Patch ".parse::<HttpMethod>(), Ok(HttpMethod::Patch));
        assert!("TRACE".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_method_cycle_wraps() {
        assert_eq!(HttpMethod::Patch.next(), HttpMethod::Get);
        assert_eq!(HttpMethod::Get.prev(), HttpMethod::Patch);
        assert_eq!(HttpMethod::Post.next(), HttpMethod::Put);
    }

    #[test]
    fn test_supports_body() {
        assert!(HttpMethod::Post.supports_body());
        assert!(HttpMethod::Put.supports_body());
        assert!(HttpMethod::Patch.supports_body());
        assert!(!HttpMethod::Get.supports_body());
        assert!(!HttpMethod::Delete.supports_body());
    }

    #[test]
    fn test_render_json_pretty() {
        let result = ResponseResult::Json(serde_json::json!({"a": 1}));
        assert_eq!(result.render(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_render_text_verbatim() {
        let result = ResponseResult::Text("<h1>hi</h1>\n".to_string());
        assert_eq!(result.render(), "<h1>hi</h1>\n");
    }

    #[test]
    fn test_render_error_as_object() {
        let result = ResponseResult::Error("connection refused".to_string());
        assert_eq!(result.render(), "{\n  \"error\": \"connection refused\"\n}");
        assert!(result.is_error());
    }
}
