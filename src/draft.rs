//! The editable request draft
//!
//! Every named operation on the draft is a pure function that returns a new
//! draft, so the composer can be exercised without a terminal.

use crate::types::{HeaderField, HeaderRow, HttpMethod};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDraft {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<HeaderRow>,
    pub body: String,
}

impl Default for RequestDraft {
    fn default() -> Self {
        Self {
            method: HttpMethod::Get,
            url: String::new(),
            headers: vec![HeaderRow::default()],
            body: String::new(),
        }
    }
}

impl RequestDraft {
    pub fn with_method(&self, method: HttpMethod) -> Self {
        Self {
            method,
            ..self.clone()
        }
    }

    pub fn with_url(&self, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..self.clone()
        }
    }

    pub fn with_body(&self, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..self.clone()
        }
    }

    /// Set the key or value of the row at `index`; out of range is a no-op
    pub fn edit_header(&self, index: usize, field: HeaderField, text: impl Into<String>) -> Self {
        let mut next = self.clone();
        if let Some(row) = next.headers.get_mut(index) {
            match field {
                HeaderField::Key => row.key = text.into(),
                HeaderField::Value => row.value = text.into(),
            }
        }
        next
    }

    pub fn add_header(&self) -> Self {
        let mut next = self.clone();
        next.headers.push(HeaderRow::default());
        next
    }

    /// Remove the row at `index`; out of range is a no-op.
    /// Keeping at least one row is left to the caller.
    pub fn remove_header(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.headers.len() {
            next.headers.remove(index);
        }
        next
    }

    pub fn cleared(&self) -> Self {
        Self::default()
    }

    /// Rows that would be transmitted or exported (non-empty key), in order
    pub fn named_headers(&self) -> Vec<HeaderRow> {
        self.headers
            .iter()
            .filter(|h| !h.key.is_empty())
            .cloned()
            .collect()
    }

    /// Flatten rows into a unique-key mapping.
    ///
    /// Rows with an empty key are skipped. A repeated key keeps the slot of
    /// its first occurrence and the value of its last.
    pub fn flatten_headers(&self) -> Vec<(String, String)> {
        let mut flat: Vec<(String, String)> = Vec::new();
        for row in self.headers.iter().filter(|h| !h.key.is_empty()) {
            match flat.iter_mut().find(|(key, _)| *key == row.key) {
                Some(entry) => entry.1 = row.value.clone(),
                None => flat.push((row.key.clone(), row.value.clone())),
            }
        }
        flat
    }

    /// Body to transmit, only for POST/PUT/PATCH with non-empty text
    pub fn outbound_body(&self) -> Option<&str> {
        if self.method.supports_body() && !self.body.is_empty() {
            Some(&self.body)
        } else {
            None
        }
    }
}
