use crate::draft::RequestDraft;
use crate::state::AppState;
use crate::types::{ApiResponse, HttpMethod, ResponseResult};
use reqwest::header::CONTENT_TYPE;
use std::sync::{Arc, RwLock};
use std::time::Instant;
use url::Url;

/// A request ready to go on the wire
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Unique keys, in first-seen order
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Build the outbound request for a draft. `None` when the URL is empty.
pub fn prepare(draft: &RequestDraft) -> Option<OutboundRequest> {
    if draft.url.is_empty() {
        return None;
    }

    Some(OutboundRequest {
        method: draft.method,
        url: draft.url.clone(),
        headers: draft.flatten_headers(),
        body: draft.outbound_body().map(str::to_string),
    })
}

/// Sends the current draft in the background. Returns false, without touching
/// the response slot, when there is nothing to send.
pub fn send_background(state: Arc<RwLock<AppState>>, client: reqwest::Client) -> bool {
    let request = {
        let Ok(mut s) = state.write() else {
            return false;
        };
        let Some(request) = prepare(&s.draft) else {
            tracing::debug!("send skipped: empty URL");
            return false;
        };
        s.in_flight += 1;
        request
    };

    tracing::info!(method = %request.method, url = %request.url, "sending request");

    tokio::spawn(async move {
        let response = execute(&client, &request).await;

        match &response.result {
            ResponseResult::Error(message) => {
                tracing::warn!(url = %request.url, error = %message, "request failed")
            }
            _ => tracing::info!(
                url = %request.url,
                status = ?response.status.as_ref().map(|(code, _)| *code),
                elapsed_ms = response.duration.as_millis() as u64,
                "response received"
            ),
        }

        // Last one to finish owns the slot
        if let Ok(mut s) = state.write() {
            s.response = Some(response);
            s.in_flight = s.in_flight.saturating_sub(1);
            s.response_scroll = 0;
        }
    });

    true
}

/// Execute the request once and classify what comes back
pub async fn execute(client: &reqwest::Client, request: &OutboundRequest) -> ApiResponse {
    let start = Instant::now();

    let url = match Url::parse(&request.url) {
        Ok(url) => url,
        Err(e) => return ApiResponse::error(format!("Invalid URL: {e}"), start.elapsed()),
    };

    let mut request_builder = client.request(to_reqwest_method(request.method), url);

    for (key, value) in &request.headers {
        request_builder = request_builder.header(key.as_str(), value.as_str());
    }

    if let Some(body) = &request.body {
        request_builder = request_builder.body(body.clone());
    }

    match request_builder.send().await {
        Ok(response) => {
            let status = response.status();
            let status = (
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown").to_string(),
            );

            let result = read_body(response).await;

            ApiResponse {
                result,
                status: Some(status),
                duration: start.elapsed(),
            }
        }
        // Network error or connection failure (didn't get HTTP response)
        Err(e) => ApiResponse::error(format!("Request failed: {e}"), start.elapsed()),
    }
}

async fn read_body(response: reqwest::Response) -> ResponseResult {
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    if is_json_content_type(content_type.as_deref()) {
        match response.json::<serde_json::Value>().await {
            Ok(value) => ResponseResult::Json(value),
            Err(e) => ResponseResult::Error(format!("Failed to parse JSON body: {e}")),
        }
    } else {
        match response.text().await {
            Ok(text) => ResponseResult::Text(text),
            Err(e) => ResponseResult::Error(format!("Failed to read response body: {e}")),
        }
    }
}

pub(crate) fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.contains("application/json"))
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Patch => reqwest::Method::PATCH,
    }
}
