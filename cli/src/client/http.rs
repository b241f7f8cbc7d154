use crate::collection::PreparedRequest;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("HTTP Error: {0}")]
    Network(String),

    #[error("HTTP Error: server responded with status {status}")]
    Status { status: u16, body: String },

    #[error("HTTP Error: invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            HttpError::InvalidRequest(error.to_string())
        } else {
            HttpError::Network(error.to_string())
        }
    }
}

#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub elapsed_ms: u64,
}

fn has_header(request: &PreparedRequest, name: &str) -> bool {
    request
        .headers
        .iter()
        .any(|(key, _)| key.eq_ignore_ascii_case(name))
}

/// Sends `request` and waits for the whole response body.
///
/// No timeout is applied unless one is given. Non-2xx answers are returned as
/// `HttpError::Status` carrying the response body.
pub async fn execute_request(
    request: &PreparedRequest,
    timeout: Option<Duration>,
) -> Result<HttpResponse, HttpError> {
    log::debug!(
        "Executing {} request '{}' to URL: {}",
        request.method,
        request.path,
        request.url
    );

    let method = request
        .method
        .to_reqwest_method()
        .map_err(HttpError::InvalidRequest)?;

    let client = reqwest::Client::new();
    let mut req_builder = client.request(method, &request.url);

    if !has_header(request, "user-agent") {
        req_builder = req_builder.header(
            reqwest::header::USER_AGENT,
            crate::core::version::user_agent(),
        );
    }

    for (key, value) in &request.headers {
        log::debug!("Adding header: {key}: {value}");
        req_builder = req_builder.header(key.as_str(), value.as_str());
    }

    if let Some(body) = &request.body {
        if crate::core::json::is_json_content(body) && !has_header(request, "content-type") {
            req_builder = req_builder.header(
                reqwest::header::CONTENT_TYPE,
                crate::core::json::CONTENT_TYPE,
            );
        }
        req_builder = req_builder.body(body.clone());
    }

    if let Some(timeout) = timeout {
        req_builder = req_builder.timeout(timeout);
    }

    let start = Instant::now();
    let response = req_builder.send().await?;
    let status = response.status();

    let mut headers = BTreeMap::new();
    for (key, value) in response.headers() {
        if let Ok(value_str) = value.to_str() {
            headers.insert(key.to_string(), value_str.to_string());
        }
    }

    let body = response.text().await?;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    log::debug!("Response status code was {}", status.as_u16());

    if !status.is_success() {
        return Err(HttpError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(HttpResponse {
        status: status.as_u16(),
        headers,
        body,
        elapsed_ms,
    })
}
