//! Shared HTTP helpers for provider and rate lookup calls.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::MoneyChangerError;

/// Build a client with the transport defaults (no timeout override).
pub fn default_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(&format!("Bearer {api_key}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Map a non-success HTTP status to a typed error.
pub fn status_to_error(status: u16, body: &str) -> MoneyChangerError {
    match status {
        401 | 403 => MoneyChangerError::Authentication(body.to_string()),
        429 => MoneyChangerError::RateLimited(body.to_string()),
        _ => MoneyChangerError::api(status, body),
    }
}
