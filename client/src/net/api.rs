//! HTTP client for the remote greetings endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! endpoint is only contacted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Status codes are not inspected except for the single-record 404. A body
//! that decodes into the expected shape is a success whatever the status.
//! For the create call that shape is any JSON value, so only a non-JSON body
//! or a transport failure surfaces as [`ApiError`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;

use super::types::{CreatedGreeting, GreetingDraft, GreetingRecord};

/// Endpoint serving both the list read and the create write.
pub const DEFAULT_GREETINGS_ENDPOINT: &str =
    "https://functions.poehali.dev/697c4fb0-53e9-48c4-8e3c-562e77967c89";

/// Failure talking to the greetings endpoint.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Network(String),
    /// The request body could not be encoded.
    #[error("request encoding failed: {0}")]
    Encode(String),
    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Operations the board needs from the remote endpoint.
#[async_trait(?Send)]
pub trait GreetingsApi {
    /// `GET <endpoint>`: every stored greeting in server order.
    async fn list_greetings(&self) -> Result<Vec<GreetingRecord>, ApiError>;

    /// `POST <endpoint>` with the draft as the JSON body.
    async fn create_greeting(&self, draft: &GreetingDraft) -> Result<CreatedGreeting, ApiError>;

    /// `GET <endpoint>?id=<id>`. `Ok(None)` when the endpoint answers 404.
    async fn get_greeting(&self, id: &str) -> Result<Option<GreetingRecord>, ApiError>;
}

/// [`GreetingsApi`] backed by `fetch` in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpGreetingsApi;

/// Endpoint URL, overridable at build time with `GREETINGS_API_URL`.
#[must_use]
pub fn greetings_endpoint() -> &'static str {
    match option_env!("GREETINGS_API_URL") {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_GREETINGS_ENDPOINT,
    }
}

/// URL of a single greeting lookup; the id is percent-encoded.
#[must_use]
pub fn greeting_lookup_url(endpoint: &str, id: &str) -> String {
    format!("{endpoint}?id={}", utf8_percent_encode(id, NON_ALPHANUMERIC))
}

/// Decode a response body, ignoring the status it came with.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is not JSON of shape `T`.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn is_not_found(status: u16) -> bool {
    status == 404
}

#[async_trait(?Send)]
impl GreetingsApi for HttpGreetingsApi {
    async fn list_greetings(&self) -> Result<Vec<GreetingRecord>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(greetings_endpoint())
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            decode_body(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn create_greeting(&self, draft: &GreetingDraft) -> Result<CreatedGreeting, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(greetings_endpoint())
                .json(draft)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            decode_body(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
            Err(ApiError::Unavailable)
        }
    }

    async fn get_greeting(&self, id: &str) -> Result<Option<GreetingRecord>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = greeting_lookup_url(greetings_endpoint(), id);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if is_not_found(resp.status()) {
                return Ok(None);
            }
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            decode_body(&body).map(Some)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }
}
