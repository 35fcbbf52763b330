//! Poem source adapter.
//!
//! Client-side (csr): one GET via `gloo-net` per fetch.
//! Native builds: the HTTP path reports a network failure, since the
//! endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors, non-success statuses, and malformed bodies all collapse
//! into `AppError::Network` so the controller handles them uniformly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "poems_test.rs"]
mod poems_test;

use async_trait::async_trait;

use super::types::PoemRecord;
use crate::error::{AppError, NetworkOp};
use crate::state::poem::Poem;

#[async_trait(?Send)]
pub trait PoemSource {
    /// Fetch one random poem.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Network`] on any transport, status, or shape failure.
    async fn fetch_random(&self) -> Result<Poem, AppError>;
}

fn fetch_failed(detail: impl Into<String>) -> AppError {
    AppError::network(NetworkOp::FetchPoem, detail)
}

#[cfg(any(test, feature = "csr"))]
fn status_failed_message(status: u16) -> String {
    format!("poem request failed: {status}")
}

/// Normalize a random-poem response body.
///
/// The body must be a JSON array whose first element has a title, an author,
/// and at least one line. Anything else is a failure.
///
/// # Errors
///
/// Returns [`AppError::Network`] when the body does not match.
pub fn parse_random_response(body: &str) -> Result<Poem, AppError> {
    let records: Vec<PoemRecord> =
        serde_json::from_str(body).map_err(|e| fetch_failed(format!("malformed poem response: {e}")))?;
    let record = records
        .into_iter()
        .next()
        .ok_or_else(|| fetch_failed("poem response was empty"))?;
    if record.lines.is_empty() {
        return Err(fetch_failed("poem has no lines"));
    }
    Ok(Poem::new(record.title, record.author, record.lines))
}

/// HTTP poem source pointed at a fixed parameterless endpoint.
#[derive(Clone, Debug)]
pub struct PoetryDb {
    endpoint: String,
}

impl PoetryDb {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl PoemSource for PoetryDb {
    async fn fetch_random(&self) -> Result<Poem, AppError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint)
                .send()
                .await
                .map_err(|e| fetch_failed(e.to_string()))?;
            if !resp.ok() {
                return Err(fetch_failed(status_failed_message(resp.status())));
            }
            let body = resp.text().await.map_err(|e| fetch_failed(e.to_string()))?;
            parse_random_response(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(fetch_failed("not available outside the browser"))
        }
    }
}
