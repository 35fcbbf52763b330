//! Notification dispatch adapter.
//!
//! Client-side (csr): one POST to the email-dispatch REST endpoint per send.
//! Native builds: sends report a network failure.
//!
//! The client is constructed explicitly from [`EmailJsConfig`]; the public
//! key travels with every request instead of living in global init state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use async_trait::async_trait;

use super::types::{EmailPayload, EmailSendRequest};
use crate::config::EmailJsConfig;
use crate::error::{AppError, NetworkOp};

#[async_trait(?Send)]
pub trait NotificationDispatch {
    /// Send one templated email. No batching, queueing, or retry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Network`] on transport failure or a non-success status.
    async fn send(&self, payload: &EmailPayload) -> Result<(), AppError>;
}

fn send_failed(detail: impl Into<String>) -> AppError {
    AppError::network(NetworkOp::SendEmail, detail)
}

#[cfg(any(test, feature = "csr"))]
fn status_failed_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("send request failed: {status}")
    } else {
        format!("send request failed: {status} ({body})")
    }
}

#[derive(Clone, Debug)]
pub struct EmailJs {
    config: EmailJsConfig,
}

impl EmailJs {
    pub fn new(config: EmailJsConfig) -> Self {
        Self { config }
    }

    /// Request body for `payload`, keyed by service, template, and public key.
    #[must_use]
    pub fn request<'a>(&'a self, payload: &'a EmailPayload) -> EmailSendRequest<'a> {
        EmailSendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: payload,
        }
    }
}

#[async_trait(?Send)]
impl NotificationDispatch for EmailJs {
    async fn send(&self, payload: &EmailPayload) -> Result<(), AppError> {
        #[cfg(feature = "csr")]
        {
            let body = self.request(payload);
            let resp = gloo_net::http::Request::post(&self.config.endpoint)
                .json(&body)
                .map_err(|e| send_failed(e.to_string()))?
                .send()
                .await
                .map_err(|e| send_failed(e.to_string()))?;
            if !resp.ok() {
                let detail = resp.text().await.unwrap_or_default();
                return Err(send_failed(status_failed_message(resp.status(), &detail)));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
            Err(send_failed("not available outside the browser"))
        }
    }
}
