//! Transport implementation over reqwest.

use async_trait::async_trait;
use tracing::debug;

use jarvis_common::TransportError;
use jarvis_core::{OutboundMessage, Transport};

/// JSON POST client for the webhook endpoint.
///
/// Only a connect timeout is set; a reply may take as long as the
/// workflow behind the endpoint needs, so no overall request timeout is
/// applied and a hung request keeps the session pending.
pub struct WebhookClient {
    http: reqwest::Client,
}

impl WebhookClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("failed to build HTTP client"),
        }
    }
}

impl Default for WebhookClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for WebhookClient {
    async fn post(
        &self,
        url: &str,
        body: &OutboundMessage,
    ) -> Result<serde_json::Value, TransportError> {
        debug!(url, "webhook request");

        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }

    async fn send_opaque(&self, url: &str, body: &OutboundMessage) -> Result<(), TransportError> {
        debug!(url, "opaque webhook request");

        // The response is deliberately dropped unread; delivery is all
        // this mode can report.
        self.http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(())
    }
}
