//! The two-phase send protocol.
//!
//! Browsers let a cross-origin POST fire while blocking the caller from
//! reading the response. Rather than failing silently, a blocked standard
//! request is retried once in the opaque fire-and-forget mode, and the
//! user is told the reply could not be read.

use tracing::{debug, warn};

use jarvis_common::{Notification, Result};

use crate::{reply, Message, OutboundMessage, Transport};

use super::manager::ConversationSession;
use super::types::PendingGuard;

/// Identifies this widget in the webhook body.
const MESSAGE_SOURCE: &str = "jarvis";

/// Appended when only the opaque fallback went through.
pub const CORS_NOTICE: &str = "Your message was delivered, but cross-origin \
restrictions prevent me from reading the response. Running with reduced \
functionality.";

/// Appended when even the opaque fallback failed.
pub const CONNECTION_ERROR: &str =
    "Sorry, I couldn't reach the configured endpoint. Please check the URL \
and your connection.";

/// Terminal classification of one send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Empty input; nothing was sent and nothing changed.
    Skipped,
    /// Standard request succeeded and the reply was displayed.
    Delivered,
    /// Only the opaque fallback completed; the reply is unreadable.
    Degraded,
    /// Neither request mode completed.
    Failed,
}

impl ConversationSession {
    /// Sends `text` to the webhook endpoint and appends both the user
    /// echo and the terminal reply message.
    ///
    /// Whitespace-only input is skipped. A second call while one is in
    /// flight returns `ChatError::Busy`; any terminal outcome grows the
    /// history by exactly two messages and returns the session to idle.
    ///
    /// The whole protocol runs inline here: the pending guard borrows
    /// the flag for the duration of the call, so all other state is
    /// touched through disjoint field borrows only.
    pub async fn send(
        &mut self,
        text: &str,
        endpoint: &str,
        transport: &dyn Transport,
    ) -> Result<SendOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(SendOutcome::Skipped);
        }

        let _guard = PendingGuard::acquire(&self.pending)?;

        // Optimistic echo before the network is touched.
        self.messages.push(Message::new(text, true));

        let body = OutboundMessage {
            message: text.to_string(),
            source: MESSAGE_SOURCE.to_string(),
        };

        debug!(endpoint, "dispatching webhook request");

        let outcome = match transport.post(endpoint, &body).await {
            Ok(payload) => {
                let content = reply::normalize(&payload);
                self.messages.push(Message::new(content, false));
                self.cors_degraded = false;
                SendOutcome::Delivered
            }
            Err(e) => {
                warn!("standard request blocked, retrying opaque: {e}");

                // Opaque success only proves the request fired, so both
                // branches leave the session degraded.
                let outcome = match transport.send_opaque(endpoint, &body).await {
                    Ok(()) => {
                        debug!("opaque fallback completed");
                        self.messages.push(Message::new(CORS_NOTICE, false));
                        self.notifications.push(Notification::warning(
                            "Endpoint reachable, but the response is blocked by CORS",
                        ));
                        SendOutcome::Degraded
                    }
                    Err(e) => {
                        warn!("opaque fallback failed: {e}");
                        self.messages.push(Message::new(CONNECTION_ERROR, false));
                        self.notifications
                            .push(Notification::error("Failed to get a response"));
                        SendOutcome::Failed
                    }
                };
                self.cors_degraded = true;
                outcome
            }
        };

        Ok(outcome)
    }
}
