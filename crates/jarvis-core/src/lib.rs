//! Conversation core for the JARVIS chat widget.
//!
//! Provides the pieces the UI shell builds on:
//! - Response normalization (webhook payloads come back in several shapes)
//! - Session management with optimistic echo and a cross-origin fallback
//! - Save/load/clear against a pluggable store
//! - Plain-text transcript export
//!
//! Speech capture/synthesis and rendering stay behind trait seams; this
//! crate never touches the network or the filesystem directly.

pub mod clipboard;
pub mod export;
pub mod reply;
pub mod session;
pub mod speech;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use clipboard::Clipboard;
pub use session::{ConversationSession, SendOutcome};
pub use speech::{SpeechSynthesizer, SpeechToText};

use jarvis_common::{new_id, StoreError, TransportError};

/// A single conversation entry. Immutable once created; the persisted
/// form uses camelCase keys and RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(content: impl Into<String>, is_user: bool) -> Self {
        Self {
            id: new_id(),
            content: content.into(),
            is_user,
            timestamp: Utc::now(),
        }
    }

    /// Display name for the message author.
    pub fn speaker(&self) -> &'static str {
        if self.is_user {
            "User"
        } else {
            "JARVIS"
        }
    }
}

/// The JSON body POSTed to the webhook endpoint.
#[derive(Debug, Clone, serde::Serialize)]
pub struct OutboundMessage {
    pub message: String,
    pub source: String,
}

/// Network seam for the webhook endpoint.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Standard request mode: POST the body and decode the JSON reply.
    /// Non-2xx status and undecodable bodies are errors.
    async fn post(
        &self,
        url: &str,
        body: &OutboundMessage,
    ) -> Result<serde_json::Value, TransportError>;

    /// Opaque fire-and-forget mode: the request goes out, but the
    /// response body is never read (the no-cors analog). Success only
    /// means the request completed, not that anything was understood.
    async fn send_opaque(&self, url: &str, body: &OutboundMessage) -> Result<(), TransportError>;
}

/// Persistence seam for conversation history and the endpoint URL.
pub trait ConversationStore {
    fn save_conversation(&self, messages: &[Message]) -> Result<(), StoreError>;

    /// A missing conversation is an empty sequence, not an error.
    fn load_conversation(&self) -> Result<Vec<Message>, StoreError>;

    fn clear_conversation(&self) -> Result<(), StoreError>;

    fn save_endpoint(&self, url: &str) -> Result<(), StoreError>;

    fn load_endpoint(&self) -> Result<Option<String>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serializes_with_camel_case_keys() {
        let msg = Message::new("hello", true);
        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("isUser").is_some());
        assert!(json.get("is_user").is_none());
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn message_roundtrips_through_json() {
        let msg = Message::new("round trip", false);
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn speaker_names() {
        assert_eq!(Message::new("a", true).speaker(), "User");
        assert_eq!(Message::new("b", false).speaker(), "JARVIS");
    }

    #[test]
    fn outbound_message_wire_shape() {
        let body = OutboundMessage {
            message: "hi".into(),
            source: "jarvis".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "hi");
        assert_eq!(json["source"], "jarvis");
    }
}
