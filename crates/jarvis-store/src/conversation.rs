//! `ConversationStore` over the two well-known storage keys.

use tracing::debug;

use jarvis_common::StoreError;
use jarvis_core::{ConversationStore, Message};

use crate::kv::FileStore;

/// Key holding the persisted conversation (JSON array of messages).
pub const CONVERSATION_KEY: &str = "jarvis_conversation";

/// Key holding the webhook endpoint URL (raw string).
pub const ENDPOINT_KEY: &str = "jarvis_api_endpoint";

impl ConversationStore for FileStore {
    fn save_conversation(&self, messages: &[Message]) -> Result<(), StoreError> {
        let json = serde_json::to_string(messages)
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        self.set(CONVERSATION_KEY, &json)
    }

    fn load_conversation(&self) -> Result<Vec<Message>, StoreError> {
        match self.get(CONVERSATION_KEY)? {
            Some(json) => {
                let messages: Vec<Message> = serde_json::from_str(&json)
                    .map_err(|e| StoreError::Malformed(e.to_string()))?;
                debug!(count = messages.len(), "loaded persisted conversation");
                Ok(messages)
            }
            None => Ok(Vec::new()),
        }
    }

    fn clear_conversation(&self) -> Result<(), StoreError> {
        self.remove(CONVERSATION_KEY)
    }

    fn save_endpoint(&self, url: &str) -> Result<(), StoreError> {
        self.set(ENDPOINT_KEY, url)
    }

    fn load_endpoint(&self) -> Result<Option<String>, StoreError> {
        self.get(ENDPOINT_KEY)
    }
}
