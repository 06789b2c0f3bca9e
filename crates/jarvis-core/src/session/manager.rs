//! ConversationSession struct and history management.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use jarvis_common::{Notification, NotificationQueue};

use crate::{Clipboard, ConversationStore, Message};

/// Greeting shown whenever a session starts (or restarts) with no history.
pub const GREETING: &str = "Hello, I'm JARVIS. How can I help you today?";

/// A conversation with message history, send protocol, and persistence.
pub struct ConversationSession {
    /// Ordered message history; insertion order is display order.
    pub(super) messages: Vec<Message>,
    /// True while a send is awaiting the network; doubles as the
    /// single-flight guard.
    pub(super) pending: AtomicBool,
    /// Set once a send completed only via the opaque fallback.
    pub(super) cors_degraded: bool,
    /// Non-fatal notices for the UI to surface.
    pub(super) notifications: NotificationQueue,
}

impl ConversationSession {
    /// Creates a session seeded with the greeting message.
    pub fn new() -> Self {
        Self {
            messages: vec![Message::new(GREETING, false)],
            pending: AtomicBool::new(false),
            cors_degraded: false,
            notifications: NotificationQueue::default(),
        }
    }

    /// Resets the history to just the greeting and clears both flags.
    pub fn seed(&mut self) {
        self.messages.clear();
        self.messages.push(Message::new(GREETING, false));
        self.pending.store(false, Ordering::Release);
        self.cors_degraded = false;
    }

    /// Appends a message with a fresh id and the current timestamp.
    pub fn append(&mut self, content: impl Into<String>, is_user: bool) -> &Message {
        self.messages.push(Message::new(content, is_user));
        self.messages.last().expect("just pushed")
    }

    /// The full message history, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// True while a send is awaiting the network.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// True once a send fell back to the opaque cross-origin mode.
    pub fn cors_degraded(&self) -> bool {
        self.cors_degraded
    }

    /// Pending notices for the UI; expired entries are dropped.
    pub fn notifications(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    /// Resets to the greeting and removes any persisted copy. Store
    /// failure leaves the in-memory reset in place.
    pub fn clear(&mut self, store: &dyn ConversationStore) {
        self.seed();
        match store.clear_conversation() {
            Ok(()) => {
                self.notifications
                    .push(Notification::info("Saved conversation cleared"));
            }
            Err(e) => {
                warn!("failed to clear saved conversation: {e}");
                self.notifications
                    .push(Notification::error("Failed to clear saved conversation"));
            }
        }
    }

    /// Persists the history. Skipped while only the greeting is present,
    /// so empty sessions never overwrite a saved one.
    pub fn save(&mut self, store: &dyn ConversationStore) {
        if self.messages.len() <= 1 {
            debug!("nothing beyond the greeting, skipping save");
            return;
        }
        match store.save_conversation(&self.messages) {
            Ok(()) => {
                self.notifications
                    .push(Notification::info("Conversation saved"));
            }
            Err(e) => {
                warn!("failed to save conversation: {e}");
                self.notifications
                    .push(Notification::error("Failed to save conversation"));
            }
        }
    }

    /// Replaces the history with the persisted copy, if there is one.
    /// An empty or missing saved conversation leaves the session as is.
    pub fn load(&mut self, store: &dyn ConversationStore) {
        match store.load_conversation() {
            Ok(saved) if !saved.is_empty() => {
                debug!(count = saved.len(), "loaded saved conversation");
                self.messages = saved;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("failed to load conversation: {e}");
                self.notifications
                    .push(Notification::error("Failed to load conversation"));
            }
        }
    }

    /// Copies one message's content to the clipboard. Both a missing
    /// index and a clipboard failure are non-fatal notices.
    pub fn copy_message(&mut self, index: usize, clipboard: &mut dyn Clipboard) {
        let Some(msg) = self.messages.get(index) else {
            warn!(index, "no message at this index to copy");
            self.notifications
                .push(Notification::error("Failed to copy message"));
            return;
        };
        match clipboard.set_text(&msg.content) {
            Ok(()) => {
                self.notifications
                    .push(Notification::info("Message copied to clipboard"));
            }
            Err(e) => {
                warn!("failed to copy message: {e}");
                self.notifications
                    .push(Notification::error("Failed to copy message"));
            }
        }
    }

    /// Renders the plain-text transcript (see `export::transcript`).
    pub fn export_transcript(&self) -> String {
        crate::export::transcript(&self.messages)
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jarvis_common::{NotificationLevel, StoreError};
    use std::cell::RefCell;

    /// In-memory store with an optional failure switch.
    pub(super) struct MemoryStore {
        pub conversation: RefCell<Option<Vec<Message>>>,
        pub endpoint: RefCell<Option<String>>,
        pub fail: bool,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self {
                conversation: RefCell::new(None),
                endpoint: RefCell::new(None),
                fail: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }

        fn check(&self) -> Result<(), StoreError> {
            if self.fail {
                Err(StoreError::NoDataDir)
            } else {
                Ok(())
            }
        }
    }

    impl ConversationStore for MemoryStore {
        fn save_conversation(&self, messages: &[Message]) -> Result<(), StoreError> {
            self.check()?;
            *self.conversation.borrow_mut() = Some(messages.to_vec());
            Ok(())
        }

        fn load_conversation(&self) -> Result<Vec<Message>, StoreError> {
            self.check()?;
            Ok(self.conversation.borrow().clone().unwrap_or_default())
        }

        fn clear_conversation(&self) -> Result<(), StoreError> {
            self.check()?;
            *self.conversation.borrow_mut() = None;
            Ok(())
        }

        fn save_endpoint(&self, url: &str) -> Result<(), StoreError> {
            self.check()?;
            *self.endpoint.borrow_mut() = Some(url.to_string());
            Ok(())
        }

        fn load_endpoint(&self) -> Result<Option<String>, StoreError> {
            self.check()?;
            Ok(self.endpoint.borrow().clone())
        }
    }

    #[test]
    fn new_session_holds_only_the_greeting() {
        let session = ConversationSession::new();
        assert_eq!(session.message_count(), 1);
        assert_eq!(session.messages()[0].content, GREETING);
        assert!(!session.messages()[0].is_user);
        assert!(!session.is_pending());
        assert!(!session.cors_degraded());
    }

    #[test]
    fn append_preserves_order_and_uniqueness() {
        let mut session = ConversationSession::new();
        let first_id = session.append("one", true).id.clone();
        let second_id = session.append("two", false).id.clone();
        assert_ne!(first_id, second_id);
        assert_eq!(session.messages()[1].content, "one");
        assert_eq!(session.messages()[2].content, "two");
    }

    #[test]
    fn seed_resets_history_and_flags() {
        let mut session = ConversationSession::new();
        session.append("hi", true);
        session.cors_degraded = true;
        session.seed();
        assert_eq!(session.message_count(), 1);
        assert_eq!(session.messages()[0].content, GREETING);
        assert!(!session.cors_degraded());
    }

    #[test]
    fn save_skips_greeting_only_sessions() {
        let store = MemoryStore::new();
        let mut session = ConversationSession::new();
        session.save(&store);
        assert!(store.conversation.borrow().is_none());
        assert!(session.notifications().is_empty());
    }

    #[test]
    fn save_then_load_roundtrips_history() {
        let store = MemoryStore::new();
        let mut session = ConversationSession::new();
        session.append("hello", true);
        session.append("hi yourself", false);
        session.save(&store);

        let mut restored = ConversationSession::new();
        restored.load(&store);
        assert_eq!(restored.messages(), session.messages());
        assert!(!restored.is_pending());
        assert!(!restored.cors_degraded());
    }

    #[test]
    fn load_with_nothing_saved_keeps_current_history() {
        let store = MemoryStore::new();
        let mut session = ConversationSession::new();
        session.append("typed before loading", true);
        session.load(&store);
        assert_eq!(session.message_count(), 2);
    }

    #[test]
    fn clear_reseeds_and_removes_saved_copy() {
        let store = MemoryStore::new();
        let mut session = ConversationSession::new();
        session.append("hello", true);
        session.save(&store);
        assert!(store.conversation.borrow().is_some());

        session.clear(&store);
        assert_eq!(session.message_count(), 1);
        assert_eq!(session.messages()[0].content, GREETING);
        assert!(store.conversation.borrow().is_none());
    }

    #[test]
    fn store_failures_surface_as_error_notifications() {
        let store = MemoryStore::failing();
        let mut session = ConversationSession::new();
        session.append("hello", true);

        session.save(&store);
        session.load(&store);
        session.clear(&store);

        let visible = session.notifications.visible();
        assert_eq!(visible.len(), 3);
        assert!(visible
            .iter()
            .all(|n| n.level == NotificationLevel::Error));
    }

    struct FakeClipboard {
        contents: Option<String>,
        fail: bool,
    }

    impl FakeClipboard {
        fn new() -> Self {
            Self {
                contents: None,
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                contents: None,
                fail: true,
            }
        }
    }

    impl Clipboard for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), jarvis_common::ChatError> {
            if self.fail {
                return Err(jarvis_common::ChatError::Clipboard("denied".into()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn copy_message_puts_content_on_the_clipboard() {
        let mut clipboard = FakeClipboard::new();
        let mut session = ConversationSession::new();
        session.append("copy me", true);

        session.copy_message(1, &mut clipboard);

        assert_eq!(clipboard.contents.as_deref(), Some("copy me"));
        let visible = session.notifications.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].level, NotificationLevel::Info);
    }

    #[test]
    fn copy_message_failure_is_a_nonfatal_notice() {
        let mut clipboard = FakeClipboard::failing();
        let mut session = ConversationSession::new();

        session.copy_message(0, &mut clipboard);

        assert!(clipboard.contents.is_none());
        let visible = session.notifications.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].level, NotificationLevel::Error);
    }

    #[test]
    fn copy_message_out_of_range_is_a_nonfatal_notice() {
        let mut clipboard = FakeClipboard::new();
        let mut session = ConversationSession::new();

        session.copy_message(5, &mut clipboard);

        assert!(clipboard.contents.is_none());
        let visible = session.notifications.visible();
        assert_eq!(visible[0].level, NotificationLevel::Error);
    }

    #[test]
    fn clear_failure_still_resets_memory() {
        let store = MemoryStore::failing();
        let mut session = ConversationSession::new();
        session.append("hello", true);
        session.clear(&store);
        assert_eq!(session.message_count(), 1);
    }
}
