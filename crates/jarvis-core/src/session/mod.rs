//! Conversation session management.
//!
//! A `ConversationSession` owns the ordered message history, runs the
//! two-phase send protocol against a `Transport`, and delegates
//! save/load/clear to a `ConversationStore`.

mod manager;
mod send;
mod types;

pub use manager::{ConversationSession, GREETING};
pub use send::{SendOutcome, CONNECTION_ERROR, CORS_NOTICE};
