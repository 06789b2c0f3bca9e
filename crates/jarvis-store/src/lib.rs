//! File-backed persistence for the JARVIS widget.
//!
//! The browser original kept everything in `localStorage`; here the same
//! key/value surface is a directory in the platform data dir with one
//! file per key. `FileStore` implements `jarvis_core::ConversationStore`
//! over the two well-known keys.

mod conversation;
mod kv;
mod paths;

pub use conversation::{CONVERSATION_KEY, ENDPOINT_KEY};
pub use kv::FileStore;
pub use paths::data_dir;
