//! Platform integrations for the JARVIS widget.

mod clipboard;

pub use clipboard::SystemClipboard;
