//! Clipboard collaborator seam.
//!
//! The session only needs "put this text on the clipboard"; the system
//! clipboard lives in `jarvis-platform`.

use jarvis_common::ChatError;

/// Writes text to a clipboard.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ChatError>;
}
