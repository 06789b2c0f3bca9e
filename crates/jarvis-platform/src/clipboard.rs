use jarvis_common::ChatError;
use jarvis_core::Clipboard;

/// System clipboard backed by `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Creates a new clipboard handle.
    pub fn new() -> Result<Self, ChatError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ChatError::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ChatError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| ChatError::Clipboard(e.to_string()))
    }
}
