//! Speech collaborator seams.
//!
//! The core only consumes "give me transcribed text" and "speak this
//! text" capabilities; concrete engines live elsewhere (see
//! `jarvis-webhook::WhisperTranscriber` for capture).

use async_trait::async_trait;

use jarvis_common::TransportError;

/// Turns recorded audio into text.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// `filename` carries the container format (e.g. "clip.wav").
    async fn transcribe(&self, audio: Vec<u8>, filename: &str) -> Result<String, TransportError>;
}

/// Speaks a reply aloud. Fire-and-forget; playback errors are the
/// engine's problem, not the session's.
pub trait SpeechSynthesizer: Send + Sync {
    fn speak(&self, text: &str);
}
