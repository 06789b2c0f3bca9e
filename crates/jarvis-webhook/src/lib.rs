//! HTTP collaborators for the JARVIS widget.
//!
//! `WebhookClient` is the concrete `Transport` the session talks
//! through; `WhisperTranscriber` turns recorded audio into text for
//! voice input.

mod client;
mod transcriber;

pub use client::WebhookClient;
pub use transcriber::{WhisperTranscriber, WhisperTranscriberConfig};
