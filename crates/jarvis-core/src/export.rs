//! Plain-text transcript export.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use jarvis_common::StoreError;

use crate::Message;

const HEADER: &str = "JARVIS Conversation Transcript\n==============================\n";

/// Renders the deterministic transcript: the fixed two-line header, then
/// each message as `[HH:MM] Speaker: content` with a blank line before
/// every entry, and a trailing newline.
pub fn transcript(messages: &[Message]) -> String {
    let mut out = String::from(HEADER);
    for msg in messages {
        out.push('\n');
        out.push_str(&format!(
            "[{}] {}: {}\n",
            msg.timestamp.format("%H:%M"),
            msg.speaker(),
            msg.content
        ));
    }
    out
}

/// Export filename for the given day: `jarvis-conversation-YYYY-MM-DD.txt`.
pub fn filename(date: DateTime<Utc>) -> String {
    format!("jarvis-conversation-{}.txt", date.format("%Y-%m-%d"))
}

/// Writes today's transcript into `dir` and returns the full path.
pub fn write_to(dir: &Path, messages: &[Message]) -> Result<PathBuf, StoreError> {
    let path = dir.join(filename(Utc::now()));
    std::fs::write(&path, transcript(messages)).map_err(|e| StoreError::WriteError {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    info!("exported transcript to {}", path.display());
    Ok(path)
}
