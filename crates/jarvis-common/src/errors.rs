use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("undecodable response body: {0}")]
    Decode(String),

    #[error("transcription error: {0}")]
    Transcription(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not determine storage directory")]
    NoDataDir,

    #[error("failed to read {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteError { path: PathBuf, reason: String },

    #[error("stored value is malformed: {0}")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("a send is already in flight")]
    Busy,

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("{0}")]
    Other(String),
}
