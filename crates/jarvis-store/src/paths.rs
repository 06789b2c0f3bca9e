use std::path::PathBuf;

use jarvis_common::StoreError;

const APP_NAME: &str = "jarvis";

/// Returns the platform-specific data directory for Jarvis.
///
/// - macOS: `~/Library/Application Support/jarvis`
/// - Linux: `$XDG_DATA_HOME/jarvis` (defaults to `~/.local/share/jarvis`)
/// - Windows: `%APPDATA%\jarvis`
pub fn data_dir() -> Result<PathBuf, StoreError> {
    Ok(dirs::data_dir()
        .ok_or(StoreError::NoDataDir)?
        .join(APP_NAME))
}
