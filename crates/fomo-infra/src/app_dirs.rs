use anyhow::{Context, Result};
use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "fomo";

/// Application data root.
///
/// - macOS: ~/Library/Application Support/fomo
/// - Windows: %APPDATA%\fomo
/// - Linux: $XDG_DATA_HOME/fomo or ~/.local/share/fomo
///
/// Does not create the directory.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to get platform-specific data directory")?;
    Ok(base_dir.join(APP_DIR_NAME))
}

pub fn logs_dir(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join("logs")
}
