//! Configuration path resolution
//!
//! Settings live in the platform config directory:
//! - Linux: ~/.config/ytdrop/
//! - macOS: ~/Library/Application Support/ytdrop/
//! - Windows: %APPDATA%\ytdrop\

use std::path::PathBuf;
use tracing::debug;

const APP_DIR_NAME: &str = "ytdrop";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Get the configuration directory for ytdrop.
///
/// Unlike a data directory this is never created here; a missing directory
/// simply means there is no settings file.
pub fn get_config_dir() -> PathBuf {
    let dir = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME);

    debug!("Config directory: {:?}", dir);
    dir
}

/// Get the default settings file path.
///
/// Returns: `<config_dir>/ytdrop/settings.json`
pub fn get_settings_path() -> PathBuf {
    get_config_dir().join(SETTINGS_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_path_layout() {
        let path = get_settings_path();
        assert!(path.ends_with("ytdrop/settings.json"));
        assert!(path.is_absolute() || path.starts_with("."));
    }
}
