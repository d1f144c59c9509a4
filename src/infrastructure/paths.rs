//! Platform path helpers.
//!
//! Resolves the per-user directories the launcher keeps its snapshot, log
//! and configuration files in, and expands `~` in user-supplied paths.

use std::path::PathBuf;

/// Application directory name under the platform data/config directories.
pub const APP_DIR_NAME: &str = "game-launcher";

/// Returns the data directory for launcher storage.
///
/// `<data_dir>/game-launcher`, e.g. `~/.local/share/game-launcher` on Linux.
/// Falls back to `./game-launcher` when the platform has no data directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Returns the default configuration file path.
///
/// `<config_dir>/game-launcher/config.toml`, e.g.
/// `~/.config/game-launcher/config.toml` on Linux.
#[must_use]
pub fn get_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join("config.toml")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or when no home directory is known, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use game_launcher::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
