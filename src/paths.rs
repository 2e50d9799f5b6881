//! Platform-appropriate locations for lyrics-finder files.

use std::path::PathBuf;

/// Environment variable overriding [`config_dir`].
pub const CONFIG_DIR_ENV: &str = "LYRICS_FINDER_CONFIG_DIR";

/// Directory holding `config.toml`.
///
/// `$LYRICS_FINDER_CONFIG_DIR` when set, else `<config dir>/lyrics-finder`
/// (`~/.config/lyrics-finder` on Linux).
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("lyrics-finder"))
        .unwrap_or_else(|| PathBuf::from("/tmp/lyrics-finder-config"))
}

/// Default settings file path.
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}
