//! Application settings loaded from a TOML file.
//!
//! ```toml
//! log_filter = "lyrics_finder=info,lyrics_search=debug"
//!
//! [finder]
//! engines = ["DuckDuckGo", "Bing"]
//! sites = ["genius"]
//! max_songs = 5
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::path::Path;

use lyrics_search::FinderConfig;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Log filter used when neither `RUST_LOG` nor the settings file set one.
pub const DEFAULT_LOG_FILTER: &str = "lyrics_finder=info,lyrics_search=info";

/// Top-level settings file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,
    /// Search pipeline configuration.
    pub finder: FinderConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            finder: FinderConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Load settings from `path`, or from the default location when `path`
    /// is `None`.
    ///
    /// A missing default file yields [`Settings::default`]; an explicitly
    /// given path must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed, or an
    /// explicit path does not exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Save settings as TOML, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the settings
    /// cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default settings file path: `<config dir>/lyrics-finder/config.toml`.
    pub fn default_path() -> std::path::PathBuf {
        crate::paths::config_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyrics_search::{SearchEngine, Site};

    #[test]
    fn default_settings_use_default_finder() {
        let settings = Settings::default();
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(settings.finder, FinderConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[finder]\nengines = [\"Bing\"]\nsites = [\"genius\"]\nmax_songs = 5\n",
        )
        .expect("write config");

        let settings = Settings::from_file(&path).expect("parse");
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(settings.finder.engines, vec![SearchEngine::Bing]);
        assert_eq!(settings.finder.sites, vec![Site::Genius]);
        assert_eq!(settings.finder.max_songs, 5);
        assert_eq!(settings.finder.max_results, 10);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").expect("write config");
        assert_eq!(Settings::from_file(&path).expect("parse"), Settings::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut settings = Settings::default();
        settings.log_filter = "lyrics_search=trace".into();
        settings.finder.deadline_seconds = 20;
        settings.finder.user_agent = Some("lyrics-test/1.0".into());
        settings.save_to_file(&path).expect("save");

        let loaded = Settings::from_file(&path).expect("load");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").expect("write config");

        let err = Settings::from_file(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn unknown_site_name_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[finder]\nsites = [\"azlyrics\"]\n").expect("write config");
        assert!(Settings::from_file(&path).is_err());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("absent.toml");
        let err = Settings::load_or_default(Some(&missing)).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn default_path_ends_with_config_toml() {
        let path = Settings::default_path();
        let path_str = path.to_string_lossy();
        assert!(path_str.ends_with("config.toml"));
    }
}
