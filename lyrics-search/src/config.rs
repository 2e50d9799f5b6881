//! Finder configuration with sensible defaults.
//!
//! [`FinderConfig`] controls which engines are queried, which lyrics sites
//! are searched, how many results are kept per engine, and request
//! behaviour. It is fixed when a [`crate::Finder`] is built.

use serde::{Deserialize, Serialize};

use crate::error::FinderError;
use crate::types::{SearchEngine, Site};

/// Fallback worker count when the available parallelism cannot be queried.
const FALLBACK_CONCURRENCY: usize = 8;

/// Configuration for a [`crate::Finder`].
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour. Every field is optional when
/// deserialising; missing fields take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Which search engines to query. Queried concurrently, per site.
    pub engines: Vec<SearchEngine>,
    /// Which lyrics sites the finder may search.
    pub sites: Vec<Site>,
    /// Raw results requested from each engine per query.
    pub max_results: usize,
    /// Site-matching results kept from each engine per query.
    pub max_songs: usize,
    /// Upper bound on concurrent requests within one pipeline phase.
    pub max_concurrency: usize,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Wall-clock limit for each pipeline phase in seconds. `0` disables it.
    pub deadline_seconds: u64,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            engines: vec![
                SearchEngine::DuckDuckGo,
                SearchEngine::Bing,
                SearchEngine::Google,
            ],
            sites: vec![Site::Genius, Site::Tekstowo],
            max_results: 10,
            max_songs: 3,
            max_concurrency: default_concurrency(),
            timeout_seconds: 10,
            deadline_seconds: 0,
            user_agent: None,
        }
    }
}

impl FinderConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results`, `max_songs` and `max_concurrency` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    /// - `engines` and `sites` must not be empty
    pub fn validate(&self) -> Result<(), FinderError> {
        if self.max_results == 0 {
            return Err(FinderError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.max_songs == 0 {
            return Err(FinderError::Config(
                "max_songs must be greater than 0".into(),
            ));
        }
        if self.max_concurrency == 0 {
            return Err(FinderError::Config(
                "max_concurrency must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(FinderError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.engines.is_empty() {
            return Err(FinderError::Config(
                "at least one engine must be enabled".into(),
            ));
        }
        if self.sites.is_empty() {
            return Err(FinderError::Config(
                "at least one site must be enabled".into(),
            ));
        }
        Ok(())
    }

    /// Phase deadline, if one is configured.
    pub fn deadline(&self) -> Option<std::time::Duration> {
        (self.deadline_seconds > 0).then(|| std::time::Duration::from_secs(self.deadline_seconds))
    }
}

fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(FALLBACK_CONCURRENCY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = FinderConfig::default();
        assert_eq!(config.max_results, 10);
        assert_eq!(config.max_songs, 3);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.deadline_seconds, 0);
        assert!(config.max_concurrency > 0);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn default_enables_all_engines_and_sites() {
        let config = FinderConfig::default();
        assert_eq!(config.engines.len(), 3);
        assert!(config.engines.contains(&SearchEngine::DuckDuckGo));
        assert!(config.engines.contains(&SearchEngine::Google));
        assert_eq!(config.sites, vec![Site::Genius, Site::Tekstowo]);
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(FinderConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_max_results_rejected() {
        let config = FinderConfig {
            max_results: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_results"));
    }

    #[test]
    fn zero_max_songs_rejected() {
        let config = FinderConfig {
            max_songs: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_songs"));
    }

    #[test]
    fn zero_concurrency_rejected() {
        let config = FinderConfig {
            max_concurrency: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_concurrency"));
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = FinderConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn empty_engines_rejected() {
        let config = FinderConfig {
            engines: vec![],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("engine"));
    }

    #[test]
    fn empty_sites_rejected() {
        let config = FinderConfig {
            sites: vec![],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site"));
    }

    #[test]
    fn deadline_disabled_by_zero() {
        assert!(FinderConfig::default().deadline().is_none());
        let config = FinderConfig {
            deadline_seconds: 5,
            ..Default::default()
        };
        assert_eq!(config.deadline(), Some(std::time::Duration::from_secs(5)));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: FinderConfig =
            serde_json::from_str(r#"{"engines":["Bing"],"max_songs":1}"#).expect("deserialize");
        assert_eq!(config.engines, vec![SearchEngine::Bing]);
        assert_eq!(config.max_songs, 1);
        assert_eq!(config.max_results, 10);
        assert_eq!(config.sites.len(), 2);
    }
}
