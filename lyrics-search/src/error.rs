//! Error types for the lyrics-search crate.
//!
//! Only construction-time errors ([`FinderError::BackendUnavailable`] and
//! [`FinderError::Config`]) ever reach callers of the finder. Every other
//! variant is produced by a single backend query or a single page fetch and
//! is recovered inside the pipeline by dropping that contribution.

/// Errors that can occur while building a finder or running one of its stages.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    /// A configured search backend could not be initialised.
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),

    /// A search backend failed while answering a query.
    #[error("backend query failed: {0}")]
    BackendQueryFailed(String),

    /// A result URL points at a host no site adapter handles.
    #[error("unknown site: {0}")]
    UnknownSite(String),

    /// An HTTP request to a search engine or lyrics page failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A search engine or lyrics page could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid finder configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for lyrics-search results.
pub type Result<T> = std::result::Result<T, FinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_backend_unavailable() {
        let err = FinderError::BackendUnavailable("Google: client build failed".into());
        assert_eq!(
            err.to_string(),
            "backend unavailable: Google: client build failed"
        );
    }

    #[test]
    fn display_backend_query_failed() {
        let err = FinderError::BackendQueryFailed("Bing: 503".into());
        assert_eq!(err.to_string(), "backend query failed: Bing: 503");
    }

    #[test]
    fn display_unknown_site() {
        let err = FinderError::UnknownSite("https://other.com/y".into());
        assert_eq!(err.to_string(), "unknown site: https://other.com/y");
    }

    #[test]
    fn display_http() {
        let err = FinderError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_parse() {
        let err = FinderError::Parse("missing song header".into());
        assert_eq!(err.to_string(), "parse error: missing song header");
    }

    #[test]
    fn display_config() {
        let err = FinderError::Config("max_songs must be greater than 0".into());
        assert_eq!(err.to_string(), "config error: max_songs must be greater than 0");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FinderError>();
    }
}
