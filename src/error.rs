//! Error types for the lyrics-finder application layer.

/// Errors raised while loading settings or setting up the finder.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Settings file could not be parsed or written.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The search library rejected the configuration.
    #[error(transparent)]
    Finder(#[from] lyrics_search::FinderError),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
