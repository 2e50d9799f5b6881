//! lyrics-finder: command-line front end for [`lyrics_search`].
//!
//! This crate owns the parts around the search pipeline: the settings file,
//! logging setup and rendering songs for the terminal.

pub mod error;
pub mod output;
pub mod paths;
pub mod settings;

pub use error::{AppError, Result};
pub use settings::Settings;

use lyrics_search::Finder;
use tracing_subscriber::EnvFilter;

/// Build the finder described by `settings`.
///
/// # Errors
///
/// Returns [`AppError::Finder`] when the finder configuration is invalid or
/// a backend is unavailable.
pub fn build_finder(settings: &Settings) -> Result<Finder> {
    Ok(Finder::from_config(settings.finder.clone())?)
}

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `default_filter` when set. Calling this twice is
/// harmless; the second call leaves the first subscriber in place.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
