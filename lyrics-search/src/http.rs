//! Shared HTTP client with User-Agent rotation.
//!
//! Provides a configured [`reqwest::Client`] with browser-like headers,
//! cookie support, and rotating User-Agent strings. One client is built per
//! finder and shared by every backend and site adapter.

use crate::config::FinderConfig;
use crate::error::FinderError;
use rand::seq::SliceRandom;
use std::time::Duration;

/// Realistic browser User-Agent strings, rotated per client.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Build a [`reqwest::Client`] for search engine and lyrics page requests.
///
/// The client has:
/// - Cookie store enabled (for Google consent pages, etc.)
/// - Timeout from config
/// - Random User-Agent from built-in rotation list (or custom if configured)
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`FinderError::Http`] if the client cannot be constructed.
pub fn build_client(config: &FinderConfig) -> Result<reqwest::Client, FinderError> {
    let ua = match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => random_user_agent().to_owned(),
    };

    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| FinderError::Http(format!("failed to build HTTP client: {e}")))
}

/// GET `url` and return the response body, mapping failures to [`FinderError::Http`].
///
/// `label` names the caller in error messages ("Bing", "genius", ...).
pub async fn get_text(
    client: &reqwest::Client,
    label: &str,
    url: &str,
) -> Result<String, FinderError> {
    let response = client
        .get(url)
        .header("Accept", "text/html,application/xhtml+xml")
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| FinderError::Http(format!("{label} request failed: {e}")))?
        .error_for_status()
        .map_err(|e| FinderError::Http(format!("{label} HTTP error: {e}")))?;

    response
        .text()
        .await
        .map_err(|e| FinderError::Http(format!("{label} response read failed: {e}")))
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // USER_AGENTS is a non-empty const array, choose only returns None on empty slices
        .unwrap_or(USER_AGENTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn random_user_agent_returns_valid_ua() {
        let ua = random_user_agent();
        assert!(USER_AGENTS.contains(&ua));
        assert!(ua.contains("Mozilla/5.0"));
    }

    #[test]
    fn build_client_with_default_config() {
        assert!(build_client(&FinderConfig::default()).is_ok());
    }

    #[test]
    fn build_client_with_custom_ua() {
        let config = FinderConfig {
            user_agent: Some("LyricsBot/1.0".into()),
            ..Default::default()
        };
        assert!(build_client(&config).is_ok());
    }

    #[tokio::test]
    async fn get_text_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let client = build_client(&FinderConfig::default()).expect("client");
        let body = get_text(&client, "test", &format!("{}/page", server.uri()))
            .await
            .expect("body");
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn get_text_maps_status_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = build_client(&FinderConfig::default()).expect("client");
        let err = get_text(&client, "genius", &format!("{}/x", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, FinderError::Http(_)));
        assert!(err.to_string().contains("genius HTTP error"));
    }
}
