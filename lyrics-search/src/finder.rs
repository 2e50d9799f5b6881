//! The lyrics finder: per-site backend fan-out, dedup, page resolution and
//! ranking behind a single [`Finder`] handle.
//!
//! # Pipeline
//!
//! 1. For every requested site, query all backends concurrently with
//!    `"{title} {site}"` and keep up to `max_songs` site-matching results
//!    per backend
//! 2. Concatenate the per-site lists in site order and drop repeated URLs
//! 3. Fetch and parse each remaining page with the adapter for its host
//! 4. Drop songs without lyrics and sort by fit to the title

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::FinderConfig;
use crate::engine::SearchBackend;
use crate::engines::build_backend;
use crate::error::FinderError;
use crate::filter::SiteFilter;
use crate::http::build_client;
use crate::orchestrator::dedup::uniq_by_url;
use crate::orchestrator::fanout::{fan_out, FanOutLimits};
use crate::orchestrator::ranking::sort_by_fitting;
use crate::orchestrator::resolve::{resolve_songs, with_lyrics, AdapterMap};
use crate::sites::{build_adapter, SiteAdapter};
use crate::types::{SearchEngine, Site, SiteSelection, Song};

/// Searches lyrics sites through web search backends.
///
/// Built once from a [`FinderConfig`]; immutable afterwards and safe to
/// share across tasks behind an [`Arc`].
pub struct Finder {
    config: FinderConfig,
    backends: Vec<Arc<dyn SearchBackend>>,
    sites: Vec<(Site, SiteFilter)>,
    adapters: AdapterMap,
}

impl std::fmt::Debug for Finder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let backends: Vec<_> = self.backends.iter().map(|b| b.name()).collect();
        let sites: Vec<_> = self.sites.iter().map(|(site, _)| *site).collect();
        f.debug_struct("Finder")
            .field("config", &self.config)
            .field("backends", &backends)
            .field("sites", &sites)
            .finish()
    }
}

impl Finder {
    /// Build a finder with the built-in backends and adapters for `config`.
    ///
    /// # Errors
    ///
    /// [`FinderError::Config`] if the configuration is invalid and
    /// [`FinderError::BackendUnavailable`] if a backend cannot be set up.
    pub fn from_config(config: FinderConfig) -> Result<Self, FinderError> {
        Self::builder(config).build()
    }

    /// Start a builder that accepts injected backends and adapters.
    pub fn builder(config: FinderConfig) -> FinderBuilder {
        FinderBuilder {
            config,
            backends: Vec::new(),
            adapters: Vec::new(),
            client: None,
        }
    }

    /// The configuration this finder was built with.
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Names of the backends queried for every site, in query order.
    pub fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Every song found for `title` on the selected sites, best fit first.
    ///
    /// Sites that are selected but not configured are skipped. Backend and
    /// page failures only shrink the result; this never errors.
    pub async fn find_all(&self, title: &str, selection: SiteSelection) -> Vec<Song> {
        let limits = FanOutLimits {
            max_results: self.config.max_results,
            max_songs: self.config.max_songs,
            max_concurrency: self.config.max_concurrency,
        };
        let deadline = self.config.deadline();

        let per_site = self
            .sites
            .iter()
            .filter(|(site, _)| selection.includes(*site))
            .map(|(site, filter)| fan_out(&self.backends, *site, filter, title, limits, deadline));
        let results: Vec<_> = futures::future::join_all(per_site)
            .await
            .into_iter()
            .flatten()
            .collect();
        let found = results.len();

        let songs = resolve_songs(
            uniq_by_url(results),
            &self.adapters,
            self.config.max_concurrency,
            deadline,
        )
        .await;
        let songs = sort_by_fitting(with_lyrics(songs), title);

        tracing::debug!(found, songs = songs.len(), "lyrics search finished");
        songs
    }

    /// The best-fitting song for `title`, or `None` if nothing was found.
    pub async fn find(&self, title: &str, selection: SiteSelection) -> Option<Song> {
        self.find_all(title, selection).await.into_iter().next()
    }

    /// [`Finder::find`] restricted to Genius.
    pub async fn find_genius(&self, title: &str) -> Option<Song> {
        self.find(title, SiteSelection::genius_only()).await
    }

    /// [`Finder::find`] restricted to Tekstowo.
    pub async fn find_tekstowo(&self, title: &str) -> Option<Song> {
        self.find(title, SiteSelection::tekstowo_only()).await
    }

    /// [`Finder::find_all`] restricted to Genius.
    pub async fn find_all_genius(&self, title: &str) -> Vec<Song> {
        self.find_all(title, SiteSelection::genius_only()).await
    }

    /// [`Finder::find_all`] restricted to Tekstowo.
    pub async fn find_all_tekstowo(&self, title: &str) -> Vec<Song> {
        self.find_all(title, SiteSelection::tekstowo_only()).await
    }
}

/// Builder for a [`Finder`] with injected backends or adapters.
///
/// Backends added here replace the ones `config.engines` would create.
/// Adapters added here replace the built-in adapter for their site; sites
/// without an injected adapter get the built-in one.
pub struct FinderBuilder {
    config: FinderConfig,
    backends: Vec<Arc<dyn SearchBackend>>,
    adapters: Vec<Arc<dyn SiteAdapter>>,
    client: Option<reqwest::Client>,
}

impl FinderBuilder {
    /// Query `backend` instead of the configured engines.
    pub fn backend(mut self, backend: Arc<dyn SearchBackend>) -> Self {
        self.backends.push(backend);
        self
    }

    /// Use `adapter` for its site.
    pub fn adapter(mut self, adapter: Arc<dyn SiteAdapter>) -> Self {
        self.adapters.push(adapter);
        self
    }

    /// Share `client` with the built-in backends and adapters.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Validate the configuration, instantiate what was not injected and
    /// probe every backend.
    ///
    /// # Errors
    ///
    /// [`FinderError::Config`] for an invalid configuration,
    /// [`FinderError::BackendUnavailable`] when the HTTP client cannot be
    /// built or a backend's probe fails.
    pub fn build(self) -> Result<Finder, FinderError> {
        let FinderBuilder {
            config,
            mut backends,
            adapters: injected,
            mut client,
        } = self;
        config.validate()?;

        let sites = distinct(&config.sites);
        let mut adapters: AdapterMap = HashMap::new();
        for adapter in injected {
            adapters.insert(adapter.site(), adapter);
        }

        let needs_builtin =
            backends.is_empty() || sites.iter().any(|site| !adapters.contains_key(site));
        if needs_builtin && client.is_none() {
            let built = build_client(&config)
                .map_err(|e| FinderError::BackendUnavailable(format!("HTTP client: {e}")))?;
            client = Some(built);
        }

        if let Some(client) = &client {
            if backends.is_empty() {
                backends = distinct::<SearchEngine>(&config.engines)
                    .into_iter()
                    .map(|engine| build_backend(engine, client))
                    .collect();
            }
            for &site in &sites {
                adapters
                    .entry(site)
                    .or_insert_with(|| build_adapter(site, client));
            }
        }

        for backend in &backends {
            backend.probe().map_err(|e| {
                FinderError::BackendUnavailable(format!("{}: {e}", backend.name()))
            })?;
        }

        let sites = sites
            .into_iter()
            .map(|site| SiteFilter::for_site(site).map(|filter| (site, filter)))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            backends = ?backends.iter().map(|b| b.name()).collect::<Vec<_>>(),
            sites = ?sites.iter().map(|(site, _)| site.name()).collect::<Vec<_>>(),
            max_concurrency = config.max_concurrency,
            "lyrics finder ready"
        );

        Ok(Finder {
            config,
            backends,
            sites,
            adapters,
        })
    }
}

/// `items` without repeats, first occurrence kept.
fn distinct<T: Copy + PartialEq>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(*item);
        }
    }
    out
}
