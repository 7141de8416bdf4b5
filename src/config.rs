//! Runtime settings for the catalog client, read from the environment.

use crate::error::{CatalogError, Result};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
/// Responses are reused for 5 minutes unless overridden.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub image_base_url: String,
    pub cache_ttl: Duration,
    /// `None` keeps every distinct response until the cache is cleared.
    pub max_cache_entries: Option<usize>,
}

impl Config {
    /// Builds a config with default image URL and cache settings.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CatalogError::MissingApiKey);
        }

        let base_url = base_url.into();
        Url::parse(&base_url)?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            max_cache_entries: None,
        })
    }

    /// Loads the config from environment variables.
    ///
    /// # Environment Variables
    /// - `TMDB_API_KEY` - credential appended to every request (required)
    /// - `TMDB_BASE_URL` - API root (default: `https://api.themoviedb.org/3`)
    /// - `TMDB_IMAGE_BASE_URL` - image CDN root (default: `https://image.tmdb.org/t/p`)
    /// - `TMDB_CACHE_TTL_SECS` - response cache lifetime (default: 300)
    /// - `TMDB_CACHE_MAX_ENTRIES` - LRU capacity (default: unbounded)
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("TMDB_API_KEY").map_err(|_| CatalogError::MissingApiKey)?;
        let base_url = env::var("TMDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let mut config = Self::new(api_key, base_url)?;

        if let Ok(image_base_url) = env::var("TMDB_IMAGE_BASE_URL") {
            config.image_base_url = image_base_url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = parse_var::<u64>("TMDB_CACHE_TTL_SECS")? {
            config.cache_ttl = Duration::from_secs(secs);
        }
        config.max_cache_entries = parse_var::<usize>("TMDB_CACHE_MAX_ENTRIES")?;

        Ok(config)
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_max_cache_entries(mut self, max_entries: usize) -> Self {
        self.max_cache_entries = Some(max_entries);
        self
    }

    pub fn with_image_base_url(mut self, image_base_url: impl Into<String>) -> Self {
        self.image_base_url = image_base_url.into().trim_end_matches('/').to_string();
        self
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CatalogError::InvalidSetting { name, value }),
        Err(_) => Ok(None),
    }
}
