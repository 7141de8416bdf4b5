use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::models::cache::ResponseCache;
use crate::models::movie::{GenreList, MovieDetails, MovieResponse};
use crate::models::params::{RecommendationParams, RequestParams, SearchParams};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, error};
use url::Url;

const DETAILS_APPEND: &str = "credits,videos,images";

pub struct TmdbApi {
    client: Client,
    config: Config,
    cache: Mutex<ResponseCache>,
}

impl TmdbApi {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: Config) -> Self {
        let cache = ResponseCache::new(config.cache_ttl, config.max_cache_entries);
        Self {
            client,
            config,
            cache: Mutex::new(cache),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Full request URL: `api_key` first, then `params` in insertion order.
    /// Also serves as the cache key.
    pub fn build_url(&self, path: &str, params: &RequestParams) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.config.base_url, path))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", &self.config.api_key);
            for (name, value) in params.iter() {
                query.append_pair(name, value);
            }
        }
        Ok(url)
    }

    pub async fn get_with_cache(&self, path: &str, params: &RequestParams) -> Result<serde_json::Value> {
        let url = self.build_url(path, params)?;
        let cache_key = url.to_string();

        // Check cache first. The lock is never held across an await.
        if let Some(data) = self.cache().get(&cache_key) {
            debug!("Cache hit for {}", path);
            return Ok(data);
        }

        debug!("Cache miss for {}", path);
        let json = self.fetch(url).await.inspect_err(|e| {
            error!("TMDB API request failed for {}: {}", path, e.redacted());
        })?;

        self.cache().insert(cache_key, json.clone());
        Ok(json)
    }

    async fn fetch(&self, url: Url) -> Result<serde_json::Value> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::upstream(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn request<T: DeserializeOwned>(&self, path: &str, params: RequestParams) -> Result<T> {
        let json = self.get_with_cache(path, &params).await?;
        Ok(serde_json::from_value(json)?)
    }

    pub async fn get_popular_movies(&self, page: u32) -> Result<MovieResponse> {
        self.request("/movie/popular", page_params(Some(page))).await
    }

    pub async fn get_top_rated_movies(&self, page: u32) -> Result<MovieResponse> {
        self.request("/movie/top_rated", page_params(Some(page))).await
    }

    pub async fn get_now_playing_movies(&self, page: u32) -> Result<MovieResponse> {
        self.request("/movie/now_playing", page_params(Some(page))).await
    }

    pub async fn get_upcoming_movies(&self, page: u32) -> Result<MovieResponse> {
        self.request("/movie/upcoming", page_params(Some(page))).await
    }

    /// Details bundled with credits, videos and images in one response.
    pub async fn get_movie_details(&self, movie_id: u64) -> Result<MovieDetails> {
        let params = RequestParams::new().set("append_to_response", Some(DETAILS_APPEND));
        self.request(&format!("/movie/{}", movie_id), params).await
    }

    pub async fn search_movies(&self, search: &SearchParams) -> Result<MovieResponse> {
        let params = RequestParams::new()
            .set("query", Some(&search.query))
            .set("page", Some(search.page.unwrap_or(1)))
            .set("year", search.year)
            .set("with_genres", search.genre)
            .set("sort_by", search.sort_by);
        self.request("/search/movie", params).await
    }

    pub async fn get_recommendations(&self, params: RecommendationParams) -> Result<MovieResponse> {
        let path = format!("/movie/{}/recommendations", params.movie_id);
        self.request(&path, page_params(params.page)).await
    }

    pub async fn get_similar_movies(&self, params: RecommendationParams) -> Result<MovieResponse> {
        let path = format!("/movie/{}/similar", params.movie_id);
        self.request(&path, page_params(params.page)).await
    }

    pub async fn get_genres(&self) -> Result<GenreList> {
        self.request("/genre/movie/list", RequestParams::new()).await
    }

    pub fn clear_cache(&self) {
        self.cache().clear();
        debug!("Response cache cleared");
    }

    pub fn cache_len(&self) -> usize {
        self.cache().len()
    }

    fn cache(&self) -> MutexGuard<'_, ResponseCache> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn page_params(page: Option<u32>) -> RequestParams {
    RequestParams::new().set("page", Some(page.unwrap_or(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> TmdbApi {
        let config = Config::new("secret", "https://api.example.com/3").unwrap();
        TmdbApi::new(config).unwrap()
    }

    #[test]
    fn url_puts_credential_first_then_params_in_order() {
        let params = RequestParams::new()
            .set("query", Some("star wars"))
            .set("page", Some(2));
        let url = api().build_url("/search/movie", &params).unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.example.com/3/search/movie?api_key=secret&query=star+wars&page=2"
        );
    }

    #[test]
    fn identical_requests_build_identical_keys() {
        let api = api();
        let a = RequestParams::new().set("page", Some(1)).set("year", Some(1999));
        let b = RequestParams::new().set("page", Some(1)).set("year", Some(1999));

        assert_eq!(
            api.build_url("/movie/popular", &a).unwrap(),
            api.build_url("/movie/popular", &b).unwrap()
        );
    }

    #[test]
    fn absent_params_never_reach_the_query() {
        let params = RequestParams::new()
            .set("query", Some("alien"))
            .set("year", None::<u16>)
            .set("sort_by", None::<&str>);
        let url = api().build_url("/search/movie", &params).unwrap();

        assert_eq!(url.query(), Some("api_key=secret&query=alien"));
    }

    #[test]
    fn new_client_starts_with_empty_cache() {
        let api = api();
        assert_eq!(api.cache_len(), 0);
        api.clear_cache();
        assert_eq!(api.cache_len(), 0);
    }
}
