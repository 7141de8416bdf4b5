use thiserror::Error;

/// Everything that can go wrong talking to the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The HTTP call never completed. Surfaced as reqwest reports it.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("TMDB API error: {status} {status_text}")]
    Upstream { status: u16, status_text: String },

    /// The body was JSON but not the shape the endpoint promises.
    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("TMDB API key is not configured")]
    MissingApiKey,

    #[error("Invalid TMDB base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Invalid value for {name}: {value}")]
    InvalidSetting { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub(crate) fn upstream(status: reqwest::StatusCode) -> Self {
        CatalogError::Upstream {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// Message safe for logs and the terminal: a request URL embedded by the
    /// transport is cut down to its path, so the `api_key` query never shows.
    pub fn redacted(&self) -> String {
        let text = self.to_string();
        match self {
            CatalogError::Transport(e) => match e.url() {
                Some(url) => {
                    let mut bare = url.clone();
                    bare.set_query(None);
                    text.replace(url.as_str(), bare.as_str())
                }
                None => text,
            },
            _ => text,
        }
    }
}
