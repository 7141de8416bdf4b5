pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used items
pub use api::tmdb::TmdbApi;
pub use config::Config;
pub use error::{CatalogError, Result};
pub use services::movie_service::{Category, MovieService};
