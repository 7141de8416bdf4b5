pub mod cache;
pub mod movie;
pub mod params;
