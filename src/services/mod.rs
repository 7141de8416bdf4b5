pub mod movie_service;
