use serde::{Deserialize, Serialize};
use std::fmt;

/// Query parameters for one catalog request, kept in insertion order so the
/// resulting URL (and cache key) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pairs: Vec<(&'static str, String)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`, or does nothing when `value` is `None`. Setting a name
    /// twice replaces the first value in its original position.
    pub fn set<V: ToString>(mut self, name: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            match self.pairs.iter_mut().find(|(k, _)| *k == name) {
                Some(pair) => pair.1 = value,
                None => self.pairs.push((name, value)),
            }
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    #[serde(rename = "popularity.desc")]
    PopularityDesc,
    #[serde(rename = "release_date.desc")]
    ReleaseDateDesc,
    #[serde(rename = "vote_average.desc")]
    VoteAverageDesc,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::PopularityDesc => "popularity.desc",
            SortBy::ReleaseDateDesc => "release_date.desc",
            SortBy::VoteAverageDesc => "vote_average.desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "popularity.desc" | "popularity" => Some(SortBy::PopularityDesc),
            "release_date.desc" | "release_date" => Some(SortBy::ReleaseDateDesc),
            "vote_average.desc" | "vote_average" => Some(SortBy::VoteAverageDesc),
            _ => None,
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for `/search/movie`. `genre` is sent as `with_genres`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub page: Option<u32>,
    pub year: Option<u16>,
    pub genre: Option<u32>,
    pub sort_by: Option<SortBy>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn genre(mut self, genre: u32) -> Self {
        self.genre = Some(genre);
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }
}

/// Target of the recommendations and similar-movies endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationParams {
    pub movie_id: u64,
    pub page: Option<u32>,
}

impl RecommendationParams {
    pub fn new(movie_id: u64) -> Self {
        Self {
            movie_id,
            page: None,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}
