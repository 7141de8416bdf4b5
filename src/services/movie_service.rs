use crate::api::tmdb::TmdbApi;
use crate::error::Result;
use crate::models::movie::MovieResponse;
use crate::models::params::{RecommendationParams, SearchParams};
use crate::utils::display::DisplayFormatter;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// The four browsable listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
}

impl Category {
    pub fn title(&self) -> &'static str {
        match self {
            Category::Popular => "Popular Movies",
            Category::TopRated => "Top Rated Movies",
            Category::NowPlaying => "Now Playing",
            Category::Upcoming => "Upcoming Movies",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "popular" => Ok(Category::Popular),
            "top" | "top_rated" => Ok(Category::TopRated),
            "now" | "now_playing" => Ok(Category::NowPlaying),
            "upcoming" => Ok(Category::Upcoming),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Page-level operations: fetch through the catalog client and render the
/// result for the terminal.
pub struct MovieService {
    api: TmdbApi,
    display: DisplayFormatter,
}

impl MovieService {
    pub fn new(api: TmdbApi) -> Self {
        let display = DisplayFormatter::new(&api.config().image_base_url);
        Self { api, display }
    }

    pub fn api(&self) -> &TmdbApi {
        &self.api
    }

    pub async fn fetch_category(&self, category: Category, page: u32) -> Result<MovieResponse> {
        match category {
            Category::Popular => self.api.get_popular_movies(page).await,
            Category::TopRated => self.api.get_top_rated_movies(page).await,
            Category::NowPlaying => self.api.get_now_playing_movies(page).await,
            Category::Upcoming => self.api.get_upcoming_movies(page).await,
        }
    }

    /// First page of every listing, one section each.
    pub async fn home(&self) -> Result<String> {
        info!("Loading home listings");
        let (popular, top_rated, now_playing, upcoming) = tokio::try_join!(
            self.fetch_category(Category::Popular, 1),
            self.fetch_category(Category::TopRated, 1),
            self.fetch_category(Category::NowPlaying, 1),
            self.fetch_category(Category::Upcoming, 1),
        )?;

        let sections = [
            (Category::Popular, popular),
            (Category::TopRated, top_rated),
            (Category::NowPlaying, now_playing),
            (Category::Upcoming, upcoming),
        ];

        Ok(sections
            .iter()
            .map(|(category, response)| {
                let top: Vec<_> = response.results.iter().take(10).cloned().collect();
                format!(
                    "{}\n{}",
                    self.display.format_header(category.title()),
                    self.display.format_movie_table(&top)
                )
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }

    pub async fn movie_list(&self, category: Category, page: u32) -> Result<String> {
        info!("Loading {} page {}", category, page);
        let response = self.fetch_category(category, page).await?;
        Ok(self.render_page(category.title(), &response))
    }

    /// A blank query renders an empty result without touching the network.
    pub async fn search(&self, params: &SearchParams) -> Result<String> {
        if params.query.trim().is_empty() {
            return Ok(self.render_page("Search Results", &MovieResponse::default()));
        }

        info!("Searching for {:?}", params.query);
        let response = self.api.search_movies(params).await?;
        let title = format!(
            "Results for \"{}\" ({} found)",
            params.query, response.total_results
        );
        Ok(self.render_page(&title, &response))
    }

    /// Detail view followed by recommendations. A failing recommendations
    /// call does not hide the details.
    pub async fn movie_details(&self, movie_id: u64) -> Result<String> {
        info!("Loading details for movie {}", movie_id);
        let details = self.api.get_movie_details(movie_id).await?;
        let mut output = self.display.format_movie_details(&details);

        match self
            .api
            .get_recommendations(RecommendationParams::new(movie_id))
            .await
        {
            Ok(recs) if !recs.results.is_empty() => {
                let top: Vec<_> = recs.results.into_iter().take(6).collect();
                output.push_str(&self.display.format_header("Recommended"));
                output.push('\n');
                output.push_str(&self.display.format_movie_table(&top));
            }
            Ok(_) => {}
            Err(e) => warn!("Recommendations unavailable for {}: {}", movie_id, e.redacted()),
        }

        Ok(output)
    }

    pub async fn recommendations(&self, params: RecommendationParams) -> Result<String> {
        let response = self.api.get_recommendations(params).await?;
        let title = format!("Recommended for movie {}", params.movie_id);
        Ok(self.render_page(&title, &response))
    }

    pub async fn similar(&self, params: RecommendationParams) -> Result<String> {
        let response = self.api.get_similar_movies(params).await?;
        let title = format!("Similar to movie {}", params.movie_id);
        Ok(self.render_page(&title, &response))
    }

    pub async fn genres(&self) -> Result<String> {
        let list = self.api.get_genres().await?;
        Ok(format!(
            "{}\n{}",
            self.display.format_header("Genres"),
            self.display.format_genre_table(&list.genres)
        ))
    }

    pub fn clear_cache(&self) {
        self.api.clear_cache();
    }

    fn render_page(&self, title: &str, response: &MovieResponse) -> String {
        let mut output = vec![
            self.display.format_header(title),
            self.display.format_movie_table(&response.results),
        ];
        let pagination = self
            .display
            .format_pagination(response.page, response.total_pages);
        if !pagination.is_empty() {
            output.push(pagination);
        }
        output.join("\n")
    }
}
