use crate::models::movie::{Genre, Movie, MovieDetails};
use crate::utils::images::{BackdropSize, ImageUrls, PosterSize, ProfileSize};
use crate::utils::pagination::{visible_pages, PageItem};
use chrono::NaiveDate;
use colored::Colorize;
use prettytable::{format, Cell, Row, Table};

const TOP_BILLED: usize = 5;

pub struct DisplayFormatter {
    images: ImageUrls,
}

impl DisplayFormatter {
    pub fn new(image_base_url: &str) -> Self {
        Self {
            images: ImageUrls::new(image_base_url),
        }
    }

    pub fn format_header(&self, text: &str) -> String {
        format!("\n=== {} ===", text.bright_white().bold())
    }

    pub fn format_table(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.add_row(Row::new(
            headers.iter().map(|h| Cell::new(h).style_spec("b")).collect(),
        ));

        for row in rows {
            table.add_row(Row::new(row.iter().map(|cell| Cell::new(cell)).collect()));
        }

        table.to_string()
    }

    pub fn format_movie_table(&self, movies: &[Movie]) -> String {
        if movies.is_empty() {
            return "No movies found.".dimmed().to_string();
        }

        let headers = &["ID", "Title", "Year", "Rating", "Votes"];
        let rows: Vec<Vec<String>> = movies
            .iter()
            .map(|m| {
                vec![
                    m.id.to_string(),
                    m.title.clone(),
                    m.release_year().unwrap_or("-").to_string(),
                    format!("{:.1}", m.vote_average),
                    m.vote_count.to_string(),
                ]
            })
            .collect();

        self.format_table(headers, &rows)
    }

    pub fn format_genre_table(&self, genres: &[Genre]) -> String {
        let rows: Vec<Vec<String>> = genres
            .iter()
            .map(|g| vec![g.id.to_string(), g.name.clone()])
            .collect();
        self.format_table(&["ID", "Genre"], &rows)
    }

    pub fn format_rating(&self, vote_average: f64) -> String {
        let text = format!("★ {:.1}", vote_average);
        if vote_average >= 7.0 {
            text.green().to_string()
        } else if vote_average >= 5.0 {
            text.yellow().to_string()
        } else {
            text.red().to_string()
        }
    }

    /// Whole dollars with thousands separators, e.g. `$1,000,000`.
    pub fn format_currency(&self, amount: u64) -> String {
        let digits = amount.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        out.push('$');
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    pub fn format_runtime(&self, minutes: u32) -> String {
        let hours = minutes / 60;
        let mins = minutes % 60;
        if hours > 0 {
            format!("{}h {}m", hours, mins)
        } else {
            format!("{}m", mins)
        }
    }

    /// `2023-01-15` becomes `January 15, 2023`. Anything else is echoed back.
    pub fn format_date(&self, date: &str) -> String {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|_| date.to_string())
    }

    pub fn format_pagination(&self, current: u32, total: u32) -> String {
        let items = visible_pages(current, total);
        if items.is_empty() {
            return String::new();
        }

        let pages: Vec<String> = items
            .into_iter()
            .map(|item| match item {
                PageItem::Page(p) if p == current => format!("[{}]", p).bold().to_string(),
                PageItem::Page(p) => p.to_string(),
                PageItem::Gap => "...".to_string(),
            })
            .collect();

        format!("Pages: {}  (of {})", pages.join(" "), total)
    }

    pub fn format_movie_details(&self, details: &MovieDetails) -> String {
        let movie = &details.movie;
        let mut output = Vec::new();

        let title = match movie.release_year() {
            Some(year) => format!("{} ({})", movie.title, year),
            None => movie.title.clone(),
        };
        output.push(self.format_header(&title));

        if let Some(tagline) = details.tagline.as_deref().filter(|t| !t.is_empty()) {
            output.push(tagline.italic().to_string());
        }
        if !movie.release_date.is_empty() {
            output.push(format!("Released: {}", self.format_date(&movie.release_date)));
        }
        if let Some(runtime) = details.runtime.filter(|r| *r > 0) {
            output.push(format!("Runtime: {}", self.format_runtime(runtime)));
        }
        output.push(format!(
            "Rating: {} ({} votes)",
            self.format_rating(movie.vote_average),
            movie.vote_count
        ));
        if !details.genres.is_empty() {
            let names: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
            output.push(format!("Genres: {}", names.join(", ")));
        }
        if !details.status.is_empty() {
            output.push(format!("Status: {}", details.status));
        }
        if details.budget > 0 {
            output.push(format!("Budget: {}", self.format_currency(details.budget)));
        }
        if details.revenue > 0 {
            output.push(format!("Revenue: {}", self.format_currency(details.revenue)));
        }

        let directors: Vec<&str> = details.directors().map(|d| d.name.as_str()).collect();
        if !directors.is_empty() {
            output.push(format!("Director: {}", directors.join(", ")));
        }

        if !movie.overview.is_empty() {
            output.push(format!("\n{}", movie.overview));
        }

        if !details.credits.cast.is_empty() {
            output.push("\nTop Billed Cast:".to_string());
            let mut cast: Vec<_> = details.credits.cast.iter().collect();
            cast.sort_by_key(|c| c.order);
            let rows: Vec<Vec<String>> = cast
                .into_iter()
                .take(TOP_BILLED)
                .map(|c| {
                    vec![
                        c.name.clone(),
                        c.character.clone(),
                        self.images.profile(c.profile_path.as_deref(), ProfileSize::default()),
                    ]
                })
                .collect();
            output.push(self.format_table(&["Actor", "Character", "Photo"], &rows));
        }

        if let Some(url) = details.trailer().and_then(|v| v.watch_url()) {
            output.push(format!("Trailer: {}", url));
        }
        output.push(format!(
            "Poster: {}",
            self.images.poster(movie.poster_path.as_deref(), PosterSize::default())
        ));
        output.push(format!(
            "Backdrop: {}",
            self.images.backdrop(movie.backdrop_path.as_deref(), BackdropSize::default())
        ));

        output.join("\n")
    }
}
