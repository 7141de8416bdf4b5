use movie_catalog::models::params::{RecommendationParams, SearchParams, SortBy};
use movie_catalog::{Category, Config, MovieService, TmdbApi};
use std::error::Error;
use std::io::{self, Write};
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting Movie Catalog");

    let config = Config::from_env()?;
    let movie_service = MovieService::new(TmdbApi::new(config)?);

    println!("=== Movie Catalog ===");
    println!("Commands:");
    println!("  home                         - Popular, top rated, now playing and upcoming");
    println!("  popular|top|now|upcoming [p] - Browse a listing");
    println!("  search <query> [--page N] [--year Y] [--genre ID] [--sort popularity|release_date|vote_average]");
    println!("  movie <id>                   - Show movie details");
    println!("  similar <id> [p]             - Movies similar to <id>");
    println!("  recs <id> [p]                - Recommendations for <id>");
    println!("  genres                       - List genres");
    println!("  refresh                      - Clear the response cache");
    println!("  exit                         - Exit the program");

    let mut input = String::new();
    loop {
        input.clear();
        print!("> ");
        io::stdout().flush()?;
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        let mut words = input.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();

        let result = match command {
            "exit" | "quit" => {
                debug!("Received exit command");
                break;
            }
            "home" => movie_service.home().await,
            "popular" | "top" | "now" | "upcoming" => match command.parse::<Category>() {
                Ok(category) => movie_service.movie_list(category, page_arg(args.first())).await,
                Err(e) => Ok(e),
            },
            "search" => match parse_search(&args) {
                Ok(params) => movie_service.search(&params).await,
                Err(usage) => Ok(usage),
            },
            "movie" | "similar" | "recs" => match args.first().and_then(|id| id.parse::<u64>().ok()) {
                Some(id) if command == "movie" => movie_service.movie_details(id).await,
                Some(id) => {
                    let params = RecommendationParams::new(id).page(page_arg(args.get(1)));
                    if command == "similar" {
                        movie_service.similar(params).await
                    } else {
                        movie_service.recommendations(params).await
                    }
                }
                None => Ok(format!("Usage: {} <movie id>", command)),
            },
            "genres" => movie_service.genres().await,
            "refresh" => {
                movie_service.clear_cache();
                Ok("Cache cleared.".to_string())
            }
            other => Ok(format!("Unknown command: {}", other)),
        };

        match result {
            Ok(output) => println!("{}", output),
            Err(e) => {
                let message = e.redacted();
                error!("Command {} failed: {}", command, message);
                println!("Error: {}", message);
            }
        }
    }

    info!("Shutting down");
    Ok(())
}

fn page_arg(arg: Option<&&str>) -> u32 {
    arg.and_then(|p| p.parse().ok()).filter(|p| *p > 0).unwrap_or(1)
}

fn parse_search(args: &[&str]) -> Result<SearchParams, String> {
    let mut query = Vec::new();
    let mut params = SearchParams::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .copied()
                .ok_or_else(|| format!("Missing value for {}", flag))
        };
        match *arg {
            "--page" => params.page = Some(value("--page")?.parse().map_err(|_| "Invalid page")?),
            "--year" => params.year = Some(value("--year")?.parse().map_err(|_| "Invalid year")?),
            "--genre" => params.genre = Some(value("--genre")?.parse().map_err(|_| "Invalid genre id")?),
            "--sort" => {
                params.sort_by = Some(SortBy::parse(value("--sort")?).ok_or("Invalid sort order")?)
            }
            word => query.push(word),
        }
    }

    if query.is_empty() {
        return Err("Usage: search <query> [--page N] [--year Y] [--genre ID] [--sort ORDER]".to_string());
    }
    params.query = query.join(" ");
    Ok(params)
}
