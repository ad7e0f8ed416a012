use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Catalog, Movie, MovieId};
use queries::{ExpandedMovie, MovieGroup, QueryLayer};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// ReelQuery - Movie catalog queries
#[derive(Parser)]
#[command(name = "reel-query")]
#[command(about = "Aggregate queries over a movie, critic and rating catalog", long_about = None)]
struct Cli {
    /// Path to the catalog directory (movies.json, ratings.json, ...)
    #[arg(short, long, default_value = "data/catalog", global = true)]
    data_dir: PathBuf,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how many records each collection holds
    Summary,

    /// Average release year of all movies
    AverageYear,

    /// Movies whose mean critic score is above a threshold
    Above {
        /// Strict lower bound for the mean score
        #[arg(long)]
        threshold: f64,
    },

    /// Movies by a director
    Director {
        /// Exact director name
        #[arg(long)]
        name: String,
    },

    /// Mean critic score of one movie
    CriticAverage {
        /// Movie ID
        #[arg(long)]
        movie_id: MovieId,
    },

    /// Movies with at least one rating of 9 or more (one line per rating)
    Excellent,

    /// Show a movie with its directors, genres and reviews
    Expand {
        /// Exact movie name
        #[arg(long)]
        name: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Catalog::load_from_files(&cli.data_dir)
        .with_context(|| format!("Failed to load catalog from {}", cli.data_dir.display()))?;
    info!("Loaded catalog in {:?}", start.elapsed());

    let queries = QueryLayer::new(&catalog);
    let json = cli.json;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Summary => handle_summary(&catalog, json)?,
        Commands::AverageYear => handle_average_year(queries, json)?,
        Commands::Above { threshold } => handle_above(queries, threshold, json)?,
        Commands::Director { name } => handle_director(queries, &name, json)?,
        Commands::CriticAverage { movie_id } => handle_critic_average(queries, movie_id, json)?,
        Commands::Excellent => handle_excellent(queries, json)?,
        Commands::Expand { name } => handle_expand(queries, &name, json)?,
    }

    Ok(())
}

fn handle_summary(catalog: &Catalog, json: bool) -> Result<()> {
    let counts = catalog.counts();
    if json {
        return print_json(&counts);
    }

    println!("{}", "Catalog summary:".bold().blue());
    println!("{}Movies: {}", "• ".green(), counts.movies);
    println!("{}Ratings: {}", "• ".green(), counts.ratings);
    println!("{}Directors: {}", "• ".green(), counts.directors);
    println!("{}Critics: {}", "• ".green(), counts.critics);
    println!("{}Genres: {}", "• ".green(), counts.genres);
    Ok(())
}

fn handle_average_year(queries: QueryLayer<'_, Catalog>, json: bool) -> Result<()> {
    let average = queries.average_release_year()?;
    if json {
        return print_json(&average);
    }

    println!("{} {:.2}", "Average release year:".bold().blue(), average);
    Ok(())
}

fn handle_above(queries: QueryLayer<'_, Catalog>, threshold: f64, json: bool) -> Result<()> {
    let groups = queries.movies_with_critic_average_above(threshold);
    if json {
        return print_json(&groups);
    }

    let title = format!("Movies with critic average above {}:", threshold);
    print_movie_groups(&title, &groups);
    Ok(())
}

fn handle_director(queries: QueryLayer<'_, Catalog>, name: &str, json: bool) -> Result<()> {
    let movies = queries.movies_by_director(name)?;
    if json {
        return print_json(&movies);
    }

    println!("{}", format!("Movies by {}:", name).bold().blue());
    if movies.is_empty() {
        println!("  (none)");
    }
    for movie in movies {
        print_movie(movie);
    }
    Ok(())
}

fn handle_critic_average(queries: QueryLayer<'_, Catalog>, movie_id: MovieId, json: bool) -> Result<()> {
    let average = queries.critic_average_by_movie_id(movie_id)?;
    if json {
        return print_json(&average);
    }

    println!(
        "{} {:.2}",
        format!("Critic average for movie {}:", movie_id).bold().blue(),
        average
    );
    Ok(())
}

fn handle_excellent(queries: QueryLayer<'_, Catalog>, json: bool) -> Result<()> {
    let groups = queries.movies_with_excellent_rating();
    if json {
        return print_json(&groups);
    }

    print_movie_groups("Movies with an excellent rating:", &groups);
    Ok(())
}

fn handle_expand(queries: QueryLayer<'_, Catalog>, name: &str, json: bool) -> Result<()> {
    let expanded = queries.expand_movie_information(name)?;
    if json {
        return print_json(&expanded);
    }

    print_expanded(&expanded);
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{}", text);
    Ok(())
}

fn print_movie(movie: &Movie) {
    println!(
        "  {}: {} ({}) - {}",
        movie.id.to_string().green(),
        movie.name,
        movie.year,
        movie.filming_location.country
    );
}

fn print_movie_groups(title: &str, groups: &[MovieGroup<'_>]) {
    println!("{}", title.bold().blue());
    if groups.is_empty() {
        println!("  (none)");
    }
    for movie in groups.iter().flatten() {
        print_movie(movie);
    }
}

fn print_expanded(movie: &ExpandedMovie) {
    println!("{}", format!("{} ({})", movie.name, movie.year).bold().blue());
    println!("{}ID: {}", "• ".green(), movie.id);
    println!(
        "{}Filmed at: {} {}, {}",
        "• ".green(),
        movie.filming_location.street,
        movie.filming_location.number,
        movie.filming_location.country
    );

    let directors = movie
        .directors
        .iter()
        .map(|d| d.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    println!("{}Directors: {}", "• ".green(), directors);

    let genres = movie
        .genres
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    println!("{}Genres: {}", "• ".green(), genres);

    println!("{}Reviews ({}):", "• ".cyan(), movie.reviews.len());
    for review in &movie.reviews {
        let critic = match &review.critic {
            Some(critic) => format!("{} ({}, {})", critic.name, critic.age, critic.country),
            None => "unknown critic".dimmed().to_string(),
        };
        println!("  - {}: {}", critic, review.score.to_string().yellow());
    }
}
