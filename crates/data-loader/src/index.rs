//! Catalog assembly and integrity checks.
//!
//! Loading a snapshot means:
//! - parsing the five collection files (in parallel with Rayon)
//! - assembling them into a `Catalog`
//! - checking that every foreign key resolves

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

impl Catalog {
    /// Load a catalog snapshot from a directory of JSON collection files
    ///
    /// Steps:
    /// 1. Parse all five files (movies, ratings, directors, critics, genres)
    /// 2. Assemble the Catalog in file order
    /// 3. Validate references
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", data_dir);

        let movies_path = data_dir.join(parser::MOVIES_FILE);
        let ratings_path = data_dir.join(parser::RATINGS_FILE);
        let directors_path = data_dir.join(parser::DIRECTORS_FILE);
        let critics_path = data_dir.join(parser::CRITICS_FILE);
        let genres_path = data_dir.join(parser::GENRES_FILE);

        // Nested joins give five-way parallelism: the two collections that
        // grow (movies, ratings) on one side, reference data on the other.
        let ((movies, ratings), (directors, (critics, genres))) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_movies(&movies_path),
                    || parser::parse_ratings(&ratings_path),
                )
            },
            || {
                rayon::join(
                    || parser::parse_directors(&directors_path),
                    || {
                        rayon::join(
                            || parser::parse_critics(&critics_path),
                            || parser::parse_genres(&genres_path),
                        )
                    },
                )
            },
        );

        let catalog = Catalog::from_parts(movies?, ratings?, directors?, critics?, genres?);

        let counts = catalog.counts();
        info!(
            "Loaded {} movies, {} ratings, {} directors, {} critics, {} genres",
            counts.movies, counts.ratings, counts.directors, counts.critics, counts.genres
        );

        catalog.validate()?;

        debug!("Catalog validated");
        Ok(catalog)
    }

    /// Validate referential integrity
    ///
    /// Check that:
    /// - every rating points at an existing movie and critic
    /// - every movie's director and genre ids exist
    ///
    /// Field contents are not checked. Returns the first dangling reference.
    pub fn validate(&self) -> Result<()> {
        let movie_ids: HashSet<MovieId> = self.movies.iter().map(|m| m.id).collect();
        let critic_ids: HashSet<CriticId> = self.critics.iter().map(|c| c.id).collect();
        let director_ids: HashSet<DirectorId> = self.directors.iter().map(|d| d.id).collect();
        let genre_ids: HashSet<GenreId> = self.genres.iter().map(|g| g.id).collect();

        for rating in &self.ratings {
            if !movie_ids.contains(&rating.movie_id) {
                return Err(missing("Movie", rating.movie_id));
            }
            if !critic_ids.contains(&rating.critic_id) {
                return Err(missing("Critic", rating.critic_id));
            }
        }

        for movie in &self.movies {
            if let Some(&id) = movie.directors.iter().find(|id| !director_ids.contains(id)) {
                return Err(missing("Director", id));
            }
            if let Some(&id) = movie.genres.iter().find(|id| !genre_ids.contains(id)) {
                return Err(missing("Genre", id));
            }
        }

        Ok(())
    }
}

fn missing(entity: &str, id: u32) -> DataLoadError {
    DataLoadError::MissingReference {
        entity: entity.to_string(),
        id,
    }
}
