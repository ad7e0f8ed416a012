//! Core domain types for the movie catalog.
//!
//! This module defines the records the query layer reads:
//! - Type aliases for domain clarity (MovieId, CriticId, ...)
//! - Plain structs with public fields, one per collection
//! - The `Catalog` snapshot that owns every collection
//!
//! Every record type derives serde's `Serialize`/`Deserialize`. The field names are
//! the wire contract for the JSON files and for downstream consumers of the
//! query results, so renaming a field is a breaking change.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make joins readable and keep a critic id from passing as a movie id
// at a glance.

/// Unique identifier for a movie
pub type MovieId = u32;

/// Unique identifier for a director
pub type DirectorId = u32;

/// Unique identifier for a critic
pub type CriticId = u32;

/// Unique identifier for a genre
pub type GenreId = u32;

/// A critic's score for a movie (the bundled data uses a 0-10 scale)
pub type Score = f64;

// =============================================================================
// Movie-related Types
// =============================================================================

/// Where a movie's set was built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: u32,
    pub country: String,
}

/// Represents a movie in the catalog
///
/// `directors` and `genres` are foreign keys into the director and genre
/// collections. Their order is kept as loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub name: String,
    /// Release year
    pub year: i32,
    pub filming_location: Address,
    pub directors: Vec<DirectorId>,
    pub genres: Vec<GenreId>,
}

impl Movie {
    /// Whether `director_id` is one of this movie's directors
    pub fn is_directed_by(&self, director_id: DirectorId) -> bool {
        self.directors.contains(&director_id)
    }
}

// =============================================================================
// Reference Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    pub id: DirectorId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Critic {
    pub id: CriticId,
    pub name: String,
    pub age: u32,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

// =============================================================================
// Rating Type
// =============================================================================

/// A single score given by a critic to a movie
///
/// Nothing stops a critic from rating the same movie twice. Aggregations
/// treat each record as its own observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub movie_id: MovieId,
    pub critic_id: CriticId,
    pub score: Score,
}

// =============================================================================
// Catalog - The In-Memory Snapshot
// =============================================================================

/// Row counts per collection, mostly for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CatalogCounts {
    pub movies: usize,
    pub ratings: usize,
    pub directors: usize,
    pub critics: usize,
    pub genres: usize,
}

/// Owns every collection of the dataset.
///
/// Collections are plain `Vec`s rather than maps: source order matters to
/// the queries ("first match wins", results in encounter order), and the
/// dataset is small enough that linear scans are the right tool.
///
/// Once built, a catalog is only ever borrowed. Getters hand out slices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub(crate) movies: Vec<Movie>,
    pub(crate) ratings: Vec<Rating>,
    pub(crate) directors: Vec<Director>,
    pub(crate) critics: Vec<Critic>,
    pub(crate) genres: Vec<Genre>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from already parsed collections
    pub fn from_parts(
        movies: Vec<Movie>,
        ratings: Vec<Rating>,
        directors: Vec<Director>,
        critics: Vec<Critic>,
        genres: Vec<Genre>,
    ) -> Self {
        Self {
            movies,
            ratings,
            directors,
            critics,
            genres,
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    pub fn directors(&self) -> &[Director] {
        &self.directors
    }

    pub fn critics(&self) -> &[Critic] {
        &self.critics
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    // Builders - used while assembling a snapshot, never by queries

    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    pub fn insert_rating(&mut self, rating: Rating) {
        self.ratings.push(rating);
    }

    pub fn insert_director(&mut self, director: Director) {
        self.directors.push(director);
    }

    pub fn insert_critic(&mut self, critic: Critic) {
        self.critics.push(critic);
    }

    pub fn insert_genre(&mut self, genre: Genre) {
        self.genres.push(genre);
    }

    /// Get counts for debugging/validation
    pub fn counts(&self) -> CatalogCounts {
        CatalogCounts {
            movies: self.movies.len(),
            ratings: self.ratings.len(),
            directors: self.directors.len(),
            critics: self.critics.len(),
            genres: self.genres.len(),
        }
    }
}
