//! # Data Loader Crate
//!
//! This crate owns the movie catalog: its record types and the code that
//! loads a snapshot of it from disk.
//!
//! ## Main Components
//!
//! - **types**: Domain records (Movie, Rating, Director, Critic, Genre) and the `Catalog`
//! - **parser**: Parse the JSON collection files into Rust structs
//! - **index**: Assemble and validate a `Catalog`
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_files(Path::new("data/catalog"))?;
//!
//! let counts = catalog.counts();
//! println!("{} movies, {} ratings", counts.movies, counts.ratings);
//! ```
//!
//! A loaded `Catalog` is never mutated again. Query code borrows it.

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    MovieId,
    DirectorId,
    CriticId,
    GenreId,
    Score,
    // Core types
    Address,
    Movie,
    Rating,
    Director,
    Critic,
    Genre,
    Catalog,
    CatalogCounts,
};
