//! Read-only queries over a movie catalog snapshot.
//!
//! This crate provides:
//! - The `DataProvider` trait, the seam between the queries and the data
//! - `QueryLayer`, one method per question the catalog can answer
//! - Result types (`CriticAverage`, `ExpandedMovie`, `Review`) and `QueryError`
//!
//! ## Queries
//! - average release year
//! - movies whose mean critic score is above a threshold
//! - movies by director name
//! - mean critic score of one movie
//! - movies with at least one excellent (>= 9) rating
//! - a movie expanded with its directors, genres and reviews
//!
//! Lookups that match nothing return `QueryError::NotFound`; averages over
//! nothing return `QueryError::EmptyDenominator`.
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::Catalog;
//! use queries::QueryLayer;
//!
//! let catalog = Catalog::load_from_files(Path::new("data/catalog"))?;
//! let queries = QueryLayer::new(&catalog);
//!
//! let indiana = queries.expand_movie_information("Indiana Jones y los cazadores del arca perdida")?;
//! for review in &indiana.reviews {
//!     if let Some(critic) = &review.critic {
//!         println!("{} ({}): {}", critic.name, critic.country, review.score);
//!     }
//! }
//! ```

pub mod traits;
pub mod error;
pub mod aggregate;
pub mod expanded;
pub mod query_layer;

// Re-export main types
pub use traits::DataProvider;
pub use error::{QueryError, Result};
pub use aggregate::{critic_averages, CriticAverage};
pub use expanded::{ExpandedMovie, Review};
pub use query_layer::{MovieGroup, QueryLayer, EXCELLENT_SCORE};
