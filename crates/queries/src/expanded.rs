//! The expanded view of a movie.
//!
//! An `ExpandedMovie` is a `Movie` with its foreign keys resolved: director
//! and genre ids become the full records, and every rating of the movie
//! becomes a `Review` carrying the critic who wrote it.

use crate::traits::DataProvider;
use data_loader::{Address, Critic, Director, Genre, Movie, MovieId, Score};
use serde::Serialize;

/// A critic's score together with the critic's record
///
/// `critic` is `None` when the rating names a critic the provider does not
/// have. The score is still reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub critic: Option<Critic>,
    pub score: Score,
}

/// A movie joined with its directors, genres and reviews
///
/// Field names match `Movie` so consumers can read either shape; only
/// `directors` and `genres` change type, and `reviews` is added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandedMovie {
    pub id: MovieId,
    pub name: String,
    pub year: i32,
    pub filming_location: Address,
    pub directors: Vec<Director>,
    pub genres: Vec<Genre>,
    pub reviews: Vec<Review>,
}

impl ExpandedMovie {
    /// Resolve every reference of `movie` against `provider`
    ///
    /// Directors and genres come back in the order of their own collections.
    /// Ids with no matching record are skipped. Reviews follow rating order,
    /// one per rating of the movie.
    pub fn resolve<P: DataProvider + ?Sized>(provider: &P, movie: &Movie) -> Self {
        let directors = provider
            .directors()
            .iter()
            .filter(|d| movie.directors.contains(&d.id))
            .cloned()
            .collect();

        let genres = provider
            .genres()
            .iter()
            .filter(|g| movie.genres.contains(&g.id))
            .cloned()
            .collect();

        let reviews = provider
            .ratings()
            .iter()
            .filter(|r| r.movie_id == movie.id)
            .map(|rating| Review {
                critic: provider
                    .critics()
                    .iter()
                    .find(|c| c.id == rating.critic_id)
                    .cloned(),
                score: rating.score,
            })
            .collect();

        Self {
            id: movie.id,
            name: movie.name.clone(),
            year: movie.year,
            filming_location: movie.filming_location.clone(),
            directors,
            genres,
            reviews,
        }
    }
}
