//! The QueryLayer answers aggregate questions about a catalog snapshot.
//!
//! Every method is a pure read: it borrows the provider, allocates its own
//! result, and leaves the snapshot untouched. Calling a method twice gives
//! the same answer.

use crate::aggregate::{critic_average_for, critic_averages};
use crate::error::{QueryError, Result};
use crate::expanded::ExpandedMovie;
use crate::traits::DataProvider;
use data_loader::{Movie, MovieId, Score};
use tracing::{debug, instrument};

/// Scores at or above this are excellent
pub const EXCELLENT_SCORE: Score = 9.0;

/// Movies sharing one id, in catalog order.
///
/// Several queries return one group per matching rating (or rating group)
/// rather than a flat list; a group normally holds exactly one movie.
pub type MovieGroup<'a> = Vec<&'a Movie>;

/// Read-only query entry point over a `DataProvider`.
///
/// ## Usage
/// ```ignore
/// let catalog = Catalog::load_from_files(Path::new("data/catalog"))?;
/// let queries = QueryLayer::new(&catalog);
///
/// let year = queries.average_release_year()?;
/// let spielberg = queries.movies_by_director("Steven Spielberg")?;
/// ```
pub struct QueryLayer<'a, P: DataProvider + ?Sized> {
    provider: &'a P,
}

impl<'a, P: DataProvider + ?Sized> Clone for QueryLayer<'a, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, P: DataProvider + ?Sized> Copy for QueryLayer<'a, P> {}

impl<'a, P: DataProvider + ?Sized> QueryLayer<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Mean release year across all movies.
    ///
    /// Sums into an `f64` accumulator with a fold; movie records are never
    /// written to. An empty catalog gives `EmptyDenominator`.
    #[instrument(skip(self))]
    pub fn average_release_year(&self) -> Result<f64> {
        let movies = self.provider.movies();
        if movies.is_empty() {
            return Err(QueryError::empty("release year of zero movies"));
        }

        let total = movies
            .iter()
            .fold(0.0_f64, |acc, movie| acc + f64::from(movie.year));
        let average = total / movies.len() as f64;

        debug!("Average release year over {} movies: {}", movies.len(), average);
        Ok(average)
    }

    /// Movies whose mean critic score is strictly above `threshold`.
    ///
    /// ## Algorithm
    /// 1. Group ratings by movie id into (sum, count)
    /// 2. Keep groups whose mean exceeds the threshold
    /// 3. For each kept group, collect the movies with that id
    ///
    /// Unrated movies have no mean and never qualify. Output follows the
    /// order in which each movie id first appears among the ratings.
    #[instrument(skip(self))]
    pub fn movies_with_critic_average_above(&self, threshold: Score) -> Vec<MovieGroup<'a>> {
        let selected: Vec<MovieGroup<'a>> = critic_averages(self.provider.ratings())
            .into_iter()
            .filter(|group| group.average > threshold)
            .map(|group| self.movies_with_id(group.movie_id))
            .collect();

        debug!("{} movies above average {}", selected.len(), threshold);
        selected
    }

    /// Movies directed by the first director named exactly `director_name`.
    ///
    /// An unknown name is `NotFound`. A known director with no movies
    /// gives an empty list.
    #[instrument(skip(self))]
    pub fn movies_by_director(&self, director_name: &str) -> Result<Vec<&'a Movie>> {
        let director = self
            .provider
            .directors()
            .iter()
            .find(|d| d.name == director_name)
            .ok_or_else(|| QueryError::not_found("director", director_name))?;

        let movies: Vec<&'a Movie> = self
            .provider
            .movies()
            .iter()
            .filter(|movie| movie.is_directed_by(director.id))
            .collect();

        debug!("Director {} has {} movies", director.id, movies.len());
        Ok(movies)
    }

    /// Mean critic score of one movie.
    ///
    /// A movie with no ratings (including an id that is not in the catalog)
    /// gives `EmptyDenominator`.
    #[instrument(skip(self))]
    pub fn critic_average_by_movie_id(&self, movie_id: MovieId) -> Result<Score> {
        critic_average_for(self.provider.ratings(), movie_id)
            .ok_or_else(|| QueryError::empty(format!("critic scores of movie {movie_id}")))
    }

    /// One group per individual rating of at least `EXCELLENT_SCORE`.
    ///
    /// Not deduplicated: a movie rated excellent by two critics appears
    /// twice. Returns an empty list when no rating qualifies.
    #[instrument(skip(self))]
    pub fn movies_with_excellent_rating(&self) -> Vec<MovieGroup<'a>> {
        let selected: Vec<MovieGroup<'a>> = self
            .provider
            .ratings()
            .iter()
            .filter(|rating| rating.score >= EXCELLENT_SCORE)
            .map(|rating| self.movies_with_id(rating.movie_id))
            .collect();

        debug!("{} excellent ratings", selected.len());
        selected
    }

    /// Full view of the first movie named exactly `movie_name`.
    ///
    /// See `ExpandedMovie::resolve` for how references are joined.
    #[instrument(skip(self))]
    pub fn expand_movie_information(&self, movie_name: &str) -> Result<ExpandedMovie> {
        let movie = self
            .provider
            .movies()
            .iter()
            .find(|m| m.name == movie_name)
            .ok_or_else(|| QueryError::not_found("movie", movie_name))?;

        let expanded = ExpandedMovie::resolve(self.provider, movie);
        debug!(
            "Expanded movie {} with {} reviews",
            expanded.id,
            expanded.reviews.len()
        );
        Ok(expanded)
    }

    fn movies_with_id(&self, movie_id: MovieId) -> MovieGroup<'a> {
        self.provider
            .movies()
            .iter()
            .filter(|movie| movie.id == movie_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Address, Catalog, Critic, Director, Genre, Rating};

    fn movie(id: MovieId, name: &str, year: i32, directors: Vec<u32>, genres: Vec<u32>) -> Movie {
        Movie {
            id,
            name: name.to_string(),
            year,
            filming_location: Address {
                street: "Av. Roca".to_string(),
                number: 3023,
                country: "Argentina".to_string(),
            },
            directors,
            genres,
        }
    }

    fn create_test_catalog() -> Catalog {
        let mut catalog = Catalog::new();

        for (id, name) in [(1, "Robert Zemeckis"), (5, "Steven Spielberg"), (6, "George Lucas")] {
            catalog.insert_director(Director {
                id,
                name: name.to_string(),
            });
        }
        for (id, name) in [(2, "Accion"), (6, "Aventura")] {
            catalog.insert_genre(Genre {
                id,
                name: name.to_string(),
            });
        }
        for (id, name) in [(2, "Alina Robles"), (3, "Suzana Mendez")] {
            catalog.insert_critic(Critic {
                id,
                name: name.to_string(),
                age: 30,
                country: "Argentina".to_string(),
            });
        }

        catalog.insert_movie(movie(1, "Back to the Future", 1985, vec![1], vec![6]));
        catalog.insert_movie(movie(3, "Indiana Jones", 2012, vec![6, 5], vec![6, 2]));

        for (movie_id, critic_id, score) in [(3, 3, 5.0), (3, 2, 7.0), (1, 2, 9.0)] {
            catalog.insert_rating(Rating {
                movie_id,
                critic_id,
                score,
            });
        }

        catalog
    }

    #[test]
    fn test_average_release_year() {
        let catalog = create_test_catalog();
        let queries = QueryLayer::new(&catalog);

        assert_eq!(queries.average_release_year().unwrap(), 1998.5);
    }

    #[test]
    fn test_average_release_year_empty() {
        let catalog = Catalog::new();
        let err = QueryLayer::new(&catalog).average_release_year().unwrap_err();

        assert!(matches!(err, QueryError::EmptyDenominator { .. }));
    }

    #[test]
    fn test_ratings_five_and_seven_average_six() {
        let catalog = create_test_catalog();
        let queries = QueryLayer::new(&catalog);

        assert_eq!(queries.critic_average_by_movie_id(3).unwrap(), 6.0);
    }

    #[test]
    fn test_critic_average_unrated() {
        let catalog = create_test_catalog();
        let err = QueryLayer::new(&catalog)
            .critic_average_by_movie_id(99)
            .unwrap_err();

        assert!(matches!(err, QueryError::EmptyDenominator { .. }));
    }

    #[test]
    fn test_threshold_is_strict() {
        let catalog = create_test_catalog();
        let queries = QueryLayer::new(&catalog);

        // movie 3 averages exactly 6.0
        let above = queries.movies_with_critic_average_above(6.0);
        assert_eq!(above.len(), 1);
        assert_eq!(above[0][0].id, 1);

        let above = queries.movies_with_critic_average_above(5.9);
        let ids: Vec<MovieId> = above.iter().map(|group| group[0].id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_movies_by_director() {
        let catalog = create_test_catalog();
        let queries = QueryLayer::new(&catalog);

        let movies = queries.movies_by_director("Steven Spielberg").unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].name, "Indiana Jones");
    }

    #[test]
    fn test_movies_by_unknown_director() {
        let catalog = create_test_catalog();
        let err = QueryLayer::new(&catalog)
            .movies_by_director("Alfred Hitchcock")
            .unwrap_err();

        assert_eq!(
            err,
            QueryError::NotFound {
                entity: "director",
                key: "Alfred Hitchcock".to_string(),
            }
        );
    }

    #[test]
    fn test_first_matching_director_wins() {
        let mut catalog = create_test_catalog();
        catalog.insert_director(Director {
            id: 9,
            name: "Robert Zemeckis".to_string(),
        });
        catalog.insert_movie(movie(9, "Other Zemeckis", 2000, vec![9], vec![]));

        let movies = QueryLayer::new(&catalog)
            .movies_by_director("Robert Zemeckis")
            .unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, 1);
    }

    #[test]
    fn test_excellent_rating_inclusive() {
        let catalog = create_test_catalog();
        let excellent = QueryLayer::new(&catalog).movies_with_excellent_rating();

        assert_eq!(excellent.len(), 1);
        assert_eq!(excellent[0][0].id, 1);
    }

    #[test]
    fn test_expand_joins_in_reference_order() {
        let catalog = create_test_catalog();
        let expanded = QueryLayer::new(&catalog)
            .expand_movie_information("Indiana Jones")
            .unwrap();

        let directors: Vec<&str> = expanded.directors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(directors, vec!["Steven Spielberg", "George Lucas"]);

        let genres: Vec<u32> = expanded.genres.iter().map(|g| g.id).collect();
        assert_eq!(genres, vec![2, 6]);

        assert_eq!(expanded.reviews.len(), 2);
        assert_eq!(expanded.reviews[0].critic.as_ref().unwrap().name, "Suzana Mendez");
        assert_eq!(expanded.reviews[0].score, 5.0);
    }

    #[test]
    fn test_expand_keeps_review_of_unknown_critic() {
        let mut catalog = create_test_catalog();
        catalog.insert_rating(Rating {
            movie_id: 1,
            critic_id: 77,
            score: 4.0,
        });

        let expanded = QueryLayer::new(&catalog)
            .expand_movie_information("Back to the Future")
            .unwrap();

        assert_eq!(expanded.reviews.len(), 2);
        assert_eq!(expanded.reviews[0].critic.as_ref().unwrap().name, "Alina Robles");
        assert_eq!(expanded.reviews[1].critic, None);
        assert_eq!(expanded.reviews[1].score, 4.0);
    }

    #[test]
    fn test_unrated_movie_never_above_threshold() {
        let mut catalog = create_test_catalog();
        catalog.insert_movie(movie(4, "Unrated", 2001, vec![1], vec![]));

        let above = QueryLayer::new(&catalog).movies_with_critic_average_above(-1.0);
        let ids: Vec<MovieId> = above.iter().map(|group| group[0].id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_no_excellent_rating() {
        let full = create_test_catalog();
        let catalog = Catalog::from_parts(
            full.movies().to_vec(),
            full.ratings()
                .iter()
                .filter(|r| r.score < EXCELLENT_SCORE)
                .copied()
                .collect(),
            full.directors().to_vec(),
            full.critics().to_vec(),
            full.genres().to_vec(),
        );
        assert_eq!(catalog.counts().ratings, 2);

        assert!(QueryLayer::new(&catalog).movies_with_excellent_rating().is_empty());
    }

    #[test]
    fn test_director_without_movies() {
        let mut catalog = create_test_catalog();
        catalog.insert_director(Director {
            id: 8,
            name: "Agnes Varda".to_string(),
        });

        let movies = QueryLayer::new(&catalog).movies_by_director("Agnes Varda").unwrap();
        assert!(movies.is_empty());
    }
}
