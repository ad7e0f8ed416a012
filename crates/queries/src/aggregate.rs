//! Per-movie critic score aggregation.
//!
//! Ratings are grouped by movie id with an explicit `movie id -> (sum, count)`
//! map, so a single pass over the ratings is enough. Groups come out in the
//! order their movie id was first seen.

use data_loader::{MovieId, Rating, Score};
use serde::Serialize;
use std::collections::HashMap;

/// Mean critic score of one movie
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriticAverage {
    pub movie_id: MovieId,
    pub average: Score,
    /// Number of rating records that contributed
    pub count: u32,
}

/// Running sum and count for one movie
#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    sum: Score,
    count: u32,
}

impl Accumulator {
    fn add(&mut self, score: Score) {
        self.sum += score;
        self.count += 1;
    }

    fn average(&self) -> Score {
        self.sum / f64::from(self.count)
    }
}

/// Compute the mean score of every movie that has at least one rating
///
/// Every record counts on its own: a critic who rated the same movie twice
/// contributes both scores and both counts.
pub fn critic_averages(ratings: &[Rating]) -> Vec<CriticAverage> {
    let mut order: Vec<MovieId> = Vec::new();
    let mut groups: HashMap<MovieId, Accumulator> = HashMap::new();

    for rating in ratings {
        groups
            .entry(rating.movie_id)
            .or_insert_with(|| {
                order.push(rating.movie_id);
                Accumulator::default()
            })
            .add(rating.score);
    }

    order
        .into_iter()
        .filter_map(|movie_id| {
            groups.get(&movie_id).map(|acc| CriticAverage {
                movie_id,
                average: acc.average(),
                count: acc.count,
            })
        })
        .collect()
}

/// Mean score of a single movie, or `None` if nobody rated it
pub fn critic_average_for(ratings: &[Rating], movie_id: MovieId) -> Option<Score> {
    let acc = ratings
        .iter()
        .filter(|r| r.movie_id == movie_id)
        .fold(Accumulator::default(), |mut acc, r| {
            acc.add(r.score);
            acc
        });

    (acc.count > 0).then(|| acc.average())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(movie_id: MovieId, critic_id: u32, score: Score) -> Rating {
        Rating {
            movie_id,
            critic_id,
            score,
        }
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let ratings = vec![
            rating(3, 1, 5.0),
            rating(1, 1, 8.0),
            rating(3, 2, 7.0),
        ];

        let averages = critic_averages(&ratings);
        assert_eq!(averages.len(), 2);
        assert_eq!(averages[0].movie_id, 3);
        assert_eq!(averages[0].average, 6.0);
        assert_eq!(averages[0].count, 2);
        assert_eq!(averages[1].movie_id, 1);
        assert_eq!(averages[1].average, 8.0);
    }

    #[test]
    fn test_duplicate_critic_counts_twice() {
        // Same critic, same movie: (9 + 9 + 6) / 3, not (9 + 6) / 2
        let ratings = vec![rating(2, 2, 9.0), rating(2, 2, 9.0), rating(2, 4, 6.0)];

        let averages = critic_averages(&ratings);
        assert_eq!(averages.len(), 1);
        assert_eq!(averages[0].average, 8.0);
        assert_eq!(averages[0].count, 3);
    }

    #[test]
    fn test_no_ratings() {
        assert!(critic_averages(&[]).is_empty());
        assert_eq!(critic_average_for(&[], 1), None);
    }

    #[test]
    fn test_single_movie_average() {
        let ratings = vec![rating(1, 1, 5.0), rating(2, 1, 10.0), rating(1, 2, 7.0)];
        assert_eq!(critic_average_for(&ratings, 1), Some(6.0));
        assert_eq!(critic_average_for(&ratings, 3), None);
    }
}
