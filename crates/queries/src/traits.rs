//! Core traits for the query layer.
//!
//! This module defines the `DataProvider` trait: the read-only view of the
//! dataset that every query runs against.

use data_loader::{Catalog, Critic, Director, Genre, Movie, Rating};

/// Read-only access to the five catalog collections.
///
/// ## Design Note
/// - Slices keep the provider's order, which the queries depend on
/// - There is no refresh or change notification; a provider is a snapshot
/// - `Catalog` is the implementation used everywhere outside tests
pub trait DataProvider {
    fn movies(&self) -> &[Movie];

    fn ratings(&self) -> &[Rating];

    fn directors(&self) -> &[Director];

    fn critics(&self) -> &[Critic];

    fn genres(&self) -> &[Genre];
}

impl DataProvider for Catalog {
    fn movies(&self) -> &[Movie] {
        Catalog::movies(self)
    }

    fn ratings(&self) -> &[Rating] {
        Catalog::ratings(self)
    }

    fn directors(&self) -> &[Director] {
        Catalog::directors(self)
    }

    fn critics(&self) -> &[Critic] {
        Catalog::critics(self)
    }

    fn genres(&self) -> &[Genre] {
        Catalog::genres(self)
    }
}
