//! Error types for the query layer.
//!
//! Both variants are ordinary outcomes of asking a question the snapshot
//! cannot answer. Nothing here is fatal and no query panics.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// A lookup by name or id matched nothing
    ///
    /// `entity` is the collection searched ("director", "movie", "critic"),
    /// `key` is what was searched for.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// An average was requested over zero contributing records
    #[error("cannot average {what}: no records")]
    EmptyDenominator { what: String },
}

impl QueryError {
    pub(crate) fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub(crate) fn empty(what: impl Into<String>) -> Self {
        Self::EmptyDenominator { what: what.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, QueryError>;
