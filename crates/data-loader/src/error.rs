//! Error types for the data-loader crate.
//!
//! The `#[derive(Error)]` macro from thiserror implements `std::error::Error`
//! and `Display` from the `#[error(...)]` attributes.

use thiserror::Error;

/// Errors that can occur while loading a catalog snapshot
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A collection file was not valid JSON for its record type
    ///
    /// `reason` carries serde_json's message, which already names the line
    /// and column.
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// Referenced entity doesn't exist (e.g., rating for non-existent critic)
    #[error("Missing reference: {entity} with id {id}")]
    MissingReference { entity: String, id: u32 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
