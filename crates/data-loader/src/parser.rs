//! Parser for catalog collection files.
//!
//! Each collection lives in its own JSON file holding an array of records:
//! - movies.json: `[{ "id", "name", "year", "filming_location", "directors", "genres" }]`
//! - ratings.json: `[{ "movie_id", "critic_id", "score" }]`
//! - directors.json: `[{ "id", "name" }]`
//! - critics.json: `[{ "id", "name", "age", "country" }]`
//! - genres.json: `[{ "id", "name" }]`
//!
//! Array order is preserved; the query layer relies on it.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const MOVIES_FILE: &str = "movies.json";
pub const RATINGS_FILE: &str = "ratings.json";
pub const DIRECTORS_FILE: &str = "directors.json";
pub const CRITICS_FILE: &str = "critics.json";
pub const GENRES_FILE: &str = "genres.json";

/// Parse a JSON array of records already held in memory
///
/// `file` is only used to label errors.
pub fn parse_collection_str<T: DeserializeOwned>(file: &str, text: &str) -> Result<Vec<T>> {
    serde_json::from_str(text).map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

/// Read a whole file and parse it as a JSON array of `T`
fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let label = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_collection_str(&label, &text)
}

pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    read_collection(path)
}

pub fn parse_ratings(path: &Path) -> Result<Vec<Rating>> {
    read_collection(path)
}

pub fn parse_directors(path: &Path) -> Result<Vec<Director>> {
    read_collection(path)
}

pub fn parse_critics(path: &Path) -> Result<Vec<Critic>> {
    read_collection(path)
}

pub fn parse_genres(path: &Path) -> Result<Vec<Genre>> {
    read_collection(path)
}
