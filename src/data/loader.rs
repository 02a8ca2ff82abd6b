//! Load a movie description from disk. YAML for `.yaml`/`.yml`, JSON otherwise.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::data::movie::{Movie, MovieRecord};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read movie file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse movie JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse movie YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false)
}

/// Parse a movie record from raw text. `yaml` selects the format.
pub fn parse_movie(raw: &str, yaml: bool) -> Result<Movie, LoadError> {
    let record: MovieRecord = if yaml {
        serde_yaml::from_str(raw)?
    } else {
        serde_json::from_str(raw)?
    };
    Ok(Movie::from(record))
}

pub fn load_movie(path: impl AsRef<Path>) -> Result<Movie, LoadError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let movie = parse_movie(&raw, is_yaml(path))?;
    tracing::info!(path = %path.display(), title = movie.title(), "loaded movie");
    Ok(movie)
}
