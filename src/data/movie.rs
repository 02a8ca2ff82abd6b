//! Movie record: descriptive fields plus stats derived once at construction.

use serde::Deserialize;

use crate::combat::stats::{derive_stats, CombatStats};

pub const DEFAULT_MOVIE_TITLE: &str = "Inception";
pub const DEFAULT_MOVIE_RUNTIME: i32 = 148;
pub const DEFAULT_MOVIE_RATING: f64 = 8.8;

/// A movie ready for battle. Fields are private so `stats` always matches
/// `runtime_minutes` and `rating`.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    title: String,
    runtime_minutes: i32,
    rating: f64,
    genres: Vec<String>,
    stats: CombatStats,
}

/// On-disk movie description. Stats are never read from a file.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    #[serde(alias = "runtime_minutes")]
    pub runtime: i32,
    pub rating: f64,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        runtime_minutes: i32,
        rating: f64,
        genres: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            runtime_minutes,
            rating,
            genres,
            stats: derive_stats(runtime_minutes, rating),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn runtime_minutes(&self) -> i32 {
        self.runtime_minutes
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn stats(&self) -> &CombatStats {
        &self.stats
    }
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        Self::new(record.title, record.runtime, record.rating, record.genres)
    }
}

pub fn default_movie() -> Movie {
    Movie::new(
        DEFAULT_MOVIE_TITLE,
        DEFAULT_MOVIE_RUNTIME,
        DEFAULT_MOVIE_RATING,
        vec!["Action".to_string(), "Sci-Fi".to_string()],
    )
}
