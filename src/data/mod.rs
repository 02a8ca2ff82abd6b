pub mod loader;
pub mod movie;
pub mod opponent;

pub use loader::{load_movie, parse_movie, LoadError};
pub use movie::{default_movie, Movie, MovieRecord};
pub use opponent::{default_opponent, Opponent};
