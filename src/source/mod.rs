//! Movie lookup service: supplies a movie title and synopsis per round

pub mod error;
pub mod http;

use std::future::Future;

use crate::settings::{Difficulty, GameSettings, Language};

pub use error::FetchError;
pub use http::HttpWordSource;

/// Parameters of a single movie lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieQuery {
    pub difficulty: Difficulty,
    pub language: Language,
}

impl From<GameSettings> for MovieQuery {
    fn from(settings: GameSettings) -> Self {
        Self {
            difficulty: settings.difficulty,
            language: settings.language,
        }
    }
}

/// A movie as returned by the movie lookup service. Missing fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub overview: String,
}

/// Anything that can hand out a movie for a round
pub trait WordSource: Clone + Send + Sync + 'static {
    fn fetch(&self, query: &MovieQuery) -> impl Future<Output = Result<Movie, FetchError>> + Send;
}
