use std::path::PathBuf;

use reqwest::Url;

use crate::settings::GameSettings;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/movie";

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: Url,
    pub settings: GameSettings,
    /// Lets the movie lookup service avoid repeating a movie within one run
    pub session_id: String,
    pub log_dir: PathBuf,
}

pub fn random_session_id() -> String {
    format!("{:016x}", rand::random::<u64>())
}

pub fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("movie-hangman")
}
