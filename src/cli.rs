use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use reqwest::Url;

use crate::config::{default_log_dir, random_session_id, AppConfig, DEFAULT_ENDPOINT};
use crate::settings::{Difficulty, GameSettings, Language};

#[derive(Parser, Debug)]
#[command(name = "movie-hangman")]
#[command(about = "🎬 Guess the movie title before the gallows is complete")]
#[command(version)]
pub struct Cli {
    /// URL of the movie lookup endpoint
    #[arg(long, env = "MOVIE_HANGMAN_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Difficulty of the first round
    #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,

    /// Original language of the movies
    #[arg(short, long, value_enum, default_value_t = Language::En)]
    pub language: Language,

    /// Session id sent to the movie lookup service (random if omitted)
    #[arg(long, env = "MOVIE_HANGMAN_SESSION")]
    pub session_id: Option<String>,

    /// Directory for the log file
    #[arg(long, env = "MOVIE_HANGMAN_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> Result<AppConfig> {
        let endpoint = Url::parse(&self.endpoint)
            .with_context(|| format!("invalid endpoint '{}'", self.endpoint))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            bail!("endpoint must be an http(s) URL, got '{}'", self.endpoint);
        }

        Ok(AppConfig {
            endpoint,
            settings: GameSettings {
                difficulty: self.difficulty,
                language: self.language,
            },
            session_id: self.session_id.unwrap_or_else(random_session_id),
            log_dir: self.log_dir.unwrap_or_else(default_log_dir),
        })
    }
}
