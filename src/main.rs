use anyhow::Result;
use clap::Parser;
use crossterm::event::EventStream;
use tracing::{error, info};

use movie_hangman::cli::Cli;
use movie_hangman::core::engine::Engine;
use movie_hangman::games::hangman::HangmanGame;
use movie_hangman::logging;
use movie_hangman::source::HttpWordSource;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;
    let _guard = logging::init(&config.log_dir)?;
    info!(endpoint = %config.endpoint, session = %config.session_id, "starting movie hangman");

    let source = HttpWordSource::new(config.endpoint.clone(), Some(config.session_id.clone()));
    let engine = Engine::new(HangmanGame::new(config.settings), source);

    let mut terminal = ratatui::init();
    let result = engine.run(&mut terminal, EventStream::new()).await;
    ratatui::restore();

    if let Err(e) = &result {
        error!(error = %e, "engine stopped");
    }
    result.map(|_| ())
}
