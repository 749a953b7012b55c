//! Movie hangman: session state machine, controller and renderer

pub mod controller;
pub mod game;
pub mod renderer;

pub use controller::{HangmanGame, RoundRequest, RoundResponse};
pub use game::{GuessOutcome, RoundId, Session, Status, CAPACITY, FETCH_FAILED_MESSAGE};
