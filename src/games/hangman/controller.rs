use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use crate::core::engine::Backend;
use crate::core::game::{Context, Flow, Game};
use crate::games::hangman::game::{GuessOutcome, RoundId, RoundUpdate, Session, Status, ALPHABET};
use crate::games::hangman::renderer;
use crate::settings::GameSettings;
use crate::source::{FetchError, Movie, MovieQuery, WordSource};

/// On-screen keyboard is two rows of 13
pub const KEYS_PER_ROW: usize = 13;

/// Ask the movie lookup service for the movie of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRequest {
    pub round: RoundId,
    pub query: MovieQuery,
}

#[derive(Debug)]
pub struct RoundResponse {
    pub round: RoundId,
    pub result: Result<Movie, FetchError>,
}

impl<S: WordSource> Backend<RoundRequest> for S {
    type Response = RoundResponse;

    async fn handle(&self, request: RoundRequest) -> RoundResponse {
        let result = self.fetch(&request.query).await;
        RoundResponse {
            round: request.round,
            result,
        }
    }
}

/// Owns the session and settings; maps keys onto session transitions
pub struct HangmanGame {
    settings: GameSettings,
    session: Session,
    last_round: u64,
    cursor: usize,
}

impl HangmanGame {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            settings,
            session: Session::loading(RoundId(0)),
            last_round: 0,
            cursor: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    /// Index into `ALPHABET` of the highlighted key
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the session and request a word for it. Any reply still in
    /// flight for an older round will be discarded when it lands.
    pub fn start_new_round(&mut self, ctx: &Context<RoundRequest>) {
        self.last_round += 1;
        let round = RoundId(self.last_round);
        self.session = Session::loading(round);

        info!(
            round = round.0,
            difficulty = %self.settings.difficulty,
            language = %self.settings.language,
            "starting round"
        );
        ctx.send_request(RoundRequest {
            round,
            query: self.settings.into(),
        });
    }

    #[cfg(test)]
    pub(crate) fn replace_session(&mut self, session: Session) {
        self.session = session;
    }

    fn press(&mut self, letter: char) {
        let outcome = self.session.guess(letter);
        if let Some(idx) = ALPHABET.iter().position(|c| *c == letter) {
            self.cursor = idx;
        }
        match outcome {
            GuessOutcome::Ignored => {}
            GuessOutcome::Won => info!(round = self.session.round().0, "round won"),
            GuessOutcome::Lost => info!(round = self.session.round().0, word = self.session.secret_word(), "round lost"),
            other => debug!(%letter, ?other, wrong = self.session.wrong_guesses(), "guess"),
        }
    }

    fn move_cursor(&mut self, code: KeyCode) {
        let len = ALPHABET.len();
        self.cursor = match code {
            KeyCode::Left => (self.cursor + len - 1) % len,
            KeyCode::Right => (self.cursor + 1) % len,
            KeyCode::Up if self.cursor >= KEYS_PER_ROW => self.cursor - KEYS_PER_ROW,
            KeyCode::Down if self.cursor < KEYS_PER_ROW => self.cursor + KEYS_PER_ROW,
            _ => self.cursor,
        };
    }
}

impl Game for HangmanGame {
    type Request = RoundRequest;
    type Response = RoundResponse;

    fn start(&mut self, ctx: &Context<RoundRequest>) {
        self.start_new_round(ctx);
    }

    fn handle_input(&mut self, key: KeyEvent, ctx: &Context<RoundRequest>) -> Flow {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('c') if ctrl => return Flow::Quit,
            KeyCode::Char('n') if ctrl => self.start_new_round(ctx),
            KeyCode::F(5) => self.start_new_round(ctx),
            KeyCode::Tab => {
                self.settings.difficulty = self.settings.difficulty.next();
                self.start_new_round(ctx);
            }
            KeyCode::BackTab => {
                self.settings.language = self.settings.language.next();
                self.start_new_round(ctx);
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => self.move_cursor(key.code),
            KeyCode::Char(' ') => self.press(ALPHABET[self.cursor]),
            KeyCode::Enter => match self.session.status() {
                Status::Playing => self.press(ALPHABET[self.cursor]),
                // Play Again / Try Again
                Status::Won | Status::Lost | Status::Idle => self.start_new_round(ctx),
                Status::Loading => {}
            },
            KeyCode::Char(c) if c.is_ascii_alphabetic() && !ctrl => self.press(c.to_ascii_uppercase()),
            _ => {}
        }
        Flow::Continue
    }

    fn handle_response(&mut self, response: RoundResponse, _ctx: &Context<RoundRequest>) {
        let RoundResponse { round, result } = response;
        let detail = result.as_ref().err().map(ToString::to_string);

        match self.session.apply_round_result(round, result) {
            RoundUpdate::Started => info!(
                round = round.0,
                letters = self.session.secret_word().chars().filter(|c| *c != ' ').count(),
                "round ready"
            ),
            RoundUpdate::Failed => warn!(
                round = round.0,
                error = detail.as_deref().unwrap_or("title has no playable letters"),
                "round could not start"
            ),
            RoundUpdate::Stale => debug!(round = round.0, current = self.session.round().0, "discarding reply for superseded round"),
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        renderer::render(frame, self);
    }
}
