use std::collections::BTreeSet;

use crate::source::Movie;

/// Wrong guesses tolerated before the round is lost; one per gallows part
pub const CAPACITY: u8 = 6;

/// Shown whenever a round could not be started
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load movie. Please try again.";

pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Loading,
    /// Round start failed; nothing to do until the player retries
    Idle,
    Playing,
    Won,
    Lost,
}

/// Identifies which round a movie lookup reply belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoundId(pub u64);

/// Gallows parts in drawing order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPart {
    pub const ALL: [BodyPart; CAPACITY as usize] = [
        BodyPart::Head,
        BodyPart::Body,
        BodyPart::LeftArm,
        BodyPart::RightArm,
        BodyPart::LeftLeg,
        BodyPart::RightLeg,
    ];
}

/// One character slot of the word display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskCell {
    Revealed(char),
    Hidden,
    Space,
}

/// How a letter key should look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMark {
    Unused,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyView {
    pub letter: char,
    pub mark: KeyMark,
    pub enabled: bool,
}

/// Result of feeding a guess into the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not playing, already guessed, or not a letter
    Ignored,
    Hit,
    Miss,
    Won,
    Lost,
}

/// Result of feeding a movie lookup reply into the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundUpdate {
    Started,
    Failed,
    /// Reply belongs to a superseded round
    Stale,
}

/// Keep ASCII letters and whitespace, uppercase, and flatten whitespace to spaces
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphabetic() {
                Some(c.to_ascii_uppercase())
            } else if c.is_whitespace() {
                Some(' ')
            } else {
                None
            }
        })
        .collect()
}

/// State of one round
#[derive(Debug, Clone)]
pub struct Session {
    round: RoundId,
    secret_word: String,
    guessed: BTreeSet<char>,
    wrong_guesses: u8,
    status: Status,
    overview: String,
    last_error: Option<String>,
}

impl Session {
    /// Fresh session waiting for a movie
    pub fn loading(round: RoundId) -> Self {
        Self {
            round,
            secret_word: String::new(),
            guessed: BTreeSet::new(),
            wrong_guesses: 0,
            status: Status::Loading,
            overview: String::new(),
            last_error: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn playing(round: RoundId, movie: Movie) -> Self {
        let mut session = Self::loading(round);
        session.apply_round_result(round, Ok::<_, ()>(movie));
        session
    }

    pub fn round(&self) -> RoundId {
        self.round
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    pub fn overview(&self) -> &str {
        &self.overview
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Apply the movie lookup reply for `round`. Replies for any other round
    /// are dropped, as are replies arriving after the session left `Loading`.
    pub fn apply_round_result<E>(&mut self, round: RoundId, result: Result<Movie, E>) -> RoundUpdate {
        if round != self.round || self.status != Status::Loading {
            return RoundUpdate::Stale;
        }

        let word = match result {
            Ok(movie) => {
                let word = sanitize_title(&movie.title);
                if word.chars().any(|c| c != ' ') {
                    self.overview = movie.overview;
                    Some(word)
                } else {
                    // Nothing to guess, so the round could never be won
                    None
                }
            }
            Err(_) => None,
        };

        match word {
            Some(word) => {
                self.secret_word = word;
                self.status = Status::Playing;
                RoundUpdate::Started
            }
            None => {
                self.last_error = Some(FETCH_FAILED_MESSAGE.to_string());
                self.status = Status::Idle;
                RoundUpdate::Failed
            }
        }
    }

    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.status != Status::Playing || !letter.is_ascii_uppercase() || !self.guessed.insert(letter) {
            return GuessOutcome::Ignored;
        }

        if !self.secret_word.contains(letter) {
            self.wrong_guesses += 1;
            if self.wrong_guesses >= CAPACITY {
                self.status = Status::Lost;
                return GuessOutcome::Lost;
            }
            return GuessOutcome::Miss;
        }

        if self.is_word_complete() {
            self.status = Status::Won;
            return GuessOutcome::Won;
        }
        GuessOutcome::Hit
    }

    pub fn is_word_complete(&self) -> bool {
        self.secret_word
            .chars()
            .filter(|c| *c != ' ')
            .all(|c| self.guessed.contains(&c))
    }

    /// Parts to draw, always a prefix of `BodyPart::ALL`
    pub fn visible_parts(&self) -> &'static [BodyPart] {
        static ORDER: [BodyPart; CAPACITY as usize] = BodyPart::ALL;
        &ORDER[..usize::from(self.wrong_guesses.min(CAPACITY))]
    }

    pub fn mask(&self) -> Vec<MaskCell> {
        self.secret_word
            .chars()
            .map(|c| match c {
                ' ' => MaskCell::Space,
                c if self.guessed.contains(&c) => MaskCell::Revealed(c),
                _ => MaskCell::Hidden,
            })
            .collect()
    }

    /// Word display as text: `_` for hidden letters, blank for spaces
    pub fn masked_word(&self) -> String {
        self.mask()
            .into_iter()
            .map(|cell| match cell {
                MaskCell::Revealed(c) => c,
                MaskCell::Hidden => '_',
                MaskCell::Space => ' ',
            })
            .collect()
    }

    pub fn key(&self, letter: char) -> KeyView {
        let guessed = self.guessed.contains(&letter);
        let mark = match (guessed, self.secret_word.contains(letter)) {
            (false, _) => KeyMark::Unused,
            (true, true) => KeyMark::Correct,
            (true, false) => KeyMark::Wrong,
        };
        KeyView {
            letter,
            mark,
            enabled: !guessed && self.status == Status::Playing,
        }
    }

    pub fn keyboard(&self) -> [KeyView; 26] {
        ALPHABET.map(|letter| self.key(letter))
    }

    pub fn overview_visible(&self) -> bool {
        self.status == Status::Won && !self.overview.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            title: title.to_string(),
            overview: "An overview.".to_string(),
        }
    }

    fn playing(title: &str) -> Session {
        Session::playing(RoundId(1), movie(title))
    }

    fn guess_all(session: &mut Session, letters: &str) -> Vec<GuessOutcome> {
        letters.chars().map(|c| session.guess(c)).collect()
    }

    #[test]
    fn godfather_is_won_without_misses() {
        let mut s = playing("The Godfather");
        assert_eq!(s.secret_word(), "THE GODFATHER");

        let outcomes = guess_all(&mut s, "RAFDOGEHT");
        assert_eq!(outcomes.last(), Some(&GuessOutcome::Won));
        assert!(outcomes[..outcomes.len() - 1].iter().all(|o| *o == GuessOutcome::Hit));
        assert_eq!(s.status(), Status::Won);
        assert!(s.visible_parts().is_empty());
        assert_eq!(s.masked_word(), "THE GODFATHER");
    }

    #[test]
    fn jaws_is_lost_after_six_misses() {
        let mut s = playing("Jaws");
        let outcomes = guess_all(&mut s, "QXZYBC");

        assert_eq!(&outcomes[..5], &[GuessOutcome::Miss; 5]);
        assert_eq!(outcomes[5], GuessOutcome::Lost);
        assert_eq!(s.status(), Status::Lost);
        assert_eq!(s.wrong_guesses(), CAPACITY);
        assert_eq!(s.visible_parts(), &BodyPart::ALL);
    }

    #[test]
    fn title_is_stripped_and_uppercased() {
        assert_eq!(sanitize_title("Ferris Bueller's Day Off!"), "FERRIS BUELLERS DAY OFF");
        assert_eq!(sanitize_title("2001: A Space Odyssey"), " A SPACE ODYSSEY");
        assert_eq!(sanitize_title("Amélie\tPoulain"), "AMLIE POULAIN");
        assert_eq!(sanitize_title("ദൃശ്യം"), "");
    }

    #[test]
    fn failed_fetch_leaves_an_idle_empty_session() {
        let mut s = Session::loading(RoundId(3));
        let update = s.apply_round_result(RoundId(3), Err("connection refused"));

        assert_eq!(update, RoundUpdate::Failed);
        assert_eq!(s.status(), Status::Idle);
        assert_eq!(s.last_error(), Some(FETCH_FAILED_MESSAGE));
        assert!(s.guessed_letters().is_empty());
        assert_eq!(s.wrong_guesses(), 0);
    }

    #[test]
    fn guessing_while_idle_changes_nothing() {
        let mut s = Session::loading(RoundId(1));
        s.apply_round_result(RoundId(1), Err(()));
        let before = format!("{s:?}");

        assert_eq!(s.guess('A'), GuessOutcome::Ignored);
        assert_eq!(format!("{s:?}"), before);
    }

    #[test]
    fn guessing_while_loading_or_finished_is_ignored() {
        let mut s = Session::loading(RoundId(1));
        assert_eq!(s.guess('A'), GuessOutcome::Ignored);
        assert!(s.guessed_letters().is_empty());

        let mut won = playing("Up");
        guess_all(&mut won, "UP");
        assert_eq!(won.status(), Status::Won);
        assert_eq!(won.guess('Z'), GuessOutcome::Ignored);
        assert_eq!(won.wrong_guesses(), 0);
    }

    #[test]
    fn repeated_guess_is_idempotent() {
        let mut s = playing("Jaws");
        assert_eq!(s.guess('Q'), GuessOutcome::Miss);
        let after_first = format!("{s:?}");

        assert_eq!(s.guess('Q'), GuessOutcome::Ignored);
        assert_eq!(format!("{s:?}"), after_first);
        assert_eq!(s.wrong_guesses(), 1);

        assert_eq!(s.guess('J'), GuessOutcome::Hit);
        assert_eq!(s.guess('J'), GuessOutcome::Ignored);
    }

    #[test]
    fn non_letters_are_absorbed() {
        let mut s = playing("Jaws");
        for c in ['a', '1', ' ', '!', 'é'] {
            assert_eq!(s.guess(c), GuessOutcome::Ignored);
        }
        assert!(s.guessed_letters().is_empty());
        assert_eq!(s.wrong_guesses(), 0);
    }

    #[test]
    fn wrong_count_is_monotonic_and_capped() {
        let mut s = playing("Mississippi Burning");
        let mut last = 0;
        for letter in ALPHABET {
            let before_status = s.status();
            let outcome = s.guess(letter);
            assert!(s.wrong_guesses() >= last);
            assert!(s.wrong_guesses() <= CAPACITY);
            if before_status == Status::Playing && outcome == GuessOutcome::Miss {
                assert_eq!(s.wrong_guesses(), last + 1);
            }
            last = s.wrong_guesses();
        }
        assert_eq!(s.status(), Status::Lost);
    }

    #[test]
    fn won_exactly_when_every_letter_is_guessed() {
        let mut s = playing("Big Fish");
        for letter in "BIGFS".chars() {
            s.guess(letter);
            assert_eq!(s.status(), Status::Playing);
            assert!(!s.is_word_complete());
        }
        assert_eq!(s.guess('H'), GuessOutcome::Won);
        assert!(s.is_word_complete());
    }

    #[test]
    fn stale_reply_is_discarded() {
        let mut s = Session::loading(RoundId(2));
        assert_eq!(s.apply_round_result(RoundId(1), Ok::<_, ()>(movie("Jaws"))), RoundUpdate::Stale);
        assert_eq!(s.status(), Status::Loading);
        assert_eq!(s.secret_word(), "");

        assert_eq!(s.apply_round_result(RoundId(2), Ok::<_, ()>(movie("Heat"))), RoundUpdate::Started);
        assert_eq!(s.apply_round_result(RoundId(2), Ok::<_, ()>(movie("Jaws"))), RoundUpdate::Stale);
        assert_eq!(s.secret_word(), "HEAT");
    }

    #[test]
    fn title_without_letters_cannot_start_a_round() {
        let mut s = Session::loading(RoundId(1));
        assert_eq!(s.apply_round_result(RoundId(1), Ok::<_, ()>(movie("1917"))), RoundUpdate::Failed);
        assert_eq!(s.status(), Status::Idle);
        assert_eq!(s.last_error(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(s.overview(), "");
    }

    #[test]
    fn mask_reveals_guessed_letters_and_spaces() {
        let mut s = playing("Top Gun");
        s.guess('T');
        s.guess('N');
        assert_eq!(
            s.mask(),
            vec![
                MaskCell::Revealed('T'),
                MaskCell::Hidden,
                MaskCell::Hidden,
                MaskCell::Space,
                MaskCell::Hidden,
                MaskCell::Hidden,
                MaskCell::Revealed('N'),
            ]
        );
        assert_eq!(s.masked_word(), "T__ __N");
    }

    #[test]
    fn keyboard_marks_correct_and_wrong_letters() {
        let mut s = playing("Jaws");
        s.guess('J');
        s.guess('Q');

        let keys = s.keyboard();
        assert_eq!(keys[(b'J' - b'A') as usize].mark, KeyMark::Correct);
        assert_eq!(keys[(b'Q' - b'A') as usize].mark, KeyMark::Wrong);
        assert_eq!(keys[0].mark, KeyMark::Unused);
        assert!(!keys[(b'J' - b'A') as usize].enabled);
        assert!(keys[0].enabled);

        guess_all(&mut s, "AWS");
        assert!(s.keyboard().iter().all(|k| !k.enabled));
    }

    #[test]
    fn overview_only_shows_after_a_win() {
        let mut s = playing("Up");
        assert!(!s.overview_visible());
        guess_all(&mut s, "UP");
        assert!(s.overview_visible());

        let mut lost = playing("Up");
        guess_all(&mut lost, "ABCDEF");
        assert_eq!(lost.status(), Status::Lost);
        assert!(!lost.overview_visible());
    }
}
