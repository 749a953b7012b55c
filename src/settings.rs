//! Player-selected options sent to the movie lookup service with every round

use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Wire value expected by the movie lookup service
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Next option, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    En,
    Ml,
    Hi,
    Ta,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Ml, Language::Hi, Language::Ta];

    /// ISO 639-1 code passed through to the movie lookup service
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ml => "ml",
            Language::Hi => "hi",
            Language::Ta => "ta",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ml => "Malayalam",
            Language::Hi => "Hindi",
            Language::Ta => "Tamil",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty and language chosen by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_cycles_through_all_levels() {
        let mut d = Difficulty::Easy;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(d);
            d = d.next();
        }
        assert_eq!(seen, Difficulty::ALL);
        assert_eq!(d, Difficulty::Easy);
    }

    #[test]
    fn language_codes_match_the_wire_format() {
        let codes: Vec<_> = Language::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(codes, ["en", "ml", "hi", "ta"]);
        assert_eq!(Language::Ta.next(), Language::En);
    }

    #[test]
    fn cli_values_parse_from_wire_names() {
        assert_eq!(Difficulty::from_str("medium", true), Ok(Difficulty::Medium));
        assert_eq!(Language::from_str("hi", true), Ok(Language::Hi));
    }
}
