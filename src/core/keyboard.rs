//! Keyboard status aggregation
//!
//! Derives a best-known status per letter across all revealed rows. A
//! letter's status only ever improves under the total order
//! `Correct > Present > Absent > Unknown`, so ingesting the same set of
//! scored guesses in any order yields the same mapping.

use super::{LetterScore, ResultCode, Word};

/// Best-known status of a keyboard letter
///
/// Variant order gives the merge priority: `derive(Ord)` makes the
/// improve-only rule a plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum KeyStatus {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl From<LetterScore> for KeyStatus {
    fn from(score: LetterScore) -> Self {
        match score {
            LetterScore::Correct => Self::Correct,
            LetterScore::Present => Self::Present,
            LetterScore::Absent => Self::Absent,
        }
    }
}

/// Best-known status for each letter A-Z
///
/// # Examples
/// ```
/// use absurdle_tui::core::{KeyStatus, KeyboardState, ResultCode, Word};
///
/// let mut keyboard = KeyboardState::new();
/// let guess = Word::new("speed").unwrap();
/// keyboard.ingest(&guess, &ResultCode::from_code("WYGWG").unwrap());
///
/// assert_eq!(keyboard.status('S'), KeyStatus::Absent);
/// assert_eq!(keyboard.status('E'), KeyStatus::Correct);
/// assert_eq!(keyboard.status('Z'), KeyStatus::Unknown);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    keys: [KeyStatus; 26],
}

impl KeyboardState {
    /// All letters unknown
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every letter back to unknown (new game)
    pub fn reset(&mut self) {
        self.keys = [KeyStatus::Unknown; 26];
    }

    /// Merge one scored guess into the mapping, improve-only
    pub fn ingest(&mut self, guess: &Word, code: &ResultCode) {
        for (i, &byte) in guess.chars().iter().enumerate() {
            let slot = &mut self.keys[usize::from(byte - b'a')];
            *slot = (*slot).max(KeyStatus::from(code.score(i)));
        }
    }

    /// Best-known status of a letter; non-letters report unknown
    #[must_use]
    pub fn status(&self, letter: char) -> KeyStatus {
        let lower = letter.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            self.keys[usize::from(lower as u8 - b'a')]
        } else {
            KeyStatus::Unknown
        }
    }
}
