//! Authority result codes
//!
//! The authority scores a guess as a 5-character string over the alphabet
//! `G` (correct position), `Y` (present elsewhere), `W` (absent). Any other
//! character defaults to absent, matching the server contract.

use std::fmt;

/// Per-position outcome assigned by the authority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    Absent,
    Present,
    Correct,
}

/// A 5-position result code for one scored guess
///
/// # Examples
/// ```
/// use absurdle_tui::core::{LetterScore, ResultCode};
///
/// let code = ResultCode::from_code("WYGWG").unwrap();
/// assert_eq!(code.score(2), LetterScore::Correct);
/// assert_eq!(code.score(0), LetterScore::Absent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultCode([LetterScore; 5]);

impl ResultCode {
    /// Parse a result code from the authority's wire form
    ///
    /// Accepts exactly 5 characters, case-insensitive. `G` maps to correct,
    /// `Y` to present, and everything else (including `W`) to absent.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let chars: Vec<char> = code.chars().collect();
        if chars.len() != 5 {
            return None;
        }

        let mut scores = [LetterScore::Absent; 5];
        for (i, ch) in chars.iter().enumerate() {
            scores[i] = match ch.to_ascii_uppercase() {
                'G' => LetterScore::Correct,
                'Y' => LetterScore::Present,
                _ => LetterScore::Absent,
            };
        }

        Some(Self(scores))
    }

    /// The score at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn score(&self, position: usize) -> LetterScore {
        self.0[position]
    }

    /// Iterate over the 5 per-position scores in order
    pub fn scores(&self) -> impl Iterator<Item = LetterScore> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for score in &self.0 {
            f.write_str(match score {
                LetterScore::Correct => "G",
                LetterScore::Present => "Y",
                LetterScore::Absent => "W",
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_code_parses_gyw() {
        let code = ResultCode::from_code("WYGWG").unwrap();
        assert_eq!(code.score(0), LetterScore::Absent);
        assert_eq!(code.score(1), LetterScore::Present);
        assert_eq!(code.score(2), LetterScore::Correct);
        assert_eq!(code.score(3), LetterScore::Absent);
        assert_eq!(code.score(4), LetterScore::Correct);
    }

    #[test]
    fn result_code_case_insensitive() {
        assert_eq!(
            ResultCode::from_code("gygwy"),
            ResultCode::from_code("GYGWY")
        );
    }

    #[test]
    fn result_code_unknown_chars_default_absent() {
        let code = ResultCode::from_code("GX?Y ").unwrap();
        assert_eq!(code.score(0), LetterScore::Correct);
        assert_eq!(code.score(1), LetterScore::Absent);
        assert_eq!(code.score(2), LetterScore::Absent);
        assert_eq!(code.score(3), LetterScore::Present);
        assert_eq!(code.score(4), LetterScore::Absent);
    }

    #[test]
    fn result_code_wrong_length_rejected() {
        assert!(ResultCode::from_code("").is_none());
        assert!(ResultCode::from_code("GGGG").is_none());
        assert!(ResultCode::from_code("GGGGGG").is_none());
    }

    #[test]
    fn result_code_display_round_trip() {
        for code in ["GGGGG", "WYGWG", "WWWWW", "YYYYY"] {
            let parsed = ResultCode::from_code(code).unwrap();
            assert_eq!(parsed.to_string(), code);
        }
    }
}
