//! Board model
//!
//! The board is the source of truth for everything the grid displays: an
//! append-only sequence of rows, each holding exactly 5 letter cells. Only the
//! last row is ever editable, and only while it is unrevealed. Revealed rows
//! are immutable, with one exception: the give-up answer overlay applied to
//! the still-unrevealed current row.

use super::{LetterScore, ResultCode, Word};
use std::fmt;

/// Reveal state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    /// No letter typed yet
    Empty,
    /// Letter typed, not yet scored
    Filled,
    /// Scored: letter in the correct position
    Correct,
    /// Scored: letter present elsewhere
    Present,
    /// Scored: letter absent
    Absent,
    /// Overlaid with the revealed answer after a give-up
    RevealedAnswer,
}

impl From<LetterScore> for CellStatus {
    fn from(score: LetterScore) -> Self {
        match score {
            LetterScore::Correct => Self::Correct,
            LetterScore::Present => Self::Present,
            LetterScore::Absent => Self::Absent,
        }
    }
}

/// One letter cell of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    letter: Option<char>,
    status: CellStatus,
}

impl Cell {
    const fn empty() -> Self {
        Self {
            letter: None,
            status: CellStatus::Empty,
        }
    }

    /// The uppercase letter in this cell, if any
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> CellStatus {
        self.status
    }
}

/// One guess attempt: 5 cells plus a reveal flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: [Cell; 5],
    revealed: bool,
}

impl Row {
    const fn new() -> Self {
        Self {
            cells: [Cell::empty(); 5],
            revealed: false,
        }
    }

    #[must_use]
    pub const fn cells(&self) -> &[Cell; 5] {
        &self.cells
    }

    /// True once the authority has scored this row (or the game ended via
    /// give-up on it)
    #[inline]
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Number of filled cells, counted from the left
    #[must_use]
    pub fn filled_len(&self) -> usize {
        self.cells.iter().filter(|c| c.letter.is_some()).count()
    }

    /// The typed letters of this row, left to right
    #[must_use]
    pub fn word(&self) -> String {
        self.cells.iter().filter_map(|c| c.letter).collect()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled_len() == 5
    }
}

/// Error type for board contract violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The board has no rows yet
    NoActiveRow,
    /// No row exists at the given index
    NoSuchRow(usize),
    /// The row was already scored or overlaid
    AlreadyRevealed(usize),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActiveRow => write!(f, "Board has no active row"),
            Self::NoSuchRow(index) => write!(f, "No row at index {index}"),
            Self::AlreadyRevealed(index) => {
                write!(f, "Row {index} is already revealed")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// The ordered, append-only sequence of guess rows
///
/// # Examples
/// ```
/// use absurdle_tui::core::Board;
///
/// let mut board = Board::new();
/// board.append_row();
/// assert!(board.set_letter('S'));
/// assert!(board.set_letter('P'));
/// assert_eq!(board.current_word(), "SP");
/// assert!(board.clear_last_letter());
/// assert_eq!(board.current_word(), "S");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Board {
    rows: Vec<Row>,
}

impl Board {
    /// Create an empty board with no rows
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Index of the current (last) row, if any
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.rows.len().checked_sub(1)
    }

    /// The current (last) row, if any
    #[must_use]
    pub fn current_row(&self) -> Option<&Row> {
        self.rows.last()
    }

    /// Count of rows the authority has revealed
    #[must_use]
    pub fn revealed_rows(&self) -> usize {
        self.rows.iter().filter(|r| r.revealed).count()
    }

    /// Append a fresh row of 5 empty cells; it becomes the current row
    pub fn append_row(&mut self) {
        self.rows.push(Row::new());
    }

    /// Place a letter at the first empty position of the current row
    ///
    /// Typing is strictly left-to-right. Returns false (a no-op) when there is
    /// no current row, the current row is revealed, or it is already full.
    pub fn set_letter(&mut self, letter: char) -> bool {
        let Some(row) = self.rows.last_mut() else {
            return false;
        };
        if row.revealed {
            return false;
        }
        let Some(cell) = row.cells.iter_mut().find(|c| c.letter.is_none()) else {
            return false;
        };
        cell.letter = Some(letter.to_ascii_uppercase());
        cell.status = CellStatus::Filled;
        true
    }

    /// Remove the rightmost filled letter of the current row
    ///
    /// Returns false when there is nothing to remove.
    pub fn clear_last_letter(&mut self) -> bool {
        let Some(row) = self.rows.last_mut() else {
            return false;
        };
        if row.revealed {
            return false;
        }
        let Some(cell) = row.cells.iter_mut().rev().find(|c| c.letter.is_some()) else {
            return false;
        };
        cell.letter = None;
        cell.status = CellStatus::Empty;
        true
    }

    /// The typed letters of the current row (uppercase, left to right)
    #[must_use]
    pub fn current_word(&self) -> String {
        self.rows.last().map(Row::word).unwrap_or_default()
    }

    /// Apply the authority's result code to a row and mark it revealed
    ///
    /// # Errors
    /// Returns `BoardError` when the row does not exist or was already
    /// revealed.
    pub fn apply_result(&mut self, index: usize, code: &ResultCode) -> Result<(), BoardError> {
        let row = self
            .rows
            .get_mut(index)
            .ok_or(BoardError::NoSuchRow(index))?;
        if row.revealed {
            return Err(BoardError::AlreadyRevealed(index));
        }
        for (cell, score) in row.cells.iter_mut().zip(code.scores()) {
            cell.status = CellStatus::from(score);
        }
        row.revealed = true;
        Ok(())
    }

    /// Overlay the revealed answer on the unrevealed current row
    ///
    /// Used only by the give-up path: the row's letters are replaced by the
    /// answer and every cell is marked [`CellStatus::RevealedAnswer`].
    ///
    /// # Errors
    /// Returns `BoardError` when the board is empty or the current row was
    /// already revealed.
    pub fn reveal_answer(&mut self, answer: &Word) -> Result<(), BoardError> {
        let index = self.current_index().ok_or(BoardError::NoActiveRow)?;
        let row = &mut self.rows[index];
        if row.revealed {
            return Err(BoardError::AlreadyRevealed(index));
        }
        for (cell, &byte) in row.cells.iter_mut().zip(answer.chars()) {
            cell.letter = Some(char::from(byte.to_ascii_uppercase()));
            cell.status = CellStatus::RevealedAnswer;
        }
        row.revealed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ResultCode {
        ResultCode::from_code(s).unwrap()
    }

    fn type_word(board: &mut Board, word: &str) {
        for ch in word.chars() {
            assert!(board.set_letter(ch));
        }
    }

    #[test]
    fn append_row_becomes_current() {
        let mut board = Board::new();
        assert!(board.current_index().is_none());

        board.append_row();
        assert_eq!(board.current_index(), Some(0));

        board.append_row();
        assert_eq!(board.current_index(), Some(1));
        assert_eq!(board.rows().len(), 2);
    }

    #[test]
    fn typing_is_left_to_right() {
        let mut board = Board::new();
        board.append_row();
        type_word(&mut board, "spe");

        let row = board.current_row().unwrap();
        assert_eq!(row.cells()[0].letter(), Some('S'));
        assert_eq!(row.cells()[1].letter(), Some('P'));
        assert_eq!(row.cells()[2].letter(), Some('E'));
        assert_eq!(row.cells()[3].letter(), None);
        assert_eq!(board.current_word(), "SPE");
    }

    #[test]
    fn set_letter_on_full_row_is_noop() {
        let mut board = Board::new();
        board.append_row();
        type_word(&mut board, "speed");

        assert!(!board.set_letter('x'));
        assert_eq!(board.current_word(), "SPEED");
    }

    #[test]
    fn set_letter_without_row_is_noop() {
        let mut board = Board::new();
        assert!(!board.set_letter('a'));
    }

    #[test]
    fn clear_removes_rightmost_letter() {
        let mut board = Board::new();
        board.append_row();
        type_word(&mut board, "spe");

        assert!(board.clear_last_letter());
        assert_eq!(board.current_word(), "SP");
        assert!(board.clear_last_letter());
        assert!(board.clear_last_letter());
        assert!(!board.clear_last_letter()); // Row empty
    }

    #[test]
    fn apply_result_marks_cells_and_reveals() {
        let mut board = Board::new();
        board.append_row();
        type_word(&mut board, "speed");

        board.apply_result(0, &code("WYGWG")).unwrap();

        let row = &board.rows()[0];
        assert!(row.is_revealed());
        let statuses: Vec<CellStatus> = row.cells().iter().map(Cell::status).collect();
        assert_eq!(
            statuses,
            vec![
                CellStatus::Absent,
                CellStatus::Present,
                CellStatus::Correct,
                CellStatus::Absent,
                CellStatus::Correct,
            ]
        );
        assert_eq!(board.revealed_rows(), 1);
    }

    #[test]
    fn apply_result_twice_is_an_error() {
        let mut board = Board::new();
        board.append_row();
        type_word(&mut board, "speed");
        board.apply_result(0, &code("WWWWW")).unwrap();

        assert_eq!(
            board.apply_result(0, &code("GGGGG")),
            Err(BoardError::AlreadyRevealed(0))
        );
    }

    #[test]
    fn apply_result_on_missing_row_is_an_error() {
        let mut board = Board::new();
        assert_eq!(
            board.apply_result(3, &code("GGGGG")),
            Err(BoardError::NoSuchRow(3))
        );
    }

    #[test]
    fn revealed_row_is_immutable_to_edits() {
        let mut board = Board::new();
        board.append_row();
        type_word(&mut board, "speed");
        board.apply_result(0, &code("WYGWG")).unwrap();

        let before = board.rows()[0].clone();
        assert!(!board.set_letter('z'));
        assert!(!board.clear_last_letter());
        assert_eq!(board.rows()[0], before);
    }

    #[test]
    fn reveal_answer_overlays_current_row() {
        let mut board = Board::new();
        board.append_row();
        type_word(&mut board, "sp");

        let answer = Word::new("crane").unwrap();
        board.reveal_answer(&answer).unwrap();

        let row = board.current_row().unwrap();
        assert!(row.is_revealed());
        assert_eq!(row.word(), "CRANE");
        assert!(
            row.cells()
                .iter()
                .all(|c| c.status() == CellStatus::RevealedAnswer)
        );
    }

    #[test]
    fn reveal_answer_on_revealed_row_is_an_error() {
        let mut board = Board::new();
        board.append_row();
        type_word(&mut board, "speed");
        board.apply_result(0, &code("WWWWW")).unwrap();

        let answer = Word::new("crane").unwrap();
        assert_eq!(
            board.reveal_answer(&answer),
            Err(BoardError::AlreadyRevealed(0))
        );
    }

    #[test]
    fn reveal_answer_on_empty_board_is_an_error() {
        let mut board = Board::new();
        let answer = Word::new("crane").unwrap();
        assert_eq!(board.reveal_answer(&answer), Err(BoardError::NoActiveRow));
    }
}
