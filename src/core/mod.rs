//! Core domain types for the game client
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure, testable, and have clear contracts:
//! the board model, the authority's result codes, and the keyboard
//! aggregation rule.

mod board;
mod keyboard;
mod score;
mod word;

pub use board::{Board, BoardError, Cell, CellStatus, Row};
pub use keyboard::{KeyStatus, KeyboardState};
pub use score::{LetterScore, ResultCode};
pub use word::{Word, WordError};
