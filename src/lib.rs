//! Absurdle terminal client
//!
//! A TUI client for a remote Absurdle-style game server. The server owns the
//! secret word and all scoring; this crate owns the visible board and
//! keyboard state, routes keystrokes, and keeps asynchronous server
//! responses from corrupting the display.
//!
//! # Quick Start
//!
//! ```rust
//! use absurdle_tui::core::{Board, ResultCode};
//!
//! let mut board = Board::new();
//! board.append_row();
//! for letter in "SPEED".chars() {
//!     board.set_letter(letter);
//! }
//!
//! let code = ResultCode::from_code("WYGWG").unwrap();
//! board.apply_result(0, &code).unwrap();
//! assert_eq!(board.revealed_rows(), 1);
//! ```

// Core domain types
pub mod core;

// Game authority HTTP client
pub mod api;

// Controller state machine
pub mod game;

// Interactive TUI interface
pub mod interactive;
