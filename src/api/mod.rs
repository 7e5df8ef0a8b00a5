//! Game authority client
//!
//! HTTP interface to the remote authority that owns the secret word, scores
//! guesses, and arbitrates win/give-up. Dictionary membership from
//! `check_word` is advisory only; the authority re-validates every guess at
//! submission time.

mod client;
mod error;

pub use client::{AuthorityClient, Forfeit, NewGame, ScoredGuess};
pub use error::ApiError;
