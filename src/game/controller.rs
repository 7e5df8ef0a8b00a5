//! Game controller
//!
//! The controller owns the board, keyboard state, and session, routes all
//! user input, and coordinates the asynchronous authority calls. Authority
//! calls run in spawned tasks that report back over an mpsc channel as
//! [`AuthorityEvent`]s; the event loop pumps that channel between keystrokes,
//! so every state mutation happens on the controller's own thread of control.
//!
//! Concurrency rules:
//! - The in-flight flag serializes create/guess/give-up; a second submission
//!   attempt while one is outstanding is rejected at the guard, never queued.
//! - Validity probes are cancelled (task abort) before a new probe is issued;
//!   a probe sequence number discards any resolution that was already queued
//!   when the abort landed.
//! - Give-up confirmation is mutually exclusive with an in-flight submission.

use crate::api::{ApiError, AuthorityClient, Forfeit, NewGame, ScoredGuess};
use crate::core::{Board, KeyboardState, Word};
use crate::game::session::{GameSession, Phase};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Resolution of an authority call, delivered over the controller's channel
#[derive(Debug)]
pub enum AuthorityEvent {
    GameCreated(Result<NewGame, ApiError>),
    ProbeResolved { seq: u64, in_list: bool },
    GuessScored {
        word: Word,
        outcome: Result<ScoredGuess, ApiError>,
    },
    GameForfeited(Result<Forfeit, ApiError>),
}

/// A transient status line shown to the user
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// The client game-interaction state machine
pub struct Controller {
    api: AuthorityClient,
    pub board: Board,
    pub keyboard: KeyboardState,
    pub session: GameSession,
    /// Advisory verdict from the validity prober for the current full row
    pub invalid_word: bool,
    /// True while the give-up confirmation prompt is open
    pub confirming_give_up: bool,
    pub messages: Vec<Message>,
    probe_seq: u64,
    probe_task: Option<JoinHandle<()>>,
    events_tx: mpsc::Sender<AuthorityEvent>,
    events_rx: mpsc::Receiver<AuthorityEvent>,
}

impl Controller {
    #[must_use]
    pub fn new(api: AuthorityClient) -> Self {
        let (events_tx, events_rx) = mpsc::channel(32);
        Self {
            api,
            board: Board::new(),
            keyboard: KeyboardState::new(),
            session: GameSession::new(),
            invalid_word: false,
            confirming_give_up: false,
            messages: Vec::new(),
            probe_seq: 0,
            probe_task: None,
            events_tx,
            events_rx,
        }
    }

    /// True when the current row accepts edits
    #[must_use]
    pub fn can_edit(&self) -> bool {
        self.session.phase == Phase::InProgress
            && !self.session.submission_in_flight
            && !self.confirming_give_up
    }

    /// Number of guesses the authority has scored
    ///
    /// After a give-up the answer-overlay row is revealed but was never a
    /// guess, so it does not count.
    #[must_use]
    pub fn guess_count(&self) -> usize {
        if self.session.phase == Phase::GaveUp {
            self.board.revealed_rows().saturating_sub(1)
        } else {
            self.board.revealed_rows()
        }
    }

    /// Persistent end-of-game banner, derived from the session phase
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        match self.session.phase {
            Phase::Won => Some(format!(
                "You guessed successfully in {} guesses!",
                self.guess_count()
            )),
            Phase::GaveUp => Some(format!("You gave up after {} guesses!", self.guess_count())),
            Phase::NotStarted | Phase::InProgress => None,
        }
    }

    /// Discard the previous session wholesale and ask the authority for a
    /// fresh game
    ///
    /// The board, keyboard, and flags reset atomically before the request is
    /// issued; any outstanding probe is cancelled.
    pub fn start_new_game(&mut self) {
        if self.session.submission_in_flight {
            return;
        }
        self.cancel_probe();
        self.board = Board::new();
        self.board.append_row();
        self.keyboard.reset();
        self.session = GameSession::new();
        self.invalid_word = false;
        self.confirming_give_up = false;
        self.messages.clear();
        self.session.submission_in_flight = true;

        tracing::debug!("starting new game");
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = api.create_game().await;
            let _ = tx.send(AuthorityEvent::GameCreated(outcome)).await;
        });
    }

    /// Letter key: place at the first empty cell, then re-probe the row
    pub fn handle_letter(&mut self, letter: char) {
        if !self.can_edit() || !letter.is_ascii_alphabetic() {
            return;
        }
        // Full row drops the keystroke, not buffered
        if self.board.set_letter(letter) {
            self.probe_current_word();
        }
    }

    /// Backspace: remove the rightmost letter, then re-probe the row
    pub fn handle_backspace(&mut self) {
        if !self.can_edit() {
            return;
        }
        if self.board.clear_last_letter() {
            self.probe_current_word();
        }
    }

    /// Submit the current row for scoring
    ///
    /// Guards re-evaluated here: editing phase, no submission in flight, row
    /// full, invalid-word flag clear, session known. Violations are silent
    /// no-ops and issue no request.
    pub fn submit_guess(&mut self) {
        if !self.can_edit() || self.invalid_word {
            return;
        }
        let Some(game_id) = self.session.session_id.clone() else {
            return;
        };
        let Some(row) = self.board.current_row() else {
            return;
        };
        if !row.is_full() || row.is_revealed() {
            return;
        }
        let Ok(word) = Word::new(row.word()) else {
            return;
        };

        // The row is about to be scored; any probe still in flight for it is
        // obsolete and must not touch the flag afterwards
        self.cancel_probe();
        self.session.submission_in_flight = true;
        tracing::debug!(guess = %word, "submitting guess");
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = api.submit_guess(&game_id, &word).await;
            let _ = tx.send(AuthorityEvent::GuessScored { word, outcome }).await;
        });
    }

    /// Open the give-up confirmation prompt
    ///
    /// Refused while a submission is in flight: confirmation and submission
    /// are mutually exclusive at the protocol layer, not just in the UI.
    pub fn request_give_up(&mut self) {
        if self.session.phase != Phase::InProgress
            || self.session.submission_in_flight
            || self.confirming_give_up
        {
            return;
        }
        self.confirming_give_up = true;
    }

    /// Withdraw the confirmation prompt with no side effects
    pub fn dismiss_give_up(&mut self) {
        self.confirming_give_up = false;
    }

    /// Confirm the give-up and send the forfeit request
    pub fn confirm_give_up(&mut self) {
        if !self.confirming_give_up {
            return;
        }
        self.confirming_give_up = false;
        // Re-check: a guess may have resolved while the prompt was open
        if self.session.phase != Phase::InProgress || self.session.submission_in_flight {
            return;
        }
        let Some(game_id) = self.session.session_id.clone() else {
            return;
        };

        self.cancel_probe();
        self.session.submission_in_flight = true;
        tracing::debug!("giving up");
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = api.give_up(&game_id).await;
            let _ = tx.send(AuthorityEvent::GameForfeited(outcome)).await;
        });
    }

    /// Drain and apply any queued authority events (non-blocking)
    ///
    /// Returns true when at least one event was applied.
    pub fn poll_authority(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_authority_event(event);
            changed = true;
        }
        changed
    }

    /// Await the next authority event (used by tests; the TUI polls)
    pub async fn next_authority_event(&mut self) -> Option<AuthorityEvent> {
        self.events_rx.recv().await
    }

    /// Apply one authority event to the model
    pub fn apply_authority_event(&mut self, event: AuthorityEvent) {
        match event {
            AuthorityEvent::GameCreated(Ok(game)) => {
                self.session.submission_in_flight = false;
                tracing::info!(game_id = %game.game_id, "game created");
                self.session.session_id = Some(game.game_id);
                self.session.phase = Phase::InProgress;
                self.add_message(
                    &format!(
                        "New game started - {} possible answers.",
                        game.remaining_count
                    ),
                    MessageStyle::Info,
                );
            }
            AuthorityEvent::GameCreated(Err(err)) => {
                self.session.submission_in_flight = false;
                tracing::warn!(%err, "failed to create game");
                self.add_message("Could not start game. Try again.", MessageStyle::Error);
            }
            AuthorityEvent::ProbeResolved { seq, in_list } => {
                // A stale probe (superseded by a newer one) must not win
                if seq == self.probe_seq {
                    self.invalid_word = !in_list;
                    self.probe_task = None;
                }
            }
            AuthorityEvent::GuessScored { word, outcome } => {
                self.session.submission_in_flight = false;
                match outcome {
                    Ok(scored) => self.apply_scored_guess(&word, scored),
                    Err(err) => {
                        tracing::warn!(%err, "guess failed");
                        self.add_message(&err.user_message(), MessageStyle::Error);
                    }
                }
            }
            AuthorityEvent::GameForfeited(outcome) => {
                self.session.submission_in_flight = false;
                match outcome {
                    Ok(forfeit) => self.apply_forfeit(&forfeit),
                    Err(err) => {
                        tracing::warn!(%err, "give up failed");
                        self.add_message(&err.user_message(), MessageStyle::Error);
                    }
                }
            }
        }
    }

    fn apply_scored_guess(&mut self, word: &Word, scored: ScoredGuess) {
        let Some(index) = self.board.current_index() else {
            return;
        };
        if let Err(err) = self.board.apply_result(index, &scored.code) {
            tracing::warn!(%err, "could not apply guess result");
            return;
        }
        self.keyboard.ingest(word, &scored.code);

        if scored.won {
            self.session.phase = Phase::Won;
            let guesses = self.board.revealed_rows();
            tracing::info!(guesses, "game won");
            self.add_message(
                &format!("You guessed successfully in {guesses} guesses!"),
                MessageStyle::Success,
            );
        } else {
            self.board.append_row();
            self.invalid_word = false;
        }
    }

    fn apply_forfeit(&mut self, forfeit: &Forfeit) {
        // Count before the overlay: the forfeited row is not a guess
        let guesses = self.board.revealed_rows();
        if let Err(err) = self.board.reveal_answer(&forfeit.answer) {
            tracing::warn!(%err, "could not overlay revealed answer");
        }
        self.session.phase = Phase::GaveUp;
        self.invalid_word = false;
        tracing::info!(guesses, answer = %forfeit.answer, "gave up");
        self.add_message(
            &format!("You gave up after {guesses} guesses!"),
            MessageStyle::Success,
        );
    }

    /// Re-probe after an edit: cancel the outstanding probe, then either
    /// clear the flag (partial word, no request) or issue one membership query
    fn probe_current_word(&mut self) {
        self.cancel_probe();
        let word = self.board.current_word();
        if word.len() != 5 {
            self.invalid_word = false;
            return;
        }

        self.probe_seq += 1;
        let seq = self.probe_seq;
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        self.probe_task = Some(tokio::spawn(async move {
            // Failure is advisory only: treat as valid rather than block typing
            let in_list = api.check_word(&word).await.unwrap_or(true);
            let _ = tx.send(AuthorityEvent::ProbeResolved { seq, in_list }).await;
        }));
    }

    fn cancel_probe(&mut self) {
        self.probe_seq += 1;
        if let Some(task) = self.probe_task.take() {
            task.abort();
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}
