//! HTTP client for the game authority
//!
//! Thin reqwest wrapper over the authority's four endpoints. Responses are
//! decoded into domain types here; non-success statuses are classified into
//! the [`ApiError`] taxonomy and never surface as raw HTTP details.

use super::ApiError;
use crate::core::{ResultCode, Word};
use serde::{Deserialize, Serialize};

/// A freshly created game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub game_id: String,
    /// Size of the authority's candidate answer pool at game start
    pub remaining_count: usize,
}

/// A scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredGuess {
    pub code: ResultCode,
    pub won: bool,
}

/// The answer revealed by a successful give-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forfeit {
    pub answer: Word,
}

#[derive(Deserialize)]
struct CreateGameBody {
    game_id: String,
    remaining_count: usize,
}

#[derive(Deserialize)]
struct CheckWordBody {
    in_list: bool,
}

#[derive(Serialize)]
struct GuessRequest {
    guess: String,
}

#[derive(Deserialize)]
struct GuessBody {
    result: String,
    won: bool,
}

#[derive(Deserialize)]
struct GiveUpBody {
    answer: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Client for the remote game authority
///
/// Cheap to clone (the underlying `reqwest::Client` is reference-counted),
/// which is how spawned request tasks get their own handle.
#[derive(Debug, Clone)]
pub struct AuthorityClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthorityClient {
    /// Create a client for an authority at `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// `POST /games` — start a new session
    ///
    /// # Errors
    /// Returns `ApiError::Transport` on network failure or an unexpected
    /// status or payload.
    pub async fn create_game(&self) -> Result<NewGame, ApiError> {
        let response = self
            .http
            .post(format!("{}/games", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::classify(response).await);
        }
        let body: CreateGameBody = response.json().await?;
        Ok(NewGame {
            game_id: body.game_id,
            remaining_count: body.remaining_count,
        })
    }

    /// `GET /check-word` — advisory dictionary membership probe
    ///
    /// # Errors
    /// Returns `ApiError::Transport` on network failure or an unexpected
    /// status or payload.
    pub async fn check_word(&self, word: &str) -> Result<bool, ApiError> {
        let response = self
            .http
            .get(format!("{}/check-word", self.base_url))
            .query(&[("word", word)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::classify(response).await);
        }
        let body: CheckWordBody = response.json().await?;
        Ok(body.in_list)
    }

    /// `POST /games/{id}/guess` — submit a guess for scoring
    ///
    /// # Errors
    /// - `ApiError::ValidationRejected` when the server dictionary rejects
    ///   the guess (422)
    /// - `ApiError::SessionNotFound` for an unknown session (404)
    /// - `ApiError::Transport` otherwise
    pub async fn submit_guess(&self, game_id: &str, guess: &Word) -> Result<ScoredGuess, ApiError> {
        let response = self
            .http
            .post(format!("{}/games/{game_id}/guess", self.base_url))
            .json(&GuessRequest {
                guess: guess.to_uppercase(),
            })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::classify(response).await);
        }
        let body: GuessBody = response.json().await?;
        let code = ResultCode::from_code(&body.result)
            .ok_or_else(|| ApiError::Transport(format!("malformed result code {:?}", body.result)))?;
        Ok(ScoredGuess {
            code,
            won: body.won,
        })
    }

    /// `POST /games/{id}/giveup` — forfeit and reveal the answer
    ///
    /// # Errors
    /// - `ApiError::SessionNotFound` for an unknown session (404)
    /// - `ApiError::SessionAlreadyEnded` for a finished game (409)
    /// - `ApiError::Transport` otherwise
    pub async fn give_up(&self, game_id: &str) -> Result<Forfeit, ApiError> {
        let response = self
            .http
            .post(format!("{}/games/{game_id}/giveup", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::classify(response).await);
        }
        let body: GiveUpBody = response.json().await?;
        let answer = Word::new(&body.answer)
            .map_err(|e| ApiError::Transport(format!("malformed answer: {e}")))?;
        Ok(Forfeit { answer })
    }

    async fn classify(response: reqwest::Response) -> ApiError {
        match response.status().as_u16() {
            404 => ApiError::SessionNotFound,
            409 => ApiError::SessionAlreadyEnded,
            422 => {
                let detail = response
                    .json::<ErrorBody>()
                    .await
                    .map_or_else(|_| "Not in word list.".to_string(), |b| b.detail);
                ApiError::ValidationRejected(detail)
            }
            status => ApiError::Transport(format!("unexpected status {status}")),
        }
    }
}
