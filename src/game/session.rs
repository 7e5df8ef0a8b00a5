//! Game session state
//!
//! One active session per controller. The session is destroyed and replaced
//! wholesale when a new game starts; terminal phases are irreversible without
//! that replacement.

/// Lifecycle phase of the active session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    InProgress,
    Won,
    GaveUp,
}

impl Phase {
    /// Terminal phases lock input permanently for this session
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::GaveUp)
    }
}

/// The single active game session
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    /// Opaque id issued by the authority; `None` before a game starts
    pub session_id: Option<String>,
    pub phase: Phase,
    /// True while a guess, give-up, or create request is outstanding;
    /// serializes authority calls for this session
    pub submission_in_flight: bool,
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_has_no_game() {
        let session = GameSession::new();
        assert_eq!(session.session_id, None);
        assert_eq!(session.phase, Phase::NotStarted);
        assert!(!session.submission_in_flight);
    }

    #[test]
    fn terminal_phases() {
        assert!(Phase::Won.is_terminal());
        assert!(Phase::GaveUp.is_terminal());
        assert!(!Phase::NotStarted.is_terminal());
        assert!(!Phase::InProgress.is_terminal());
    }
}
