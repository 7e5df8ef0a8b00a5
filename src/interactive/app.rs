//! TUI application loop
//!
//! Terminal setup/teardown and key dispatch. The loop alternates between
//! polling the terminal for input (with a timeout) and pumping the
//! controller's authority-event channel, so server responses are applied
//! between keystrokes without a second thread touching game state.

use crate::game::{Controller, Phase};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Application state: the game controller plus UI-only concerns
pub struct App {
    pub game: Controller,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(game: Controller) -> Self {
        Self {
            game,
            should_quit: false,
        }
    }

    /// Route one key press to the controller
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The confirmation prompt captures all input while open
        if self.game.confirming_give_up {
            match key.code {
                KeyCode::Enter | KeyCode::Char('y' | 'Y') => self.game.confirm_give_up(),
                KeyCode::Esc | KeyCode::Char('n' | 'N') => self.game.dismiss_give_up(),
                _ => {}
            }
            return;
        }

        match self.game.session.phase {
            Phase::NotStarted | Phase::Won | Phase::GaveUp => match key.code {
                KeyCode::Char('n' | 'N') => self.game.start_new_game(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            },
            Phase::InProgress => match key.code {
                KeyCode::Enter => self.game.submit_guess(),
                KeyCode::Backspace => self.game.handle_backspace(),
                KeyCode::Esc => self.game.request_give_up(),
                KeyCode::Char(c) if c.is_ascii_alphabetic() => self.game.handle_letter(c),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui(game: Controller) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, App::new(game)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Apply any authority responses that resolved since the last tick
        app.game.poll_authority();

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AuthorityClient;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::new(Controller::new(AuthorityClient::new("http://127.0.0.1:1")))
    }

    #[tokio::test]
    async fn ctrl_c_quits_everywhere() {
        let mut app = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn q_quits_only_outside_a_game() {
        let mut app = test_app();
        app.game.session.phase = Phase::InProgress;
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);

        app.game.session.phase = Phase::Won;
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn letters_reach_the_board_while_editing() {
        let mut app = test_app();
        app.game.session.phase = Phase::InProgress;
        app.game.board.append_row();

        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Char('b')));
        assert_eq!(app.game.board.current_word(), "AB");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.game.board.current_word(), "A");
    }

    #[tokio::test]
    async fn escape_opens_then_dismisses_confirmation() {
        let mut app = test_app();
        app.game.session.phase = Phase::InProgress;
        app.game.board.append_row();

        app.handle_key(key(KeyCode::Esc));
        assert!(app.game.confirming_give_up);

        // Letters are swallowed while the prompt is open
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.game.board.current_word(), "");

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.game.confirming_give_up);
    }
}
