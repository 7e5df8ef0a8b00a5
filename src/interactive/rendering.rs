//! TUI rendering with ratatui
//!
//! Pure projection of the controller's state: board grid, keyboard, message
//! log, status bar, and the give-up confirmation prompt. Nothing here
//! mutates game state.

use super::app::App;
use crate::core::{CellStatus, KeyStatus, Row};
use crate::game::{MessageStyle, Phase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board grid
            Constraint::Length(5), // Keyboard
            Constraint::Length(5), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if app.game.confirming_give_up {
        render_give_up_prompt(f);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("ABSURDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_style(status: CellStatus) -> Style {
    match status {
        CellStatus::Correct | CellStatus::RevealedAnswer => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellStatus::Filled => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        CellStatus::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn row_line(row: &Row) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for cell in row.cells() {
        let letter = cell.letter().unwrap_or('·');
        spans.push(Span::styled(format!(" {letter} "), cell_style(cell.status())));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if app.game.session.phase == Phase::NotStarted {
        lines.push(Line::from(""));
        lines.push(Line::from("The server picks the least helpful answer."));
        lines.push(Line::from("Outlast it."));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press 'n' to start a new game",
            Style::default().fg(Color::Yellow),
        )));
    } else {
        let current = app.game.board.current_index();
        for (index, row) in app.game.board.rows().iter().enumerate() {
            let mut line = row_line(row);
            if app.game.invalid_word && Some(index) == current {
                line.push_span(Span::styled(
                    " Not in word list",
                    Style::default().fg(Color::Red),
                ));
            }
            lines.push(line);
        }
        if app.game.session.phase.is_terminal() {
            if let Some(summary) = app.game.summary() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    summary,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));
            }
        }
    }

    // Keep the current row visible once the grid outgrows the pane
    let visible = area.height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(visible);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn key_style(status: KeyStatus) -> Style {
    match status {
        KeyStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        KeyStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        KeyStatus::Absent => Style::default().fg(Color::DarkGray),
        KeyStatus::Unknown => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|letters| {
            let mut spans = Vec::new();
            for letter in letters.chars() {
                let status = app.game.keyboard.status(letter);
                spans.push(Span::styled(format!(" {letter} "), key_style(status)));
            }
            Line::from(spans)
        })
        .collect();

    let border_color = if app.game.invalid_word {
        Color::Red
    } else {
        Color::White
    };
    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .style(Style::default().fg(border_color)),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .game
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let phase_text = match app.game.session.phase {
        Phase::NotStarted => "Not started",
        Phase::InProgress => {
            if app.game.session.submission_in_flight {
                "Submitting..."
            } else {
                "Playing"
            }
        }
        Phase::Won => "Won!",
        Phase::GaveUp => "Gave up",
    };
    let phase = Paragraph::new(format!("Phase: {phase_text}")).alignment(Alignment::Center);
    f.render_widget(phase, chunks[0]);

    let guesses = Paragraph::new(format!("Guesses: {}", app.game.guess_count()))
        .alignment(Alignment::Center);
    f.render_widget(guesses, chunks[1]);

    let help_text = match app.game.session.phase {
        Phase::InProgress => "Type a word | Enter: Submit | Esc: Give Up | Ctrl+C: Quit",
        _ => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_give_up_prompt(f: &mut Frame) {
    let area = centered_rect(44, 7, f.area());
    f.render_widget(Clear, area);

    let prompt = Paragraph::new(vec![
        Line::from(""),
        Line::from("Give up and reveal the answer?"),
        Line::from(""),
        Line::from(Span::styled(
            "y / Enter: yes    n / Esc: no",
            Style::default().fg(Color::Yellow),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Give Up? ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Red)),
    );
    f.render_widget(prompt, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AuthorityClient;
    use crate::core::{ResultCode, Word};
    use crate::game::Controller;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.cell((x, y)).unwrap().symbol());
            }
            text.push('\n');
        }
        text
    }

    fn fresh_app() -> App {
        App::new(Controller::new(AuthorityClient::new("http://127.0.0.1:1")))
    }

    fn gave_up_app() -> App {
        let mut app = fresh_app();
        app.game.board.append_row();
        for ch in "speed".chars() {
            app.game.board.set_letter(ch);
        }
        app.game
            .board
            .apply_result(0, &ResultCode::from_code("WYGWG").unwrap())
            .unwrap();
        app.game.board.append_row();
        app.game
            .board
            .reveal_answer(&Word::new("crane").unwrap())
            .unwrap();
        app.game.session.phase = Phase::GaveUp;
        app
    }

    #[test]
    fn landing_screen_prompts_for_new_game() {
        let text = render_to_text(&fresh_app());
        assert!(text.contains("Press 'n' to start a new game"));
    }

    #[test]
    fn end_screen_shows_summary_banner() {
        let text = render_to_text(&gave_up_app());
        assert!(text.contains("You gave up after 1 guesses!"));
    }

    #[test]
    fn status_bar_counts_guesses_not_revealed_rows() {
        let app = gave_up_app();
        assert_eq!(app.game.board.revealed_rows(), 2);
        let text = render_to_text(&app);
        assert!(text.contains("Guesses: 1"));
    }
}
