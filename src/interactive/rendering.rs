//! TUI rendering with ratatui
//!
//! Game board, keyboard, and the assistant panel.

use super::app::{App, MessageStyle};
use crate::core::{Mark, WORD_LEN};
use crate::game::{GameStatus, KEYBOARD_ROWS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // Assistant and messages
        ])
        .split(chunks[1]);

    render_play_area(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLED")
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

fn render_play_area(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Board
            Constraint::Length(5), // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn mark_style(mark: Mark) -> Style {
    let bg = match mark {
        Mark::Correct => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let mut lines = Vec::with_capacity(game.max_guesses());

    for row in game.rows() {
        let spans: Vec<Span> = row
            .guess
            .text()
            .chars()
            .zip(row.verdict.marks())
            .flat_map(|(letter, &mark)| {
                [
                    Span::styled(format!(" {letter} "), mark_style(mark)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    if !game.is_finished() {
        let typed: Vec<char> = app.input_buffer.chars().collect();
        let spans: Vec<Span> = (0..WORD_LEN)
            .flat_map(|i| {
                let letter = typed.get(i).copied().unwrap_or('·');
                [
                    Span::styled(
                        format!(" {letter} "),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    while lines.len() < game.max_guesses() {
        lines.push(Line::from(
            Span::styled(" · ".repeat(WORD_LEN), Style::default().fg(Color::DarkGray)),
        ));
    }

    if game.is_finished() {
        lines.push(Line::from(""));
        let (text, color) = match game.status() {
            GameStatus::Won => (format!("Solved: {}", game.target()), Color::Green),
            _ => (format!("The word was {}", game.target()), Color::Red),
        };
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Board ({} left) ", game.remaining_attempts()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.game.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|key| {
                    let style = keyboard
                        .state(key)
                        .map_or_else(|| Style::default().fg(Color::White), mark_style);
                    Span::styled(format!(" {key} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Assistant
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_assistant(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_assistant(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.assistant.candidates();

    let mut content = match &app.suggestion {
        Some(word) => vec![
            Line::from(vec![
                Span::raw("Suggested: "),
                Span::styled(
                    word.text().to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!(
                "{} of {} candidates remaining",
                candidates.len(),
                app.assistant.word_count()
            )),
        ],
        None if app.game.is_finished() => vec![Line::from("Game over")],
        None => vec![Line::from(Span::styled(
            "Not following this game",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    if app.suggestion.is_some() && candidates.len() <= 10 {
        content.push(Line::from(""));
        for candidate in candidates {
            content.push(Line::from(Span::styled(
                format!("  {candidate}"),
                Style::default().fg(Color::Green),
            )));
        }
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Assistant ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
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
            Constraint::Percentage(35),
            Constraint::Percentage(20),
            Constraint::Percentage(45),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let streak_text = format!(
        "Streak: {} (best {})",
        app.stats.current_streak, app.stats.best_streak
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[1]);

    let help_text = if app.game.is_finished() {
        "q: Quit | n: New Game"
    } else {
        "Enter: Guess | TAB: Suggestion | Esc: Give Up | Ctrl-R: Restart"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_suggestion_and_keyboard() {
        let words = words_from_slice(&["beast", "beady", "crane"]);
        let app = App::new(&words, &Config::default().with_seed(Some(3))).unwrap();
        let text = screen(&app);

        assert!(text.contains("WORDLED"));
        assert!(text.contains("Suggested: BEACH"));
        assert!(text.contains("3 of 3 candidates remaining"));
        assert!(text.contains(" Q "));
    }

    #[test]
    fn renders_target_once_finished() {
        let words = words_from_slice(&["beast"]);
        let mut app = App::new(&words, &Config::default().with_seed(Some(3))).unwrap();
        app.give_up();
        let text = screen(&app);

        assert!(text.contains("The word was BEAST"));
        assert!(text.contains("q: Quit | n: New Game"));
    }
}
