//! TUI application state and logic

use crate::config::Config;
use crate::core::{Verdict, WORD_LEN, Word};
use crate::error::WordledError;
use crate::game::{Game, GameStatus};
use crate::solver::{SessionState, SolverSession};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub game: Game<'a, StdRng>,
    /// Solver session following the game while the player takes its advice
    pub assistant: SolverSession<'a, StdRng>,
    /// Next word the assistant proposes, if it still follows the game
    pub suggestion: Option<Word>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

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

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// Wins by guess count; index 0 is unused
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    fn record_win(&mut self, guesses: usize) {
        self.total_games += 1;
        self.games_won += 1;
        self.current_streak += 1;
        self.best_streak = self.best_streak.max(self.current_streak);
        if let Some(slot) = self.guess_distribution.get_mut(guesses) {
            *slot += 1;
        }
    }

    fn record_loss(&mut self) {
        self.total_games += 1;
        self.current_streak = 0;
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Start a game with a random target and an assistant over the same list
    ///
    /// # Errors
    /// Returns `EmptyWordSource` if `words` is empty.
    pub fn new(words: &'a [Word], config: &Config) -> crate::Result<Self> {
        let game = Game::new(words, config, config.rng(0))?;
        let mut assistant = SolverSession::new(words, config, config.rng(1))?;
        let suggestion = Some(assistant.make_guess(None)?);

        Ok(Self {
            game,
            assistant,
            suggestion,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Guess the hidden 5-letter word in six tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "TAB fills in the assistant's suggestion.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.new_game(),
            code if self.game.is_finished() => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            KeyCode::Esc => self.give_up(),
            KeyCode::Tab => self.use_suggestion(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input_buffer.len() < WORD_LEN {
                    self.input_buffer.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_input(),
            _ => {}
        }
    }

    /// Copy the suggestion into the input row
    pub fn use_suggestion(&mut self) {
        match &self.suggestion {
            Some(word) => {
                self.input_buffer = word.text().to_string();
            }
            None => self.add_message("The assistant has no suggestion.", MessageStyle::Error),
        }
    }

    /// Play the word in the input row
    pub fn submit_input(&mut self) {
        let guess = match Word::new(&self.input_buffer) {
            Ok(word) => word,
            Err(e) => {
                self.add_message(&format!("Not a word: {e}"), MessageStyle::Error);
                return;
            }
        };

        let verdict = match self.game.submit(&guess) {
            Ok(verdict) => verdict,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.input_buffer.clear();

        self.update_assistant(&guess, verdict);

        match self.game.status() {
            GameStatus::Won => {
                let guesses = self.game.rows().len();
                self.stats.record_win(guesses);
                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.record_loss();
                self.add_message(
                    &format!("Out of guesses! The word was {}.", self.game.target()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Playing | GameStatus::GaveUp => {}
        }
    }

    /// Feed the verdict to the assistant if the player took its advice
    fn update_assistant(&mut self, guess: &Word, verdict: Verdict) {
        let Some(suggested) = self.suggestion.take() else {
            return;
        };

        if &suggested != guess {
            debug!(suggested = %suggested, played = %guess, "assistant unlinked");
            self.add_message(
                "You went your own way; the assistant sits this game out.",
                MessageStyle::Info,
            );
            return;
        }

        match self.assistant.make_guess(Some(verdict)) {
            Ok(next) => {
                if matches!(self.assistant.state(), SessionState::AwaitingFeedback(_))
                    && !self.game.is_finished()
                {
                    self.suggestion = Some(next);
                    let remaining = self.assistant.candidates().len();
                    self.add_message(
                        &format!("{remaining} candidates remaining"),
                        MessageStyle::Info,
                    );
                }
            }
            Err(WordledError::NoCandidates { .. }) => {
                self.add_message("The assistant ran out of candidates.", MessageStyle::Error);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn give_up(&mut self) {
        if self.game.is_finished() {
            return;
        }
        self.game.give_up();
        self.stats.record_loss();
        self.suggestion = None;
        self.add_message(
            &format!("The word was {}.", self.game.target()),
            MessageStyle::Error,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        if !self.game.is_finished() && !self.game.rows().is_empty() {
            self.stats.record_loss();
        }

        self.game.restart();
        self.assistant.reset();
        self.suggestion = self.assistant.make_guess(None).ok();
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
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

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn app(words: &[Word]) -> App<'_> {
        App::new(words, &Config::default().with_seed(Some(11))).unwrap()
    }

    #[test]
    fn starts_with_opener_suggestion() {
        let words = words_from_slice(&["beast", "beady", "crane"]);
        let app = app(&words);
        assert_eq!(app.suggestion.as_ref().map(Word::text), Some("BEACH"));
        assert_eq!(app.game.status(), GameStatus::Playing);
    }

    #[test]
    fn input_is_capped_and_uppercased() {
        let words = words_from_slice(&["beast"]);
        let mut app = app(&words);
        for c in "crane1s".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "CRANE");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "CRAN");
    }

    #[test]
    fn short_word_is_rejected() {
        let words = words_from_slice(&["beast"]);
        let mut app = app(&words);
        type_word(&mut app, "bea");
        assert!(app.game.rows().is_empty());
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn following_suggestions_solves_listed_target() {
        let words = words_from_slice(&["beast", "beady", "crane", "slate", "irate"]);
        let mut app = app(&words);

        while !app.game.is_finished() {
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Enter);
        }

        assert_eq!(app.game.status(), GameStatus::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.suggestion, None);
    }

    #[test]
    fn own_word_unlinks_assistant() {
        let words = words_from_slice(&["beast", "beady", "crane"]);
        let mut app = app(&words);
        let target = app.game.target().clone();
        let other = words.iter().find(|w| **w != target).unwrap().clone();

        type_word(&mut app, other.text());
        assert_eq!(app.suggestion, None);
        assert_eq!(app.assistant.history().len(), 1);

        type_word(&mut app, target.text());
        assert_eq!(app.game.status(), GameStatus::Won);
        assert_eq!(app.stats.guess_distribution[2], 1);
    }

    #[test]
    fn give_up_then_new_game() {
        let words = words_from_slice(&["beast", "beady", "crane"]);
        let mut app = app(&words);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.game.status(), GameStatus::GaveUp);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.game.status(), GameStatus::Playing);
        assert_eq!(app.suggestion.as_ref().map(Word::text), Some("BEACH"));
        assert!(app.game.rows().is_empty());
    }

    #[test]
    fn finished_game_ignores_letters_and_q_quits() {
        let words = words_from_slice(&["beast"]);
        let mut app = app(&words);
        type_word(&mut app, "beast");
        assert!(app.game.is_finished());

        press(&mut app, KeyCode::Char('b'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_r_restarts_midgame() {
        let words = words_from_slice(&["beast", "beady", "crane"]);
        let mut app = app(&words);
        type_word(&mut app, "zzzzz");
        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));

        assert!(app.game.rows().is_empty());
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.current_streak, 0);
    }

    #[test]
    fn win_rate_and_streaks() {
        let mut stats = Statistics::default();
        stats.record_win(3);
        stats.record_win(4);
        stats.record_loss();
        stats.record_win(2);

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.current_streak, 1);
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
    }
}
