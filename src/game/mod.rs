//! The guessing game itself
//!
//! A game hides a random target from the word list and scores each submitted
//! guess against it. Guesses do not have to come from the word list.

mod keyboard;

pub use keyboard::{KEYBOARD_ROWS, Keyboard};

use crate::config::Config;
use crate::core::{Verdict, Word, score};
use crate::error::{Result, WordledError};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info};

/// Outcome of a game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
    GaveUp,
}

/// One submitted guess with its verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub guess: Word,
    pub verdict: Verdict,
}

pub struct Game<'a, R: Rng> {
    words: &'a [Word],
    target: Word,
    rows: Vec<Row>,
    keyboard: Keyboard,
    status: GameStatus,
    max_guesses: usize,
    rng: R,
}

impl<'a, R: Rng> Game<'a, R> {
    /// Start a game with a target drawn uniformly from `words`
    ///
    /// # Errors
    /// Returns `EmptyWordSource` if `words` is empty.
    pub fn new(words: &'a [Word], config: &Config, mut rng: R) -> Result<Self> {
        let target = pick_target(words, &mut rng)?;
        Ok(Self::build(words, target, config, rng))
    }

    /// Start a game with a known target
    ///
    /// Later restarts still draw from `words`.
    ///
    /// # Errors
    /// Returns `EmptyWordSource` if `words` is empty.
    pub fn with_target(words: &'a [Word], target: Word, config: &Config, rng: R) -> Result<Self> {
        if words.is_empty() {
            return Err(empty_source());
        }
        Ok(Self::build(words, target, config, rng))
    }

    fn build(words: &'a [Word], target: Word, config: &Config, rng: R) -> Self {
        debug!(target = %target, "game started");
        Self {
            words,
            target,
            rows: Vec::with_capacity(config.max_guesses),
            keyboard: Keyboard::default(),
            status: GameStatus::Playing,
            max_guesses: config.max_guesses,
            rng,
        }
    }

    /// Score a guess and add it to the board
    ///
    /// # Errors
    /// Returns `GameOver` if the game has already finished.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordled::config::Config;
    /// use wordled::core::Word;
    /// use wordled::game::{Game, GameStatus};
    ///
    /// let words = vec![Word::new("beast").unwrap()];
    /// let target = words[0].clone();
    /// let mut game =
    ///     Game::with_target(&words, target, &Config::default(), StdRng::seed_from_u64(0)).unwrap();
    ///
    /// let verdict = game.submit(&Word::new("beach").unwrap()).unwrap();
    /// assert_eq!(verdict.encode(&Word::new("beach").unwrap()), "BEA__");
    /// assert_eq!(game.remaining_attempts(), 5);
    ///
    /// game.submit(&Word::new("beast").unwrap()).unwrap();
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn submit(&mut self, guess: &Word) -> Result<Verdict> {
        if self.status != GameStatus::Playing {
            return Err(WordledError::GameOver);
        }

        let verdict = score(guess, &self.target);
        self.keyboard.record(guess, &verdict);
        self.rows.push(Row {
            guess: guess.clone(),
            verdict,
        });

        if verdict.is_solved() {
            self.status = GameStatus::Won;
            info!(target = %self.target, guesses = self.rows.len(), "game won");
        } else if self.rows.len() >= self.max_guesses {
            self.status = GameStatus::Lost;
            info!(target = %self.target, "game lost");
        }

        Ok(verdict)
    }

    /// Stop playing and reveal the target
    pub fn give_up(&mut self) {
        if self.status == GameStatus::Playing {
            self.status = GameStatus::GaveUp;
            info!(target = %self.target, "player gave up");
        }
    }

    /// Clear the board and draw a new target
    pub fn restart(&mut self) {
        // words is non-empty, checked at construction
        if let Some(target) = self.words.choose(&mut self.rng) {
            self.target = target.clone();
        }
        self.rows.clear();
        self.keyboard.clear();
        self.status = GameStatus::Playing;
        debug!(target = %self.target, "game restarted");
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status != GameStatus::Playing
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_guesses.saturating_sub(self.rows.len())
    }

    /// The hidden word; front ends show it only once the game is finished
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

fn pick_target<R: Rng>(words: &[Word], rng: &mut R) -> Result<Word> {
    words.choose(rng).cloned().ok_or_else(empty_source)
}

fn empty_source() -> WordledError {
    WordledError::EmptyWordSource {
        source_name: "game".to_string(),
        reason: "word list is empty".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn game<'a>(list: &'a [Word], target: &str) -> Game<'a, StdRng> {
        Game::with_target(
            list,
            Word::new(target).unwrap(),
            &Config::default(),
            StdRng::seed_from_u64(5),
        )
        .unwrap()
    }

    #[test]
    fn random_target_comes_from_list() {
        let list = words(&["crane", "slate", "irate"]);
        for seed in 0..10 {
            let g = Game::new(&list, &Config::default(), StdRng::seed_from_u64(seed)).unwrap();
            assert!(list.contains(g.target()));
        }
    }

    #[test]
    fn empty_list_is_rejected() {
        let empty: Vec<Word> = Vec::new();
        assert!(matches!(
            Game::new(&empty, &Config::default(), StdRng::seed_from_u64(0)),
            Err(WordledError::EmptyWordSource { .. })
        ));
    }

    #[test]
    fn winning_guess_finishes_game() {
        let list = words(&["beast"]);
        let mut g = game(&list, "beast");

        let verdict = g.submit(&Word::new("beast").unwrap()).unwrap();
        assert!(verdict.is_solved());
        assert_eq!(g.status(), GameStatus::Won);
        assert!(matches!(
            g.submit(&Word::new("beach").unwrap()),
            Err(WordledError::GameOver)
        ));
        assert_eq!(g.rows().len(), 1);
    }

    #[test]
    fn sixth_miss_loses() {
        let list = words(&["beast"]);
        let mut g = game(&list, "beast");
        let miss = Word::new("crane").unwrap();

        for turn in 1..=6 {
            assert_eq!(g.status(), GameStatus::Playing);
            g.submit(&miss).unwrap();
            assert_eq!(g.remaining_attempts(), 6 - turn);
        }
        assert_eq!(g.status(), GameStatus::Lost);
        assert!(g.is_finished());
    }

    #[test]
    fn guesses_need_not_be_in_list() {
        let list = words(&["beast"]);
        let mut g = game(&list, "beast");
        let verdict = g.submit(&Word::new("zzzzz").unwrap()).unwrap();
        assert_eq!(verdict, Verdict::ALL_ABSENT);
    }

    #[test]
    fn give_up_ends_game() {
        let list = words(&["beast"]);
        let mut g = game(&list, "beast");
        g.give_up();
        assert_eq!(g.status(), GameStatus::GaveUp);
        assert!(g.submit(&Word::new("beast").unwrap()).is_err());
    }

    #[test]
    fn restart_clears_board() {
        let list = words(&["beast", "crane"]);
        let mut g = game(&list, "beast");
        g.submit(&Word::new("beach").unwrap()).unwrap();
        g.give_up();

        g.restart();
        assert_eq!(g.status(), GameStatus::Playing);
        assert!(g.rows().is_empty());
        assert_eq!(g.keyboard().state('B'), None);
        assert!(list.contains(g.target()));
    }

    #[test]
    fn keyboard_tracks_submissions() {
        let list = words(&["beast"]);
        let mut g = game(&list, "beast");
        g.submit(&Word::new("beach").unwrap()).unwrap();
        assert_eq!(g.keyboard().state('A'), Some(Mark::Correct));
        assert_eq!(g.keyboard().state('H'), Some(Mark::Absent));
        assert_eq!(g.keyboard().state('Z'), None);
    }
}
