//! Runtime configuration shared by the game, the solver and the CLI

use crate::core::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Fixed first guess, chosen independently of the loaded word list
pub const DEFAULT_OPENER: &str = "BEACH";

/// Number of rows on the game board
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Settings for a game/solver pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// First guess the solver emits before any feedback exists
    pub opener: Word,
    /// Rows available to the game before it is lost
    pub max_guesses: usize,
    /// Seed for every random choice; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Config {
    /// Replace the opener
    ///
    /// # Errors
    /// Returns `InvalidInput` if `opener` is not a 5-letter word.
    pub fn with_opener(mut self, opener: &str) -> crate::Result<Self> {
        self.opener = Word::new(opener)?;
        Ok(self)
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Random source for one session or game
    ///
    /// `stream` separates the generators of different consumers sharing one
    /// seed, so a game and its solver do not draw identical numbers.
    #[must_use]
    pub fn rng(&self, stream: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
            None => StdRng::from_os_rng(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            opener: Word::new(DEFAULT_OPENER).expect("default opener is a valid word"),
            max_guesses: DEFAULT_MAX_GUESSES,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.opener.text(), "BEACH");
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn with_opener_validates() {
        let config = Config::default().with_opener("crane").unwrap();
        assert_eq!(config.opener.text(), "CRANE");
        assert!(Config::default().with_opener("cranes").is_err());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = Config::default().with_seed(Some(7));
        let a: u64 = config.rng(0).random();
        let b: u64 = config.rng(0).random();
        let c: u64 = config.rng(1).random();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
