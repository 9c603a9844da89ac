//! Error types shared by the game, the solver and the word list loader

use crate::core::Word;
use thiserror::Error;

/// Crate-wide result alias
pub type Result<T, E = WordledError> = std::result::Result<T, E>;

/// Why a piece of user or wire input was rejected
///
/// Input errors are raised before any session or game state is touched,
/// so the caller may simply retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected exactly {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("feedback letter {found} at position {position} does not match guessed letter {expected}")]
    LetterMismatch {
        expected: char,
        found: char,
        position: usize,
    },

    #[error("feedback given before any guess was made")]
    NoOutstandingGuess,
}

#[derive(Debug, Error)]
pub enum WordledError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// The word list could not be read or contained no usable words
    #[error("word source {source_name} is unusable: {reason}")]
    EmptyWordSource { source_name: String, reason: String },

    /// Filtering left no word consistent with the feedback
    #[error("no candidates remain after {guess} scored {feedback}")]
    NoCandidates { guess: Word, feedback: String },

    #[error("session already solved with {0}; reset to start over")]
    AlreadySolved(Word),

    #[error("game is over")]
    GameOver,

    #[error("link peer has disconnected")]
    LinkClosed,
}

impl WordledError {
    /// True for errors that leave state untouched and can be retried as-is
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
