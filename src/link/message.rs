//! Wire messages exchanged between a game and a solver

use crate::core::{Verdict, Word};
use crate::error::InputError;
use std::fmt;

/// Text that asks the other side to start over
pub const RESET_TOKEN: &str = "X";

/// Message sent from a game to its linked solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToSolver {
    Reset,
    /// Feedback for the solver's last guess, in the wire encoding
    Feedback(String),
}

/// Message sent from a solver to its linked game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToGame {
    Reset,
    /// A word to enter and submit on the board
    Guess(Word),
}

impl ToSolver {
    /// Parse wire text: the reset token or a feedback string
    ///
    /// # Errors
    /// Returns `InputError` if the text is neither.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        if text == RESET_TOKEN {
            return Ok(Self::Reset);
        }
        Verdict::parse(text)?;
        Ok(Self::Feedback(text.to_string()))
    }
}

impl ToGame {
    /// Parse wire text: the reset token or a word
    ///
    /// # Errors
    /// Returns `InputError` if the text is neither.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        if text == RESET_TOKEN {
            return Ok(Self::Reset);
        }
        Ok(Self::Guess(Word::new(text)?))
    }
}

impl fmt::Display for ToSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reset => f.write_str(RESET_TOKEN),
            Self::Feedback(feedback) => f.write_str(feedback),
        }
    }
}

impl fmt::Display for ToGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reset => f.write_str(RESET_TOKEN),
            Self::Guess(word) => write!(f, "{word}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solver_messages_parse() {
        assert_eq!(ToSolver::parse("X"), Ok(ToSolver::Reset));
        assert_eq!(
            ToSolver::parse("BEa__"),
            Ok(ToSolver::Feedback("BEa__".to_string()))
        );
        assert!(ToSolver::parse("x").is_err());
        assert!(ToSolver::parse("BE?__").is_err());
        assert!(ToSolver::parse("BEA").is_err());
    }

    #[test]
    fn game_messages_parse() {
        assert_eq!(ToGame::parse("X"), Ok(ToGame::Reset));
        assert_eq!(
            ToGame::parse("beast"),
            Ok(ToGame::Guess(Word::new("beast").unwrap()))
        );
        assert!(ToGame::parse("bea_t").is_err());
    }

    #[test]
    fn display_is_wire_text() {
        assert_eq!(ToSolver::Reset.to_string(), "X");
        assert_eq!(ToSolver::Feedback("s_ee_".into()).to_string(), "s_ee_");
        assert_eq!(
            ToGame::Guess(Word::new("beach").unwrap()).to_string(),
            "BEACH"
        );
        assert_eq!(ToGame::Reset.to_string(), "X");
    }
}
