//! Core domain types for Wordle
//!
//! Words, verdicts and the scoring rule that links them. Everything here is
//! pure: no I/O, no randomness, no logging.

mod scorer;
mod verdict;
mod word;

pub use scorer::{score, score_words};
pub use verdict::{Mark, Verdict};
pub use word::Word;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;
