//! Per-letter feedback for a guess
//!
//! A verdict holds one [`Mark`] per guess position. It travels between the
//! game and the solver as a 5-character feedback string:
//! - uppercase letter = Correct at that position
//! - lowercase letter = Present elsewhere in the target
//! - `_` = Absent
//!
//! The letters in the feedback string repeat the guessed letters, so
//! `"BEA__"` is the feedback for `BEACH` against `BEAST`.

use super::{WORD_LEN, Word};
use crate::error::InputError;
use std::fmt;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    /// Letter is not in the target (or all its occurrences are used up)
    Absent,
    /// Letter is in the target at another position
    Present,
    /// Letter is in the target at this position
    Correct,
}

impl Mark {
    /// Base-3 digit used by [`Verdict::index`]
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict([Mark; WORD_LEN]);

impl Verdict {
    /// All greens (perfect match)
    pub const ALL_CORRECT: Self = Self([Mark::Correct; WORD_LEN]);

    /// All grays
    pub const ALL_ABSENT: Self = Self([Mark::Absent; WORD_LEN]);

    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// Mark at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if this is a perfect match (all Correct)
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::ALL_CORRECT
    }

    /// Compact base-3 encoding (0-242), position 0 is the least significant digit
    ///
    /// # Examples
    /// ```
    /// use wordled::core::{Verdict, score, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(score(&guess, &target).index(), 180);
    /// assert_eq!(Verdict::ALL_CORRECT.index(), 242);
    /// ```
    #[must_use]
    pub fn index(&self) -> u8 {
        self.0
            .iter()
            .rev()
            .fold(0u8, |acc, mark| acc * 3 + mark.digit())
    }

    /// Render as the feedback string for `guess`
    ///
    /// # Examples
    /// ```
    /// use wordled::core::{score, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    /// assert_eq!(score(&guess, &target).encode(&guess), "s_ee_");
    /// ```
    #[must_use]
    pub fn encode(&self, guess: &Word) -> String {
        self.0
            .iter()
            .zip(guess.chars())
            .map(|(mark, &letter)| match mark {
                Mark::Correct => char::from(letter),
                Mark::Present => char::from(letter.to_ascii_lowercase()),
                Mark::Absent => '_',
            })
            .collect()
    }

    /// Parse a feedback string into marks
    ///
    /// Only the shape of each character is read: its case, or `_`. Use
    /// [`Verdict::parse_for`] to also check the letters against a guess.
    ///
    /// # Errors
    /// Returns `InputError` if the string is not exactly 5 characters or
    /// contains anything other than ASCII letters and `_`.
    pub fn parse(feedback: &str) -> Result<Self, InputError> {
        let len = feedback.chars().count();
        if len != WORD_LEN {
            return Err(InputError::InvalidLength {
                expected: WORD_LEN,
                actual: len,
            });
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (position, ch) in feedback.chars().enumerate() {
            marks[position] = match ch {
                'A'..='Z' => Mark::Correct,
                'a'..='z' => Mark::Present,
                '_' => Mark::Absent,
                _ => return Err(InputError::InvalidCharacter { ch, position }),
            };
        }

        Ok(Self(marks))
    }

    /// Parse a feedback string and check that its letters repeat `guess`
    ///
    /// # Errors
    /// Returns `InputError` for the reasons of [`Verdict::parse`], or
    /// `LetterMismatch` when a letter differs from the guessed letter at that
    /// position.
    pub fn parse_for(feedback: &str, guess: &Word) -> Result<Self, InputError> {
        let verdict = Self::parse(feedback)?;

        for (position, (ch, &expected)) in feedback.chars().zip(guess.chars()).enumerate() {
            if ch != '_' && ch.to_ascii_uppercase() != char::from(expected) {
                return Err(InputError::LetterMismatch {
                    expected: char::from(expected),
                    found: ch,
                    position,
                });
            }
        }

        Ok(verdict)
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
