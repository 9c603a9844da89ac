//! Word representation
//!
//! A Word stores a 5-letter word, normalized to uppercase, along with its bytes
//! for fast per-position comparison during scoring.

use super::WORD_LEN;
use crate::error::InputError;
use std::fmt;
use std::str::FromStr;

/// A 5-letter word, always uppercase ASCII
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is not trimmed; callers reading lines do that.
    ///
    /// # Errors
    /// Returns `InputError` if:
    /// - Length is not exactly 5 characters
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordled::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, InputError> {
        let text = text.as_ref();

        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(InputError::InvalidLength {
                expected: WORD_LEN,
                actual: len,
            });
        }

        let mut chars = [0u8; WORD_LEN];
        for (position, ch) in text.chars().enumerate() {
            if !ch.is_ascii_alphabetic() {
                return Err(InputError::InvalidCharacter { ch, position });
            }
            chars[position] = ch.to_ascii_uppercase() as u8;
        }

        Ok(Self::from_bytes(chars))
    }

    /// Build a word from bytes already known to be uppercase ASCII letters
    fn from_bytes(chars: [u8; WORD_LEN]) -> Self {
        let text = chars.iter().map(|&b| char::from(b)).collect();
        Self { text, chars }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Count of each letter A-Z in the word
    ///
    /// Used by scoring to consume duplicate letters one occurrence at a time.
    #[inline]
    pub(crate) fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &ch in &self.chars {
            counts[usize::from(ch - b'A')] += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.chars(), b"CRANE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("too long"),
            Err(InputError::InvalidLength {
                expected: 5,
                actual: 8
            })
        );
        assert!(matches!(
            Word::new("shrt"),
            Err(InputError::InvalidLength { actual: 4, .. })
        ));
        assert!(matches!(
            Word::new(""),
            Err(InputError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        assert!(matches!(
            Word::new("ÉCLAT"),
            Err(InputError::InvalidCharacter { ch: 'É', position: 0 })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(
            Word::new("cran3"),
            Err(InputError::InvalidCharacter {
                ch: '3',
                position: 4
            })
        );
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cr_ne").is_err());
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'C');
        assert_eq!(word.char_at(4), b'E');
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[usize::from(b'S' - b'A')], 1);
        assert_eq!(counts[usize::from(b'E' - b'A')], 2);
        assert_eq!(counts[usize::from(b'Z' - b'A')], 0);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_parse_and_display() {
        let word: Word = "beach".parse().unwrap();
        assert_eq!(format!("{word}"), "BEACH");
    }
}
