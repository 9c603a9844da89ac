//! On-screen keyboard letter states

use crate::core::{Mark, Verdict, Word};

/// Rows of the QWERTY keyboard, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best mark seen so far for each letter
///
/// A key never downgrades: Correct beats Present, Present beats Absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    keys: [Option<Mark>; 26],
}

impl Keyboard {
    /// Fold one scored guess into the key states
    pub fn record(&mut self, guess: &Word, verdict: &Verdict) {
        for (&letter, &mark) in guess.chars().iter().zip(verdict.marks()) {
            let slot = &mut self.keys[usize::from(letter - b'A')];
            if slot.is_none_or(|current| mark > current) {
                *slot = Some(mark);
            }
        }
    }

    /// State of a letter; `None` if it was never guessed or is not A-Z
    #[must_use]
    pub fn state(&self, letter: char) -> Option<Mark> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let index = usize::from(letter.to_ascii_uppercase() as u8 - b'A');
        self.keys[index]
    }

    pub fn clear(&mut self) {
        self.keys = [None; 26];
    }
}
