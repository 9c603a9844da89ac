//! Guess scoring
//!
//! Implements Wordle's feedback rules with duplicate-aware letter counting.

use super::{Mark, Verdict, WORD_LEN, Word};
use crate::error::Result;

/// Score `guess` against `target`
///
/// # Algorithm
/// 1. Count the letters of the target
/// 2. First pass: mark exact position matches Correct and consume them
/// 3. Second pass, left to right: mark Present while the letter still has an
///    unconsumed occurrence, otherwise Absent
///
/// The first pass must finish before the second starts, otherwise an early
/// Present could steal the occurrence a later Correct needs.
///
/// # Examples
/// ```
/// use wordled::core::{score, Word};
///
/// let guess = Word::new("sassy").unwrap();
/// let target = Word::new("basin").unwrap();
///
/// // BASIN has a single S, already used by the green at position 2
/// assert_eq!(score(&guess, &target).encode(&guess), "_AS__");
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> Verdict {
    let mut marks = [Mark::Absent; WORD_LEN];
    let mut available = target.letter_counts();

    for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
        if g == t {
            marks[i] = Mark::Correct;
            available[usize::from(g - b'A')] -= 1;
        }
    }

    for (i, &g) in guess.chars().iter().enumerate() {
        if marks[i] == Mark::Correct {
            continue;
        }
        let count = &mut available[usize::from(g - b'A')];
        if *count > 0 {
            marks[i] = Mark::Present;
            *count -= 1;
        }
    }

    Verdict::new(marks)
}

/// Score two unvalidated strings
///
/// # Errors
/// Returns `InvalidInput` if either string is not a 5-letter word.
pub fn score_words(guess: &str, target: &str) -> Result<Verdict> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    Ok(score(&guess, &target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InputError, WordledError};
    use crate::wordlists::{WORDS, loader::words_from_slice};
    use Mark::{Absent, Correct, Present};

    fn encoded(guess: &str, target: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        score(&guess, &target).encode(&guess)
    }

    #[test]
    fn score_self_is_all_correct() {
        for word in ["crane", "slate", "sassy", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(score(&w, &w), Verdict::ALL_CORRECT);
        }
    }

    #[test]
    fn score_disjoint_is_all_absent() {
        let list = words_from_slice(WORDS);
        let mut checked = 0;

        for guess in list.iter().step_by(7) {
            let guess_counts = guess.letter_counts();
            for target in &list {
                let target_counts = target.letter_counts();
                let shares_letter = guess_counts
                    .iter()
                    .zip(&target_counts)
                    .any(|(&g, &t)| g > 0 && t > 0);
                if shares_letter {
                    continue;
                }
                assert_eq!(
                    score(guess, target),
                    Verdict::ALL_ABSENT,
                    "{guess} vs {target} share no letter"
                );
                checked += 1;
            }
        }

        assert!(checked > 0, "no disjoint pairs in the word list");
    }

    #[test]
    fn score_speed_erase() {
        // ERASE has two E's and one S: S yellow, both E's yellow
        let guess = Word::new("speed").unwrap();
        let target = Word::new("erase").unwrap();
        let verdict = score(&guess, &target);

        assert_eq!(
            verdict,
            Verdict::new([Present, Absent, Present, Present, Absent])
        );
        assert_eq!(verdict.index(), 37);
        assert_eq!(verdict.encode(&guess), "s_ee_");
    }

    #[test]
    fn score_sassy_basin_does_not_over_credit() {
        // The naive any-occurrence rule would give "sASs_"
        assert_eq!(encoded("sassy", "basin"), "_AS__");
    }

    #[test]
    fn score_green_claims_before_earlier_yellow() {
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(encoded("robot", "floor"), "ro_O_");
    }

    #[test]
    fn score_repeated_guess_letter_left_to_right() {
        // One E available for three unmatched guessed E's: the earliest wins
        assert_eq!(encoded("eerie", "crest"), "e_r__");
        // Greens consume THOSE's only E and S before the earlier E's are seen
        assert_eq!(encoded("geese", "those"), "___SE");
    }

    #[test]
    fn score_beach_beast() {
        assert_eq!(encoded("beach", "beast"), "BEA__");
    }

    #[test]
    fn score_never_exceeds_target_letter_count() {
        let words = ["speed", "erase", "sassy", "basin", "geese", "eerie", "llama"];
        for g in words {
            for t in words {
                let guess = Word::new(g).unwrap();
                let target = Word::new(t).unwrap();
                let verdict = score(&guess, &target);
                let target_counts = target.letter_counts();

                let mut credited = [0u8; 26];
                for (i, &letter) in guess.chars().iter().enumerate() {
                    if verdict.mark(i) != Absent {
                        credited[usize::from(letter - b'A')] += 1;
                    }
                }
                for letter in 0..26 {
                    assert!(
                        credited[letter] <= target_counts[letter],
                        "{g} vs {t} over-credits letter {}",
                        char::from(b'A' + letter as u8)
                    );
                }
            }
        }
    }

    #[test]
    fn score_correct_iff_same_letter() {
        let guess = Word::new("sassy").unwrap();
        let target = Word::new("essay").unwrap();
        let verdict = score(&guess, &target);
        for i in 0..WORD_LEN {
            assert_eq!(
                verdict.mark(i) == Correct,
                guess.char_at(i) == target.char_at(i)
            );
        }
    }

    #[test]
    fn score_words_validates_input() {
        assert!(score_words("crane", "slate").is_ok());
        assert!(matches!(
            score_words("cran", "slate"),
            Err(WordledError::InvalidInput(InputError::InvalidLength { .. }))
        ));
        assert!(matches!(
            score_words("crane", "sl4te"),
            Err(WordledError::InvalidInput(InputError::InvalidCharacter { .. }))
        ));
    }
}
