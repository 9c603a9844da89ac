//! Candidate filtering
//!
//! Keeps the words that would have produced an observed verdict. Filtering
//! reuses [`score`] so the encoding used to score and the one used to filter
//! can never drift apart.

use crate::core::{Verdict, Word, score};
use rustc_hash::FxHashMap;

/// Keep each candidate `w` for which `score(guess, w) == verdict`
///
/// Returns a new list in the original order; the input is never mutated.
/// The result may be empty.
///
/// # Examples
/// ```
/// use wordled::core::{score, Word};
/// use wordled::solver::filter;
///
/// let words: Vec<Word> = ["beach", "beast", "beady"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("beach").unwrap();
/// let verdict = score(&guess, &Word::new("beast").unwrap());
///
/// let remaining = filter(&words, &guess, &verdict);
/// assert_eq!(remaining.len(), 2); // BEAST and BEADY both score BEA__
/// ```
#[must_use]
pub fn filter(candidates: &[Word], guess: &Word, verdict: &Verdict) -> Vec<Word> {
    candidates
        .iter()
        .filter(|&candidate| score(guess, candidate) == *verdict)
        .cloned()
        .collect()
}

/// Group candidates by the verdict they produce for `guess`, in one pass
///
/// Each bucket keeps the candidates in their original order. Looking up a
/// verdict here gives the same words as [`filter`] with that verdict.
#[must_use]
pub fn partition<'a>(guess: &Word, candidates: &'a [Word]) -> FxHashMap<Verdict, Vec<&'a Word>> {
    let mut buckets: FxHashMap<Verdict, Vec<&'a Word>> = FxHashMap::default();

    for candidate in candidates {
        buckets
            .entry(score(guess, candidate))
            .or_default()
            .push(candidate);
    }

    buckets
}
