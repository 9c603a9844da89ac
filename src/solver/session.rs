//! Solver session: remaining candidates plus guess history
//!
//! The session emits a fixed opener first, then narrows its candidates with
//! each verdict and picks the next guess uniformly at random from what is
//! left. Randomness comes from an injected generator so seeded sessions are
//! reproducible.

use super::filter::filter;
use crate::config::Config;
use crate::core::{Verdict, Word};
use crate::error::{InputError, Result, WordledError};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info};

/// A guess and, once known, the verdict it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    /// `None` while the guess is awaiting feedback
    pub verdict: Option<Verdict>,
}

/// Where a session is in its solving run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No guess made yet
    Fresh,
    /// The contained guess was emitted and waits for its verdict
    AwaitingFeedback(Word),
    /// The contained word received an all-Correct verdict
    Solved(Word),
    /// Feedback for `guess` left no candidate
    Exhausted { guess: Word, feedback: String },
}

/// One solving run over a fixed word list
pub struct SolverSession<'a, R: Rng> {
    all_words: &'a [Word],
    candidates: Vec<Word>,
    history: Vec<GuessRecord>,
    state: SessionState,
    opener: Word,
    rng: R,
}

impl<'a, R: Rng> SolverSession<'a, R> {
    /// Create a fresh session over `words`
    ///
    /// # Errors
    /// Returns `EmptyWordSource` if `words` is empty; no session is usable
    /// without a backing list.
    pub fn new(words: &'a [Word], config: &Config, rng: R) -> Result<Self> {
        if words.is_empty() {
            return Err(WordledError::EmptyWordSource {
                source_name: "solver session".to_string(),
                reason: "word list is empty".to_string(),
            });
        }

        Ok(Self {
            all_words: words,
            candidates: words.to_vec(),
            history: Vec::new(),
            state: SessionState::Fresh,
            opener: config.opener.clone(),
            rng,
        })
    }

    /// Produce the next guess, applying `feedback` for the outstanding one
    ///
    /// - Fresh, no feedback: the fixed opener
    /// - Awaiting feedback, no feedback: the outstanding guess again
    /// - All-Correct feedback: the solved word; the session becomes Solved
    /// - Other feedback: a random word among the narrowed candidates
    ///
    /// # Errors
    /// - `InvalidInput` if feedback arrives before any guess was made
    /// - `NoCandidates` if the feedback eliminates every candidate; history is
    ///   kept and the session stays exhausted until [`reset`](Self::reset)
    /// - `AlreadySolved` once solved, until [`reset`](Self::reset)
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordled::config::Config;
    /// use wordled::core::{score, Word};
    /// use wordled::solver::SolverSession;
    ///
    /// let words: Vec<Word> = ["beast", "beady", "crane"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let mut session =
    ///     SolverSession::new(&words, &Config::default(), StdRng::seed_from_u64(1)).unwrap();
    ///
    /// let opener = session.make_guess(None).unwrap();
    /// assert_eq!(opener.text(), "BEACH");
    ///
    /// let verdict = score(&opener, &Word::new("beast").unwrap());
    /// let next = session.make_guess(Some(verdict)).unwrap();
    /// assert!(next.text() == "BEAST" || next.text() == "BEADY");
    /// ```
    pub fn make_guess(&mut self, feedback: Option<Verdict>) -> Result<Word> {
        match (&self.state, feedback) {
            (SessionState::Fresh, None) => {
                let opener = self.opener.clone();
                self.history.push(GuessRecord {
                    guess: opener.clone(),
                    verdict: None,
                });
                self.state = SessionState::AwaitingFeedback(opener.clone());
                info!(opener = %opener, candidates = self.candidates.len(), "session opened");
                Ok(opener)
            }
            (SessionState::Fresh, Some(_)) => Err(InputError::NoOutstandingGuess.into()),
            (SessionState::AwaitingFeedback(guess), None) => Ok(guess.clone()),
            (SessionState::AwaitingFeedback(guess), Some(verdict)) => {
                let guess = guess.clone();
                self.apply_feedback(guess, verdict)
            }
            (SessionState::Solved(_) | SessionState::Exhausted { .. }, _) => {
                Err(self.finished_error())
            }
        }
    }

    /// Apply a feedback string in the wire encoding
    ///
    /// The string is validated against the outstanding guess before any
    /// state changes, so an `InvalidInput` error may simply be retried.
    ///
    /// # Errors
    /// Same as [`make_guess`](Self::make_guess), plus `InvalidInput` for a
    /// malformed string or one whose letters differ from the guess.
    pub fn submit_feedback(&mut self, encoded: &str) -> Result<Word> {
        match &self.state {
            SessionState::AwaitingFeedback(guess) => {
                let verdict = Verdict::parse_for(encoded, guess)?;
                self.make_guess(Some(verdict))
            }
            SessionState::Fresh => {
                Verdict::parse(encoded)?;
                Err(InputError::NoOutstandingGuess.into())
            }
            SessionState::Solved(_) | SessionState::Exhausted { .. } => Err(self.finished_error()),
        }
    }

    /// Restore the full word list and clear the history
    pub fn reset(&mut self) {
        self.candidates = self.all_words.to_vec();
        self.history.clear();
        self.state = SessionState::Fresh;
        info!(candidates = self.candidates.len(), "session reset");
    }

    fn apply_feedback(&mut self, guess: Word, verdict: Verdict) -> Result<Word> {
        if verdict.is_solved() {
            self.record_verdict(verdict);
            self.candidates = vec![guess.clone()];
            self.state = SessionState::Solved(guess.clone());
            info!(word = %guess, guesses = self.history.len(), "session solved");
            return Ok(guess);
        }

        let remaining = filter(&self.candidates, &guess, &verdict);
        debug!(
            guess = %guess,
            feedback = %verdict.encode(&guess),
            before = self.candidates.len(),
            after = remaining.len(),
            "filtered candidates"
        );

        let Some(next) = remaining.choose(&mut self.rng).cloned() else {
            let feedback = verdict.encode(&guess);
            info!(guess = %guess, feedback = %feedback, "no candidates remain");
            self.candidates.clear();
            self.state = SessionState::Exhausted {
                guess: guess.clone(),
                feedback: feedback.clone(),
            };
            return Err(WordledError::NoCandidates { guess, feedback });
        };

        self.record_verdict(verdict);
        self.candidates = remaining;
        self.history.push(GuessRecord {
            guess: next.clone(),
            verdict: None,
        });
        self.state = SessionState::AwaitingFeedback(next.clone());
        Ok(next)
    }

    fn record_verdict(&mut self, verdict: Verdict) {
        if let Some(last) = self.history.last_mut() {
            last.verdict = Some(verdict);
        }
    }

    fn finished_error(&self) -> WordledError {
        match &self.state {
            SessionState::Solved(word) => WordledError::AlreadySolved(word.clone()),
            SessionState::Exhausted { guess, feedback } => WordledError::NoCandidates {
                guess: guess.clone(),
                feedback: feedback.clone(),
            },
            SessionState::Fresh | SessionState::AwaitingFeedback(_) => {
                InputError::NoOutstandingGuess.into()
            }
        }
    }

    /// Words still consistent with every verdict so far
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// The guess waiting for feedback, if any
    #[must_use]
    pub const fn outstanding_guess(&self) -> Option<&Word> {
        match &self.state {
            SessionState::AwaitingFeedback(guess) => Some(guess),
            _ => None,
        }
    }

    /// Size of the full word list the session resets to
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.all_words.len()
    }
}
