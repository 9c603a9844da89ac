//! In-process link between one game and one solver session
//!
//! The two sides never share state. They exchange owned [`ToSolver`] and
//! [`ToGame`] messages over a pair of channels, and each side applies its
//! pending messages in arrival order when pumped.

mod message;

pub use message::{RESET_TOKEN, ToGame, ToSolver};

use crate::core::{Verdict, Word};
use crate::error::{Result, WordledError};
use crate::game::{Game, GameStatus};
use crate::solver::{SessionState, SolverSession};
use rand::Rng;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::debug;

/// Game side of a link
pub struct GameEnd {
    to_solver: Sender<ToSolver>,
    from_solver: Receiver<ToGame>,
}

/// Solver side of a link
pub struct SolverEnd {
    to_game: Sender<ToGame>,
    from_game: Receiver<ToSolver>,
}

/// Create a connected pair of link ends
#[must_use]
pub fn link() -> (GameEnd, SolverEnd) {
    let (to_solver, from_game) = mpsc::channel();
    let (to_game, from_solver) = mpsc::channel();
    (
        GameEnd {
            to_solver,
            from_solver,
        },
        SolverEnd {
            to_game,
            from_game,
        },
    )
}

impl GameEnd {
    /// # Errors
    /// Returns `LinkClosed` if the solver end was dropped.
    pub fn send(&self, message: ToSolver) -> Result<()> {
        self.to_solver
            .send(message)
            .map_err(|_| WordledError::LinkClosed)
    }

    /// Forward the feedback for a guess the game just scored
    ///
    /// # Errors
    /// Returns `LinkClosed` if the solver end was dropped.
    pub fn send_feedback(&self, guess: &Word, verdict: &Verdict) -> Result<()> {
        self.send(ToSolver::Feedback(verdict.encode(guess)))
    }

    /// Apply every pending solver message to `game`
    ///
    /// Relayed guesses are submitted and their feedback sent back. Guesses
    /// arriving after the game finished are dropped. A reset restarts the game
    /// without echoing a reset back. Returns the number of messages applied.
    ///
    /// # Errors
    /// Returns `LinkClosed` if feedback cannot be delivered.
    pub fn pump<R: Rng>(&self, game: &mut Game<'_, R>) -> Result<usize> {
        let mut applied = 0;

        for message in self.from_solver.try_iter() {
            debug!(message = %message, "game received");
            match message {
                ToGame::Reset => game.restart(),
                ToGame::Guess(word) => {
                    if game.is_finished() {
                        debug!(word = %word, "game finished, guess dropped");
                        continue;
                    }
                    let verdict = game.submit(&word)?;
                    self.send_feedback(&word, &verdict)?;
                }
            }
            applied += 1;
        }

        Ok(applied)
    }
}

impl SolverEnd {
    /// # Errors
    /// Returns `LinkClosed` if the game end was dropped.
    pub fn send(&self, message: ToGame) -> Result<()> {
        self.to_game.send(message).map_err(|_| WordledError::LinkClosed)
    }

    /// Emit the session's current guess (the opener on a fresh session)
    ///
    /// # Errors
    /// Session errors from `make_guess`, or `LinkClosed`.
    pub fn start<R: Rng>(&self, session: &mut SolverSession<'_, R>) -> Result<Word> {
        let guess = session.make_guess(None)?;
        self.send(ToGame::Guess(guess.clone()))?;
        Ok(guess)
    }

    /// Reset the session, tell the game to start over, and emit the opener
    ///
    /// # Errors
    /// Session errors from `make_guess`, or `LinkClosed`.
    pub fn restart<R: Rng>(&self, session: &mut SolverSession<'_, R>) -> Result<Word> {
        session.reset();
        self.send(ToGame::Reset)?;
        self.start(session)
    }

    /// Apply every pending game message to `session`
    ///
    /// Feedback produces a next guess, which is relayed to the game unless
    /// the session just solved. A reset from the game resets the session and
    /// emits the opener. Returns the last guess sent, if any.
    ///
    /// # Errors
    /// Session errors (`InvalidInput`, `NoCandidates`, `AlreadySolved`) stop
    /// the pump at the offending message; `LinkClosed` if a guess cannot be
    /// delivered.
    pub fn pump<R: Rng>(&self, session: &mut SolverSession<'_, R>) -> Result<Option<Word>> {
        let mut last_sent = None;

        for message in self.from_game.try_iter() {
            debug!(message = %message, "solver received");
            match message {
                ToSolver::Reset => {
                    session.reset();
                    last_sent = Some(self.start(session)?);
                }
                ToSolver::Feedback(feedback) => {
                    let next = session.submit_feedback(&feedback)?;
                    if matches!(session.state(), SessionState::Solved(_)) {
                        continue;
                    }
                    self.send(ToGame::Guess(next.clone()))?;
                    last_sent = Some(next);
                }
            }
        }

        Ok(last_sent)
    }
}

/// One turn of linked play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub guess: Word,
    pub verdict: Verdict,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of a linked game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub target: Word,
    pub status: GameStatus,
    pub steps: Vec<Step>,
}

impl PlayOutcome {
    #[must_use]
    pub fn solved(&self) -> bool {
        self.status == GameStatus::Won
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }
}

/// Let `session` play `game` over a fresh link until the game finishes
///
/// # Errors
/// Returns `NoCandidates` if the session runs out of words (the target is not
/// in its list), or any other session error.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordled::config::Config;
/// use wordled::core::Word;
/// use wordled::game::Game;
/// use wordled::link::play_linked;
/// use wordled::solver::SolverSession;
///
/// let words: Vec<Word> = ["beach", "beast", "beady", "crane", "slate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let config = Config::default().with_seed(Some(1));
///
/// let mut game = Game::with_target(&words, words[1].clone(), &config, config.rng(0)).unwrap();
/// let mut session = SolverSession::new(&words, &config, config.rng(1)).unwrap();
///
/// let outcome = play_linked(&mut game, &mut session).unwrap();
/// assert!(outcome.solved());
/// assert_eq!(outcome.steps[0].guess.text(), "BEACH");
/// ```
pub fn play_linked<RG: Rng, RS: Rng>(
    game: &mut Game<'_, RG>,
    session: &mut SolverSession<'_, RS>,
) -> Result<PlayOutcome> {
    let (game_end, solver_end) = link();
    solver_end.start(session)?;

    let mut steps = Vec::new();
    let mut candidates_before = session.candidates().len();

    while !game.is_finished() {
        if game_end.pump(game)? == 0 {
            break;
        }
        solver_end.pump(session)?;

        if let Some(row) = game.rows().last() {
            let candidates_after = session.candidates().len();
            steps.push(Step {
                guess: row.guess.clone(),
                verdict: row.verdict,
                candidates_before,
                candidates_after,
            });
            candidates_before = candidates_after;
        }
    }

    Ok(PlayOutcome {
        target: game.target().clone(),
        status: game.status(),
        steps,
    })
}
