//! Word solving command
//!
//! Lets a solver session play a game with a known target over a link and
//! returns every step of the solution path.

use crate::config::Config;
use crate::core::Word;
use crate::error::Result;
use crate::game::Game;
use crate::link::{PlayOutcome, play_linked};
use crate::solver::SolverSession;
use tracing::warn;

/// Solve a specific target word with linked self-play
///
/// The game and the solver get separate random streams derived from the
/// config seed.
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a 5-letter word (`InvalidInput`)
/// - The word list is empty (`EmptyWordSource`)
/// - The solver runs out of candidates, which happens when the target is not
///   in the word list (`NoCandidates`)
pub fn solve_word(target: &str, words: &[Word], config: &Config) -> Result<PlayOutcome> {
    let target = Word::new(target)?;
    if !words.contains(&target) {
        warn!(target = %target, "target is not in the word list");
    }

    let mut game = Game::with_target(words, target, config, config.rng(0))?;
    let mut session = SolverSession::new(words, config, config.rng(1))?;

    play_linked(&mut game, &mut session)
}
