//! Benchmark command
//!
//! Plays linked self-play games over many targets in parallel and collects
//! guess-count statistics.

use crate::config::Config;
use crate::core::Word;
use crate::game::Game;
use crate::link::{PlayOutcome, play_linked};
use crate::solver::SolverSession;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Games where the solver ran out of candidates
    pub exhausted: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of solved games
    pub distribution: HashMap<usize, usize>,
    /// Unsolved targets and hardest solved ones, most guesses first
    pub worst_words: Vec<(Word, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run self-play on each target word
///
/// Every game gets its own session and random streams derived from the
/// config seed and the target's index, so a seeded run is reproducible
/// regardless of thread scheduling.
#[must_use]
pub fn run_benchmark(
    words: &[Word],
    targets: &[Word],
    config: &Config,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<Option<PlayOutcome>> = targets
        .par_iter()
        .enumerate()
        .map(|(index, target)| {
            let outcome = play_one(words, target, config, index as u64);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(targets, &outcomes, start.elapsed())
}

fn play_one(words: &[Word], target: &Word, config: &Config, index: u64) -> Option<PlayOutcome> {
    let game = Game::with_target(words, target.clone(), config, config.rng(index * 2));
    let session = SolverSession::new(words, config, config.rng(index * 2 + 1));

    let result = match (game, session) {
        (Ok(mut game), Ok(mut session)) => play_linked(&mut game, &mut session),
        (Err(e), _) | (_, Err(e)) => Err(e),
    };

    match result {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            warn!(target = %target, "self-play failed: {e}");
            None
        }
    }
}

fn summarize(
    targets: &[Word],
    outcomes: &[Option<PlayOutcome>],
    duration: Duration,
) -> BenchmarkResult {
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut worst_words = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut solved = 0;
    let mut exhausted = 0;

    for (target, outcome) in targets.iter().zip(outcomes) {
        let Some(outcome) = outcome else {
            exhausted += 1;
            continue;
        };

        let guesses = outcome.guess_count();
        if outcome.solved() {
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
            if guesses >= 5 {
                worst_words.push((target.clone(), guesses));
            }
        } else {
            // Unsolved games sort ahead of every solved one
            worst_words.push((target.clone(), guesses + 1));
        }
    }

    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    let total_words = targets.len();
    let secs = duration.as_secs_f64();

    BenchmarkResult {
        total_words,
        solved,
        failed: total_words - solved,
        exhausted,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        worst_words,
        duration,
        words_per_second: if secs > 0.0 {
            total_words as f64 / secs
        } else {
            0.0
        },
    }
}
