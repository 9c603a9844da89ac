//! Wordled
//!
//! A Wordle clone and its companion solver. The game scores guesses with
//! duplicate-aware feedback; the solver narrows a candidate list with the
//! same scoring rule and guesses at random among what is left.
//!
//! # Quick Start
//!
//! ```rust
//! use wordled::core::{score, Word};
//! use wordled::solver::filter;
//!
//! let guess = Word::new("speed").unwrap();
//! let target = Word::new("erase").unwrap();
//!
//! let verdict = score(&guess, &target);
//! assert_eq!(verdict.encode(&guess), "s_ee_");
//!
//! let candidates = vec![target.clone(), Word::new("crane").unwrap()];
//! assert_eq!(filter(&candidates, &guess, &verdict), vec![target]);
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Runtime settings
pub mod config;

// Candidate filtering and solver sessions
pub mod solver;

// The guessing game
pub mod game;

// Game <-> solver message passing
pub mod link;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{InputError, Result, WordledError};
