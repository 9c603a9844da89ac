//! Wordle solving
//!
//! Candidate filtering plus the session that drives it.

mod filter;
mod session;

pub use filter::{filter, partition};
pub use session::{GuessRecord, SessionState, SolverSession};
