//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod solve;

pub use assist::{run_assist, run_assist_with};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use solve::solve_word;
