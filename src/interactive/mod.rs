//! Interactive TUI mode
//!
//! Terminal game board with an optional solver assistant.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
