//! Solver assistant CLI mode
//!
//! Text-based prompt: the solver suggests a guess, the user plays it in any
//! Wordle and types back the feedback in the wire encoding.

use crate::config::{Config, DEFAULT_MAX_GUESSES};
use crate::core::{Verdict, Word};
use crate::error::WordledError;
use crate::link::RESET_TOKEN;
use crate::output::formatters::verdict_tiles;
use crate::solver::{SessionState, SolverSession};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the assistant on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the word
/// list is empty.
pub fn run_assist(words: &[Word], config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_assist_with(&mut stdin.lock(), &mut stdout.lock(), words, config)
}

/// Run the assistant over any input and output streams
///
/// Ends on `quit` or at end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the word
/// list is empty.
#[allow(clippy::too_many_lines)] // Interactive loop requires detailed handling
pub fn run_assist_with<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    words: &[Word],
    config: &Config,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Wordled Solver - Assistant                   ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Play each suggested word, then type the feedback you got:\n")?;
    writeln!(out, "  - UPPERCASE letter for green (correct position)")?;
    writeln!(out, "  - lowercase letter for yellow (wrong position)")?;
    writeln!(out, "  - _ for gray (not in word)")?;
    writeln!(out, "  - or type 'win' if the word was right\n")?;
    writeln!(out, "Example: guess BEACH, feedback BEa__\n")?;
    writeln!(out, "Commands: 'quit' to exit, '{RESET_TOKEN}' or 'new' to start over\n")?;

    let mut session = SolverSession::new(words, config, config.rng(1))?;
    let mut guess = session.make_guess(None)?;

    loop {
        if let SessionState::Exhausted { guess: last, feedback } = session.state() {
            writeln!(
                out,
                "\n{} {} {}",
                "❌ No candidates remain after".red(),
                last.text().bold(),
                feedback.as_str().bold()
            )?;
            writeln!(out, "Your feedback may be incorrect. Type '{RESET_TOKEN}' to start over.\n")?;

            match read_command(input, out, "Command")?.as_deref() {
                None | Some("quit" | "q" | "exit") => return Ok(()),
                Some(cmd) if is_reset(cmd) => {
                    guess = restart(&mut session, out)?;
                }
                Some(_) => {}
            }
            continue;
        }

        let turn = session.history().len();
        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(
            out,
            "Turn {turn}: {} candidates remaining",
            session.candidates().len()
        )?;
        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(out, "\n📊 Suggested guess: {}\n", guess.text().bright_yellow().bold())?;

        if session.candidates().len() <= 10 {
            writeln!(out, "Remaining candidates:")?;
            for candidate in session.candidates() {
                writeln!(out, "  • {candidate}")?;
            }
            writeln!(out)?;
        }

        let Some(line) = read_command(input, out, "Enter feedback")? else {
            return Ok(());
        };

        // Anything shaped like feedback is feedback, even if it spells a command
        let feedback = if Verdict::parse(&line).is_ok() {
            line
        } else {
            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
                cmd if is_reset(cmd) => {
                    guess = restart(&mut session, out)?;
                    continue;
                }
                "win" | "correct" | "solved" => Verdict::ALL_CORRECT.encode(&guess),
                _ => line,
            }
        };

        match session.submit_feedback(&feedback) {
            Ok(next) => {
                if let SessionState::Solved(word) = session.state() {
                    print_celebration(out, word, &session)?;

                    let again = read_command(input, out, "Play again? (yes/no)")?;
                    if matches!(again.as_deref(), Some("yes" | "y")) {
                        guess = restart(&mut session, out)?;
                        continue;
                    }
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
                guess = next;
            }
            Err(e @ WordledError::InvalidInput(_)) => {
                writeln!(out, "{} {e}\n", "❌ Invalid feedback!".red())?;
            }
            Err(WordledError::NoCandidates { .. }) => {}
            Err(e) => return Err(e.into()),
        }
    }
}

fn print_celebration<O: Write, R: rand::Rng>(
    out: &mut O,
    word: &Word,
    session: &SolverSession<'_, R>,
) -> Result<()> {
    let turns = session.history().len();

    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "    🎉  W O R D   S O L V E D !  🎉    ".bright_green().bold()
    )?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;

    let performance = match turns {
        1 => "🏆 Perfect!",
        2 => "⭐ Excellent!",
        3 => "💫 Great!",
        4 => "✨ Good!",
        t if t <= DEFAULT_MAX_GUESSES => "👍 Solved!",
        _ => "✓ Complete!",
    };
    writeln!(out, "\n  {}", performance.bright_yellow().bold())?;
    writeln!(
        out,
        "\n  {} found in {} {}",
        word.text().bright_white().bold(),
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    )?;

    writeln!(out, "\n  Guess history:")?;
    for (i, record) in session.history().iter().enumerate() {
        let tiles = record
            .verdict
            .map(|verdict| verdict_tiles(&record.guess, &verdict))
            .unwrap_or_else(|| record.guess.to_string());
        writeln!(out, "    {}. {tiles}", (i + 1).to_string().bright_black())?;
    }
    writeln!(out, "\n{}\n", "═".repeat(70).bright_cyan())?;
    Ok(())
}

fn restart<O: Write, R: rand::Rng>(
    session: &mut SolverSession<'_, R>,
    out: &mut O,
) -> Result<Word> {
    session.reset();
    writeln!(out, "\n🔄 New game started!\n")?;
    Ok(session.make_guess(None)?)
}

fn is_reset(cmd: &str) -> bool {
    cmd.eq_ignore_ascii_case(RESET_TOKEN) || cmd.eq_ignore_ascii_case("new") || cmd == "reset"
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_command<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
