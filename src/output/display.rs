//! Display functions for command results

use super::formatters::{create_progress_bar, verdict_tiles};
use crate::commands::BenchmarkResult;
use crate::config::DEFAULT_MAX_GUESSES;
use crate::link::PlayOutcome;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &PlayOutcome, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.text().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            verdict_tiles(&step.guess, &step.verdict),
            step.verdict.encode(&step.guess).bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                println!(
                    "  Reduction:  {:.1}x",
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
        }
    }

    println!();
    if result.solved() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guess_count())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guess_count())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    if result.exhausted > 0 {
        println!(
            "   Out of words:     {}",
            result.exhausted.to_string().red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=DEFAULT_MAX_GUESSES {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = count as f64 / result.total_words as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
    if result.failed > 0 {
        let pct = result.failed as f64 / result.total_words as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   X: {} {:4} ({pct:5.1}%)", bar.red(), result.failed);
    }

    if !result.worst_words.is_empty() {
        println!("\n🐢 {}", "Hardest words:".bright_cyan().bold());
        for (word, guesses) in &result.worst_words {
            if *guesses > DEFAULT_MAX_GUESSES {
                println!("   {} {}", word.text().red(), "unsolved".bright_black());
            } else {
                println!("   {} {guesses}", word.text().yellow());
            }
        }
    }
}
