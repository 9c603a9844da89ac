//! Wordled - CLI
//!
//! Wordle clone with a solver assistant, in TUI and plain CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::seq::IndexedRandom;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};
use wordled::{
    commands::{run_assist, run_benchmark, solve_word},
    config::{Config, DEFAULT_OPENER},
    core::Word,
    output::{print_benchmark_result, print_solve_result},
    wordlists::{WORDS, loader::{load_from_file, words_from_slice}},
};

#[derive(Parser)]
#[command(
    name = "wordled",
    about = "Wordle clone with a candidate-filtering solver assistant",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for target selection and solver guesses
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// First guess the solver makes
    #[arg(short, long, global = true, default_value = DEFAULT_OPENER)]
    opener: String,

    /// Log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game in the terminal (default)
    Play,

    /// Solver assistant for a game played elsewhere
    Assist,

    /// Let the solver play against a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts per turn
        #[arg(short, long)]
        details: bool,
    },

    /// Benchmark the solver with self-play
    Benchmark {
        /// Number of random target words
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("loading word list {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    // Log lines on stderr would tear the TUI
    if !matches!(command, Commands::Play) {
        init_logging(cli.verbose);
    }

    let words = load_words(&cli.wordlist)?;
    let config = Config::default()
        .with_opener(&cli.opener)
        .context("invalid --opener")?
        .with_seed(cli.seed);

    match command {
        Commands::Play => run_play_command(&words, &config),
        Commands::Assist => run_assist(&words, &config),
        Commands::Solve { word, details } => {
            let outcome = solve_word(&word, &words, &config)
                .with_context(|| format!("solving {}", word.to_uppercase()))?;
            print_solve_result(&outcome, details);
            Ok(())
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(count, &words, &config);
            Ok(())
        }
    }
}

fn run_benchmark_command(count: usize, words: &[Word], config: &Config) {
    println!("Running benchmark on {count} random words...");

    let mut rng = config.rng(u64::MAX);
    let targets: Vec<Word> = words.choose_multiple(&mut rng, count).cloned().collect();

    let result = run_benchmark(words, &targets, config, true);
    print_benchmark_result(&result);
}

fn run_play_command(words: &[Word], config: &Config) -> Result<()> {
    use wordled::interactive::{App, run_tui};

    let app = App::new(words, config)?;
    run_tui(app)
}
