//! Absurdle - CLI
//!
//! Play in the terminal, serve games over HTTP or line-delimited JSON, or
//! inspect how a guess partitions the word list.

use absurdle::{
    commands::{ServeConfig, analyze_guess, run_play, run_serve, run_stdio, score_words},
    core::Word,
    game::{DEFAULT_MAX_ROUNDS, GameConfig, GameService, Variant},
    output::{print_analysis_result, print_score_result},
    wordlists::{self, loader::load_from_file},
};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;
use log::info;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "absurdle",
    about = "Adversarial Wordle: the secret dodges every guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (newline or comma separated); defaults to the built-in list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Guesses allowed per game
    #[arg(
        short = 'r',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ROUNDS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_rounds: u32,

    /// Game variant for new games
    #[arg(long, global = true, value_enum, default_value_t = Variant::Absurdle)]
    variant: Variant,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play,

    /// Serve games over HTTP
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "0.0.0.0:8080")]
        addr: String,

        /// Forget games idle for this many minutes
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        idle_minutes: Option<u64>,

        /// Speak line-delimited JSON on stdin/stdout instead of HTTP
        #[arg(long)]
        stdio: bool,
    },

    /// Score a guess against a known secret
    Score {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },

    /// Show how a guess partitions the word list
    Analyze {
        /// Word to analyze
        guess: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

/// Load the word list from `path`, or the variant's built-in list
fn load_words(path: Option<&Path>, variant: Variant) -> Result<Vec<Word>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load word list from {}", path.display())),
        None => {
            let words = wordlists::builtin(variant);
            info!("Using built-in {variant} list of {} words", words.len());
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Score { secret, guess } => {
            let result = score_words(&secret, &guess)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Analyze { guess } => {
            let words = load_words(cli.wordlist.as_deref(), cli.variant)?;
            let result = analyze_guess(&guess, &words)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Play => {
            let service = build_service(&cli)?;
            run_play(&service, cli.variant, io::stdin().lock(), io::stdout().lock())
        }
        Commands::Serve {
            addr,
            idle_minutes,
            stdio,
        } => {
            let service = build_service(&cli)?;
            if stdio {
                return run_stdio(&service, cli.variant, io::stdin().lock(), io::stdout().lock());
            }
            let config = ServeConfig {
                addr,
                default_variant: cli.variant,
                idle_timeout: idle_minutes.map(|minutes| Duration::from_secs(minutes.saturating_mul(60))),
            };
            run_serve(&service, &config)
        }
    }
}

fn build_service(cli: &Cli) -> Result<GameService> {
    let words = load_words(cli.wordlist.as_deref(), cli.variant)?;
    let config = GameConfig {
        max_rounds: cli.max_rounds,
    };
    Ok(GameService::new(words, config))
}
