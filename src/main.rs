//! Bulls and Cows - CLI
//!
//! Play the number-guessing game in a TUI, a line-based terminal mode, or a
//! JSON-lines pipe, with entropy tracking after every guess.

use anyhow::{Context, Result};
use bulls_cows::{
    commands::{analyze_guess, run_pipe, run_simple},
    config::Config,
    engine::{GameSession, SessionRegistry},
    logging::init_logging,
    output::print_analysis_result,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bulls_cows",
    about = "Bulls and Cows with live entropy tracking of the remaining secrets",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level when RUST_LOG is unset: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file (the TUI only logs when this is set)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// JSON-lines requests on stdin, responses on stdout
    Pipe,

    /// Show how a guess splits all possible secrets
    Analyze {
        /// Guess to analyze (4 distinct digits)
        guess: String,

        /// Also score the guess against this secret
        #[arg(short, long)]
        secret: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::new(cli.seed, &cli.log_level, cli.log_file)
        .context("invalid command-line configuration")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(&config.logging, matches!(command, Commands::Play))?;

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => {
            run_simple(GameSession::new(config.secret_generator())).context("simple mode failed")
        }
        Commands::Pipe => {
            run_pipe(SessionRegistry::new(config.secret_generator())).context("pipe mode failed")
        }
        Commands::Analyze { guess, secret } => run_analyze_command(&guess, secret.as_deref()),
    }
}

fn run_analyze_command(guess: &str, secret: Option<&str>) -> Result<()> {
    let result = analyze_guess(guess, secret).context("cannot analyze guess")?;
    print_analysis_result(&result);
    Ok(())
}

fn run_play_command(config: &Config) -> Result<()> {
    use bulls_cows::interactive::{App, run_tui};

    let app = App::new(GameSession::new(config.secret_generator()));
    run_tui(app)
}
