//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::engine::{GameSession, SessionError};
use crate::output::display::{print_attempt, print_history, print_win_banner};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple(session: GameSession) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, stdin.lock(), stdout.lock())
}

/// Run the game loop over arbitrary input and output
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    mut session: GameSession,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║               Bulls and Cows - Interactive Mode              ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(out, "I'm thinking of a 4-digit number with no repeated digits.")?;
    writeln!(out, "  🐂 bull = right digit, right place")?;
    writeln!(out, "  🐮 cow  = right digit, wrong place\n")?;
    writeln!(
        out,
        "Commands: 'quit' to exit, 'new' for new game, 'reveal' to show the answer, 'history' to list guesses\n"
    )?;

    loop {
        write!(
            out,
            "Guess #{} ({} candidates): ",
            session.attempts() + 1,
            session.candidates().len()
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }
        let line = line.trim();

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                session.restart();
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            "reveal" | "r" => {
                writeln!(
                    out,
                    "🔍 The secret number is: {}\n",
                    session.reveal().to_string().bright_yellow().bold()
                )?;
                continue;
            }
            "history" | "h" => {
                print_history(&mut out, session.history())?;
                continue;
            }
            _ => {}
        }

        match session.submit_guess(line) {
            Ok(record) => {
                print_attempt(&mut out, session.attempts(), &record, session.history())?;

                if session.is_won() {
                    print_win_banner(&mut out, session.reveal(), session.history())?;

                    write!(out, "Play again? (yes/no): ")?;
                    out.flush()?;
                    let mut answer = String::new();
                    input.read_line(&mut answer)?;
                    match answer.trim().to_lowercase().as_str() {
                        "yes" | "y" => {
                            session.restart();
                            writeln!(out, "\n🔄 New game started!\n")?;
                        }
                        _ => {
                            writeln!(out, "\n👋 Thanks for playing!\n")?;
                            return Ok(());
                        }
                    }
                } else if session.candidates_exhausted() {
                    writeln!(
                        out,
                        "{}",
                        "⚠ No candidates remain - feedback is inconsistent. Type 'new' to start over."
                            .red()
                    )?;
                }
            }
            Err(SessionError::GameAlreadyWon) => {
                writeln!(out, "{}\n", "Game already won! Type 'new' to play again.".yellow())?;
            }
            Err(err @ SessionError::MalformedGuess(_)) => {
                writeln!(out, "❌ {err}\n")?;
            }
        }
    }
}
