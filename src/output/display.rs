//! Display functions for game and command results

use super::formatters::{attempt_line, entropy_bar, entropy_sparkline};
use crate::commands::AnalysisResult;
use crate::core::Digits;
use crate::engine::AttemptRecord;
use colored::Colorize;
use std::io::{self, Write};

/// Print one scored guess with the entropy trend so far
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_attempt<W: Write + ?Sized>(
    out: &mut W,
    index: usize,
    record: &AttemptRecord,
    history: &[AttemptRecord],
) -> io::Result<()> {
    writeln!(out, "{}", attempt_line(index, record))?;
    writeln!(
        out,
        "  Uncertainty: [{}] {}",
        entropy_bar(record.entropy, 24).green(),
        format!("{:.2} bits", record.entropy).bright_yellow()
    )?;

    let series: Vec<f64> = history.iter().map(|r| r.entropy).collect();
    writeln!(out, "  Entropy trend: {}\n", entropy_sparkline(&series).cyan())
}

/// Print the full attempt history
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_history<W: Write + ?Sized>(out: &mut W, history: &[AttemptRecord]) -> io::Result<()> {
    writeln!(out, "\n📜 {}", "Game History".bright_cyan().bold())?;
    if history.is_empty() {
        writeln!(out, "  No attempts yet\n")?;
        return Ok(());
    }
    for (i, record) in history.iter().enumerate() {
        writeln!(out, "  {}", attempt_line(i + 1, record))?;
    }
    writeln!(out)
}

/// Print the win celebration
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_win_banner<W: Write + ?Sized>(
    out: &mut W,
    secret: Digits,
    history: &[AttemptRecord],
) -> io::Result<()> {
    let turns = history.len();

    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "       🎉 🐂  Y O U   G U E S S E D   T H E   N U M B E R !  🐮 🎉"
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;

    let performance = match turns {
        1 => ("🏆 Perfect!", "First try!"),
        2..=4 => ("⭐ Excellent!", "Outstanding deduction!"),
        5..=7 => ("✨ Good!", "Nice work!"),
        _ => ("✓ Complete!", "Got there in the end!"),
    };

    writeln!(out, "\n  {}", performance.0.bright_yellow().bold())?;
    writeln!(out, "  {}", performance.1.bright_white())?;
    writeln!(
        out,
        "\n  The secret number was {} - found in {} {}",
        secret.to_string().bright_cyan().bold(),
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    )?;

    let series: Vec<f64> = history.iter().map(|r| r.entropy).collect();
    writeln!(out, "  Entropy over attempts: {}", entropy_sparkline(&series).cyan())?;
    writeln!(out, "\n{}\n", "═".repeat(70).bright_cyan())
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    println!("\n📊 Against all {} possible secrets:", result.total_candidates);
    println!(
        "   Information: {}",
        format!("{:.3} bits expected", metrics.expected_information).bright_yellow()
    );
    println!("   Outcomes:    {} distinct feedbacks", metrics.outcomes);
    println!("   Expected:    {:.1} candidates remain", metrics.expected_remaining);
    println!("   Worst case:  {} candidates", metrics.worst_case);

    println!("\n📈 {}", "Feedback distribution:".bright_cyan().bold());
    let largest = result.buckets.iter().map(|(_, n)| *n).max().unwrap_or(1);
    for (score, count) in &result.buckets {
        let bar_len = (count * 40 / largest).max(1);
        println!(
            "   {:<4} {:<10} {} {count:5}",
            score.to_string(),
            score.to_emoji(),
            "█".repeat(bar_len).green()
        );
    }

    if let Some(outcome) = &result.outcome {
        let record = &outcome.record;
        println!(
            "\n🎯 Against secret {}:",
            outcome.secret.to_string().bright_yellow().bold()
        );
        println!("   Feedback:    {} {}", record.score(), record.score().to_emoji());
        println!("   Remaining:   {} candidates", record.remaining);
        println!("   Entropy:     {:.3} bits", record.entropy);
        println!("   Info gained: {:.3} bits", outcome.information_gained);
    }
}
