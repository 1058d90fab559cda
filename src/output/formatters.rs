//! Formatting utilities for terminal output

use crate::engine::entropy::uniform_entropy;
use crate::engine::{AttemptRecord, UNIVERSE_SIZE};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy bar scaled to the full universe (~12.3 bits)
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, uniform_entropy(UNIVERSE_SIZE), width)
}

/// One line of history, e.g. "Attempt 2: 1243  🐂🐂🐮🐮  entropy 2.58 bits, 6 left"
#[must_use]
pub fn attempt_line(index: usize, record: &AttemptRecord) -> String {
    format!(
        "Attempt {index}: {}  {}  entropy {:.2} bits, {} left",
        record.guess,
        record.score().to_emoji(),
        record.entropy,
        record.remaining
    )
}

/// Entropy over attempts as a sparkline, one glyph per attempt
///
/// Heights are scaled to the full-universe entropy so games compare.
#[must_use]
pub fn entropy_sparkline(series: &[f64]) -> String {
    let max = uniform_entropy(UNIVERSE_SIZE);
    series
        .iter()
        .map(|&bits| {
            if bits <= 0.0 {
                return ' ';
            }
            let level = ((bits / max) * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
            SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Digits;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn entropy_bar_full_universe_is_full() {
        let bar = entropy_bar(uniform_entropy(UNIVERSE_SIZE), 8);
        assert_eq!(bar, "████████");
    }

    #[test]
    fn sparkline_scales_and_blanks_zero() {
        let line = entropy_sparkline(&[uniform_entropy(UNIVERSE_SIZE), 0.0]);
        assert_eq!(line, "█ ");
        assert_eq!(entropy_sparkline(&[]), "");
    }

    #[test]
    fn attempt_line_format() {
        let record = AttemptRecord {
            guess: Digits::parse("1243").unwrap(),
            bulls: 2,
            cows: 2,
            entropy: 1.0,
            remaining: 2,
        };
        assert_eq!(
            attempt_line(3, &record),
            "Attempt 3: 1243  🐂🐂🐮🐮  entropy 1.00 bits, 2 left"
        );
    }
}
