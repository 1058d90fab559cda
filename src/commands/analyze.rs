//! Guess analysis command
//!
//! Describes how a guess splits the full candidate universe, and optionally
//! what it reveals against a specific secret.

use crate::core::{Digits, Score};
use crate::engine::entropy::{GuessMetrics, guess_metrics, information_gained, sorted_distribution};
use crate::engine::{AttemptRecord, CandidateSet, GameSession, SessionError};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Digits,
    pub metrics: GuessMetrics,
    /// Feedback buckets, best feedback first
    pub buckets: Vec<(Score, usize)>,
    pub total_candidates: usize,
    pub outcome: Option<SecretOutcome>,
}

/// What the guess reveals about a known secret
pub struct SecretOutcome {
    pub secret: Digits,
    pub record: AttemptRecord,
    /// Bits actually gained versus the full universe
    pub information_gained: f64,
}

/// Analyze `guess` over the full universe
///
/// # Errors
///
/// Returns `SessionError::MalformedGuess` if the guess or secret is not 4
/// distinct digits.
pub fn analyze_guess(guess: &str, secret: Option<&str>) -> Result<AnalysisResult, SessionError> {
    let guess_digits = Digits::parse(guess)?;
    let universe = CandidateSet::full();

    let metrics = guess_metrics(&guess_digits, &universe);
    let buckets = sorted_distribution(&guess_digits, &universe);

    let outcome = secret
        .map(|text| -> Result<SecretOutcome, SessionError> {
            let secret = Digits::parse(text)?;
            let mut session = GameSession::with_secret(secret);
            let record = session.submit_guess(guess)?;
            Ok(SecretOutcome {
                secret,
                record,
                information_gained: information_gained(universe.len(), record.remaining),
            })
        })
        .transpose()?;

    Ok(AnalysisResult {
        guess: guess_digits,
        metrics,
        buckets,
        total_candidates: universe.len(),
        outcome,
    })
}
