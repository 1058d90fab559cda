//! Shannon entropy of the candidate space
//!
//! The secret is treated as equally likely to be any remaining candidate, so
//! the uncertainty left after a guess depends only on how many candidates
//! remain.

use super::CandidateSet;
use crate::core::{Digits, Score};

/// Entropy and size of a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Remaining uncertainty in bits
    pub entropy: f64,
    /// Number of candidates
    pub remaining: usize,
}

/// Analysis of how a guess would split a candidate set
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Expected information revealed by the feedback, in bits
    pub expected_information: f64,
    /// Expected number of candidates left after the feedback
    pub expected_remaining: f64,
    /// Largest feedback bucket (worst case)
    pub worst_case: usize,
    /// Number of distinct feedback outcomes
    pub outcomes: usize,
}

/// Entropy of a uniform distribution over `count` outcomes
///
/// Zero for 0 or 1 outcomes, otherwise log₂(count).
///
/// # Examples
/// ```
/// use bulls_cows::engine::entropy::uniform_entropy;
///
/// assert_eq!(uniform_entropy(0), 0.0);
/// assert_eq!(uniform_entropy(1), 0.0);
/// assert!((uniform_entropy(8) - 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn uniform_entropy(count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    (count as f64).log2()
}

/// Measure the remaining uncertainty of a candidate set
#[must_use]
pub fn measure(candidates: &CandidateSet) -> Measurement {
    let remaining = candidates.len();
    Measurement {
        entropy: uniform_entropy(remaining),
        remaining,
    }
}

/// Shannon entropy of a count distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for an empty or single-outcome distribution
/// - Equals log₂(n) when all n counts are equal
#[must_use]
pub fn shannon_entropy<I>(counts: I) -> f64
where
    I: IntoIterator<Item = usize>,
    I::IntoIter: Clone,
{
    let counts = counts.into_iter();
    let total = counts.clone().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate how informative `guess` would be against `candidates`
///
/// Groups the candidates by the feedback they would produce. Nothing here
/// ranks guesses; it only describes one.
#[must_use]
pub fn guess_metrics(guess: &Digits, candidates: &CandidateSet) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            expected_information: 0.0,
            expected_remaining: 0.0,
            worst_case: 0,
            outcomes: 0,
        };
    }

    let distribution = candidates.feedback_distribution(guess);
    let total = candidates.len() as f64;

    let expected_information = shannon_entropy(distribution.values().copied());

    let expected_remaining = distribution
        .values()
        .map(|&count| count as f64 * count as f64 / total)
        .sum();

    let worst_case = distribution.values().copied().max().unwrap_or(0);

    GuessMetrics {
        expected_information,
        expected_remaining,
        worst_case,
        outcomes: distribution.len(),
    }
}

/// Information actually gained by moving from `before` to `after` candidates
#[must_use]
pub fn information_gained(before: usize, after: usize) -> f64 {
    uniform_entropy(before) - uniform_entropy(after)
}

/// Feedback buckets for `guess`, sorted by descending bulls then cows
#[must_use]
pub fn sorted_distribution(guess: &Digits, candidates: &CandidateSet) -> Vec<(Score, usize)> {
    let mut buckets: Vec<(Score, usize)> =
        candidates.feedback_distribution(guess).into_iter().collect();
    buckets.sort_by(|(a, _), (b, _)| b.cmp(a));
    buckets
}
