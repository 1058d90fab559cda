//! Candidate space
//!
//! The universe of every 4-digit value with distinct digits (5040 of them),
//! and the consistency filter that narrows it after each piece of feedback.

use crate::core::{Digits, Score};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Size of the full candidate universe (10 × 9 × 8 × 7)
pub const UNIVERSE_SIZE: usize = 5040;

static UNIVERSE: LazyLock<Vec<Digits>> = LazyLock::new(|| {
    (0u16..10_000)
        .filter_map(|n| {
            let digits = [
                (n / 1000) as u8,
                (n / 100 % 10) as u8,
                (n / 10 % 10) as u8,
                (n % 10) as u8,
            ];
            Digits::from_array(digits).ok()
        })
        .collect()
});

/// Every value still consistent with the feedback seen so far
///
/// Sets are snapshots: narrowing returns a new set and leaves the old one
/// untouched. Order follows the universe (ascending numeric).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    items: Vec<Digits>,
}

impl CandidateSet {
    /// The full universe in ascending numeric order
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::engine::CandidateSet;
    ///
    /// let all = CandidateSet::full();
    /// assert_eq!(all.len(), 5040);
    /// assert_eq!(all.iter().next().unwrap().to_string(), "0123");
    /// ```
    #[must_use]
    pub fn full() -> Self {
        Self {
            items: UNIVERSE.clone(),
        }
    }

    /// Keep only candidates that would have produced `score` for `guess`
    ///
    /// A candidate survives if scoring it as the secret against `guess`
    /// yields exactly the observed bulls and cows. The true secret always
    /// survives its own feedback.
    #[must_use]
    pub fn filter(&self, guess: &Digits, score: Score) -> Self {
        let items = self
            .items
            .par_iter()
            .filter(|candidate| Score::calculate(candidate, guess) == score)
            .copied()
            .collect();

        Self { items }
    }

    /// Count candidates by the feedback each would give for `guess`
    #[must_use]
    pub fn feedback_distribution(&self, guess: &Digits) -> FxHashMap<Score, usize> {
        let mut counts = FxHashMap::default();
        for candidate in &self.items {
            *counts.entry(Score::calculate(candidate, guess)).or_insert(0) += 1;
        }
        counts
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, value: &Digits) -> bool {
        self.items.binary_search(value).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Digits> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Digits] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Digits;
    type IntoIter = std::slice::Iter<'a, Digits>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
