//! Secret generation
//!
//! Draws a uniformly random arrangement of four distinct digits.

use crate::core::{Digits, LENGTH};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Source of fresh secrets
///
/// Gameplay-grade randomness; seed it for reproducible games.
#[derive(Debug, Clone)]
pub struct SecretGenerator {
    rng: StdRng,
}

impl SecretGenerator {
    /// Generator seeded from the thread RNG
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Deterministic generator
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Derive an independent generator from this one
    ///
    /// Deterministic when this generator is seeded.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            rng: StdRng::from_rng(&mut self.rng),
        }
    }

    /// Draw a new secret
    ///
    /// Shuffles the ten digits and keeps the first four, so every
    /// arrangement (including a leading zero) is equally likely.
    ///
    /// # Panics
    /// Will not panic - the shuffled pool never repeats a digit.
    pub fn generate(&mut self) -> Digits {
        let mut pool: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        pool.shuffle(&mut self.rng);

        let mut chosen = [0u8; LENGTH];
        chosen.copy_from_slice(&pool[..LENGTH]);
        Digits::from_array(chosen).expect("shuffled digits are distinct")
    }
}

impl Default for SecretGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CandidateSet;

    #[test]
    fn generated_secrets_are_valid() {
        let mut generator = SecretGenerator::seeded(7);
        let universe = CandidateSet::full();
        for _ in 0..200 {
            let secret = generator.generate();
            assert!(universe.contains(&secret));
            assert!(Digits::parse(&secret.to_string()).is_ok());
        }
    }

    #[test]
    fn seeded_is_deterministic() {
        let mut a = SecretGenerator::seeded(42);
        let mut b = SecretGenerator::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn forks_are_deterministic_and_distinct() {
        let mut parent_a = SecretGenerator::seeded(3);
        let mut parent_b = SecretGenerator::seeded(3);

        let mut child_a = parent_a.fork();
        let mut child_b = parent_b.fork();
        let drawn_a: Vec<Digits> = (0..10).map(|_| child_a.generate()).collect();
        let drawn_b: Vec<Digits> = (0..10).map(|_| child_b.generate()).collect();
        assert_eq!(drawn_a, drawn_b);

        let from_parent: Vec<Digits> = (0..10).map(|_| parent_a.generate()).collect();
        assert_ne!(drawn_a, from_parent);
    }

    #[test]
    fn every_digit_reaches_every_position() {
        let mut generator = SecretGenerator::seeded(11);
        let mut seen = [[false; 10]; LENGTH];
        for _ in 0..2_000 {
            let secret = generator.generate();
            for (position, &digit) in secret.digits().iter().enumerate() {
                seen[position][usize::from(digit)] = true;
            }
        }
        // Leading zero included
        assert!(seen.iter().all(|row| row.iter().all(|&hit| hit)));
    }
}
