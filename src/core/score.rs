//! Bulls and cows feedback
//!
//! A score records how a guess compares with the secret:
//! - bull = correct digit in the correct position
//! - cow = correct digit in the wrong position
//!
//! Both values are distinct-digit, so cows are simply the shared digits
//! minus the positional matches.

use super::Digits;
use super::digits::LENGTH;
use serde::Serialize;
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct Score {
    bulls: u8,
    cows: u8,
}

impl Score {
    /// All bulls (guess equals secret)
    pub const WIN: Self = Self { bulls: 4, cows: 0 };

    /// Create a score from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if bulls + cows > 4
    #[inline]
    #[must_use]
    pub const fn new(bulls: u8, cows: u8) -> Self {
        debug_assert!(bulls as usize + cows as usize <= LENGTH);
        Self { bulls, cows }
    }

    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Digits, Score};
    ///
    /// let secret = Digits::parse("1234").unwrap();
    /// let guess = Digits::parse("1243").unwrap();
    ///
    /// // 1 and 2 in place, 4 and 3 swapped
    /// assert_eq!(Score::calculate(&secret, &guess), Score::new(2, 2));
    /// ```
    #[must_use]
    pub fn calculate(secret: &Digits, guess: &Digits) -> Self {
        let bulls = secret
            .digits()
            .iter()
            .zip(guess.digits())
            .filter(|(s, g)| s == g)
            .count() as u8;

        // Overlap regardless of position; exact only because digits never repeat
        let shared = (secret.mask() & guess.mask()).count_ones() as u8;

        Self {
            bulls,
            cows: shared - bulls,
        }
    }

    #[inline]
    #[must_use]
    pub const fn bulls(self) -> u8 {
        self.bulls
    }

    #[inline]
    #[must_use]
    pub const fn cows(self) -> u8 {
        self.cows
    }

    /// Check if every digit is a bull
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.bulls as usize == LENGTH
    }

    /// Render as bull and cow emoji, e.g. "🐂🐂🐮"
    ///
    /// Returns "-" for a score with neither.
    #[must_use]
    pub fn to_emoji(self) -> String {
        if self.bulls == 0 && self.cows == 0 {
            return "-".to_string();
        }
        let mut out = "🐂".repeat(self.bulls.into());
        out.push_str(&"🐮".repeat(self.cows.into()));
        out
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B{}C", self.bulls, self.cows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Digits {
        Digits::parse(s).unwrap()
    }

    #[test]
    fn self_score_is_win() {
        for s in ["0123", "9876", "5079", "1234"] {
            let x = d(s);
            assert_eq!(Score::calculate(&x, &x), Score::WIN);
            assert!(Score::calculate(&x, &x).is_win());
        }
    }

    #[test]
    fn two_bulls_two_cows() {
        let score = Score::calculate(&d("1234"), &d("1243"));
        assert_eq!(score.bulls(), 2);
        assert_eq!(score.cows(), 2);
    }

    #[test]
    fn disjoint_digits() {
        let score = Score::calculate(&d("1234"), &d("5678"));
        assert_eq!(score, Score::new(0, 0));
        assert!(!score.is_win());
    }

    #[test]
    fn all_cows() {
        let score = Score::calculate(&d("1234"), &d("4321"));
        assert_eq!(score, Score::new(0, 4));
    }

    #[test]
    fn mixed_partial_overlap() {
        // 0 in place, 9 present elsewhere, 5 and 6 absent
        let score = Score::calculate(&d("0789"), &d("0956"));
        assert_eq!(score, Score::new(1, 1));
    }

    #[test]
    fn bounds_hold_over_sample() {
        let values = ["0123", "3210", "4567", "1357", "2468", "9081", "7654"];
        for a in values {
            for b in values {
                let score = Score::calculate(&d(a), &d(b));
                assert!(score.bulls() <= 4);
                assert!(score.bulls() + score.cows() <= 4);
                assert_eq!(score.is_win(), a == b);
            }
        }
    }

    #[test]
    fn display_and_emoji() {
        let score = Score::new(2, 1);
        assert_eq!(score.to_string(), "2B1C");
        assert_eq!(score.to_emoji(), "🐂🐂🐮");
        assert_eq!(Score::default().to_emoji(), "-");
    }
}
