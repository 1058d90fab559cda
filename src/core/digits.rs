//! Digit-string representation
//!
//! A `Digits` value is a 4-digit number whose digits are pairwise distinct.
//! Secrets and guesses share this representation. Leading zeros are kept,
//! so `"0123"` is a valid value distinct from `"1230"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of digits in every secret and guess
pub const LENGTH: usize = 4;

/// A 4-digit value with all-distinct digits
///
/// Stores the digit values (0-9) in order, plus a bitmask of which digits
/// are present so overlap between two values is a single `&`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digits {
    digits: [u8; LENGTH],
    mask: u16,
}

/// Reasons a string is not a valid guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigitsError {
    #[error("guess must be exactly {LENGTH} digits, got {0} characters")]
    InvalidLength(usize),
    #[error("guess contains non-digit character '{0}'")]
    NonDigit(char),
    #[error("guess repeats the digit '{0}'")]
    RepeatedDigit(char),
}

impl Digits {
    /// Parse a guess or secret from text
    ///
    /// # Errors
    /// Returns `DigitsError` if:
    /// - Length is not exactly 4 characters
    /// - Any character is not an ASCII digit
    /// - Any digit appears more than once
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Digits;
    ///
    /// let guess = Digits::parse("0123").unwrap();
    /// assert_eq!(guess.to_string(), "0123");
    ///
    /// assert!(Digits::parse("123").is_err());
    /// assert!(Digits::parse("1123").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, DigitsError> {
        let len = text.chars().count();
        if len != LENGTH {
            return Err(DigitsError::InvalidLength(len));
        }

        let mut digits = [0u8; LENGTH];
        let mut mask = 0u16;
        for (slot, ch) in digits.iter_mut().zip(text.chars()) {
            let value = ch.to_digit(10).ok_or(DigitsError::NonDigit(ch))? as u8;
            let bit = 1 << value;
            if mask & bit != 0 {
                return Err(DigitsError::RepeatedDigit(ch));
            }
            mask |= bit;
            *slot = value;
        }

        Ok(Self { digits, mask })
    }

    /// Build from raw digit values (each 0-9)
    ///
    /// # Errors
    /// Returns `DigitsError::NonDigit` for a value above 9 and
    /// `DigitsError::RepeatedDigit` for a duplicate.
    pub fn from_array(digits: [u8; LENGTH]) -> Result<Self, DigitsError> {
        let mut mask = 0u16;
        for &value in &digits {
            if value > 9 {
                return Err(DigitsError::NonDigit(char::from(b'0'.wrapping_add(value))));
            }
            let bit = 1 << value;
            if mask & bit != 0 {
                return Err(DigitsError::RepeatedDigit(char::from(b'0' + value)));
            }
            mask |= bit;
        }
        Ok(Self { digits, mask })
    }

    /// Digit values in positional order
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; LENGTH] {
        &self.digits
    }

    /// Digit value at a position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.digits[position]
    }

    /// Check whether a digit value appears anywhere
    #[inline]
    #[must_use]
    pub const fn contains(&self, digit: u8) -> bool {
        digit < 10 && self.mask & (1 << digit) != 0
    }

    /// Bitmask with bit `d` set for every digit `d` present
    #[inline]
    pub(crate) const fn mask(&self) -> u16 {
        self.mask
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for Digits {
    type Err = DigitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Digits {
    type Error = DigitsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Digits> for String {
    fn from(value: Digits) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let d = Digits::parse("1234").unwrap();
        assert_eq!(d.digits(), &[1, 2, 3, 4]);
        assert_eq!(d.to_string(), "1234");
    }

    #[test]
    fn parse_keeps_leading_zero() {
        let d = Digits::parse("0123").unwrap();
        assert_eq!(d.digit_at(0), 0);
        assert_eq!(d.to_string(), "0123");
    }

    #[test]
    fn parse_invalid_length() {
        assert_eq!(Digits::parse("123"), Err(DigitsError::InvalidLength(3)));
        assert_eq!(Digits::parse("12345"), Err(DigitsError::InvalidLength(5)));
        assert_eq!(Digits::parse(""), Err(DigitsError::InvalidLength(0)));
    }

    #[test]
    fn parse_non_digit() {
        assert_eq!(Digits::parse("12a4"), Err(DigitsError::NonDigit('a')));
        assert_eq!(Digits::parse("12 4"), Err(DigitsError::NonDigit(' ')));
        // Multi-byte characters count as one character each
        assert_eq!(Digits::parse("12é4"), Err(DigitsError::NonDigit('é')));
    }

    #[test]
    fn parse_repeated_digit() {
        assert_eq!(Digits::parse("1123"), Err(DigitsError::RepeatedDigit('1')));
        assert_eq!(Digits::parse("1231"), Err(DigitsError::RepeatedDigit('1')));
        assert!(Digits::parse("11ab").is_err());
    }

    #[test]
    fn from_array_validates() {
        assert!(Digits::from_array([9, 8, 7, 6]).is_ok());
        assert_eq!(
            Digits::from_array([1, 1, 2, 3]),
            Err(DigitsError::RepeatedDigit('1'))
        );
        assert!(matches!(
            Digits::from_array([1, 2, 3, 10]),
            Err(DigitsError::NonDigit(_))
        ));
    }

    #[test]
    fn contains_and_mask() {
        let d = Digits::parse("5079").unwrap();
        assert!(d.contains(0));
        assert!(d.contains(9));
        assert!(!d.contains(1));
        assert!(!d.contains(42));
        assert_eq!(d.mask().count_ones(), 4);
    }

    #[test]
    fn ordering_is_numeric() {
        let a = Digits::parse("0123").unwrap();
        let b = Digits::parse("0132").unwrap();
        let c = Digits::parse("1023").unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn serde_as_string() {
        let d = Digits::parse("4096").unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"4096\"");

        let back: Digits = serde_json::from_str("\"4096\"").unwrap();
        assert_eq!(back, d);

        assert!(serde_json::from_str::<Digits>("\"4496\"").is_err());
    }
}
