//! Core domain types for Bulls and Cows
//!
//! This module contains the fundamental value types: the digit string used
//! for secrets and guesses, and the bulls/cows feedback computed from them.
//! All types here are pure and have no I/O.

mod digits;
mod score;

pub use digits::{Digits, DigitsError, LENGTH};
pub use score::Score;
