//! Bulls and Cows
//!
//! The number-guessing game with an entropy engine that tracks which secrets
//! remain consistent with every piece of feedback, and how many bits of
//! uncertainty are left.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_cows::core::{Digits, Score};
//! use bulls_cows::engine::GameSession;
//!
//! // Score a guess directly
//! let secret = Digits::parse("1234").unwrap();
//! let guess = Digits::parse("1243").unwrap();
//! assert_eq!(Score::calculate(&secret, &guess), Score::new(2, 2));
//!
//! // Or play through a session
//! let mut session = GameSession::with_secret(secret);
//! let attempt = session.submit_guess("5678").unwrap();
//! println!("{} candidates left, {:.2} bits", attempt.remaining, attempt.entropy);
//! ```

// Core domain types
pub mod core;

// Candidate tracking, entropy, and sessions
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Runtime settings and tracing setup
pub mod config;
pub mod logging;
