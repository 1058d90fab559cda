//! Inference engine
//!
//! Secret generation, candidate-space narrowing, entropy measurement, and
//! the session that ties them together. The engine scores and filters; it
//! never proposes a guess.

pub mod candidates;
pub mod entropy;
mod registry;
mod secret;
mod session;

pub use candidates::{CandidateSet, UNIVERSE_SIZE};
pub use entropy::{GuessMetrics, Measurement};
pub use registry::{SessionId, SessionRegistry};
pub use secret::SecretGenerator;
pub use session::{AttemptRecord, GameSession, GameState, SessionError};
