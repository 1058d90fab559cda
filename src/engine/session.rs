//! Game session
//!
//! One playthrough: the secret, the narrowing candidate set, and the
//! append-only attempt history.

use super::entropy::measure;
use super::{CandidateSet, SecretGenerator};
use crate::core::{Digits, DigitsError, Score};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    /// Secret set, not yet guessed
    Active,
    /// The secret was guessed; history stays visible until restart
    Won,
}

/// One scored guess
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttemptRecord {
    pub guess: Digits,
    pub bulls: u8,
    pub cows: u8,
    /// Entropy of the candidate set after this guess, in bits
    pub entropy: f64,
    /// Candidates left after this guess
    pub remaining: usize,
}

impl AttemptRecord {
    #[must_use]
    pub const fn score(&self) -> Score {
        Score::new(self.bulls, self.cows)
    }
}

/// Why a guess was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("malformed guess: {0}")]
    MalformedGuess(#[from] DigitsError),
    #[error("game already won; restart to play again")]
    GameAlreadyWon,
}

impl SessionError {
    /// Stable machine-readable kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MalformedGuess(_) => "malformed_guess",
            Self::GameAlreadyWon => "game_already_won",
        }
    }
}

/// A single player's game
#[derive(Debug, Clone)]
pub struct GameSession {
    generator: SecretGenerator,
    secret: Digits,
    candidates: CandidateSet,
    history: Vec<AttemptRecord>,
    state: GameState,
}

impl GameSession {
    /// Start a session with a freshly generated secret
    #[must_use]
    pub fn new(mut generator: SecretGenerator) -> Self {
        let secret = generator.generate();
        debug!(%secret, "session started");
        Self::from_parts(generator, secret)
    }

    /// Start a session with a known secret
    ///
    /// Later restarts draw from an unseeded generator.
    #[must_use]
    pub fn with_secret(secret: Digits) -> Self {
        Self::from_parts(SecretGenerator::new(), secret)
    }

    fn from_parts(generator: SecretGenerator, secret: Digits) -> Self {
        Self {
            generator,
            secret,
            candidates: CandidateSet::full(),
            history: Vec::new(),
            state: GameState::Active,
        }
    }

    /// Validate, score, and record a guess
    ///
    /// Validation happens before anything is touched, so a rejected guess
    /// leaves the history and candidate set unchanged.
    ///
    /// # Errors
    /// - `SessionError::MalformedGuess` if the text is not 4 distinct digits
    /// - `SessionError::GameAlreadyWon` if the secret was already found
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Digits;
    /// use bulls_cows::engine::GameSession;
    ///
    /// let mut session = GameSession::with_secret(Digits::parse("1234").unwrap());
    /// let attempt = session.submit_guess("5678").unwrap();
    /// assert_eq!((attempt.bulls, attempt.cows), (0, 0));
    /// assert_eq!(attempt.remaining, 360);
    /// ```
    pub fn submit_guess(&mut self, text: &str) -> Result<AttemptRecord, SessionError> {
        let guess = Digits::parse(text)?;

        if self.state == GameState::Won {
            return Err(SessionError::GameAlreadyWon);
        }

        let score = Score::calculate(&self.secret, &guess);
        self.candidates = self.candidates.filter(&guess, score);
        let measurement = measure(&self.candidates);

        let record = AttemptRecord {
            guess,
            bulls: score.bulls(),
            cows: score.cows(),
            entropy: measurement.entropy,
            remaining: measurement.remaining,
        };
        self.history.push(record);

        debug!(
            attempt = self.history.len(),
            %guess,
            %score,
            entropy = measurement.entropy,
            remaining = measurement.remaining,
            "guess scored"
        );

        if measurement.remaining == 0 {
            warn!(
                attempt = self.history.len(),
                %guess,
                "candidate space exhausted; scoring and filtering disagree"
            );
        }

        if score.is_win() {
            self.state = GameState::Won;
            info!(attempts = self.history.len(), "secret found");
        }

        Ok(record)
    }

    /// Throw away this game and start a new one
    pub fn restart(&mut self) {
        self.secret = self.generator.generate();
        self.candidates = CandidateSet::full();
        self.history.clear();
        self.state = GameState::Active;
        debug!("session restarted");
    }

    /// The secret, unconditionally
    #[must_use]
    pub const fn reveal(&self) -> Digits {
        self.secret
    }

    #[must_use]
    pub fn history(&self) -> &[AttemptRecord] {
        &self.history
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state == GameState::Won
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// True if some guess left no consistent candidate
    ///
    /// Cannot happen while scoring is correct; the secret is still tracked
    /// separately, so play continues.
    #[must_use]
    pub fn candidates_exhausted(&self) -> bool {
        !self.history.is_empty() && self.candidates.is_empty()
    }

    /// Entropy after each attempt as (attempt number, bits), starting at 1
    #[must_use]
    pub fn entropy_series(&self) -> Vec<(f64, f64)> {
        self.history
            .iter()
            .enumerate()
            .map(|(i, record)| ((i + 1) as f64, record.entropy))
            .collect()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SecretGenerator::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::candidates::UNIVERSE_SIZE;

    fn session(secret: &str) -> GameSession {
        GameSession::with_secret(Digits::parse(secret).unwrap())
    }

    #[test]
    fn new_session_starts_active_with_full_universe() {
        let s = GameSession::new(SecretGenerator::seeded(1));
        assert_eq!(s.state(), GameState::Active);
        assert_eq!(s.candidates().len(), UNIVERSE_SIZE);
        assert!(s.history().is_empty());
        assert!(s.candidates().contains(&s.reveal()));
    }

    #[test]
    fn scoring_records_attempt() {
        let mut s = session("1234");
        let record = s.submit_guess("1243").unwrap();

        assert_eq!(record.score(), Score::new(2, 2));
        assert_eq!(record.guess.to_string(), "1243");
        assert_eq!(s.history(), &[record]);
        assert_eq!(record.remaining, s.candidates().len());
        assert!((record.entropy - (record.remaining as f64).log2()).abs() < 1e-12);
        assert_eq!(s.state(), GameState::Active);
    }

    #[test]
    fn disjoint_guess_leaves_360() {
        let mut s = session("1234");
        let record = s.submit_guess("5678").unwrap();
        assert_eq!(record.score(), Score::new(0, 0));
        assert_eq!(record.remaining, 360);
    }

    #[test]
    fn winning_guess_transitions_to_won() {
        let mut s = session("0123");
        let record = s.submit_guess("0123").unwrap();

        assert_eq!(record.score(), Score::WIN);
        assert_eq!(record.remaining, 1);
        assert!(record.entropy.abs() < f64::EPSILON);
        assert!(s.is_won());
    }

    #[test]
    fn guess_after_win_is_rejected() {
        let mut s = session("0123");
        s.submit_guess("0123").unwrap();

        let err = s.submit_guess("4567").unwrap_err();
        assert_eq!(err, SessionError::GameAlreadyWon);
        assert_eq!(s.history().len(), 1);
        assert!(s.is_won());
    }

    #[test]
    fn malformed_guesses_change_nothing() {
        let mut s = session("1234");
        s.submit_guess("5678").unwrap();
        let before = s.candidates().clone();

        for bad in ["11ab", "123", "12345", "1123", ""] {
            let err = s.submit_guess(bad).unwrap_err();
            assert!(matches!(err, SessionError::MalformedGuess(_)), "{bad}");
            assert_eq!(err.kind(), "malformed_guess");
        }

        assert_eq!(s.history().len(), 1);
        assert_eq!(s.candidates(), &before);
    }

    #[test]
    fn malformed_guess_after_win_reports_malformed() {
        let mut s = session("0123");
        s.submit_guess("0123").unwrap();
        assert!(matches!(
            s.submit_guess("abc"),
            Err(SessionError::MalformedGuess(_))
        ));
    }

    #[test]
    fn secret_survives_and_entropy_never_rises() {
        let mut s = session("8306");
        let mut last_entropy = f64::INFINITY;
        let mut last_remaining = UNIVERSE_SIZE;

        for guess in ["0123", "4567", "8901", "3860", "8306"] {
            let record = s.submit_guess(guess).unwrap();
            assert!(s.candidates().contains(&s.reveal()));
            assert!(record.entropy <= last_entropy);
            assert!(record.remaining <= last_remaining);
            last_entropy = record.entropy;
            last_remaining = record.remaining;
        }
        assert!(s.is_won());
        assert!(!s.candidates_exhausted());
    }

    #[test]
    fn restart_discards_everything() {
        let mut s = GameSession::new(SecretGenerator::seeded(5));
        let secret = s.reveal();
        s.submit_guess(&secret.to_string()).unwrap();
        assert!(s.is_won());

        s.restart();
        assert_eq!(s.state(), GameState::Active);
        assert!(s.history().is_empty());
        assert_eq!(s.candidates().len(), UNIVERSE_SIZE);
        assert!(s.submit_guess("0123").is_ok());
    }

    #[test]
    fn reveal_is_unconditional() {
        let mut s = session("9081");
        assert_eq!(s.reveal().to_string(), "9081");
        s.submit_guess("1234").unwrap();
        assert_eq!(s.reveal().to_string(), "9081");
    }

    #[test]
    fn entropy_series_indexes_from_one() {
        let mut s = session("1234");
        s.submit_guess("5678").unwrap();
        s.submit_guess("1243").unwrap();

        let series = s.entropy_series();
        assert_eq!(series.len(), 2);
        assert!((series[0].0 - 1.0).abs() < f64::EPSILON);
        assert!((series[1].0 - 2.0).abs() < f64::EPSILON);
        assert!((series[0].1 - 360f64.log2()).abs() < 1e-12);
        assert!(series[1].1 <= series[0].1);
    }

    #[test]
    fn attempt_record_serializes() {
        let mut s = session("1234");
        let record = s.submit_guess("1243").unwrap();
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["guess"], "1243");
        assert_eq!(json["bulls"], 2);
        assert_eq!(json["cows"], 2);
    }
}
