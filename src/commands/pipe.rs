//! JSON-lines mode
//!
//! Reads one JSON request per line from stdin and writes one JSON response
//! per line to stdout, so another program can drive the game.
//!
//! Requests:
//! - `{"guess": "1234"}`
//! - `{"action": "restart" | "reveal" | "history"}`
//!
//! Either form may carry `"session": "<id>"` to address an isolated game.

use crate::core::Digits;
use crate::engine::{AttemptRecord, SessionError, SessionId, SessionRegistry};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Request {
    Guess {
        guess: String,
        #[serde(default)]
        session: Option<String>,
    },
    Action {
        action: Action,
        #[serde(default)]
        session: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Restart,
    Reveal,
    History,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Feedback {
        bulls: u8,
        cows: u8,
        entropy: f64,
        remaining: usize,
        won: bool,
    },
    Restarted {
        restarted: bool,
    },
    Revealed {
        secret: Digits,
    },
    History {
        history: Vec<AttemptRecord>,
    },
    Error {
        error: String,
        message: String,
    },
}

impl Response {
    fn error(kind: &str, message: impl Into<String>) -> Self {
        Self::Error {
            error: kind.to_string(),
            message: message.into(),
        }
    }
}

impl From<SessionError> for Response {
    fn from(err: SessionError) -> Self {
        Self::error(err.kind(), err.to_string())
    }
}

impl Request {
    fn session_id(&self) -> SessionId {
        let session = match self {
            Self::Guess { session, .. } | Self::Action { session, .. } => session,
        };
        session.as_deref().map(SessionId::new).unwrap_or_default()
    }
}

/// Apply one request to the registry
pub fn handle_request(registry: &mut SessionRegistry, request: &Request) -> Response {
    let id = request.session_id();
    let session = registry.session_mut(&id);

    match request {
        Request::Guess { guess, .. } => match session.submit_guess(guess) {
            Ok(record) => Response::Feedback {
                bulls: record.bulls,
                cows: record.cows,
                entropy: record.entropy,
                remaining: record.remaining,
                won: session.is_won(),
            },
            Err(err) => err.into(),
        },
        Request::Action { action, .. } => match action {
            Action::Restart => {
                session.restart();
                Response::Restarted { restarted: true }
            }
            Action::Reveal => Response::Revealed {
                secret: session.reveal(),
            },
            Action::History => Response::History {
                history: session.history().to_vec(),
            },
        },
    }
}

/// Parse and apply one line of input
pub fn handle_line(registry: &mut SessionRegistry, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            debug!(?request, "request");
            handle_request(registry, &request)
        }
        Err(err) => Response::error("bad_request", err.to_string()),
    }
}

/// Run JSON-lines mode on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failure or if a response cannot be serialized.
pub fn run_pipe(registry: SessionRegistry) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_pipe_with(registry, stdin.lock(), stdout.lock())
}

/// Run JSON-lines mode over arbitrary input and output
///
/// Blank lines are skipped. Malformed requests produce an error response and
/// the stream continues.
///
/// # Errors
///
/// Returns an error on I/O failure or if a response cannot be serialized.
pub fn run_pipe_with<R: BufRead, W: Write>(
    mut registry: SessionRegistry,
    input: R,
    mut out: W,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = handle_line(&mut registry, line);
        serde_json::to_writer(&mut out, &response)?;
        writeln!(out)?;
        out.flush()?;
    }
    Ok(())
}
