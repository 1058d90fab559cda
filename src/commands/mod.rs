//! Command implementations

pub mod analyze;
pub mod pipe;
pub mod simple;

pub use analyze::{AnalysisResult, SecretOutcome, analyze_guess};
pub use pipe::{Action, Request, Response, handle_line, handle_request, run_pipe, run_pipe_with};
pub use simple::{run_simple, run_simple_with};
