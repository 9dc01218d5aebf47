//! Error types for the engine.
//!
//! Gameplay failures (acting with no enemy, too little energy, unknown
//! item or quest ids) are not errors: they resolve to a refused action and
//! a narrative log line. Errors here cover only the session command
//! surface, where the caller handed us input we cannot interpret.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while driving a game session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The command word was not recognized.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A recognized command was given unusable arguments.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
