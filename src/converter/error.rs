//! Error types for session conversion
//!
//! Everything except [`ConvertError::Io`] is a reason to skip a session with a
//! warning; I/O failures are reported as errors. Neither stops the batch.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// Nothing survived filtering
    #[error("No messages extracted")]
    NoTurns,

    /// No message carried a usable creation time
    #[error("No resolvable session timestamp")]
    MissingTimestamp,

    #[error("Session has no id")]
    MissingSessionId,

    /// Session spawned inside another session
    #[error("Sub-session of {0}")]
    SubSession(String),

    #[error("Session {0} already processed, skipping")]
    Duplicate(String),

    /// Message directory absent or empty
    #[error("No message files for session {0}")]
    NoMessages(String),

    /// Session file exists but could not be understood
    #[error("Invalid session file: {0}")]
    InvalidSession(String),

    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

impl ConvertError {
    /// Check if this error is a skip (warning) rather than a failure
    pub fn is_skippable(&self) -> bool {
        !matches!(self, ConvertError::Io(_))
    }

    /// Skips that are expected and not worth a warning
    pub fn is_silent(&self) -> bool {
        matches!(self, ConvertError::SubSession(_))
    }
}
