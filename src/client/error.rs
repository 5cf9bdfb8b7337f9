use std::io;
use thiserror::Error;

use super::session::SessionError;
use crate::error;

/// Local checks against a freshly fetched listing that failed before any
/// remote call was made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("No such file or directory: '{0}'")]
    NotFound(String),
    #[error("File or directory already exists: '{0}'")]
    AlreadyExists(String),
}

/// Enum for explorer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation was refused based on the current listing
    #[error("{0}")]
    Precondition(#[from] PreconditionError),
    /// The session reported a failure. Details are only logged
    #[error("Device communication failed")]
    RemoteIo,
    /// The requested mode is not implemented. No remote call was made
    #[error("{0}")]
    Unsupported(&'static str),
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    /// Any errors related to local I/O
    #[error("I/O: {0}")]
    IO(String),
    /// Occurs when the interpreter answers with something that cannot be decoded
    #[error("{0}")]
    UnexpectedBehavior(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// The explorer was already closed
    #[error("Session closed")]
    Closed,
}

impl Error {
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }
}

impl From<SessionError> for Error {
    fn from(error: SessionError) -> Self {
        debug!("session failure: {}", error);
        Self::RemoteIo
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::IO(error.to_string())
    }
}

impl From<regex::Error> for Error {
    fn from(error: regex::Error) -> Self {
        Self::InvalidPattern(error.to_string())
    }
}

impl From<error::Error> for Error {
    fn from(error: error::Error) -> Self {
        Self::UnexpectedBehavior(format!("Malformed reply: {error}"))
    }
}
