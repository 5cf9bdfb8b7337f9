use bytes::Bytes;
use std::io;
use thiserror::Error;

/// Failure reported by a [`RemoteSession`].
///
/// The two cases have to stay apart: a listing that raised tells the explorer
/// it probed a file, a dead link must never be read that way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The interpreter ran the code and raised. Contains the traceback
    #[error("Remote exception: {0}")]
    Remote(String),
    /// The link to the device failed
    #[error("Transport: {0}")]
    Transport(String),
}

impl From<io::Error> for SessionError {
    fn from(error: io::Error) -> Self {
        Self::Transport(error.to_string())
    }
}

/// Interactive interpreter session on the device. This is `async_trait`
///
/// Framing, flow control and timeouts of the underlying link are up to the
/// implementation. Calls are never issued concurrently.
#[async_trait]
pub trait RemoteSession: Send {
    /// Switches the interpreter into raw mode.
    async fn enter_raw_mode(&mut self) -> Result<(), SessionError>;

    /// Returns the interpreter to its friendly mode.
    async fn exit_raw_mode(&mut self) -> Result<(), SessionError>;

    /// Runs statements and returns everything they wrote to stdout.
    async fn execute(&mut self, code: &str) -> Result<Bytes, SessionError>;

    /// Evaluates an expression and returns the textual form of its value.
    async fn evaluate(&mut self, expression: &str) -> Result<String, SessionError>;

    /// Releases the link.
    async fn close(&mut self) -> Result<(), SessionError>;
}

#[async_trait]
impl<S: RemoteSession + ?Sized> RemoteSession for Box<S> {
    async fn enter_raw_mode(&mut self) -> Result<(), SessionError> {
        (**self).enter_raw_mode().await
    }

    async fn exit_raw_mode(&mut self) -> Result<(), SessionError> {
        (**self).exit_raw_mode().await
    }

    async fn execute(&mut self, code: &str) -> Result<Bytes, SessionError> {
        (**self).execute(code).await
    }

    async fn evaluate(&mut self, expression: &str) -> Result<String, SessionError> {
        (**self).evaluate(expression).await
    }

    async fn close(&mut self) -> Result<(), SessionError> {
        (**self).close().await
    }
}
