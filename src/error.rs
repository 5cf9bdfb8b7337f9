use thiserror::Error;

/// Failures while decoding text produced by the remote interpreter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unexpected end of literal")]
    UnexpectedEof,
    #[error("Unexpected character {0:?} at offset {1}")]
    UnexpectedChar(char, usize),
    #[error("Bad escape sequence at offset {0}")]
    BadEscape(usize),
    #[error("Trailing data after literal at offset {0}")]
    TrailingData(usize),
}
