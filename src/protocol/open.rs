use std::fmt;

use super::{impl_request_for, literal, Request, FILE_HANDLE};

/// Text mode a remote file is opened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Read,
    /// Creates the file or truncates an existing one
    Write,
}

impl OpenMode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Read => "r",
            Self::Write => "w",
        }
    }
}

/// Binds a remote file to [`FILE_HANDLE`]
#[derive(Debug, Clone)]
pub struct Open {
    pub path: String,
    pub mode: OpenMode,
}

impl Open {
    pub fn new<T: Into<String>>(path: T, mode: OpenMode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }
}

impl fmt::Display for Open {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{FILE_HANDLE} = open({}, '{}')",
            literal::quote(&self.path),
            self.mode.as_str()
        )
    }
}

impl_request_for!(Open, Exec);
