use std::fmt;

use super::{impl_request_for, literal, Request, FILE_HANDLE};

/// Appends one chunk of text to the open remote file
#[derive(Clone)]
pub struct Write {
    pub data: String,
}

impl Write {
    pub fn new<T: Into<String>>(data: T) -> Self {
        Self { data: data.into() }
    }
}

impl fmt::Debug for Write {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Write")
            .field("data", &self.data.len())
            .finish()
    }
}

impl fmt::Display for Write {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{FILE_HANDLE}.write({})", literal::quote(&self.data))
    }
}

impl_request_for!(Write, Exec);
