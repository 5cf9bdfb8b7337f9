use std::fmt;

use super::{impl_request_for, literal, Request};

/// Deletes a file
#[derive(Debug, Clone)]
pub struct Remove {
    pub path: String,
}

impl Remove {
    pub fn new<T: Into<String>>(path: T) -> Self {
        Self { path: path.into() }
    }
}

impl fmt::Display for Remove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "os.remove({})", literal::quote(&self.path))
    }
}

impl_request_for!(Remove, Eval);
