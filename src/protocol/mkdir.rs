use std::fmt;

use super::{impl_request_for, literal, Request};

/// Creates a directory
#[derive(Debug, Clone)]
pub struct MkDir {
    pub path: String,
}

impl MkDir {
    pub fn new<T: Into<String>>(path: T) -> Self {
        Self { path: path.into() }
    }
}

impl fmt::Display for MkDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "os.mkdir({})", literal::quote(&self.path))
    }
}

impl_request_for!(MkDir, Eval);
