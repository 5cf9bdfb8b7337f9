use std::fmt;

use super::{impl_request_for, literal, Request};

/// Lists the names inside a directory. Fails remotely when `path` is not one
#[derive(Debug, Clone)]
pub struct ListDir {
    pub path: String,
}

impl ListDir {
    pub fn new<T: Into<String>>(path: T) -> Self {
        Self { path: path.into() }
    }
}

impl fmt::Display for ListDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "os.listdir({})", literal::quote(&self.path))
    }
}

impl_request_for!(ListDir, Eval);
