use std::fmt;

use super::{impl_request_for, Request, FILE_HANDLE};

#[derive(Debug, Clone, Copy)]
pub struct Close;

impl fmt::Display for Close {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{FILE_HANDLE}.close()")
    }
}

impl_request_for!(Close, Exec);
