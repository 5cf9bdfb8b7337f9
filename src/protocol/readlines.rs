use std::fmt;

use super::{impl_request_for, Request, FILE_HANDLE};

/// Copies every line of the open remote file to the captured output
#[derive(Debug, Clone, Copy)]
pub struct ReadLines;

impl fmt::Display for ReadLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "for l in {FILE_HANDLE}: sys.stdout.write(l),")
    }
}

impl_request_for!(ReadLines, Exec);
