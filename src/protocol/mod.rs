mod close;
mod import;
mod listdir;
mod mkdir;
mod open;
mod readlines;
mod remove;
mod write;

pub mod literal;

pub use self::{
    close::Close,
    import::Import,
    listdir::ListDir,
    mkdir::MkDir,
    open::{Open, OpenMode},
    readlines::ReadLines,
    remove::Remove,
    write::Write,
};

/// Remote variable holding the file opened by [`Open`]
pub const FILE_HANDLE: &str = "f";

/// Piece of remote code together with the way the interpreter has to run it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Evaluated as an expression, the reply is the textual form of its value
    Eval(String),
    /// Executed as statements, the reply is whatever they wrote to stdout
    Exec(String),
}

impl Request {
    pub fn code(&self) -> &str {
        match self {
            Self::Eval(code) | Self::Exec(code) => code,
        }
    }
}

macro_rules! impl_request_for {
    ($name:ident, $kind:ident) => {
        impl From<$name> for Request {
            fn from(input: $name) -> Self {
                Self::$kind(input.to_string())
            }
        }
    };
}

pub(crate) use impl_request_for;
