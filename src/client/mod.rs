//! Filesystem explorer layered on an interpreter session.
//!
//! [`RemoteFileExplorer`] owns a [`RemoteSession`], keeps the working
//! directory and turns each operation into interpreter requests.

pub mod config;
pub mod error;
mod explorer;
pub mod fs;
pub mod path;
pub mod pattern;
pub mod session;
mod transfer;

pub use config::Config;
pub use error::{Error, PreconditionError};
pub use explorer::{ExplorerResult, RemoteFileExplorer};
pub use fs::{DirEntry, EntryKind, ListFlags};
pub use pattern::Pattern;
pub use session::{RemoteSession, SessionError};
