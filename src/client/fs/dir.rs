use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects which entries a listing returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFlags(u8);

bitflags! {
    impl ListFlags: u8 {
        const FILES = 0x01;
        const DIRS = 0x02;
    }
}

impl Default for ListFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Kind of a remote entry as inferred by probing it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::File => "F",
            Self::Directory => "D",
        })
    }
}

/// Entries returned by a detailed listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    name: String,
    kind: EntryKind,
}

impl DirEntry {
    pub(crate) fn new(name: String, kind: EntryKind) -> Self {
        Self { name, kind }
    }

    /// Returns the name of the entry inside the listed directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub(crate) fn into_name(self) -> String {
        self.name
    }
}
