//! Entries of a remote listing.
//!
//! The interpreter has no `stat`, so the kind of an entry is whatever the last
//! listing inferred for it. Nothing here is cached between listings.

mod dir;

pub use dir::{DirEntry, EntryKind, ListFlags};
