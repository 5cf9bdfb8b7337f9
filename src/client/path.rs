//! Remote path handling.
//!
//! Remote paths always use `/` and the explorer keeps its working directory
//! absolute, so everything here is plain string manipulation.

/// Token that moves the working directory one level up.
pub const PARENT_DIR: &str = "..";

pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
}

/// Returns the fully-qualified path of `name` as seen from `dir`.
pub fn resolve(dir: &str, name: &str) -> String {
    if is_absolute(name) {
        name.to_owned()
    } else if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// Computes the working directory after changing from `dir` to `target`.
///
/// Nothing is checked against the device.
pub fn change_dir(dir: &str, target: &str) -> String {
    if target.is_empty() {
        dir.to_owned()
    } else if is_absolute(target) {
        target.to_owned()
    } else if target == PARENT_DIR {
        parent(dir)
    } else {
        resolve(dir, target)
    }
}

fn parent(dir: &str) -> String {
    let trimmed = dir.trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some((head, _)) if !head.trim_end_matches('/').is_empty() => {
            head.trim_end_matches('/').to_owned()
        }
        _ => "/".to_owned(),
    }
}
