use serde::{Deserialize, Serialize};

use super::{error::Error, path};

/// Settings applied when an explorer takes over a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Absolute directory the explorer starts in.
    /// Default: `/`
    pub working_dir: String,
    /// Modules imported on the device before the first operation.
    /// Default: `os` and `sys`
    pub imports: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            working_dir: "/".to_owned(),
            imports: vec!["os".to_owned(), "sys".to_owned()],
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if !path::is_absolute(&self.working_dir) {
            return Err(Error::InvalidConfig(format!(
                "working directory must be absolute: '{}'",
                self.working_dir
            )));
        }

        if self.imports.iter().any(|m| m.trim().is_empty()) {
            return Err(Error::InvalidConfig("empty module name".to_owned()));
        }

        Ok(())
    }
}
