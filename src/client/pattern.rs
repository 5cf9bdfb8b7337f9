use regex::Regex;
use std::{fmt, str::FromStr};

use super::error::Error;

/// Regular expression matched against the start of a name.
///
/// The expression has to match at offset 0 but may stop before the end, so
/// `foo` selects `foobar` while `^foo$` does not.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, Error> {
        let regex = Regex::new(&format!("^(?:{source})"))?;
        Ok(Self {
            source: source.to_owned(),
            regex,
        })
    }

    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}
