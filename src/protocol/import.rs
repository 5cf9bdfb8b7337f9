use std::fmt;

use super::{impl_request_for, Request};

/// Makes modules available to every later request
#[derive(Debug, Clone)]
pub struct Import {
    pub modules: Vec<String>,
}

impl Import {
    pub fn new<I, T>(modules: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            modules: modules.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "import {}", self.modules.join(", "))
    }
}

impl_request_for!(Import, Exec);
