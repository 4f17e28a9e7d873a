use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_USER_AGE, DEFAULT_USER_NAME};

/// Anything that can produce a textual representation of itself.
pub trait Stringer {
    fn represent(&self) -> String;
}

/// A named, aged record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: i64,
}

impl User {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new(DEFAULT_USER_NAME, DEFAULT_USER_AGE)
    }
}

impl Stringer for User {
    /// The user's name, verbatim. Age is not part of the representation.
    fn represent(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.represent())
    }
}
