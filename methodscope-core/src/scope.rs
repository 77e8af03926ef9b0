use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ScopeError;

/// Suffix appended to a class name (and to marker names) for every scope.
pub const SCOPE_SUFFIX: &str = "Scope";

/// Prefix distinguishing an initializer marker from a member marker.
pub const INIT_PREFIX: &str = "Init";

/// A validated scope name, e.g. `Foo` in `@FooScope` / `@InitFooScope`.
///
/// The name is a fragment appended to a class name, so it may start with a
/// digit but must otherwise be a plain identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScopeName(String);

impl ScopeName {
    pub fn new(name: impl Into<String>) -> Result<Self, ScopeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ScopeError::Empty);
        }
        let invalid = name.chars().find(|c| !(c.is_alphanumeric() || *c == '_'));
        if let Some(ch) = invalid {
            return Err(ScopeError::InvalidCharacter { scope: name, ch });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical name of the annotation marking a method as part of this scope.
    pub fn member_marker(&self) -> String {
        format!("@{}{SCOPE_SUFFIX}", self.0)
    }

    /// Canonical name of the annotation marking a per-scope initializer.
    pub fn initializer_marker(&self) -> String {
        format!("@{INIT_PREFIX}{}{SCOPE_SUFFIX}", self.0)
    }

    /// Name of the class generated for `class_name` in this scope.
    pub fn class_name_for(&self, class_name: &str) -> String {
        format!("{class_name}{SCOPE_SUFFIX}{}", self.0)
    }
}

impl fmt::Display for ScopeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ScopeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ScopeName {
    type Error = ScopeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ScopeName {
    type Error = ScopeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ScopeName> for String {
    fn from(value: ScopeName) -> Self {
        value.0
    }
}

impl std::str::FromStr for ScopeName {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
