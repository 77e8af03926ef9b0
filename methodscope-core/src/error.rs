use std::fmt;

/// Error returned when a string cannot be used as a scope name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// The scope name was empty.
    Empty,
    /// The scope name contains a character that cannot appear in a class name.
    InvalidCharacter { scope: String, ch: char },
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeError::Empty => write!(f, "Scope name must not be empty"),
            ScopeError::InvalidCharacter { scope, ch } => {
                write!(
                    f,
                    "Invalid character '{ch}' in scope name '{scope}': \
                     only letters, digits and '_' are allowed"
                )
            }
        }
    }
}

impl std::error::Error for ScopeError {}

/// Error type for generator configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O or YAML parsing error occurred while loading the configuration.
    Load(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(msg) => write!(f, "Config load error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
