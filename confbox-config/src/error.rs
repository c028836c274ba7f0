//! Typed error variants for the confbox-config crate.
//!
//! [`ConfigError`] covers session-file I/O and validation. [`CodecError`]
//! covers the string micro-formats used by compound settings, and
//! [`PreferenceError`] covers ordered-preference list rewrites.

use thiserror::Error;

/// Errors that can occur when loading or saving a session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the session file.
    #[error("I/O error reading session: {0}")]
    Io(#[from] std::io::Error),

    /// The session file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in session: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A stored value failed semantic validation.
    ///
    /// The inner string names the key and what is wrong with it.
    #[error("Session validation error: {0}")]
    Validation(String),

    /// A session name that cannot be mapped onto a storage location.
    #[error("Invalid session name: {0:?}")]
    SessionName(String),
}

/// Errors produced when decoding or encoding a compound-setting entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("You need to specify a source port number")]
    EmptySourcePort,

    #[error("You need to specify a destination address\nin the form \"host.name:port\"")]
    MissingDestination,

    #[error("unknown forwarding direction {0:?}")]
    UnknownDirection(char),

    #[error("unknown tty mode type tag {0:?}")]
    UnknownTypeTag(char),

    #[error("entry key is empty")]
    EmptyKey,

    #[error("entry value is empty")]
    EmptyValue,
}

/// Errors produced when rewriting an ordered preference list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("identifier {0} is not part of the stored list")]
    UnknownId(i32),

    #[error("identifier {0} appears more than once")]
    Duplicate(i32),

    #[error("list has {actual} entries, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}
