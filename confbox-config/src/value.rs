//! Scalar configuration values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::keys::ValueKind;

/// A file path setting (log file, private key, sound file, ...).
///
/// An empty path means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filename(PathBuf);

impl Filename {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.as_os_str().is_empty()
    }
}

impl fmt::Display for Filename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A font selection: family name, point height and weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    pub name: String,
    pub height: i32,
    #[serde(default)]
    pub bold: bool,
    /// Platform character-set hint; 0 means "default"
    #[serde(default)]
    pub charset: i32,
}

impl FontSpec {
    pub fn new(name: impl Into<String>, height: i32) -> Self {
        Self {
            name: name.into(),
            height,
            bold: false,
            charset: 0,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("monospace", 10)
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}{}-point",
            self.name,
            if self.bold { "bold, " } else { "" },
            self.height
        )
    }
}

/// Tagged union of the scalar value kinds a key can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfValue {
    Int(i32),
    Str(String),
    Filename(Filename),
    Font(FontSpec),
}

impl ConfValue {
    /// The [`ValueKind`] this value satisfies.
    pub fn kind(&self) -> ValueKind {
        match self {
            ConfValue::Int(_) => ValueKind::Int,
            ConfValue::Str(_) => ValueKind::Str,
            ConfValue::Filename(_) => ValueKind::Filename,
            ConfValue::Font(_) => ValueKind::Font,
        }
    }
}
