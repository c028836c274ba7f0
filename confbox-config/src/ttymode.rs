//! TTY-mode entry codec.
//!
//! Each terminal mode is stored under its name with a one-letter type tag
//! followed by an optional payload: `A` (let the client decide), `N` (do not
//! send the mode), or `V<value>` (send the given value).

use crate::error::CodecError;

/// Terminal modes the client knows how to send, in the order they are
/// seeded into a new configuration.
pub const TTY_MODE_NAMES: &[&str] = &[
    "INTR", "QUIT", "ERASE", "KILL", "EOF", "EOL", "EOL2", "START", "STOP", "SUSP", "DSUSP",
    "REPRINT", "WERASE", "LNEXT", "FLUSH", "SWTCH", "STATUS", "DISCARD", "IGNPAR", "PARMRK",
    "INPCK", "ISTRIP", "INLCR", "IGNCR", "ICRNL", "IUCLC", "IXON", "IXANY", "IXOFF", "IMAXBEL",
    "IUTF8", "ISIG", "ICANON", "XCASE", "ECHO", "ECHOE", "ECHOK", "ECHONL", "NOFLSH", "TOSTOP",
    "IEXTEN", "ECHOCTL", "ECHOKE", "PENDIN", "OPOST", "OLCUC", "ONLCR", "OCRNL", "ONOCR",
    "ONLRET", "CS7", "CS8", "PARENB", "PARODD",
];

/// Type tags in radio-button order.
const TYPE_TAGS: [char; 3] = ['A', 'N', 'V'];

/// A decoded TTY-mode setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TtyModeValue {
    Auto,
    NoSend,
    Value(String),
}

impl TtyModeValue {
    /// Build from the value-type radio index and the value text box.
    /// The text is only used for the explicit-value button.
    pub fn from_radio(index: usize, text: &str) -> Option<Self> {
        match TYPE_TAGS.get(index)? {
            'A' => Some(TtyModeValue::Auto),
            'N' => Some(TtyModeValue::NoSend),
            _ => Some(TtyModeValue::Value(text.to_string())),
        }
    }

    /// Position in the value-type radio group.
    pub fn radio_index(&self) -> usize {
        match self {
            TtyModeValue::Auto => 0,
            TtyModeValue::NoSend => 1,
            TtyModeValue::Value(_) => 2,
        }
    }

    pub fn encode(&self) -> String {
        match self {
            TtyModeValue::Auto => "A".to_string(),
            TtyModeValue::NoSend => "N".to_string(),
            TtyModeValue::Value(v) => format!("V{v}"),
        }
    }

    pub fn decode(raw: &str) -> Result<Self, CodecError> {
        let mut chars = raw.chars();
        match chars.next() {
            Some('A') => Ok(TtyModeValue::Auto),
            Some('N') => Ok(TtyModeValue::NoSend),
            Some('V') => Ok(TtyModeValue::Value(chars.as_str().to_string())),
            Some(other) => Err(CodecError::UnknownTypeTag(other)),
            None => Err(CodecError::EmptyValue),
        }
    }

    /// Text shown in the list's value column.
    pub fn display(&self) -> &str {
        match self {
            TtyModeValue::Auto => "(auto)",
            TtyModeValue::NoSend => "(don't send)",
            TtyModeValue::Value(v) => v,
        }
    }
}

/// Payload of a raw stored value: everything after the type tag.
pub fn payload(raw: &str) -> &str {
    let mut chars = raw.chars();
    chars.next();
    chars.as_str()
}

/// List row for a stored entry, tolerant of unknown tags: anything that is
/// not `A` or `N` shows its payload.
pub fn display_row(mode: &str, raw: &str) -> String {
    let shown = match raw.chars().next() {
        Some('A') => "(auto)",
        Some('N') => "(don't send)",
        _ => payload(raw),
    };
    format!("{mode}\t{shown}")
}
