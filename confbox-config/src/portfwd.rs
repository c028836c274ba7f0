//! Port-forward entry codec.
//!
//! One forward is stored as a single compound-setting entry:
//!
//! ```text
//! key   = [family tag] direction tag source-port     e.g. "L8080", "6R2222"
//! value = destination "host:port", or "D" for dynamic
//! ```
//!
//! The family tag is `4`, `6`, or absent. The direction tag is `L` or `R`.
//! Dynamic (SOCKS) forwards are local forwards whose value is the sentinel
//! `D`, so a dynamic forward and a local forward on the same source port
//! share a key and cannot coexist.

use std::fmt;

use crate::error::CodecError;

/// Stored value marking a local forward as dynamic.
pub const DYNAMIC_SENTINEL: &str = "D";

/// Address family a forward is restricted to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddressFamily {
    #[default]
    Unspecified,
    V4,
    V6,
}

impl AddressFamily {
    /// Position in the family radio group (auto, IPv4, IPv6).
    pub fn radio_index(self) -> usize {
        match self {
            AddressFamily::Unspecified => 0,
            AddressFamily::V4 => 1,
            AddressFamily::V6 => 2,
        }
    }

    pub fn from_radio_index(index: usize) -> Self {
        match index {
            1 => AddressFamily::V4,
            2 => AddressFamily::V6,
            _ => AddressFamily::Unspecified,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            AddressFamily::Unspecified => "",
            AddressFamily::V4 => "4",
            AddressFamily::V6 => "6",
        }
    }
}

/// Forwarding direction as the user chooses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Local,
    Remote,
    Dynamic,
}

impl Direction {
    /// Position in the direction radio group (local, remote, dynamic).
    pub fn radio_index(self) -> usize {
        match self {
            Direction::Local => 0,
            Direction::Remote => 1,
            Direction::Dynamic => 2,
        }
    }

    pub fn from_radio_index(index: usize) -> Self {
        match index {
            1 => Direction::Remote,
            2 => Direction::Dynamic,
            _ => Direction::Local,
        }
    }

    /// Tag stored in the key. Dynamic forwards are stored under `L`.
    fn stored_tag(self) -> char {
        match self {
            Direction::Local | Direction::Dynamic => 'L',
            Direction::Remote => 'R',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Local => "Local",
            Direction::Remote => "Remote",
            Direction::Dynamic => "Dynamic",
        };
        f.write_str(name)
    }
}

/// One decoded port forward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortForward {
    pub family: AddressFamily,
    pub direction: Direction,
    pub source: String,
    /// `host:port`; empty for dynamic forwards
    pub destination: String,
}

impl PortForward {
    /// Check the fields the way the Add button does.
    pub fn validate(&self) -> Result<(), CodecError> {
        if self.source.is_empty() {
            return Err(CodecError::EmptySourcePort);
        }
        if self.direction != Direction::Dynamic && host_strchr(&self.destination, ':').is_none() {
            return Err(CodecError::MissingDestination);
        }
        Ok(())
    }

    /// Stored sub-key.
    pub fn key(&self) -> String {
        format!(
            "{}{}{}",
            self.family.tag(),
            self.direction.stored_tag(),
            self.source
        )
    }

    /// Stored sub-value.
    pub fn value(&self) -> String {
        match self.direction {
            Direction::Dynamic => DYNAMIC_SENTINEL.to_string(),
            _ => self.destination.clone(),
        }
    }

    /// Validate and encode into a `(key, value)` entry.
    pub fn encode(&self) -> Result<(String, String), CodecError> {
        self.validate()?;
        Ok((self.key(), self.value()))
    }

    /// Decode a stored entry.
    pub fn decode(key: &str, value: &str) -> Result<Self, CodecError> {
        let (family, rest) = match key.as_bytes().first() {
            Some(b'4') => (AddressFamily::V4, &key[1..]),
            Some(b'6') => (AddressFamily::V6, &key[1..]),
            Some(_) => (AddressFamily::Unspecified, key),
            None => return Err(CodecError::EmptyKey),
        };
        let mut chars = rest.chars();
        let tag = chars.next().ok_or(CodecError::EmptyKey)?;
        let source = chars.as_str().to_string();
        let (direction, destination) = match tag {
            'L' if value == DYNAMIC_SENTINEL => (Direction::Dynamic, String::new()),
            'L' => (Direction::Local, value.to_string()),
            'R' => (Direction::Remote, value.to_string()),
            other => return Err(CodecError::UnknownDirection(other)),
        };
        Ok(Self {
            family,
            direction,
            source,
            destination,
        })
    }
}

/// Find `c` in `s`, skipping anything between `[` and `]` so that the
/// colons of a bracketed IPv6 literal are not mistaken for a separator.
pub fn host_strchr(s: &str, c: char) -> Option<usize> {
    let mut brackets = 0usize;
    for (i, ch) in s.char_indices() {
        match ch {
            '[' => brackets += 1,
            ']' if brackets > 0 => brackets -= 1,
            _ if ch == c && brackets == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// List row for a stored entry: the key (with the direction tag shown as
/// `D` for dynamic forwards), a tab, then the destination.
pub fn display_row(key: &str, value: &str) -> String {
    if value == DYNAMIC_SENTINEL {
        let shown = key.replacen('L', "D", 1);
        format!("{shown}\t")
    } else {
        format!("{key}\t{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_forward_round_trip() {
        let fwd = PortForward {
            source: "8080".into(),
            destination: "host:80".into(),
            ..Default::default()
        };
        let (key, value) = fwd.encode().unwrap();
        assert_eq!(key, "L8080");
        assert_eq!(value, "host:80");
        assert_eq!(PortForward::decode(&key, &value).unwrap(), fwd);
    }

    #[test]
    fn test_dynamic_forward_aliases_local() {
        let fwd = PortForward {
            direction: Direction::Dynamic,
            source: "1080".into(),
            ..Default::default()
        };
        let (key, value) = fwd.encode().unwrap();
        assert_eq!((key.as_str(), value.as_str()), ("L1080", "D"));
        assert_eq!(display_row(&key, &value), "D1080\t");

        let decoded = PortForward::decode(&key, &value).unwrap();
        assert_eq!(decoded.direction, Direction::Dynamic);
        assert!(decoded.destination.is_empty());
    }

    #[test]
    fn test_family_prefixed_remote() {
        let decoded = PortForward::decode("6R2222", "[::1]:22").unwrap();
        assert_eq!(decoded.family, AddressFamily::V6);
        assert_eq!(decoded.direction, Direction::Remote);
        assert_eq!(decoded.source, "2222");
        assert_eq!(display_row("6R2222", "[::1]:22"), "6R2222\t[::1]:22");
    }

    #[test]
    fn test_display_keeps_family_tag_for_dynamic() {
        assert_eq!(display_row("4L1080", "D"), "4D1080\t");
    }

    #[test]
    fn test_validation_errors() {
        let mut fwd = PortForward::default();
        assert_eq!(fwd.validate(), Err(CodecError::EmptySourcePort));

        fwd.source = "80".into();
        fwd.destination = "nocolon".into();
        assert_eq!(fwd.validate(), Err(CodecError::MissingDestination));

        // Colons inside brackets do not count.
        fwd.destination = "[fe80::1]".into();
        assert_eq!(fwd.validate(), Err(CodecError::MissingDestination));

        fwd.destination = "[fe80::1]:80".into();
        assert!(fwd.validate().is_ok());
    }

    #[test]
    fn test_decode_rejects_unknown_direction() {
        assert_eq!(
            PortForward::decode("X80", "a:1"),
            Err(CodecError::UnknownDirection('X'))
        );
        assert_eq!(PortForward::decode("", "a:1"), Err(CodecError::EmptyKey));
        assert_eq!(PortForward::decode("4", "a:1"), Err(CodecError::EmptyKey));
    }

    #[test]
    fn test_host_strchr() {
        assert_eq!(host_strchr("host:80", ':'), Some(4));
        assert_eq!(host_strchr("[::1]:22", ':'), Some(5));
        assert_eq!(host_strchr("[::1]", ':'), None);
    }
}
