//! Configuration store for the confbox session dialog.
//!
//! This crate provides the typed key/value store behind every dialog
//! control, default values, and YAML session persistence. It includes:
//!
//! - Configuration keys and their fixed value kinds
//! - Compound settings (ordered string-keyed sub-maps)
//! - Port-forward and TTY-mode entry codecs
//! - Ordered algorithm preference lists
//! - Colour and character-class tables

pub mod charclass;
pub mod colour;
pub mod compound;
pub mod conf;
pub mod defaults;
pub mod error;
pub mod integrity;
pub mod keys;
pub mod options;
pub mod persistence;
pub mod portfwd;
pub mod prefs;
pub mod ttymode;
pub mod value;

// Re-export main types for convenience
pub use compound::CompoundSetting;
pub use conf::Conf;
pub use error::{CodecError, ConfigError, PreferenceError};
pub use integrity::integrity_fault;
pub use keys::{ConfKey, NCHARCLASSES, NCOLOURS, ValueKind};
pub use persistence::{DEFAULT_SESSION_NAME, session_file_name, session_name_from_file, sessions_dir};
pub use portfwd::{AddressFamily, Direction, PortForward};
pub use prefs::PreferenceKind;
pub use ttymode::TtyModeValue;
pub use value::{ConfValue, Filename, FontSpec};
