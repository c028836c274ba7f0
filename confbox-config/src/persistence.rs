//! Session persistence: YAML file I/O and path helpers.
//!
//! Covers:
//! - `Conf::load_from` / `Conf::save_to` (YAML with atomic write, overlay onto defaults)
//! - XDG-style path helpers (`config_dir`, `sessions_dir`)
//! - Mapping session names to file names and back

use std::fs;
use std::path::{Path, PathBuf};

use crate::conf::Conf;
use crate::error::ConfigError;

/// Name under which the default-settings entry is listed.
pub const DEFAULT_SESSION_NAME: &str = "Default Settings";

/// File stem used for the default-settings entry (the empty session name).
pub const DEFAULT_SESSION_STEM: &str = "__default__";

const SESSION_EXTENSION: &str = "yaml";

impl Conf {
    /// Parse a session document and overlay it onto the defaults.
    ///
    /// Radio choices the dialog does not offer fall back to their defaults;
    /// any other malformed entry is a [`ConfigError::Validation`].
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let mut stored: Conf = serde_yaml_ng::from_str(contents)?;
        stored.validate()?;
        stored.drop_unoffered_choices();
        let mut conf = Conf::default();
        conf.overlay(stored);
        Ok(conf)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Load a session file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Loading session from {:?}", path);

        // Sessions can carry proxy passwords; warn when others can read them.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Ok(metadata) = fs::metadata(path) {
                let mode = metadata.permissions().mode();
                if mode & 0o044 != 0 {
                    log::warn!(
                        "Session file {:?} is readable by group or others (mode {:04o})",
                        path,
                        mode & 0o777
                    );
                }
            }
        }

        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Save to a session file, creating its directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = self.to_yaml()?;

        // Atomic save: write to temp file then rename
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, path)?;

        log::debug!("Saved session to {:?}", path);
        Ok(())
    }
}

/// Get the configuration directory path (using XDG convention)
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("confbox")
        } else {
            PathBuf::from(".")
        }
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Some(home_dir) = dirs::home_dir() {
            home_dir.join(".config").join("confbox")
        } else {
            PathBuf::from(".")
        }
    }
}

/// Directory holding one YAML file per saved session.
pub fn sessions_dir() -> PathBuf {
    config_dir().join("sessions")
}

/// File name for a session. The empty name is the default-settings entry.
///
/// Bytes outside `[A-Za-z0-9._-]` are written as `%XX`.
pub fn session_file_name(name: &str) -> Result<String, ConfigError> {
    if name.is_empty() {
        return Ok(format!("{DEFAULT_SESSION_STEM}.{SESSION_EXTENSION}"));
    }
    if name == DEFAULT_SESSION_STEM {
        return Err(ConfigError::SessionName(name.to_string()));
    }
    let mut stem = String::with_capacity(name.len());
    for b in name.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-') {
            stem.push(b as char);
        } else {
            stem.push_str(&format!("%{b:02X}"));
        }
    }
    Ok(format!("{stem}.{SESSION_EXTENSION}"))
}

/// Session name for a file name produced by [`session_file_name`], or
/// `None` if the file is not a session file.
pub fn session_name_from_file(file_name: &str) -> Option<String> {
    let stem = file_name.strip_suffix(&format!(".{SESSION_EXTENSION}"))?;
    if stem == DEFAULT_SESSION_STEM {
        return Some(String::new());
    }
    let bytes = stem.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = stem.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}
