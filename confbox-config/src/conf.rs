//! The configuration store.
//!
//! [`Conf`] maps each [`ConfKey`] to a value of the key's fixed
//! [`ValueKind`]: a scalar ([`ConfValue`]), a fixed-length integer list, or
//! a [`CompoundSetting`]. Accessors are typed per kind; calling one with a
//! key of another kind is a programming error and an integrity fault.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::compound::CompoundSetting;
use crate::error::ConfigError;
use crate::integrity::integrity_fault;
use crate::keys::{ConfKey, ValueKind};
use crate::options::radio_values;
use crate::prefs::{PreferenceKind, check_permutation};
use crate::value::{ConfValue, Filename, FontSpec};

/// A complete session configuration.
///
/// `Conf::default()` holds a value for every key, so getters never miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conf {
    #[serde(default)]
    scalars: BTreeMap<ConfKey, ConfValue>,
    #[serde(default)]
    lists: BTreeMap<ConfKey, Vec<i32>>,
    #[serde(default)]
    maps: BTreeMap<ConfKey, CompoundSetting>,
}

impl Default for Conf {
    fn default() -> Self {
        let mut conf = Self::empty();
        crate::defaults::populate(&mut conf);
        conf
    }
}

impl Conf {
    /// A store with no entries at all. Only used while populating defaults
    /// and while overlaying a loaded session.
    pub(crate) fn empty() -> Self {
        Self {
            scalars: BTreeMap::new(),
            lists: BTreeMap::new(),
            maps: BTreeMap::new(),
        }
    }

    #[track_caller]
    fn expect_kind(key: ConfKey, wanted: &str, ok: bool) {
        if !ok {
            integrity_fault(format!(
                "{key} is a {:?} setting, accessed as {wanted}",
                key.kind()
            ));
        }
    }

    // ========================================================================
    // Scalars
    // ========================================================================

    #[track_caller]
    pub fn get_int(&self, key: ConfKey) -> i32 {
        Self::expect_kind(key, "int", key.kind() == ValueKind::Int);
        match self.scalars.get(&key) {
            Some(ConfValue::Int(v)) => *v,
            _ => 0,
        }
    }

    #[track_caller]
    pub fn set_int(&mut self, key: ConfKey, value: i32) {
        Self::expect_kind(key, "int", key.kind() == ValueKind::Int);
        self.scalars.insert(key, ConfValue::Int(value));
    }

    #[track_caller]
    pub fn get_bool(&self, key: ConfKey) -> bool {
        self.get_int(key) != 0
    }

    #[track_caller]
    pub fn set_bool(&mut self, key: ConfKey, value: bool) {
        self.set_int(key, i32::from(value));
    }

    #[track_caller]
    pub fn get_str(&self, key: ConfKey) -> &str {
        Self::expect_kind(key, "string", key.kind() == ValueKind::Str);
        match self.scalars.get(&key) {
            Some(ConfValue::Str(s)) => s,
            _ => "",
        }
    }

    #[track_caller]
    pub fn set_str(&mut self, key: ConfKey, value: impl Into<String>) {
        Self::expect_kind(key, "string", key.kind() == ValueKind::Str);
        self.scalars.insert(key, ConfValue::Str(value.into()));
    }

    #[track_caller]
    pub fn get_filename(&self, key: ConfKey) -> Filename {
        Self::expect_kind(key, "filename", key.kind() == ValueKind::Filename);
        match self.scalars.get(&key) {
            Some(ConfValue::Filename(f)) => f.clone(),
            _ => Filename::default(),
        }
    }

    /// Store a filename. The previous value is dropped.
    #[track_caller]
    pub fn set_filename(&mut self, key: ConfKey, value: Filename) {
        Self::expect_kind(key, "filename", key.kind() == ValueKind::Filename);
        self.scalars.insert(key, ConfValue::Filename(value));
    }

    #[track_caller]
    pub fn get_fontspec(&self, key: ConfKey) -> FontSpec {
        Self::expect_kind(key, "font", key.kind() == ValueKind::Font);
        match self.scalars.get(&key) {
            Some(ConfValue::Font(f)) => f.clone(),
            _ => FontSpec::default(),
        }
    }

    /// Store a font. The previous value is dropped.
    #[track_caller]
    pub fn set_fontspec(&mut self, key: ConfKey, value: FontSpec) {
        Self::expect_kind(key, "font", key.kind() == ValueKind::Font);
        self.scalars.insert(key, ConfValue::Font(value));
    }

    /// Generic scalar read, for callers that dispatch on kind themselves.
    pub fn get(&self, key: ConfKey) -> Option<&ConfValue> {
        self.scalars.get(&key)
    }

    // ========================================================================
    // Fixed-length integer lists
    // ========================================================================

    #[track_caller]
    fn list_len(key: ConfKey) -> usize {
        match key.kind() {
            ValueKind::IntList(len) => len,
            other => integrity_fault(format!("{key} is a {other:?} setting, accessed as a list")),
        }
    }

    /// Read element `index` of an integer-list setting.
    #[track_caller]
    pub fn get_int_int(&self, key: ConfKey, index: usize) -> i32 {
        let len = Self::list_len(key);
        if index >= len {
            integrity_fault(format!("{key}[{index}] is out of range (length {len})"));
        }
        self.lists
            .get(&key)
            .and_then(|list| list.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// Write element `index` of an integer-list setting.
    #[track_caller]
    pub fn set_int_int(&mut self, key: ConfKey, index: usize, value: i32) {
        let len = Self::list_len(key);
        if index >= len {
            integrity_fault(format!("{key}[{index}] is out of range (length {len})"));
        }
        let list = self.lists.entry(key).or_insert_with(|| vec![0; len]);
        list[index] = value;
    }

    /// The whole list for an integer-list setting.
    #[track_caller]
    pub fn int_list(&self, key: ConfKey) -> Vec<i32> {
        let len = Self::list_len(key);
        self.lists
            .get(&key)
            .cloned()
            .unwrap_or_else(|| vec![0; len])
    }

    /// Replace the whole list for an integer-list setting.
    #[track_caller]
    pub fn set_int_list(&mut self, key: ConfKey, values: Vec<i32>) {
        let len = Self::list_len(key);
        if values.len() != len {
            integrity_fault(format!(
                "{key} expects {len} entries, got {}",
                values.len()
            ));
        }
        self.lists.insert(key, values);
    }

    // ========================================================================
    // Compound settings
    // ========================================================================

    #[track_caller]
    pub fn str_map(&self, key: ConfKey) -> &CompoundSetting {
        static EMPTY: std::sync::OnceLock<CompoundSetting> = std::sync::OnceLock::new();
        Self::expect_kind(key, "compound", key.kind() == ValueKind::StrMap);
        self.maps
            .get(&key)
            .unwrap_or_else(|| EMPTY.get_or_init(CompoundSetting::new))
    }

    #[track_caller]
    pub fn str_map_mut(&mut self, key: ConfKey) -> &mut CompoundSetting {
        Self::expect_kind(key, "compound", key.kind() == ValueKind::StrMap);
        self.maps.entry(key).or_default()
    }

    /// Point lookup inside a compound setting.
    #[track_caller]
    pub fn get_str_str(&self, key: ConfKey, subkey: &str) -> Option<&str> {
        self.str_map(key).get(subkey)
    }

    #[track_caller]
    pub fn set_str_str(&mut self, key: ConfKey, subkey: impl Into<String>, value: impl Into<String>) {
        self.str_map_mut(key).insert(subkey, value);
    }

    #[track_caller]
    pub fn del_str_str(&mut self, key: ConfKey, subkey: &str) -> Option<String> {
        self.str_map_mut(key).remove(subkey)
    }

    /// The sub-key at display position `index`.
    #[track_caller]
    pub fn nth_str_key(&self, key: ConfKey, index: usize) -> Option<String> {
        self.str_map(key).nth_key(index).map(str::to_string)
    }

    // ========================================================================
    // Whole-store operations
    // ========================================================================

    /// Replace this configuration with a copy of `other`.
    pub fn copy_from(&mut self, other: &Conf) {
        self.clone_from(other);
    }

    /// Check that every stored entry matches its key's kind, and that each
    /// stored preference list holds every identifier of its enumeration
    /// exactly once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in &self.scalars {
            if value.kind() != key.kind() {
                return Err(ConfigError::Validation(format!(
                    "{key} holds a {:?} value, expected {:?}",
                    value.kind(),
                    key.kind()
                )));
            }
        }
        for (key, list) in &self.lists {
            match key.kind() {
                ValueKind::IntList(len) if len == list.len() => {}
                ValueKind::IntList(len) => {
                    return Err(ConfigError::Validation(format!(
                        "{key} holds {} entries, expected {len}",
                        list.len()
                    )));
                }
                other => {
                    return Err(ConfigError::Validation(format!(
                        "{key} holds a list, expected {other:?}"
                    )));
                }
            }
        }
        for key in self.maps.keys() {
            if key.kind() != ValueKind::StrMap {
                return Err(ConfigError::Validation(format!(
                    "{key} holds a compound setting, expected {:?}",
                    key.kind()
                )));
            }
        }
        for kind in [
            PreferenceKind::Cipher,
            PreferenceKind::Kex,
            PreferenceKind::HostKey,
            PreferenceKind::GssLib,
        ] {
            if let Some(list) = self.lists.get(&kind.key()) {
                check_permutation(kind, list)
                    .map_err(|e| ConfigError::Validation(format!("{}: {e}", kind.key())))?;
            }
        }
        Ok(())
    }

    /// Remove radio-bound values that no button offers, so the defaults
    /// show through when this is overlaid. Returns the keys removed.
    pub(crate) fn drop_unoffered_choices(&mut self) -> Vec<ConfKey> {
        let mut dropped = Vec::new();
        self.scalars.retain(|key, value| {
            let offered = match (radio_values(*key), &*value) {
                (Some(values), ConfValue::Int(v)) => values.contains(v),
                _ => true,
            };
            if !offered {
                log::warn!("{key} = {value:?} is not an offered choice, using the default");
                dropped.push(*key);
            }
            offered
        });
        dropped
    }

    /// Overlay every entry present in `other` onto this configuration.
    ///
    /// Compound settings are replaced wholesale, not merged, so a saved
    /// session with no port forwards really has none.
    pub(crate) fn overlay(&mut self, other: Conf) {
        self.scalars.extend(other.scalars);
        self.lists.extend(other.lists);
        self.maps.extend(other.maps);
    }
}
