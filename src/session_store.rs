//! File-backed session storage.
//!
//! One YAML document per session in a sessions directory, normally
//! [`confbox_config::sessions_dir`]. The default-settings entry is stored
//! under the empty name and need not exist on disk.

use anyhow::{Context, bail};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use confbox_config::{Conf, DEFAULT_SESSION_NAME, session_file_name, session_name_from_file};
use confbox_settings_ui::SessionStorage;

#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    dir: PathBuf,
}

impl FileSessionStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage in the per-user sessions directory.
    pub fn default_location() -> Self {
        Self::new(confbox_config::sessions_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding session `name`.
    pub fn path_for(&self, name: &str) -> anyhow::Result<PathBuf> {
        let file_name = session_file_name(name).with_context(|| format!("Invalid session name {name:?}"))?;
        Ok(self.dir.join(file_name))
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self, name: &str) -> anyhow::Result<Conf> {
        let path = self.path_for(name)?;
        if !path.exists() {
            if name.is_empty() {
                log::debug!("No stored default settings in {:?}, using built-in defaults", self.dir);
                return Ok(Conf::default());
            }
            bail!("no saved session named {name:?}");
        }
        let conf = Conf::load_from(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        log::info!("Loaded session {name:?} from {:?}", path);
        Ok(conf)
    }

    fn save(&mut self, name: &str, conf: &Conf) -> anyhow::Result<()> {
        let path = self.path_for(name)?;
        conf.save_to(&path)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    fn delete(&mut self, name: &str) -> anyhow::Result<()> {
        let path = self.path_for(name)?;
        fs::remove_file(&path).with_context(|| format!("Failed to remove {}", path.display()))?;
        log::info!("Removed session file {:?}", path);
        Ok(())
    }

    fn enumerate(&self, include_default: bool) -> anyhow::Result<Vec<String>> {
        let mut names = Vec::new();
        match fs::read_dir(&self.dir) {
            Ok(entries) => {
                for entry in entries {
                    let entry = entry?;
                    if !entry.file_type()?.is_file() {
                        continue;
                    }
                    let file_name = entry.file_name();
                    let Some(file_name) = file_name.to_str() else {
                        log::warn!("Skipping non-UTF-8 file name in {:?}", self.dir);
                        continue;
                    };
                    match session_name_from_file(file_name) {
                        Some(name) if !name.is_empty() => names.push(name),
                        _ => {}
                    }
                }
            }
            // No sessions saved yet.
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to list {}", self.dir.display()));
            }
        }
        names.sort();
        if include_default {
            names.insert(0, DEFAULT_SESSION_NAME.to_string());
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confbox_config::ConfKey;
    use tempfile::TempDir;

    #[test]
    fn test_missing_directory_lists_only_default() {
        let temp = TempDir::new().unwrap();
        let store = FileSessionStorage::new(temp.path().join("absent"));
        assert_eq!(store.enumerate(true).unwrap(), vec![DEFAULT_SESSION_NAME]);
        assert!(store.enumerate(false).unwrap().is_empty());
    }

    #[test]
    fn test_default_loads_without_file() {
        let temp = TempDir::new().unwrap();
        let store = FileSessionStorage::new(temp.path());
        assert_eq!(store.load("").unwrap(), Conf::default());
        assert!(store.load("nowhere").is_err());
    }

    #[test]
    fn test_save_enumerate_delete() {
        let temp = TempDir::new().unwrap();
        let mut store = FileSessionStorage::new(temp.path());
        let mut conf = Conf::default();
        conf.set_str(ConfKey::Host, "db.example.com");
        store.save("prod/db", &conf).unwrap();
        store.save("alpha", &Conf::default()).unwrap();
        store.save("", &Conf::default()).unwrap();

        assert!(temp.path().join("prod%2Fdb.yaml").exists());
        assert!(temp.path().join("__default__.yaml").exists());
        assert_eq!(
            store.enumerate(true).unwrap(),
            vec![DEFAULT_SESSION_NAME, "alpha", "prod/db"]
        );
        assert_eq!(store.load("prod/db").unwrap().get_str(ConfKey::Host), "db.example.com");

        store.delete("alpha").unwrap();
        assert_eq!(store.enumerate(false).unwrap(), vec!["prod/db"]);
        assert!(store.delete("alpha").is_err());
    }

    #[test]
    fn test_foreign_files_are_ignored() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.txt"), "x").unwrap();
        fs::write(temp.path().join("half.yaml.tmp"), "x").unwrap();
        fs::create_dir(temp.path().join("dir.yaml")).unwrap();
        let store = FileSessionStorage::new(temp.path());
        assert!(store.enumerate(false).unwrap().is_empty());
    }

    #[test]
    fn test_reserved_stem_is_rejected() {
        let temp = TempDir::new().unwrap();
        let mut store = FileSessionStorage::new(temp.path());
        assert!(store.save("__default__", &Conf::default()).is_err());
    }
}
