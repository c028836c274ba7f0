//! Shared integration test helpers for confbox.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{DialogFixture, storage_with_tmp_dir};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers is used per file.

#![allow(dead_code)]

use confbox::{FileSessionStorage, ManualHostKeys, NoPrinters, StaticBackends, StaticCodepages};
use confbox_config::Conf;
use confbox_settings_ui::{
    ConfigDialog, ControlBox, ControlId, DialogMode, DialogOps, Event, HeadlessDialog,
    MemorySessionStorage, Services, SessionStorage, setup_config_box,
};
use confbox_ssh::BackendTable;
use tempfile::TempDir;

/// File storage in a fresh temporary directory.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn storage_with_tmp_dir() -> (FileSessionStorage, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = FileSessionStorage::new(temp_dir.path().join("sessions"));
    (storage, temp_dir)
}

/// Save `conf` as session `name` directly through the storage.
pub fn save_session(storage: &FileSessionStorage, name: &str, conf: &Conf) {
    storage
        .clone()
        .save(name, conf)
        .expect("Failed to save session");
}

/// The production collaborators over any storage.
pub fn services(storage: Box<dyn SessionStorage>) -> Services {
    Services {
        storage,
        backends: Box::new(StaticBackends::default()),
        hostkeys: Box::new(ManualHostKeys),
        codepages: Box::new(StaticCodepages),
        printers: Box::new(NoPrinters),
    }
}

/// A dialog, its headless front end and the settings it edits.
pub struct DialogFixture {
    pub dialog: ConfigDialog,
    pub dlg: HeadlessDialog,
    pub conf: Conf,
}

impl DialogFixture {
    /// A dialog over in-memory storage. Returns a handle on the storage.
    pub fn in_memory(mode: DialogMode) -> (Self, MemorySessionStorage) {
        let store = MemorySessionStorage::new();
        let fixture = Self::with_storage(mode, Box::new(store.clone()));
        (fixture, store)
    }

    pub fn with_storage(mode: DialogMode, storage: Box<dyn SessionStorage>) -> Self {
        let controls = setup_config_box(mode, &StaticBackends::new(BackendTable::full()));
        Self::from_box(controls, storage)
    }

    pub fn from_box(controls: ControlBox, storage: Box<dyn SessionStorage>) -> Self {
        let mut fixture = Self {
            dialog: ConfigDialog::new(controls, services(storage)),
            dlg: HeadlessDialog::new(),
            conf: Conf::default(),
        };
        fixture.dialog.refresh_all(&mut fixture.dlg, &mut fixture.conf);
        fixture
    }

    pub fn controls(&self) -> &ControlBox {
        self.dialog.controls()
    }

    /// The control labelled `label`; panics if there is none.
    pub fn find(&self, label: &str) -> ControlId {
        self.controls()
            .find_by_label(label)
            .unwrap_or_else(|| panic!("no control labelled {label:?}"))
    }

    pub fn event(&mut self, ctrl: ControlId, event: Event) {
        self.dialog.dispatch(&mut self.dlg, &mut self.conf, ctrl, event);
    }

    pub fn type_text(&mut self, ctrl: ControlId, text: &str) {
        self.dlg.editbox_set(ctrl, text);
        self.event(ctrl, Event::ValChange);
    }

    pub fn choose(&mut self, ctrl: ControlId, index: usize) {
        self.dlg.radiobutton_set(ctrl, index);
        self.event(ctrl, Event::ValChange);
    }

    pub fn select(&mut self, ctrl: ControlId, index: usize) {
        self.dlg.listbox_select(ctrl, index);
        self.event(ctrl, Event::SelChange);
    }

    pub fn press(&mut self, ctrl: ControlId) {
        self.dlg.set_focus(ctrl);
        self.event(ctrl, Event::Action);
    }

    /// Index of the radio button labelled `label` in radio `ctrl`.
    pub fn button_index(&self, ctrl: ControlId, label: &str) -> usize {
        self.controls()
            .get(ctrl)
            .and_then(|c| c.buttons().iter().position(|b| b.label == label))
            .unwrap_or_else(|| panic!("no button {label:?}"))
    }
}

/// Run the command line with `args` against `dir`. Returns the exit code,
/// stdout and stderr.
pub fn run_cli(dir: &std::path::Path, args: &[&str]) -> (i32, String, String) {
    use clap::Parser;

    let mut argv = vec!["confbox", "--sessions-dir"];
    let dir = dir.to_str().expect("temp dir is not UTF-8");
    argv.push(dir);
    argv.extend_from_slice(args);
    let cli = confbox::cli::Cli::try_parse_from(argv).expect("Failed to parse arguments");

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = confbox::cli::run(cli, &mut out, &mut err).expect("command failed");
    (
        code,
        String::from_utf8(out).expect("stdout is not UTF-8"),
        String::from_utf8(err).expect("stderr is not UTF-8"),
    )
}
