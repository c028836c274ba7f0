//! Test harness: a dialog over a headless front end with fixed services.

use confbox_config::options::{PROT_CYGTERM, PROT_RAW, PROT_RLOGIN, PROT_SERIAL, PROT_SSH, PROT_TELNET};
use confbox_config::{Conf, ConfKey};

use crate::control::ControlId;
use crate::controlbox::ControlBox;
use crate::dispatch::{ConfigDialog, Event};
use crate::headless::{HeadlessDialog, MemorySessionStorage};
use crate::traits::{BackendRegistry, CodepageOps, DialogOps, HostKeyValidator, PrinterOps, Services};

pub(crate) struct TestBackends;

impl BackendRegistry for TestBackends {
    fn default_port(&self, protocol: i32) -> Option<i32> {
        match protocol {
            PROT_SSH => Some(22),
            PROT_TELNET => Some(23),
            PROT_RLOGIN => Some(513),
            PROT_RAW | PROT_SERIAL | PROT_CYGTERM => Some(0),
            _ => None,
        }
    }

    fn is_launchable(&self, conf: &Conf) -> bool {
        let key = match conf.get_int(ConfKey::Protocol) {
            PROT_SERIAL => ConfKey::SerLine,
            PROT_CYGTERM => ConfKey::CygCmd,
            _ => ConfKey::Host,
        };
        !conf.get_str(key).is_empty()
    }
}

/// Accepts `SHA256:` fingerprints and `ssh-` public key blobs, both
/// trimmed.
pub(crate) struct TestHostKeys;

impl HostKeyValidator for TestHostKeys {
    fn validate(&self, text: &str) -> Option<String> {
        let text = text.trim();
        if let Some(hash) = text.strip_prefix("SHA256:") {
            return (!hash.is_empty()).then(|| text.to_string());
        }
        let mut words = text.split_whitespace();
        match (words.next(), words.next()) {
            (Some(kind), Some(blob)) if kind.starts_with("ssh-") => Some(format!("{kind} {blob}")),
            _ => None,
        }
    }
}

pub(crate) struct TestCodepages;

impl CodepageOps for TestCodepages {
    fn enumerate(&self) -> Vec<String> {
        ["UTF-8", "ISO-8859-1", "KOI8-U"].map(String::from).to_vec()
    }

    fn canonicalize(&self, name: &str) -> String {
        self.enumerate()
            .into_iter()
            .find(|cp| cp.eq_ignore_ascii_case(name.trim()))
            .unwrap_or_else(|| "UTF-8".to_string())
    }
}

pub(crate) struct TestPrinters;

impl PrinterOps for TestPrinters {
    fn enumerate(&self) -> Vec<String> {
        vec!["LaserJet".to_string()]
    }
}

pub(crate) fn test_services(storage: MemorySessionStorage) -> Services {
    Services {
        storage: Box::new(storage),
        backends: Box::new(TestBackends),
        hostkeys: Box::new(TestHostKeys),
        codepages: Box::new(TestCodepages),
        printers: Box::new(TestPrinters),
    }
}

/// A dialog, its front end, the settings it edits and a handle on the
/// saved sessions.
pub(crate) struct Harness {
    pub dialog: ConfigDialog,
    pub dlg: HeadlessDialog,
    pub conf: Conf,
    pub store: MemorySessionStorage,
}

impl Harness {
    pub fn new(controls: ControlBox) -> Self {
        let store = MemorySessionStorage::new();
        Self {
            dialog: ConfigDialog::new(controls, test_services(store.clone())),
            dlg: HeadlessDialog::new(),
            conf: Conf::default(),
            store,
        }
    }

    pub fn event(&mut self, ctrl: ControlId, event: Event) {
        self.dialog.dispatch(&mut self.dlg, &mut self.conf, ctrl, event);
    }

    pub fn refresh_all(&mut self) {
        self.dialog.refresh_all(&mut self.dlg, &mut self.conf);
    }

    pub fn type_text(&mut self, ctrl: ControlId, text: &str) {
        self.dlg.editbox_set(ctrl, text);
        self.event(ctrl, Event::ValChange);
    }

    pub fn choose_radio(&mut self, ctrl: ControlId, index: usize) {
        self.dlg.radiobutton_set(ctrl, index);
        self.event(ctrl, Event::ValChange);
    }

    pub fn select(&mut self, ctrl: ControlId, index: usize) {
        self.dlg.listbox_select(ctrl, index);
        self.event(ctrl, Event::SelChange);
    }

    pub fn click(&mut self, ctrl: ControlId) {
        self.dlg.set_focus(ctrl);
        self.event(ctrl, Event::Action);
    }
}
