//! Headless session editing.
//!
//! A [`SessionEditor`] opens one saved session in a full new-session dialog
//! backed by a [`HeadlessDialog`] and edits it by operating the dialog's
//! controls: typing into fields, choosing radio buttons and pressing
//! buttons. Every change therefore goes through the same handlers a
//! graphical front end would trigger.

use std::fmt::Write as _;

use confbox_config::{AddressFamily, Conf, DEFAULT_SESSION_NAME, Direction};
use confbox_settings_ui::addons::bell_setup_config_box;
use confbox_settings_ui::controlbox::SessionControls;
use confbox_settings_ui::{
    ConfigDialog, ControlBox, ControlId, ControlKind, DialogMode, DialogOps, Event, HeadlessDialog,
    setup_config_box,
};
use confbox_ssh::BackendTable;
use thiserror::Error;

use crate::services::{StaticBackends, default_services};
use crate::session_store::FileSessionStorage;

/// Why an edit did not go through.
#[derive(Debug, Error)]
pub enum EditError {
    /// The dialog showed an error message
    #[error("{0}")]
    Rejected(String),

    /// The dialog beeped
    #[error("{0}: not accepted")]
    Beeped(&'static str),

    #[error("no {what} matching {key:?}")]
    NotFound { what: &'static str, key: String },

    #[error("the dialog has no {0} controls")]
    Unavailable(&'static str),
}

/// Storage name for a session as the user refers to it: the default entry
/// is the empty name.
pub fn storage_name(name: &str) -> &str {
    if name == DEFAULT_SESSION_NAME { "" } else { name }
}

/// Display name for a storage name.
pub fn display_name(name: &str) -> &str {
    if name.is_empty() { DEFAULT_SESSION_NAME } else { name }
}

pub struct SessionEditor {
    dialog: ConfigDialog,
    dlg: HeadlessDialog,
    conf: Conf,
    loaded: Conf,
    name: String,
}

impl SessionEditor {
    /// Build the dialog over `storage` without loading anything. The
    /// dialog shows the built-in defaults.
    pub fn new(storage: FileSessionStorage, backends: &BackendTable) -> anyhow::Result<Self> {
        let mut controls = setup_config_box(DialogMode::NewSession, &StaticBackends::new(backends.clone()));
        bell_setup_config_box(&mut controls)?;

        let mut dialog = ConfigDialog::new(controls, default_services(storage, backends));
        let mut dlg = HeadlessDialog::new();
        let mut conf = Conf::default();
        dialog.refresh_all(&mut dlg, &mut conf);
        Ok(Self {
            dialog,
            dlg,
            loaded: conf.clone(),
            conf,
            name: String::new(),
        })
    }

    /// Open the session with storage name `name` by selecting it in the
    /// saved-session list and pressing Load.
    pub fn open(storage: FileSessionStorage, backends: &BackendTable, name: &str) -> anyhow::Result<Self> {
        let mut editor = Self::new(storage, backends)?;
        let ssd = editor.session_controls()?;
        let index = editor.session_row(name)?;
        editor.dlg.listbox_select(ssd.listbox, index);
        if let Some(load) = ssd.load {
            editor.press(load);
        }
        editor.check_feedback("load")?;
        editor.loaded = editor.conf.clone();
        editor.name = name.to_string();
        log::info!("Editing session {:?}", display_name(name));
        Ok(editor)
    }

    pub fn conf(&self) -> &Conf {
        &self.conf
    }

    pub fn controls(&self) -> &ControlBox {
        self.dialog.controls()
    }

    pub fn dialog(&self) -> &HeadlessDialog {
        &self.dlg
    }

    /// Whether the settings differ from what was loaded.
    pub fn is_modified(&self) -> bool {
        self.conf != self.loaded
    }

    // ------------------------------------------------------------------------
    // Control operation
    // ------------------------------------------------------------------------

    fn event(&mut self, ctrl: ControlId, event: Event) {
        self.dialog.dispatch(&mut self.dlg, &mut self.conf, ctrl, event);
    }

    fn press(&mut self, ctrl: ControlId) {
        self.dlg.set_focus(ctrl);
        self.event(ctrl, Event::Action);
    }

    fn type_text(&mut self, ctrl: ControlId, text: &str) {
        self.dlg.editbox_set(ctrl, text);
        self.event(ctrl, Event::ValChange);
    }

    fn choose(&mut self, ctrl: ControlId, index: usize) {
        self.dlg.radiobutton_set(ctrl, index);
        self.event(ctrl, Event::ValChange);
    }

    /// Turn recorded messages and beeps into an error, then forget them.
    fn check_feedback(&mut self, what: &'static str) -> Result<(), EditError> {
        let result = if !self.dlg.errors().is_empty() {
            Err(EditError::Rejected(self.dlg.errors().join("\n")))
        } else if self.dlg.beeps() > 0 {
            Err(EditError::Beeped(what))
        } else {
            Ok(())
        };
        self.dlg.clear_feedback();
        result
    }

    /// Select the row of `list` whose first column is `key`.
    fn select_row(&mut self, list: ControlId, what: &'static str, key: &str) -> Result<(), EditError> {
        let index = self
            .dlg
            .rows(list)
            .iter()
            .position(|row| row.split('\t').next() == Some(key))
            .ok_or_else(|| EditError::NotFound {
                what,
                key: key.to_string(),
            })?;
        self.dlg.listbox_select(list, index);
        Ok(())
    }

    fn session_controls(&self) -> Result<SessionControls, EditError> {
        self.controls()
            .composites
            .session
            .ok_or(EditError::Unavailable("saved session"))
    }

    fn session_row(&self, name: &str) -> Result<usize, EditError> {
        let ssd = self.session_controls()?;
        let shown = display_name(name);
        self.dlg
            .rows(ssd.listbox)
            .iter()
            .position(|row| row == shown)
            .ok_or_else(|| EditError::NotFound {
                what: "saved session",
                key: shown.to_string(),
            })
    }

    // ------------------------------------------------------------------------
    // Saved sessions
    // ------------------------------------------------------------------------

    /// Names shown in the saved-session list.
    pub fn session_names(&self) -> Vec<String> {
        match self.controls().composites.session {
            Some(ssd) => self.dlg.rows(ssd.listbox),
            None => Vec::new(),
        }
    }

    /// Save the settings under the name they were opened with, if they
    /// changed. Returns whether anything was written.
    pub fn save_if_modified(&mut self) -> Result<bool, EditError> {
        if !self.is_modified() {
            return Ok(false);
        }
        let ssd = self.session_controls()?;
        let name = self.name.clone();
        // An empty name selects the default entry, which Save then uses.
        self.type_text(ssd.editbox, &name);
        self.press(ssd.save);
        self.check_feedback("save")?;
        self.loaded = self.conf.clone();
        Ok(true)
    }

    /// Delete a saved session through the Delete button.
    pub fn delete_session(&mut self, name: &str) -> Result<(), EditError> {
        let ssd = self.session_controls()?;
        let delete = ssd.delete.ok_or(EditError::Unavailable("delete"))?;
        let index = self.session_row(name)?;
        self.dlg.listbox_select(ssd.listbox, index);
        self.press(delete);
        self.check_feedback("delete")
    }

    // ------------------------------------------------------------------------
    // Compound settings
    // ------------------------------------------------------------------------

    pub fn port_forwards(&self) -> Vec<String> {
        self.rows_of(self.controls().composites.portfwd.map(|p| p.listbox))
    }

    pub fn add_port_forward(
        &mut self,
        direction: Direction,
        family: AddressFamily,
        source: &str,
        destination: &str,
    ) -> Result<(), EditError> {
        let pfd = self.controls().composites.portfwd.ok_or(EditError::Unavailable("port forwarding"))?;
        self.choose(pfd.direction, direction.radio_index());
        self.choose(pfd.family, family.radio_index());
        self.type_text(pfd.source, source);
        self.type_text(pfd.destination, destination);
        self.press(pfd.add);
        self.check_feedback("port forward")
    }

    /// Remove the forward shown as `key` (e.g. `L8080`, `6D1080`).
    pub fn remove_port_forward(&mut self, key: &str) -> Result<(), EditError> {
        let pfd = self.controls().composites.portfwd.ok_or(EditError::Unavailable("port forwarding"))?;
        self.select_row(pfd.listbox, "port forward", key)?;
        self.press(pfd.remove);
        self.check_feedback("port forward")
    }

    pub fn environment(&self) -> Vec<String> {
        self.rows_of(self.controls().composites.environ.map(|e| e.listbox))
    }

    pub fn set_env(&mut self, var: &str, value: &str) -> Result<(), EditError> {
        let ed = self.controls().composites.environ.ok_or(EditError::Unavailable("environment"))?;
        self.type_text(ed.varbox, var);
        self.type_text(ed.valbox, value);
        self.press(ed.add);
        self.check_feedback("environment variable")
    }

    pub fn remove_env(&mut self, var: &str) -> Result<(), EditError> {
        let ed = self.controls().composites.environ.ok_or(EditError::Unavailable("environment"))?;
        self.select_row(ed.listbox, "environment variable", var)?;
        self.press(ed.remove);
        self.check_feedback("environment variable")
    }

    pub fn host_keys(&self) -> Vec<String> {
        self.rows_of(self.controls().composites.hostkeys.map(|h| h.listbox))
    }

    pub fn add_host_key(&mut self, key: &str) -> Result<(), EditError> {
        let mh = self.controls().composites.hostkeys.ok_or(EditError::Unavailable("host key"))?;
        self.type_text(mh.keybox, key);
        self.press(mh.add);
        self.check_feedback("host key")
    }

    /// Remove a host key, given either as listed or in any accepted form.
    pub fn remove_host_key(&mut self, key: &str) -> Result<(), EditError> {
        let mh = self.controls().composites.hostkeys.ok_or(EditError::Unavailable("host key"))?;
        let canonical = confbox_ssh::validate_manual_hostkey(key).unwrap_or_else(|| key.trim().to_string());
        self.select_row(mh.listbox, "host key", &canonical)?;
        self.press(mh.remove);
        self.check_feedback("host key")
    }

    fn rows_of(&self, list: Option<ControlId>) -> Vec<String> {
        list.map(|l| self.dlg.rows(l)).unwrap_or_default()
    }

    // ------------------------------------------------------------------------
    // Display
    // ------------------------------------------------------------------------

    /// Every panel under `prefix` (all panels if `None`) with each control's
    /// displayed state.
    pub fn render(&self, prefix: Option<&str>) -> Result<String, EditError> {
        let mut out = String::new();
        let mut shown = 0;
        for panel in self.controls().panels() {
            // The button strip.
            if panel.path.is_empty() {
                continue;
            }
            if let Some(prefix) = prefix
                && panel.path != prefix
                && !panel.path.starts_with(&format!("{prefix}/"))
            {
                continue;
            }
            shown += 1;
            match &panel.title {
                Some(title) => {
                    let _ = writeln!(out, "[{}] {}", panel.path, title);
                }
                None => {
                    let _ = writeln!(out, "[{}]", panel.path);
                }
            }
            for ctrl in panel.controls() {
                self.render_control(&mut out, ctrl);
            }
            out.push('\n');
        }
        if shown == 0 {
            return Err(EditError::NotFound {
                what: "panel",
                key: prefix.unwrap_or_default().to_string(),
            });
        }
        Ok(out)
    }

    fn render_control(&self, out: &mut String, ctrl: ControlId) {
        let Some(control) = self.controls().get(ctrl) else {
            return;
        };
        let label = self
            .dlg
            .label(ctrl)
            .or_else(|| control.label.clone())
            .unwrap_or_default();
        let _ = match &control.kind {
            ControlKind::Text => writeln!(out, "  {label}"),
            ControlKind::Button { .. } => Ok(()),
            ControlKind::Checkbox => {
                let mark = if self.dlg.checked(ctrl) { 'x' } else { ' ' };
                writeln!(out, "  [{mark}] {label}")
            }
            ControlKind::Radio { buttons } => {
                let chosen = buttons
                    .get(self.dlg.radio(ctrl))
                    .map(|b| b.label.as_str())
                    .unwrap_or_default();
                writeln!(out, "  {label} ({chosen})")
            }
            ControlKind::EditBox { password: true, .. } => {
                let masked = if self.dlg.text(ctrl).is_empty() { "" } else { "********" };
                writeln!(out, "  {label} {masked}")
            }
            ControlKind::EditBox { .. } => writeln!(out, "  {label} {}", self.dlg.text(ctrl)),
            ControlKind::ListBox(spec) if spec.dropdown => {
                let rows = self.dlg.rows(ctrl);
                let chosen = self
                    .dlg
                    .selection(ctrl)
                    .and_then(|i| rows.get(i))
                    .cloned()
                    .unwrap_or_default();
                writeln!(out, "  {label} {chosen}")
            }
            ControlKind::ListBox(_) => {
                let mut r = writeln!(out, "  {label}");
                for row in self.dlg.rows(ctrl) {
                    r = r.and(writeln!(out, "    {}", row.replace('\t', "  ")));
                }
                r
            }
            ControlKind::FileSelect { .. } => writeln!(out, "  {label} {}", self.dlg.filename(ctrl)),
            ControlKind::FontSelect => writeln!(out, "  {label} {}", self.dlg.font(ctrl)),
        };
    }
}
