//! The control box: every control descriptor of one dialog, grouped into
//! panels and sets, plus the sibling handles composite handlers need.
//!
//! A box is built by [`crate::setup_config_box`], optionally extended by
//! platform add-ons, then [`ControlBox::finalize`]d. After that only
//! lookups are possible.

use confbox_config::integrity_fault;
use thiserror::Error;

use crate::control::{
    Control, ControlId, ControlKind, EditField, Handler, ListBoxSpec, ListOption, RadioButton,
};

/// Errors from the add-on extension operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("control box is finalized")]
    Finalized,

    #[error("control {0:?} is not of the expected kind")]
    WrongKind(ControlId),

    #[error("no such control {0:?}")]
    UnknownControl(ControlId),
}

/// A titled group of controls within a panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlSet {
    pub name: String,
    pub title: Option<String>,
    pub controls: Vec<ControlId>,
}

/// One panel of the dialog, named by a slash-separated path such as
/// `Connection/SSH/Tunnels`. The empty path is the button strip shown on
/// every panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
    pub path: String,
    pub title: Option<String>,
    pub sets: Vec<ControlSet>,
}

impl Panel {
    pub fn controls(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.sets.iter().flat_map(|s| s.controls.iter().copied())
    }
}

/// Where [`ControlBox::getset`] put a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRef {
    panel: usize,
    set: usize,
}

// ============================================================================
// Composite sibling handles
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionControls {
    pub editbox: ControlId,
    pub listbox: ControlId,
    pub load: Option<ControlId>,
    pub save: ControlId,
    pub delete: Option<ControlId>,
    pub ok: ControlId,
    pub cancel: ControlId,
    pub midsession: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostPortControls {
    pub host: ControlId,
    pub port: ControlId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClassControls {
    pub listbox: ControlId,
    pub editbox: ControlId,
    pub button: ControlId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourControls {
    pub listbox: ControlId,
    pub red: ControlId,
    pub green: ControlId,
    pub blue: ControlId,
    pub button: ControlId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtyModeControls {
    pub listbox: ControlId,
    pub valradio: ControlId,
    pub valbox: ControlId,
    pub setbutton: ControlId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironControls {
    pub varbox: ControlId,
    pub valbox: ControlId,
    pub add: ControlId,
    pub remove: ControlId,
    pub listbox: ControlId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortFwdControls {
    pub add: ControlId,
    pub remove: ControlId,
    pub listbox: ControlId,
    pub source: ControlId,
    pub destination: ControlId,
    pub direction: ControlId,
    pub family: ControlId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostKeyControls {
    pub add: ControlId,
    pub remove: ControlId,
    pub listbox: ControlId,
    pub keybox: ControlId,
}

/// Sibling handles of each composite present in the box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composites {
    pub session: Option<SessionControls>,
    pub host_port: Option<HostPortControls>,
    pub charclass: Option<CharClassControls>,
    pub colour: Option<ColourControls>,
    pub ttymodes: Option<TtyModeControls>,
    pub environ: Option<EnvironControls>,
    pub portfwd: Option<PortFwdControls>,
    pub hostkeys: Option<HostKeyControls>,
}

/// Unwrap a composite's handles; a handler attached without its composite
/// is a construction bug.
pub(crate) fn require<T: Copy>(handles: &Option<T>, what: &str) -> T {
    match handles {
        Some(h) => *h,
        None => integrity_fault(format!("{what} handler used without its controls")),
    }
}

// ============================================================================
// ControlBox
// ============================================================================

/// All controls of one dialog.
#[derive(Debug, Clone, Default)]
pub struct ControlBox {
    controls: Vec<Control>,
    panels: Vec<Panel>,
    pub composites: Composites,
    finalized: bool,
}

impl ControlBox {
    pub fn new() -> Self {
        Self::default()
    }

    fn panel_index(&mut self, path: &str) -> usize {
        if let Some(i) = self.panels.iter().position(|p| p.path == path) {
            return i;
        }
        self.panels.push(Panel {
            path: path.to_string(),
            ..Panel::default()
        });
        self.panels.len() - 1
    }

    /// Set a panel's title, creating the panel if needed.
    pub fn settitle(&mut self, path: &str, title: &str) {
        let i = self.panel_index(path);
        self.panels[i].title = Some(title.to_string());
    }

    /// Find or create the set `name` in panel `path`. A later call with a
    /// title fills in a set created without one.
    pub fn getset(&mut self, path: &str, name: &str, title: Option<&str>) -> SetRef {
        let panel = self.panel_index(path);
        let sets = &mut self.panels[panel].sets;
        let set = match sets.iter().position(|s| s.name == name) {
            Some(i) => i,
            None => {
                sets.push(ControlSet {
                    name: name.to_string(),
                    ..ControlSet::default()
                });
                sets.len() - 1
            }
        };
        if let Some(title) = title
            && sets[set].title.is_none()
        {
            sets[set].title = Some(title.to_string());
        }
        SetRef { panel, set }
    }

    /// Add a control to a set.
    pub fn add(&mut self, set: SetRef, control: Control) -> ControlId {
        if self.finalized {
            integrity_fault("control added to a finalized control box");
        }
        let id = ControlId(self.controls.len());
        self.controls.push(control);
        self.panels[set.panel].sets[set.set].controls.push(id);
        id
    }

    pub fn text(&mut self, set: SetRef, label: &str) -> ControlId {
        self.add(set, control(Some(label), ControlKind::Text, Handler::None))
    }

    pub fn radio(
        &mut self,
        set: SetRef,
        label: Option<&str>,
        buttons: &[(&str, i32)],
        handler: Handler,
    ) -> ControlId {
        let buttons = buttons
            .iter()
            .map(|(label, value)| RadioButton {
                label: (*label).to_string(),
                value: *value,
            })
            .collect();
        self.add(set, control(label, ControlKind::Radio { buttons }, handler))
    }

    pub fn checkbox(&mut self, set: SetRef, label: &str, handler: Handler) -> ControlId {
        self.add(set, control(Some(label), ControlKind::Checkbox, handler))
    }

    /// Checkbox bound directly to a boolean key.
    pub fn conf_checkbox(&mut self, set: SetRef, label: &str, key: confbox_config::ConfKey) -> ControlId {
        self.checkbox(set, label, Handler::Checkbox { key, invert: false })
    }

    pub fn editbox(&mut self, set: SetRef, label: Option<&str>, handler: Handler) -> ControlId {
        let kind = ControlKind::EditBox {
            password: false,
            has_list: false,
        };
        self.add(set, control(label, kind, handler))
    }

    /// Text field bound directly to a key.
    pub fn conf_editbox(&mut self, set: SetRef, label: &str, field: EditField) -> ControlId {
        self.editbox(set, Some(label), Handler::EditBox(field))
    }

    pub fn password(&mut self, set: SetRef, label: &str, handler: Handler) -> ControlId {
        let kind = ControlKind::EditBox {
            password: true,
            has_list: false,
        };
        self.add(set, control(Some(label), kind, handler))
    }

    /// Text field with a drop-down list of suggestions.
    pub fn combobox(&mut self, set: SetRef, label: &str, handler: Handler) -> ControlId {
        let kind = ControlKind::EditBox {
            password: false,
            has_list: true,
        };
        self.add(set, control(Some(label), kind, handler))
    }

    pub fn listbox(
        &mut self,
        set: SetRef,
        label: Option<&str>,
        spec: ListBoxSpec,
        handler: Handler,
    ) -> ControlId {
        self.add(set, control(label, ControlKind::ListBox(spec), handler))
    }

    /// Drop-down list with fixed options.
    pub fn droplist(
        &mut self,
        set: SetRef,
        label: &str,
        options: &[(&str, i32)],
        handler: Handler,
    ) -> ControlId {
        let spec = ListBoxSpec {
            dropdown: true,
            ncols: 1,
            height: 1,
            options: options
                .iter()
                .map(|(label, value)| ListOption {
                    label: (*label).to_string(),
                    value: *value,
                })
                .collect(),
            ..ListBoxSpec::default()
        };
        self.listbox(set, Some(label), spec, handler)
    }

    /// List whose rows the user reorders by dragging.
    pub fn draglist(&mut self, set: SetRef, label: &str, height: usize, handler: Handler) -> ControlId {
        let spec = ListBoxSpec {
            draggable: true,
            ncols: 1,
            height,
            ..ListBoxSpec::default()
        };
        self.listbox(set, Some(label), spec, handler)
    }

    pub fn filesel(&mut self, set: SetRef, label: &str, title: &str, for_writing: bool, handler: Handler) -> ControlId {
        let kind = ControlKind::FileSelect {
            title: title.to_string(),
            for_writing,
        };
        self.add(set, control(Some(label), kind, handler))
    }

    pub fn fontsel(&mut self, set: SetRef, label: &str, handler: Handler) -> ControlId {
        self.add(set, control(Some(label), ControlKind::FontSelect, handler))
    }

    pub fn button(&mut self, set: SetRef, label: &str, handler: Handler) -> ControlId {
        let kind = ControlKind::Button {
            is_default: false,
            is_cancel: false,
        };
        self.add(set, control(Some(label), kind, handler))
    }

    /// Push button that is activated by Enter (`is_default`) or Escape
    /// (`is_cancel`).
    pub fn dialog_button(
        &mut self,
        set: SetRef,
        label: &str,
        is_default: bool,
        is_cancel: bool,
        handler: Handler,
    ) -> ControlId {
        let kind = ControlKind::Button {
            is_default,
            is_cancel,
        };
        self.add(set, control(Some(label), kind, handler))
    }

    // ------------------------------------------------------------------------
    // Add-on extension point
    // ------------------------------------------------------------------------

    /// First control in panel `path` matching `predicate`.
    pub fn find_control(&self, path: &str, predicate: impl Fn(&Control) -> bool) -> Option<ControlId> {
        self.panel(path)?
            .controls()
            .find(|id| self.controls.get(id.0).is_some_and(&predicate))
    }

    /// Append a button to an existing radio group.
    pub fn append_radio_option(&mut self, ctrl: ControlId, label: &str, value: i32) -> Result<(), BuildError> {
        let control = self.extendable(ctrl)?;
        match &mut control.kind {
            ControlKind::Radio { buttons } => {
                buttons.push(RadioButton {
                    label: label.to_string(),
                    value,
                });
                Ok(())
            }
            _ => Err(BuildError::WrongKind(ctrl)),
        }
    }

    /// Append a fixed option to an existing list box.
    pub fn append_list_option(&mut self, ctrl: ControlId, label: &str, value: i32) -> Result<(), BuildError> {
        let control = self.extendable(ctrl)?;
        match &mut control.kind {
            ControlKind::ListBox(spec) => {
                spec.options.push(ListOption {
                    label: label.to_string(),
                    value,
                });
                Ok(())
            }
            _ => Err(BuildError::WrongKind(ctrl)),
        }
    }

    fn extendable(&mut self, ctrl: ControlId) -> Result<&mut Control, BuildError> {
        if self.finalized {
            return Err(BuildError::Finalized);
        }
        self.controls
            .get_mut(ctrl.0)
            .ok_or(BuildError::UnknownControl(ctrl))
    }

    /// Freeze the descriptors. Further extension attempts fail.
    pub fn finalize(&mut self) {
        self.finalized = true;
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    // ------------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------------

    pub fn get(&self, ctrl: ControlId) -> Option<&Control> {
        self.controls.get(ctrl.0)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Every control, in creation order.
    pub fn ids(&self) -> impl Iterator<Item = ControlId> + use<> {
        (0..self.controls.len()).map(ControlId)
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, path: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.path == path)
    }

    /// First control carrying `label`, searching every panel.
    pub fn find_by_label(&self, label: &str) -> Option<ControlId> {
        self.controls
            .iter()
            .position(|c| c.label.as_deref() == Some(label))
            .map(ControlId)
    }
}

fn control(label: Option<&str>, kind: ControlKind, handler: Handler) -> Control {
    Control {
        label: label.map(str::to_string),
        kind,
        handler,
    }
}
