//! Control descriptors and the handler table.
//!
//! A [`Control`] describes one widget: its kind, its label and which
//! [`Handler`] services its events. Descriptors are built once per dialog by
//! [`crate::ControlBox`] and are read-only once the box is finalized.

use confbox_config::{ConfKey, PreferenceKind};

/// Handle of one control inside a [`crate::ControlBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControlId(pub(crate) usize);

impl ControlId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One radio button: its label and the value it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioButton {
    pub label: String,
    pub value: i32,
}

/// One fixed list-box option, for drop-down lists whose rows come from the
/// descriptor rather than from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOption {
    pub label: String,
    pub value: i32,
}

/// List-box styles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBoxSpec {
    /// Rows can be reordered by dragging
    pub draggable: bool,
    /// Shown as a drop-down list rather than an open list
    pub dropdown: bool,
    pub multisel: bool,
    /// Number of tab-separated columns per row
    pub ncols: usize,
    /// Visible height in rows
    pub height: usize,
    pub options: Vec<ListOption>,
}

/// Widget kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    /// Static text
    Text,
    Radio { buttons: Vec<RadioButton> },
    Checkbox,
    /// Text field; with `has_list` it is a combo box
    EditBox { password: bool, has_list: bool },
    ListBox(ListBoxSpec),
    FileSelect { title: String, for_writing: bool },
    FontSelect,
    Button { is_default: bool, is_cancel: bool },
}

/// How a text field maps onto its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Str(ConfKey),
    Int(ConfKey),
    /// Integer shown divided by the scale, as a decimal
    Scaled(ConfKey, i32),
}

/// The handler servicing a control's events.
///
/// The set of handlers is closed: every control names one of these, and
/// [`crate::dispatch`] routes events with a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// No events of interest (static text, spacer buttons)
    None,
    Radio(ConfKey),
    Checkbox { key: ConfKey, invert: bool },
    EditBox(EditField),
    FileSelect(ConfKey),
    FontSelect(ConfKey),

    LoggingRadio,
    NumericKeypad,
    Printer,
    Codepage,
    SshBug(ConfKey),
    Protocol,
    Host,
    Port,

    SessionSaver,
    CharClass,
    Colour,
    TtyModes,
    Environment,
    PortForwards,
    ManualHostKeys,
    PrefList(PreferenceKind),
}

/// One control descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub label: Option<String>,
    pub kind: ControlKind,
    pub handler: Handler,
}

impl Control {
    /// Radio buttons, if this is a radio group.
    pub fn buttons(&self) -> &[RadioButton] {
        match &self.kind {
            ControlKind::Radio { buttons } => buttons,
            _ => &[],
        }
    }

    /// Fixed options, if this is a list box.
    pub fn list_options(&self) -> &[ListOption] {
        match &self.kind {
            ControlKind::ListBox(spec) => &spec.options,
            _ => &[],
        }
    }

    pub fn is_listbox(&self) -> bool {
        matches!(self.kind, ControlKind::ListBox(_))
    }
}
