//! Trait definitions for dialog dependencies.
//!
//! These traits define the interface between the dialog core and whatever
//! hosts it: the widget toolkit, session storage, the protocol backends and
//! a few validation helpers. The hosting crate implements them and hands
//! them to [`crate::ConfigDialog`].

use confbox_config::{Conf, Filename, FontSpec};

use crate::control::ControlId;

/// How the dialog ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    /// Open (new session) or Apply (mid-session)
    Accept,
    Cancel,
}

/// Widget operations.
///
/// Implemented by the toolkit layer. Every operation addresses one control
/// by its [`ControlId`]; list indices are zero-based rows.
pub trait DialogOps {
    fn radiobutton_set(&mut self, ctrl: ControlId, index: usize);
    fn radiobutton_get(&self, ctrl: ControlId) -> usize;

    fn checkbox_set(&mut self, ctrl: ControlId, checked: bool);
    fn checkbox_get(&self, ctrl: ControlId) -> bool;

    fn editbox_set(&mut self, ctrl: ControlId, text: &str);
    fn editbox_get(&self, ctrl: ControlId) -> String;

    fn listbox_clear(&mut self, ctrl: ControlId);
    fn listbox_del(&mut self, ctrl: ControlId, index: usize);
    fn listbox_add(&mut self, ctrl: ControlId, text: &str);
    /// Add a row tagged with an integer the handler can read back.
    fn listbox_add_with_id(&mut self, ctrl: ControlId, text: &str, id: i32);
    fn listbox_getid(&self, ctrl: ControlId, index: usize) -> i32;
    fn listbox_count(&self, ctrl: ControlId) -> usize;
    /// The single selected row, or `None` if nothing (or more than one row)
    /// is selected.
    fn listbox_index(&self, ctrl: ControlId) -> Option<usize>;
    fn listbox_issel(&self, ctrl: ControlId, index: usize) -> bool;
    fn listbox_select(&mut self, ctrl: ControlId, index: usize);

    /// Change the visible label of a control.
    fn label_change(&mut self, ctrl: ControlId, label: &str);

    fn filesel_set(&mut self, ctrl: ControlId, file: &Filename);
    fn filesel_get(&self, ctrl: ControlId) -> Filename;
    fn fontsel_set(&mut self, ctrl: ControlId, font: &FontSpec);
    fn fontsel_get(&self, ctrl: ControlId) -> FontSpec;

    /// Begin a batch of list writes. Selection-change notifications caused
    /// by the batch are suppressed until [`DialogOps::update_done`].
    fn update_start(&mut self, ctrl: ControlId);
    fn update_done(&mut self, ctrl: ControlId);

    fn set_focus(&mut self, ctrl: ControlId);
    /// The control that had focus before `ctrl` received it.
    fn last_focused(&self, ctrl: ControlId) -> Option<ControlId>;

    /// Show a modal error message.
    fn error_msg(&mut self, msg: &str);
    /// Signal an invalid action without a message.
    fn beep(&mut self);
    /// Close the dialog.
    fn end(&mut self, result: DialogResult);

    /// Open a colour picker seeded with `rgb`. The toolkit later delivers a
    /// [`crate::Event::Callback`] to `ctrl`.
    fn coloursel_start(&mut self, ctrl: ControlId, rgb: [i32; 3]);
    /// The picker's result, or `None` if the user cancelled it.
    fn coloursel_results(&mut self, ctrl: ControlId) -> Option<[i32; 3]>;
}

/// Saved-session storage.
///
/// The empty name is the default-settings entry.
pub trait SessionStorage {
    /// Load a session. Loading the empty name yields the defaults.
    fn load(&self, name: &str) -> anyhow::Result<Conf>;

    /// Save a session, replacing any existing one of the same name
    fn save(&mut self, name: &str, conf: &Conf) -> anyhow::Result<()>;

    fn delete(&mut self, name: &str) -> anyhow::Result<()>;

    /// Session names in display order. With `include_default`, the
    /// default-settings entry ([`confbox_config::DEFAULT_SESSION_NAME`])
    /// comes first.
    fn enumerate(&self, include_default: bool) -> anyhow::Result<Vec<String>>;
}

/// Protocol backend registry.
pub trait BackendRegistry {
    /// Default port of a registered protocol
    fn default_port(&self, protocol: i32) -> Option<i32>;

    fn is_registered(&self, protocol: i32) -> bool {
        self.default_port(protocol).is_some()
    }

    /// Whether `conf` holds enough to start a connection.
    fn is_launchable(&self, conf: &Conf) -> bool;
}

/// Manual host-key format check.
pub trait HostKeyValidator {
    /// Canonical form of `text`, or `None` if it is not a host key or
    /// fingerprint in an accepted format.
    fn validate(&self, text: &str) -> Option<String>;
}

/// Line codepages.
pub trait CodepageOps {
    /// Codepage names for the drop-down list
    fn enumerate(&self) -> Vec<String>;

    /// Canonical name for whatever the user typed.
    fn canonicalize(&self, name: &str) -> String;
}

/// Printer enumeration.
pub trait PrinterOps {
    fn enumerate(&self) -> Vec<String>;
}

/// Collaborators the handlers reach through the dispatch context.
pub struct Services {
    pub storage: Box<dyn SessionStorage>,
    pub backends: Box<dyn BackendRegistry>,
    pub hostkeys: Box<dyn HostKeyValidator>,
    pub codepages: Box<dyn CodepageOps>,
    pub printers: Box<dyn PrinterOps>,
}
