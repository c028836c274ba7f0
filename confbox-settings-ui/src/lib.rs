//! Session configuration dialog for confbox.
//!
//! This crate describes the dialog as data and binds it to the
//! configuration store. It is decoupled from any GUI toolkit through
//! trait interfaces: a front end implements [`DialogOps`] and forwards
//! user events to [`ConfigDialog::dispatch`].
//!
//! - [`ControlBox`]: panels, sets and control descriptors
//! - [`setup_config_box`]: the standard panel tree
//! - [`addons`]: platform add-ons appended after the standard tree
//! - [`ConfigDialog`]: routes each event to the control's handler
//! - [`HeadlessDialog`]: an in-memory front end

// Trait interfaces for decoupling from the front end and storage
mod traits;
pub use traits::*;

// Control descriptors and the box that holds them
pub mod control;
pub mod controlbox;
pub use control::{
    Control, ControlId, ControlKind, EditField, Handler, ListBoxSpec, ListOption, RadioButton,
};
pub use controlbox::{BuildError, ControlBox, ControlSet, Panel, SetRef};

// Event routing and handlers
pub mod dispatch;
mod handlers;
pub use dispatch::{ConfigDialog, DialogState, Event, HandlerContext, SessionSaverState, dispatch};
pub use handlers::hostport::{
    COMMAND_LABEL, HOST_LABEL, PORT_IGNORED_LABEL, PORT_LABEL, SERIAL_LINE_LABEL, SPEED_LABEL,
};
pub use handlers::misc::PRINTER_DISABLED_STRING;

// Panel tree construction
pub mod addons;
pub mod setup;
pub use setup::{DialogMode, setup_config_box};

// Numeric text helpers shared by the handlers
pub mod numeric;

// Toolkit-free front end and in-memory storage
pub mod headless;
pub use headless::{HeadlessDialog, MemorySessionStorage};

#[cfg(test)]
pub(crate) mod testutil;
