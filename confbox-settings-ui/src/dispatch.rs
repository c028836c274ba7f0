//! Event dispatch.
//!
//! The toolkit reports each user action as an [`Event`] on one control.
//! [`dispatch`] looks up the control's [`Handler`] and runs it with a
//! [`HandlerContext`] carrying everything a handler may touch: the control
//! descriptors, the widgets, the live configuration, per-dialog scratch state
//! and the collaborators.

use confbox_config::{Conf, integrity_fault};

use crate::control::{ControlId, Handler};
use crate::controlbox::ControlBox;
use crate::handlers;
use crate::traits::{DialogOps, Services};

/// Events delivered to a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Load the widget from the configuration
    Refresh,
    /// The widget's value changed
    ValChange,
    /// A list selection changed
    SelChange,
    /// Button press or list double-click
    Action,
    /// An asynchronous helper (the colour picker) finished
    Callback,
}

/// Per-dialog scratch state for the session saver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSaverState {
    /// Session names shown in the list, default entry first
    pub sessions: Vec<String>,
    /// Contents of the name field
    pub saved_session: String,
}

/// Scratch state owned by one dialog instance. Created empty and filled in
/// by the first event that needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogState {
    pub session: Option<SessionSaverState>,
}

/// Everything a handler works with during one dispatch.
pub struct HandlerContext<'a> {
    pub controls: &'a ControlBox,
    pub dlg: &'a mut dyn DialogOps,
    pub conf: &'a mut Conf,
    pub state: &'a mut DialogState,
    pub services: &'a mut Services,
}

impl HandlerContext<'_> {
    /// Reload one control from the configuration.
    pub fn refresh(&mut self, ctrl: ControlId) {
        dispatch(self, ctrl, Event::Refresh);
    }

    /// Reload every control.
    pub fn refresh_all(&mut self) {
        for ctrl in self.controls.ids() {
            dispatch(self, ctrl, Event::Refresh);
        }
    }
}

/// Route `event` on `ctrl` to its handler.
pub fn dispatch(ctx: &mut HandlerContext<'_>, ctrl: ControlId, event: Event) {
    let controls = ctx.controls;
    let Some(control) = controls.get(ctrl) else {
        integrity_fault(format!("event {event:?} for unknown control {ctrl:?}"));
    };
    if event != Event::Refresh {
        log::debug!("{event:?} on {ctrl:?} ({:?})", control.handler);
    }

    match control.handler {
        Handler::None => {}
        Handler::Radio(key) => handlers::standard::radio(ctx, control, ctrl, event, key),
        Handler::Checkbox { key, invert } => {
            handlers::standard::checkbox(ctx, ctrl, event, key, invert)
        }
        Handler::EditBox(field) => handlers::standard::editbox(ctx, ctrl, event, field),
        Handler::FileSelect(key) => handlers::standard::filesel(ctx, ctrl, event, key),
        Handler::FontSelect(key) => handlers::standard::fontsel(ctx, ctrl, event, key),

        Handler::LoggingRadio => handlers::misc::logging(ctx, control, ctrl, event),
        Handler::NumericKeypad => handlers::misc::numeric_keypad(ctx, ctrl, event),
        Handler::Printer => handlers::misc::printer(ctx, control, ctrl, event),
        Handler::Codepage => handlers::misc::codepage(ctx, ctrl, event),
        Handler::SshBug(key) => handlers::misc::sshbug(ctx, control, ctrl, event, key),
        Handler::Protocol => handlers::hostport::protocol(ctx, control, ctrl, event),
        Handler::Host => handlers::hostport::host(ctx, ctrl, event),
        Handler::Port => handlers::hostport::port(ctx, ctrl, event),

        Handler::SessionSaver => handlers::session::handle(ctx, ctrl, event),
        Handler::CharClass => handlers::charclass::handle(ctx, ctrl, event),
        Handler::Colour => handlers::colour::handle(ctx, ctrl, event),
        Handler::TtyModes => handlers::ttymodes::handle(ctx, ctrl, event),
        Handler::Environment => handlers::environ::handle(ctx, ctrl, event),
        Handler::PortForwards => handlers::portfwd::handle(ctx, ctrl, event),
        Handler::ManualHostKeys => handlers::hostkeys::handle(ctx, ctrl, event),
        Handler::PrefList(kind) => handlers::prefs::handle(ctx, ctrl, event, kind),
    }
}

/// A configuration dialog: its controls, its scratch state and its
/// collaborators. The live configuration and the widgets are passed in on
/// each call.
pub struct ConfigDialog {
    controls: ControlBox,
    state: DialogState,
    services: Services,
}

impl ConfigDialog {
    /// Wrap a built control box. The box is finalized if it was not already.
    pub fn new(mut controls: ControlBox, services: Services) -> Self {
        controls.finalize();
        Self {
            controls,
            state: DialogState::default(),
            services,
        }
    }

    pub fn dispatch(&mut self, dlg: &mut dyn DialogOps, conf: &mut Conf, ctrl: ControlId, event: Event) {
        let mut ctx = HandlerContext {
            controls: &self.controls,
            dlg,
            conf,
            state: &mut self.state,
            services: &mut self.services,
        };
        dispatch(&mut ctx, ctrl, event);
    }

    /// Load every control from `conf`, as when the dialog is first shown.
    pub fn refresh_all(&mut self, dlg: &mut dyn DialogOps, conf: &mut Conf) {
        let mut ctx = HandlerContext {
            controls: &self.controls,
            dlg,
            conf,
            state: &mut self.state,
            services: &mut self.services,
        };
        ctx.refresh_all();
    }

    pub fn controls(&self) -> &ControlBox {
        &self.controls
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn services_mut(&mut self) -> &mut Services {
        &mut self.services
    }
}
