//! The protocol radio and the host and port fields whose meaning follows it.

use confbox_config::options::{PROT_CYGTERM, PROT_SERIAL};
use confbox_config::{ConfKey, integrity_fault};

use super::{button_index, selected_button_value};
use crate::control::{Control, ControlId};
use crate::controlbox::require;
use crate::dispatch::{Event, HandlerContext};
use crate::numeric::atoi;

pub const HOST_LABEL: &str = "Host Name (or IP address)";
pub const SERIAL_LINE_LABEL: &str = "Serial line";
pub const COMMAND_LABEL: &str = "Command (use - for login shell)";
pub const PORT_LABEL: &str = "Port";
pub const SPEED_LABEL: &str = "Speed";
pub const PORT_IGNORED_LABEL: &str = "Port (ignored)";

pub(crate) fn host(ctx: &mut HandlerContext<'_>, ctrl: ControlId, event: Event) {
    let (label, key) = match ctx.conf.get_int(ConfKey::Protocol) {
        PROT_SERIAL => (SERIAL_LINE_LABEL, ConfKey::SerLine),
        PROT_CYGTERM => (COMMAND_LABEL, ConfKey::CygCmd),
        _ => (HOST_LABEL, ConfKey::Host),
    };
    match event {
        Event::Refresh => {
            let text = ctx.conf.get_str(key).to_string();
            ctx.dlg.label_change(ctrl, label);
            ctx.dlg.editbox_set(ctrl, &text);
        }
        Event::ValChange => {
            let text = ctx.dlg.editbox_get(ctrl);
            ctx.conf.set_str(key, text);
        }
        _ => {}
    }
}

pub(crate) fn port(ctx: &mut HandlerContext<'_>, ctrl: ControlId, event: Event) {
    let protocol = ctx.conf.get_int(ConfKey::Protocol);
    match event {
        Event::Refresh => {
            let (label, text) = match protocol {
                PROT_SERIAL => (SPEED_LABEL, ctx.conf.get_int(ConfKey::SerSpeed).to_string()),
                PROT_CYGTERM => (PORT_IGNORED_LABEL, "-".to_string()),
                _ => {
                    let port = ctx.conf.get_int(ConfKey::Port);
                    let text = if port == 0 { String::new() } else { port.to_string() };
                    (PORT_LABEL, text)
                }
            };
            ctx.dlg.label_change(ctrl, label);
            ctx.dlg.editbox_set(ctrl, &text);
        }
        Event::ValChange => {
            let text = ctx.dlg.editbox_get(ctrl);
            match protocol {
                PROT_SERIAL => ctx.conf.set_int(ConfKey::SerSpeed, atoi(&text)),
                PROT_CYGTERM => {}
                _ => ctx.conf.set_int(ConfKey::Port, atoi(&text)),
            }
        }
        _ => {}
    }
}

/// Protocol radio. Switching protocol carries the port over to the new
/// protocol's default if it was still at the old protocol's default.
pub(crate) fn protocol(ctx: &mut HandlerContext<'_>, control: &Control, ctrl: ControlId, event: Event) {
    match event {
        Event::Refresh => {
            let value = ctx.conf.get_int(ConfKey::Protocol);
            let Some(index) = button_index(control, value) else {
                integrity_fault(format!("protocol {value} has no button in radio {ctrl:?}"));
            };
            ctx.dlg.radiobutton_set(ctrl, index);
        }
        Event::ValChange => {
            let old = ctx.conf.get_int(ConfKey::Protocol);
            let new = selected_button_value(ctx, control, ctrl);
            ctx.conf.set_int(ConfKey::Protocol, new);

            if old != new {
                let backends = &ctx.services.backends;
                let (Some(old_default), Some(new_default)) =
                    (backends.default_port(old), backends.default_port(new))
                else {
                    integrity_fault(format!("protocol switch {old} -> {new} involves an unregistered backend"));
                };
                if ctx.conf.get_int(ConfKey::Port) == old_default {
                    log::debug!("Port follows protocol default: {old_default} -> {new_default}");
                    ctx.conf.set_int(ConfKey::Port, new_default);
                }
            }

            let hp = require(&ctx.controls.composites.host_port, "protocol");
            ctx.refresh(hp.host);
            ctx.refresh(hp.port);
        }
        _ => {}
    }
}
