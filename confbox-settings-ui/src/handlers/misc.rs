//! Single-control handlers with more logic than a plain key binding.

use confbox_config::ConfKey;
use confbox_config::options::{AUTO, LGTYP_NONE};

use super::{button_index, selected_button_value};
use crate::control::{Control, ControlId, ControlKind};
use crate::dispatch::{Event, HandlerContext};

/// Printer list entry standing for "no printer".
pub const PRINTER_DISABLED_STRING: &str = "None (printing disabled)";

/// Logging-type radio. A stored type with no button (packet logging in a
/// build without SSH) falls back to no logging.
pub(crate) fn logging(ctx: &mut HandlerContext<'_>, control: &Control, ctrl: ControlId, event: Event) {
    match event {
        Event::Refresh => {
            let value = ctx.conf.get_int(ConfKey::LogType);
            let index = match button_index(control, value) {
                Some(index) => index,
                None => {
                    log::warn!("Logging type {value} not offered here, switching logging off");
                    ctx.conf.set_int(ConfKey::LogType, LGTYP_NONE);
                    0
                }
            };
            ctx.dlg.radiobutton_set(ctrl, index);
        }
        Event::ValChange => {
            let value = selected_button_value(ctx, control, ctrl);
            ctx.conf.set_int(ConfKey::LogType, value);
        }
        _ => {}
    }
}

/// Keypad radio: Normal, Application, NetHack. Two keys back it.
pub(crate) fn numeric_keypad(ctx: &mut HandlerContext<'_>, ctrl: ControlId, event: Event) {
    match event {
        Event::Refresh => {
            let index = if ctx.conf.get_bool(ConfKey::NethackKeypad) {
                2
            } else if ctx.conf.get_bool(ConfKey::AppKeypad) {
                1
            } else {
                0
            };
            ctx.dlg.radiobutton_set(ctrl, index);
        }
        Event::ValChange => {
            let index = ctx.dlg.radiobutton_get(ctrl);
            if index == 2 {
                ctx.conf.set_bool(ConfKey::AppKeypad, false);
                ctx.conf.set_bool(ConfKey::NethackKeypad, true);
            } else {
                ctx.conf.set_bool(ConfKey::AppKeypad, index != 0);
                ctx.conf.set_bool(ConfKey::NethackKeypad, false);
            }
        }
        _ => {}
    }
}

pub(crate) fn printer(ctx: &mut HandlerContext<'_>, control: &Control, ctrl: ControlId, event: Event) {
    match event {
        Event::Refresh => {
            ctx.dlg.update_start(ctrl);
            // A host may drop the drop-down part of this field.
            if let ControlKind::EditBox { has_list: true, .. } = control.kind {
                ctx.dlg.listbox_clear(ctrl);
                ctx.dlg.listbox_add(ctrl, PRINTER_DISABLED_STRING);
                for name in ctx.services.printers.enumerate() {
                    ctx.dlg.listbox_add(ctrl, &name);
                }
            }
            let printer = match ctx.conf.get_str(ConfKey::Printer) {
                "" => PRINTER_DISABLED_STRING.to_string(),
                name => name.to_string(),
            };
            ctx.dlg.editbox_set(ctrl, &printer);
            ctx.dlg.update_done(ctrl);
        }
        Event::ValChange => {
            let mut printer = ctx.dlg.editbox_get(ctrl);
            if printer == PRINTER_DISABLED_STRING {
                printer.clear();
            }
            ctx.conf.set_str(ConfKey::Printer, printer);
        }
        _ => {}
    }
}

/// Codepage combo box. Refresh writes the canonical name back.
pub(crate) fn codepage(ctx: &mut HandlerContext<'_>, ctrl: ControlId, event: Event) {
    match event {
        Event::Refresh => {
            ctx.dlg.update_start(ctrl);
            let canonical = ctx
                .services
                .codepages
                .canonicalize(ctx.conf.get_str(ConfKey::LineCodepage));
            ctx.dlg.listbox_clear(ctrl);
            for name in ctx.services.codepages.enumerate() {
                ctx.dlg.listbox_add(ctrl, &name);
            }
            ctx.dlg.editbox_set(ctrl, &canonical);
            ctx.conf.set_str(ConfKey::LineCodepage, canonical);
            ctx.dlg.update_done(ctrl);
        }
        Event::ValChange => {
            let typed = ctx.dlg.editbox_get(ctrl);
            let canonical = ctx.services.codepages.canonicalize(&typed);
            ctx.conf.set_str(ConfKey::LineCodepage, canonical);
        }
        _ => {}
    }
}

/// SSH bug-compatibility drop list. Options come from the descriptor.
pub(crate) fn sshbug(ctx: &mut HandlerContext<'_>, control: &Control, ctrl: ControlId, event: Event, key: ConfKey) {
    match event {
        Event::Refresh => {
            // Read before repopulating: the list writes may report a
            // selection change that would overwrite it.
            let stored = ctx.conf.get_int(key);
            ctx.dlg.update_start(ctrl);
            ctx.dlg.listbox_clear(ctrl);
            for option in control.list_options() {
                ctx.dlg.listbox_add_with_id(ctrl, &option.label, option.value);
            }
            if let Some(index) = control.list_options().iter().position(|o| o.value == stored) {
                ctx.dlg.listbox_select(ctrl, index);
            }
            ctx.dlg.update_done(ctrl);
        }
        Event::SelChange => {
            let value = match ctx.dlg.listbox_index(ctrl) {
                Some(index) => ctx.dlg.listbox_getid(ctrl, index),
                None => AUTO,
            };
            ctx.conf.set_int(key, value);
        }
        _ => {}
    }
}
