//! Port forwarding table: the forward list, source and destination fields,
//! direction and address-family radios, and Add / Remove buttons.

use confbox_config::portfwd::display_row;
use confbox_config::{AddressFamily, ConfKey, Direction, PortForward};

use crate::control::ControlId;
use crate::controlbox::{PortFwdControls, require};
use crate::dispatch::{Event, HandlerContext};

pub(crate) fn handle(ctx: &mut HandlerContext<'_>, ctrl: ControlId, event: Event) {
    let pfd = require(&ctx.controls.composites.portfwd, "port forwarding");
    match event {
        Event::Refresh if ctrl == pfd.listbox => {
            let rows: Vec<String> = ctx
                .conf
                .str_map(ConfKey::PortFwd)
                .iter()
                .map(|(key, value)| display_row(key, value))
                .collect();
            super::fill_list(ctx, ctrl, rows);
        }
        // Local, automatic family.
        Event::Refresh if ctrl == pfd.direction || ctrl == pfd.family => {
            ctx.dlg.radiobutton_set(ctrl, 0);
        }
        Event::Action if ctrl == pfd.add => add(ctx, &pfd),
        Event::Action if ctrl == pfd.remove => remove(ctx, &pfd),
        _ => {}
    }
}

fn add(ctx: &mut HandlerContext<'_>, pfd: &PortFwdControls) {
    let direction = Direction::from_radio_index(ctx.dlg.radiobutton_get(pfd.direction));
    let fwd = PortForward {
        family: AddressFamily::from_radio_index(ctx.dlg.radiobutton_get(pfd.family)),
        direction,
        source: ctx.dlg.editbox_get(pfd.source),
        destination: match direction {
            Direction::Dynamic => String::new(),
            _ => ctx.dlg.editbox_get(pfd.destination),
        },
    };

    match fwd.encode() {
        Err(e) => {
            log::warn!("Rejected port forward: {e}");
            ctx.dlg.error_msg(&e.to_string());
            return;
        }
        Ok((key, _)) if ctx.conf.get_str_str(ConfKey::PortFwd, &key).is_some() => {
            log::warn!("Rejected port forward {key:?}: already exists");
            ctx.dlg.error_msg("Specified forwarding already exists");
        }
        Ok((key, value)) => {
            log::debug!("Adding port forward {key}={value}");
            ctx.conf.set_str_str(ConfKey::PortFwd, key, value);
        }
    }
    ctx.refresh(pfd.listbox);
}

fn remove(ctx: &mut HandlerContext<'_>, pfd: &PortFwdControls) {
    let Some(index) = ctx.dlg.listbox_index(pfd.listbox) else {
        ctx.dlg.beep();
        return;
    };
    if let Some(key) = ctx.conf.nth_str_key(ConfKey::PortFwd, index) {
        let value = ctx.conf.del_str_str(ConfKey::PortFwd, &key).unwrap_or_default();
        match PortForward::decode(&key, &value) {
            Ok(fwd) => {
                // Leave the entry in the add controls for re-editing.
                ctx.dlg.radiobutton_set(pfd.family, fwd.family.radio_index());
                ctx.dlg.radiobutton_set(pfd.direction, fwd.direction.radio_index());
                ctx.dlg.editbox_set(pfd.source, &fwd.source);
                ctx.dlg.editbox_set(pfd.destination, &fwd.destination);
            }
            Err(e) => log::warn!("Removed undecodable port forward {key:?}: {e}"),
        }
    }
    ctx.refresh(pfd.listbox);
}
