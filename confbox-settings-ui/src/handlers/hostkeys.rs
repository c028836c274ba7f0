//! Manually configured host keys: a list, a key field and Add / Remove.

use confbox_config::ConfKey;

use crate::control::ControlId;
use crate::controlbox::require;
use crate::dispatch::{Event, HandlerContext};

pub(crate) fn handle(ctx: &mut HandlerContext<'_>, ctrl: ControlId, event: Event) {
    let mh = require(&ctx.controls.composites.hostkeys, "manual host key");
    match event {
        Event::Refresh if ctrl == mh.listbox => {
            let rows: Vec<String> = ctx
                .conf
                .str_map(ConfKey::SshManualHostkeys)
                .iter()
                .map(|(key, _)| key.to_string())
                .collect();
            super::fill_list(ctx, ctrl, rows);
        }
        Event::Action if ctrl == mh.add => {
            let text = ctx.dlg.editbox_get(mh.keybox);
            if text.is_empty() {
                log::warn!("Host key add with empty key field");
                ctx.dlg.error_msg("You need to specify a host key or fingerprint");
                return;
            }
            match ctx.services.hostkeys.validate(&text) {
                None => {
                    log::warn!("Rejected host key {text:?}: not in a valid format");
                    ctx.dlg.error_msg("Host key is not in a valid format");
                }
                Some(key) if ctx.conf.get_str_str(ConfKey::SshManualHostkeys, &key).is_some() => {
                    log::warn!("Rejected host key {key:?}: already listed");
                    ctx.dlg.error_msg("Specified host key is already listed");
                }
                Some(key) => ctx.conf.set_str_str(ConfKey::SshManualHostkeys, key, ""),
            }
            ctx.refresh(mh.listbox);
        }
        Event::Action if ctrl == mh.remove => {
            let Some(index) = ctx.dlg.listbox_index(mh.listbox) else {
                ctx.dlg.beep();
                return;
            };
            if let Some(key) = ctx.conf.nth_str_key(ConfKey::SshManualHostkeys, index) {
                ctx.dlg.editbox_set(mh.keybox, &key);
                ctx.conf.del_str_str(ConfKey::SshManualHostkeys, &key);
            }
            ctx.refresh(mh.listbox);
        }
        _ => {}
    }
}
