//! Terminal modes: the mode list, the Auto / Nothing / This value radio, a
//! value field and a Set button.

use confbox_config::ttymode::{display_row, payload};
use confbox_config::{ConfKey, TtyModeValue, integrity_fault};

use crate::control::ControlId;
use crate::controlbox::require;
use crate::dispatch::{Event, HandlerContext};

pub(crate) fn handle(ctx: &mut HandlerContext<'_>, ctrl: ControlId, event: Event) {
    let td = require(&ctx.controls.composites.ttymodes, "tty modes");
    match event {
        Event::Refresh if ctrl == td.listbox => {
            let rows: Vec<String> = ctx
                .conf
                .str_map(ConfKey::TtyModes)
                .iter()
                .map(|(mode, raw)| display_row(mode, raw))
                .collect();
            super::fill_list(ctx, ctrl, rows);
        }
        Event::Refresh if ctrl == td.valradio => {
            ctx.dlg.radiobutton_set(ctrl, 0);
        }
        Event::SelChange if ctrl == td.listbox => {
            let Some(index) = ctx.dlg.listbox_index(ctrl) else {
                return;
            };
            let Some(raw) = ctx
                .conf
                .str_map(ConfKey::TtyModes)
                .iter()
                .nth(index)
                .map(|(_, raw)| raw.to_string())
            else {
                integrity_fault(format!("tty mode row {index} has no entry"));
            };
            // Fill the field first: editing it would move the radio to "value".
            ctx.dlg.editbox_set(td.valbox, payload(&raw));
            let button = match raw.chars().next() {
                Some('A') => 0,
                Some('N') => 1,
                _ => 2,
            };
            ctx.dlg.radiobutton_set(td.valradio, button);
        }
        Event::ValChange if ctrl == td.valbox => {
            ctx.dlg.radiobutton_set(td.valradio, 2);
        }
        Event::Action if ctrl == td.setbutton => {
            let Some(index) = ctx.dlg.listbox_index(td.listbox) else {
                ctx.dlg.beep();
                return;
            };
            let button = ctx.dlg.radiobutton_get(td.valradio);
            let text = ctx.dlg.editbox_get(td.valbox);
            let Some(value) = TtyModeValue::from_radio(button, &text) else {
                integrity_fault(format!("tty mode radio reports button {button}"));
            };
            let Some(mode) = ctx.conf.nth_str_key(ConfKey::TtyModes, index) else {
                integrity_fault(format!("tty mode row {index} has no entry"));
            };
            ctx.conf.set_str_str(ConfKey::TtyModes, mode, value.encode());
            ctx.refresh(td.listbox);
            ctx.dlg.listbox_select(td.listbox, index);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controlbox::TtyModeControls;
    use crate::testutil::Harness;
    use crate::traits::DialogOps;
    use crate::{ControlBox, Handler, ListBoxSpec};

    fn ttymode_harness() -> (Harness, TtyModeControls) {
        let mut b = ControlBox::new();
        let s = b.getset("Connection/SSH/TTY", "ttymodes", Some("Terminal modes"));
        let spec = ListBoxSpec {
            ncols: 2,
            height: 8,
            ..ListBoxSpec::default()
        };
        let listbox = b.listbox(s, Some("Terminal modes to send:"), spec, Handler::TtyModes);
        let valradio = b.radio(
            s,
            Some("Value:"),
            &[("Auto", 0), ("Nothing", 1), ("This:", 2)],
            Handler::TtyModes,
        );
        let valbox = b.editbox(s, None, Handler::TtyModes);
        let setbutton = b.button(s, "Set", Handler::TtyModes);
        let td = TtyModeControls { listbox, valradio, valbox, setbutton };
        b.composites.ttymodes = Some(td);
        (Harness::new(b), td)
    }

    #[test]
    fn test_refresh_lists_every_mode() {
        let (mut h, td) = ttymode_harness();
        h.refresh_all();
        let rows = h.dlg.rows(td.listbox);
        assert_eq!(rows.len(), h.conf.str_map(ConfKey::TtyModes).len());
        let first = h.conf.nth_str_key(ConfKey::TtyModes, 0).unwrap();
        assert_eq!(rows[0], format!("{first}\t(auto)"));
        assert_eq!(h.dlg.radio(td.valradio), 0);
    }

    #[test]
    fn test_set_explicit_value() {
        let (mut h, td) = ttymode_harness();
        h.refresh_all();
        h.select(td.listbox, 3);
        assert_eq!(h.dlg.radio(td.valradio), 0);

        // Typing a value switches the radio to "This:".
        h.type_text(td.valbox, "^C");
        assert_eq!(h.dlg.radio(td.valradio), 2);
        h.click(td.setbutton);

        let mode = h.conf.nth_str_key(ConfKey::TtyModes, 3).unwrap();
        assert_eq!(h.conf.get_str_str(ConfKey::TtyModes, &mode), Some("V^C"));
        assert_eq!(h.dlg.rows(td.listbox)[3], format!("{mode}\t^C"));
        assert_eq!(h.dlg.selection(td.listbox), Some(3));
    }

    #[test]
    fn test_selection_shows_stored_value() {
        let (mut h, td) = ttymode_harness();
        let mode = h.conf.nth_str_key(ConfKey::TtyModes, 1).unwrap();
        h.conf.set_str_str(ConfKey::TtyModes, mode.clone(), "N");
        let other = h.conf.nth_str_key(ConfKey::TtyModes, 2).unwrap();
        h.conf.set_str_str(ConfKey::TtyModes, other, "V127");
        h.refresh_all();

        h.select(td.listbox, 1);
        assert_eq!(h.dlg.radio(td.valradio), 1);
        assert_eq!(h.dlg.text(td.valbox), "");

        h.select(td.listbox, 2);
        assert_eq!(h.dlg.radio(td.valradio), 2);
        assert_eq!(h.dlg.text(td.valbox), "127");

        // Nothing: the value text is dropped.
        h.dlg.radiobutton_set(td.valradio, 1);
        h.click(td.setbutton);
        let other = h.conf.nth_str_key(ConfKey::TtyModes, 2).unwrap();
        assert_eq!(h.conf.get_str_str(ConfKey::TtyModes, &other), Some("N"));
    }

    #[test]
    fn test_set_without_selection_beeps() {
        let (mut h, td) = ttymode_harness();
        h.refresh_all();
        let before = h.conf.clone();
        h.click(td.setbutton);
        assert_eq!(h.dlg.beeps(), 1);
        assert_eq!(h.conf, before);
    }
}
