//! Environment variables: a two-column list with variable and value fields
//! and Add / Remove buttons.

use confbox_config::ConfKey;

use crate::control::ControlId;
use crate::controlbox::require;
use crate::dispatch::{Event, HandlerContext};

pub(crate) fn handle(ctx: &mut HandlerContext<'_>, ctrl: ControlId, event: Event) {
    let ed = require(&ctx.controls.composites.environ, "environment");
    match event {
        Event::Refresh if ctrl == ed.listbox => {
            let rows: Vec<String> = ctx
                .conf
                .str_map(ConfKey::Environment)
                .iter()
                .map(|(var, value)| format!("{var}\t{value}"))
                .collect();
            super::fill_list(ctx, ctrl, rows);
        }
        Event::Action if ctrl == ed.add => {
            let var = ctx.dlg.editbox_get(ed.varbox);
            let value = ctx.dlg.editbox_get(ed.valbox);
            if var.is_empty() || value.is_empty() {
                log::warn!("Rejected environment entry {var:?}={value:?}: variable and value are both required");
                ctx.dlg.beep();
                return;
            }
            ctx.conf.set_str_str(ConfKey::Environment, var, value);
            ctx.dlg.editbox_set(ed.varbox, "");
            ctx.dlg.editbox_set(ed.valbox, "");
            ctx.refresh(ed.listbox);
        }
        Event::Action if ctrl == ed.remove => {
            let Some(index) = ctx.dlg.listbox_index(ed.listbox) else {
                log::warn!("Remove pressed with no environment entry selected");
                ctx.dlg.beep();
                return;
            };
            if let Some(var) = ctx.conf.nth_str_key(ConfKey::Environment, index) {
                // Leave the entry in the fields for re-editing.
                let value = ctx.conf.del_str_str(ConfKey::Environment, &var).unwrap_or_default();
                ctx.dlg.editbox_set(ed.varbox, &var);
                ctx.dlg.editbox_set(ed.valbox, &value);
            }
            ctx.refresh(ed.listbox);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controlbox::EnvironControls;
    use crate::testutil::Harness;
    use crate::traits::DialogOps;
    use crate::{ControlBox, Handler, ListBoxSpec};

    fn environ_harness() -> (Harness, EnvironControls) {
        let mut b = ControlBox::new();
        let s = b.getset("Connection/Data", "env", Some("Environment variables"));
        let varbox = b.editbox(s, Some("Variable"), Handler::Environment);
        let valbox = b.editbox(s, Some("Value"), Handler::Environment);
        let add = b.button(s, "Add", Handler::Environment);
        let remove = b.button(s, "Remove", Handler::Environment);
        let spec = ListBoxSpec {
            ncols: 2,
            height: 3,
            ..ListBoxSpec::default()
        };
        let listbox = b.listbox(s, None, spec, Handler::Environment);
        let ed = EnvironControls { varbox, valbox, add, remove, listbox };
        b.composites.environ = Some(ed);
        (Harness::new(b), ed)
    }

    fn add(h: &mut Harness, ed: &EnvironControls, var: &str, value: &str) {
        h.dlg.editbox_set(ed.varbox, var);
        h.dlg.editbox_set(ed.valbox, value);
        h.click(ed.add);
    }

    #[test]
    fn test_add_lists_in_key_order() {
        let (mut h, ed) = environ_harness();
        h.refresh_all();
        add(&mut h, &ed, "TERM", "xterm");
        add(&mut h, &ed, "LANG", "C.UTF-8");
        assert_eq!(h.dlg.rows(ed.listbox), vec!["LANG\tC.UTF-8", "TERM\txterm"]);
        assert_eq!(h.dlg.text(ed.varbox), "");
        assert_eq!(h.dlg.text(ed.valbox), "");

        // Same variable again replaces its value.
        add(&mut h, &ed, "TERM", "vt100");
        assert_eq!(h.conf.get_str_str(ConfKey::Environment, "TERM"), Some("vt100"));
        assert_eq!(h.conf.str_map(ConfKey::Environment).len(), 2);
    }

    #[test]
    fn test_add_needs_both_fields() {
        let (mut h, ed) = environ_harness();
        h.refresh_all();
        add(&mut h, &ed, "TERM", "");
        add(&mut h, &ed, "", "xterm");
        assert_eq!(h.dlg.beeps(), 2);
        assert!(h.conf.str_map(ConfKey::Environment).is_empty());
    }

    #[test]
    fn test_remove_refills_fields() {
        let (mut h, ed) = environ_harness();
        h.refresh_all();
        add(&mut h, &ed, "A", "1");
        add(&mut h, &ed, "B", "2");

        h.dlg.listbox_select(ed.listbox, 1);
        h.click(ed.remove);
        assert_eq!(h.dlg.text(ed.varbox), "B");
        assert_eq!(h.dlg.text(ed.valbox), "2");
        assert_eq!(h.dlg.rows(ed.listbox), vec!["A\t1"]);

        h.click(ed.remove);
        assert_eq!(h.dlg.beeps(), 1);
    }
}
