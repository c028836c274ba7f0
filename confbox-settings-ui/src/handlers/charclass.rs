//! Character-class table: a multi-select list of the 128 character codes,
//! a class field and a Set button.

use confbox_config::charclass::display_row;
use confbox_config::{ConfKey, NCHARCLASSES};

use crate::control::ControlId;
use crate::controlbox::require;
use crate::dispatch::{Event, HandlerContext};
use crate::numeric::atoi;

pub(crate) fn handle(ctx: &mut HandlerContext<'_>, ctrl: ControlId, event: Event) {
    let ccd = require(&ctx.controls.composites.charclass, "character class");
    match event {
        Event::Refresh if ctrl == ccd.listbox => {
            let rows: Vec<String> = (0..NCHARCLASSES)
                .map(|code| display_row(code, ctx.conf.get_int_int(ConfKey::Wordness, code)))
                .collect();
            super::fill_list(ctx, ctrl, rows);
        }
        Event::Action if ctrl == ccd.button => {
            let class = atoi(&ctx.dlg.editbox_get(ccd.editbox));
            for code in 0..NCHARCLASSES {
                if ctx.dlg.listbox_issel(ccd.listbox, code) {
                    ctx.conf.set_int_int(ConfKey::Wordness, code, class);
                }
            }
            ctx.refresh(ccd.listbox);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controlbox::CharClassControls;
    use crate::testutil::Harness;
    use crate::traits::DialogOps;
    use crate::{ControlBox, Handler, ListBoxSpec};

    fn charclass_harness() -> (Harness, CharClassControls) {
        let mut b = ControlBox::new();
        let s = b.getset("Window/Selection/Copy", "charclass", Some("Classes of character that group together"));
        let spec = ListBoxSpec {
            multisel: true,
            ncols: 4,
            height: 10,
            ..ListBoxSpec::default()
        };
        let listbox = b.listbox(s, Some("Character classes:"), spec, Handler::CharClass);
        let editbox = b.editbox(s, Some("Set to class"), Handler::CharClass);
        let button = b.button(s, "Set", Handler::CharClass);
        let ccd = CharClassControls { listbox, editbox, button };
        b.composites.charclass = Some(ccd);
        (Harness::new(b), ccd)
    }

    #[test]
    fn test_rows_show_every_code() {
        let (mut h, ccd) = charclass_harness();
        h.event(ccd.listbox, Event::Refresh);
        let rows = h.dlg.rows(ccd.listbox);
        assert_eq!(rows.len(), NCHARCLASSES);
        assert_eq!(rows[65], display_row(65, h.conf.get_int_int(ConfKey::Wordness, 65)));
        assert!(h.dlg.unbracketed_writes().is_empty());
    }

    #[test]
    fn test_set_applies_to_every_selected_code() {
        let (mut h, ccd) = charclass_harness();
        h.event(ccd.listbox, Event::Refresh);
        let untouched = h.conf.get_int_int(ConfKey::Wordness, 67);

        h.dlg.listbox_select(ccd.listbox, 65);
        h.dlg.toggle_selection(ccd.listbox, 66);
        h.dlg.editbox_set(ccd.editbox, "5");
        h.click(ccd.button);

        assert_eq!(h.conf.get_int_int(ConfKey::Wordness, 65), 5);
        assert_eq!(h.conf.get_int_int(ConfKey::Wordness, 66), 5);
        assert_eq!(h.conf.get_int_int(ConfKey::Wordness, 67), untouched);
        assert_eq!(h.dlg.rows(ccd.listbox)[66], "66\t(0x42)\tB\t5");
    }

    #[test]
    fn test_non_numeric_class_is_zero() {
        let (mut h, ccd) = charclass_harness();
        h.event(ccd.listbox, Event::Refresh);
        h.dlg.listbox_select(ccd.listbox, 33);
        h.dlg.editbox_set(ccd.editbox, "x");
        h.click(ccd.button);
        assert_eq!(h.conf.get_int_int(ConfKey::Wordness, 33), 0);
    }
}
