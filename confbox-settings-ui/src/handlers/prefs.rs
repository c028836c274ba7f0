//! Drag-to-reorder algorithm preference lists.

use confbox_config::prefs::{check_permutation, merge_reordered};
use confbox_config::{PreferenceKind, integrity_fault};

use crate::control::ControlId;
use crate::dispatch::{Event, HandlerContext};

pub(crate) fn handle(ctx: &mut HandlerContext<'_>, ctrl: ControlId, event: Event, kind: PreferenceKind) {
    match event {
        Event::Refresh => {
            let stored = ctx.conf.int_list(kind.key());
            ctx.dlg.update_start(ctrl);
            ctx.dlg.listbox_clear(ctrl);
            for id in stored {
                // Ids without a name are withdrawn algorithms; keep them out
                // of sight but in the stored order.
                if let Some(name) = kind.display_name(id) {
                    ctx.dlg.listbox_add_with_id(ctrl, name, id);
                }
            }
            ctx.dlg.update_done(ctrl);
        }
        Event::ValChange => {
            let visible: Vec<i32> = (0..ctx.dlg.listbox_count(ctrl))
                .map(|row| ctx.dlg.listbox_getid(ctrl, row))
                .collect();
            let stored = ctx.conf.int_list(kind.key());
            let merged = merge_reordered(&stored, &visible)
                .and_then(|merged| check_permutation(kind, &merged).map(|()| merged))
                .unwrap_or_else(|e| integrity_fault(format!("{kind:?} preference list: {e}")));
            log::debug!("{kind:?} preference order now {merged:?}");
            ctx.conf.set_int_list(kind.key(), merged);
        }
        _ => {}
    }
}
