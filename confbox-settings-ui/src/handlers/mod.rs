//! Event handlers, one module per handler family.
//!
//! `standard` covers controls bound directly to one key. The rest are
//! special-purpose or composite handlers that coordinate several controls.

pub(crate) mod charclass;
pub(crate) mod colour;
pub(crate) mod environ;
pub(crate) mod hostkeys;
pub(crate) mod hostport;
pub(crate) mod misc;
pub(crate) mod portfwd;
pub(crate) mod prefs;
pub(crate) mod session;
pub(crate) mod standard;
pub(crate) mod ttymodes;

use confbox_config::integrity_fault;

use crate::control::{Control, ControlId};
use crate::dispatch::HandlerContext;

/// Value of the radio button currently selected in `ctrl`.
pub(crate) fn selected_button_value(ctx: &HandlerContext<'_>, control: &Control, ctrl: ControlId) -> i32 {
    let index = ctx.dlg.radiobutton_get(ctrl);
    match control.buttons().get(index) {
        Some(button) => button.value,
        None => integrity_fault(format!(
            "radio {ctrl:?} reports button {index} of {}",
            control.buttons().len()
        )),
    }
}

/// Index of the radio button standing for `value`.
pub(crate) fn button_index(control: &Control, value: i32) -> Option<usize> {
    control.buttons().iter().position(|b| b.value == value)
}

/// Repopulate a list inside an update bracket.
pub(crate) fn fill_list<I, S>(ctx: &mut HandlerContext<'_>, ctrl: ControlId, rows: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ctx.dlg.update_start(ctrl);
    ctx.dlg.listbox_clear(ctrl);
    for row in rows {
        ctx.dlg.listbox_add(ctrl, row.as_ref());
    }
    ctx.dlg.update_done(ctrl);
}
