//! Handlers for controls bound directly to one configuration key.

use confbox_config::{ConfKey, integrity_fault};

use super::{button_index, selected_button_value};
use crate::control::{Control, ControlId, EditField};
use crate::dispatch::{Event, HandlerContext};
use crate::numeric::{atoi, format_scaled, parse_scaled};

/// Radio group whose buttons each stand for one value of `key`.
pub(crate) fn radio(ctx: &mut HandlerContext<'_>, control: &Control, ctrl: ControlId, event: Event, key: ConfKey) {
    match event {
        Event::Refresh => {
            let value = ctx.conf.get_int(key);
            let Some(index) = button_index(control, value) else {
                integrity_fault(format!("{key:?} = {value} has no button in radio {ctrl:?}"));
            };
            ctx.dlg.radiobutton_set(ctrl, index);
        }
        Event::ValChange => {
            let value = selected_button_value(ctx, control, ctrl);
            ctx.conf.set_int(key, value);
        }
        _ => {}
    }
}

pub(crate) fn checkbox(ctx: &mut HandlerContext<'_>, ctrl: ControlId, event: Event, key: ConfKey, invert: bool) {
    match event {
        Event::Refresh => {
            let checked = ctx.conf.get_bool(key) != invert;
            ctx.dlg.checkbox_set(ctrl, checked);
        }
        Event::ValChange => {
            let checked = ctx.dlg.checkbox_get(ctrl);
            ctx.conf.set_bool(key, checked != invert);
        }
        _ => {}
    }
}

pub(crate) fn editbox(ctx: &mut HandlerContext<'_>, ctrl: ControlId, event: Event, field: EditField) {
    match (event, field) {
        (Event::Refresh, EditField::Str(key)) => {
            let text = ctx.conf.get_str(key).to_string();
            ctx.dlg.editbox_set(ctrl, &text);
        }
        (Event::Refresh, EditField::Int(key)) => {
            let text = ctx.conf.get_int(key).to_string();
            ctx.dlg.editbox_set(ctrl, &text);
        }
        (Event::Refresh, EditField::Scaled(key, scale)) => {
            let text = format_scaled(ctx.conf.get_int(key), scale);
            ctx.dlg.editbox_set(ctrl, &text);
        }
        (Event::ValChange, EditField::Str(key)) => {
            let text = ctx.dlg.editbox_get(ctrl);
            ctx.conf.set_str(key, text);
        }
        (Event::ValChange, EditField::Int(key)) => {
            let text = ctx.dlg.editbox_get(ctrl);
            ctx.conf.set_int(key, atoi(&text));
        }
        (Event::ValChange, EditField::Scaled(key, scale)) => {
            let text = ctx.dlg.editbox_get(ctrl);
            ctx.conf.set_int(key, parse_scaled(&text, scale));
        }
        _ => {}
    }
}

pub(crate) fn filesel(ctx: &mut HandlerContext<'_>, ctrl: ControlId, event: Event, key: ConfKey) {
    match event {
        Event::Refresh => {
            let file = ctx.conf.get_filename(key);
            ctx.dlg.filesel_set(ctrl, &file);
        }
        Event::ValChange => {
            let file = ctx.dlg.filesel_get(ctrl);
            ctx.conf.set_filename(key, file);
        }
        _ => {}
    }
}

pub(crate) fn fontsel(ctx: &mut HandlerContext<'_>, ctrl: ControlId, event: Event, key: ConfKey) {
    match event {
        Event::Refresh => {
            let font = ctx.conf.get_fontspec(key);
            ctx.dlg.fontsel_set(ctrl, &font);
        }
        Event::ValChange => {
            let font = ctx.dlg.fontsel_get(ctrl);
            ctx.conf.set_fontspec(key, font);
        }
        _ => {}
    }
}
