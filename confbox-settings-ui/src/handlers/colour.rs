//! Colour table: the slot list, three channel fields and a Modify button
//! that opens the host's colour picker.

use confbox_config::colour::{COLOUR_NAMES, get_rgb, set_channel, set_rgb};

use crate::control::ControlId;
use crate::controlbox::{ColourControls, require};
use crate::dispatch::{Event, HandlerContext};
use crate::numeric::atoi;

/// Show `rgb` in the channel fields, or blank them.
fn show_channels(ctx: &mut HandlerContext<'_>, cd: &ColourControls, rgb: Option<[i32; 3]>) {
    let fields = [cd.red, cd.green, cd.blue];
    for (channel, field) in fields.into_iter().enumerate() {
        let text = rgb.map(|rgb| rgb[channel].to_string()).unwrap_or_default();
        ctx.dlg.editbox_set(field, &text);
    }
}

pub(crate) fn handle(ctx: &mut HandlerContext<'_>, ctrl: ControlId, event: Event) {
    let cd = require(&ctx.controls.composites.colour, "colour");
    match event {
        Event::Refresh if ctrl == cd.listbox => {
            super::fill_list(ctx, ctrl, COLOUR_NAMES);
            show_channels(ctx, &cd, None);
        }
        Event::SelChange if ctrl == cd.listbox => {
            let rgb = ctx.dlg.listbox_index(ctrl).map(|slot| get_rgb(ctx.conf, slot));
            show_channels(ctx, &cd, rgb);
        }
        Event::ValChange => {
            let channel = match ctrl {
                c if c == cd.red => 0,
                c if c == cd.green => 1,
                c if c == cd.blue => 2,
                _ => return,
            };
            let value = atoi(&ctx.dlg.editbox_get(ctrl));
            if let Some(slot) = ctx.dlg.listbox_index(cd.listbox) {
                set_channel(ctx.conf, slot, channel, value);
            }
        }
        Event::Action if ctrl == cd.button => {
            let Some(slot) = ctx.dlg.listbox_index(cd.listbox) else {
                ctx.dlg.beep();
                return;
            };
            let rgb = get_rgb(ctx.conf, slot);
            ctx.dlg.coloursel_start(ctrl, rgb);
        }
        Event::Callback if ctrl == cd.button => {
            let Some(slot) = ctx.dlg.listbox_index(cd.listbox) else {
                return;
            };
            // None means the picker was cancelled.
            if let Some(rgb) = ctx.dlg.coloursel_results(ctrl) {
                set_rgb(ctx.conf, slot, rgb);
                show_channels(ctx, &cd, Some(get_rgb(ctx.conf, slot)));
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::Harness;
    use crate::traits::DialogOps;
    use crate::{ControlBox, Handler, ListBoxSpec};
    use confbox_config::NCOLOURS;

    fn colour_harness() -> (Harness, ColourControls) {
        let mut b = ControlBox::new();
        let s = b.getset("Window/Colours", "adjust", Some("Adjust the precise colours displayed"));
        let spec = ListBoxSpec {
            height: 10,
            ..ListBoxSpec::default()
        };
        let listbox = b.listbox(s, Some("Select a colour to adjust:"), spec, Handler::Colour);
        let red = b.editbox(s, Some("Red"), Handler::Colour);
        let green = b.editbox(s, Some("Green"), Handler::Colour);
        let blue = b.editbox(s, Some("Blue"), Handler::Colour);
        let button = b.button(s, "Modify", Handler::Colour);
        let cd = ColourControls { listbox, red, green, blue, button };
        b.composites.colour = Some(cd);
        (Harness::new(b), cd)
    }

    #[test]
    fn test_refresh_lists_slots_and_blanks_fields() {
        let (mut h, cd) = colour_harness();
        h.dlg.editbox_set(cd.red, "12");
        h.event(cd.listbox, Event::Refresh);
        assert_eq!(h.dlg.rows(cd.listbox).len(), NCOLOURS);
        assert_eq!(h.dlg.rows(cd.listbox)[0], COLOUR_NAMES[0]);
        assert_eq!(h.dlg.text(cd.red), "");
    }

    #[test]
    fn test_selecting_slot_shows_channels() {
        let (mut h, cd) = colour_harness();
        h.event(cd.listbox, Event::Refresh);
        h.select(cd.listbox, 0);
        let [r, g, b] = get_rgb(&h.conf, 0);
        assert_eq!(h.dlg.text(cd.red), r.to_string());
        assert_eq!(h.dlg.text(cd.green), g.to_string());
        assert_eq!(h.dlg.text(cd.blue), b.to_string());
    }

    #[test]
    fn test_channel_edit_clamps() {
        let (mut h, cd) = colour_harness();
        h.event(cd.listbox, Event::Refresh);
        h.select(cd.listbox, 2);
        h.type_text(cd.green, "300");
        h.type_text(cd.blue, "-4");
        let rgb = get_rgb(&h.conf, 2);
        assert_eq!(rgb[1], 255);
        assert_eq!(rgb[2], 0);
    }

    #[test]
    fn test_channel_edit_without_slot_is_ignored() {
        let (mut h, cd) = colour_harness();
        h.event(cd.listbox, Event::Refresh);
        let before = h.conf.clone();
        h.type_text(cd.red, "17");
        assert_eq!(h.conf, before);
    }

    #[test]
    fn test_picker_round_trip() {
        let (mut h, cd) = colour_harness();
        h.event(cd.listbox, Event::Refresh);
        h.select(cd.listbox, 5);
        let seeded = get_rgb(&h.conf, 5);

        h.click(cd.button);
        assert_eq!(h.dlg.colour_requests(), &[(cd.button, seeded)]);

        h.dlg.set_colour_answer(Some([10, 20, 30]));
        h.event(cd.button, Event::Callback);
        assert_eq!(get_rgb(&h.conf, 5), [10, 20, 30]);
        assert_eq!(h.dlg.text(cd.blue), "30");

        // Cancelled picker leaves the slot alone.
        h.event(cd.button, Event::Callback);
        assert_eq!(get_rgb(&h.conf, 5), [10, 20, 30]);
    }

    #[test]
    fn test_modify_without_slot_beeps() {
        let (mut h, cd) = colour_harness();
        h.event(cd.listbox, Event::Refresh);
        h.click(cd.button);
        assert_eq!(h.dlg.beeps(), 1);
        assert!(h.dlg.colour_requests().is_empty());
    }
}
