//! The 22-slot colour table.
//!
//! Slot `i` keeps its red, green and blue channels at positions `3*i`,
//! `3*i + 1` and `3*i + 2` of the `Colours` integer list.

use crate::conf::Conf;
use crate::keys::{ConfKey, NCOLOURS};

/// Slot names in table order.
pub const COLOUR_NAMES: [&str; NCOLOURS] = [
    "Default Foreground",
    "Default Bold Foreground",
    "Default Background",
    "Default Bold Background",
    "Cursor Text",
    "Cursor Colour",
    "ANSI Black",
    "ANSI Black Bold",
    "ANSI Red",
    "ANSI Red Bold",
    "ANSI Green",
    "ANSI Green Bold",
    "ANSI Yellow",
    "ANSI Yellow Bold",
    "ANSI Blue",
    "ANSI Blue Bold",
    "ANSI Magenta",
    "ANSI Magenta Bold",
    "ANSI Cyan",
    "ANSI Cyan Bold",
    "ANSI White",
    "ANSI White Bold",
];

/// Shipped default colours, one RGB triple per slot.
pub const DEFAULT_COLOURS: [[i32; 3]; NCOLOURS] = [
    [187, 187, 187],
    [255, 255, 255],
    [0, 0, 0],
    [85, 85, 85],
    [0, 0, 0],
    [0, 255, 0],
    [0, 0, 0],
    [85, 85, 85],
    [187, 0, 0],
    [255, 85, 85],
    [0, 187, 0],
    [85, 255, 85],
    [187, 187, 0],
    [255, 255, 85],
    [0, 0, 187],
    [85, 85, 255],
    [187, 0, 187],
    [255, 85, 255],
    [0, 187, 187],
    [85, 255, 255],
    [187, 187, 187],
    [255, 255, 255],
];

/// Clamp a channel value into 0..=255.
pub fn clamp_channel(value: i32) -> i32 {
    value.clamp(0, 255)
}

/// Read slot `slot` as `[r, g, b]`.
pub fn get_rgb(conf: &Conf, slot: usize) -> [i32; 3] {
    [0, 1, 2].map(|c| conf.get_int_int(ConfKey::Colours, slot * 3 + c))
}

/// Write one channel (0 = red, 1 = green, 2 = blue) of a slot, clamped.
pub fn set_channel(conf: &mut Conf, slot: usize, channel: usize, value: i32) {
    conf.set_int_int(ConfKey::Colours, slot * 3 + channel, clamp_channel(value));
}

/// Write all three channels of a slot, clamped.
pub fn set_rgb(conf: &mut Conf, slot: usize, rgb: [i32; 3]) {
    for (channel, value) in rgb.into_iter().enumerate() {
        set_channel(conf, slot, channel, value);
    }
}
