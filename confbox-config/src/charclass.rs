//! Character classes for word selection.
//!
//! Each of the 128 seven-bit character codes belongs to a numbered class;
//! a double-click selects a run of characters of the same class.

use crate::keys::NCHARCLASSES;

/// Shipped default classes: whitespace 0, punctuation 1, word characters 2.
pub const DEFAULT_WORDNESS: [i32; NCHARCLASSES] = [
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, //
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, //
    0, 1, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, //
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, //
    1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, //
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 2, //
    1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, //
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, //
];

/// List row for one code: decimal, hex, glyph (space for anything not
/// printable), class.
pub fn display_row(code: usize, class: i32) -> String {
    let glyph = match u8::try_from(code) {
        Ok(b) if (0x21..0x7F).contains(&b) => b as char,
        _ => ' ',
    };
    format!("{code}\t(0x{code:02X})\t{glyph}\t{class}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows() {
        assert_eq!(display_row(65, 2), "65\t(0x41)\tA\t2");
        assert_eq!(display_row(9, 1), "9\t(0x09)\t \t1");
        assert_eq!(display_row(32, 0), "32\t(0x20)\t \t0");
        assert_eq!(display_row(127, 1), "127\t(0x7F)\t \t1");
    }
}
