//! Lenient numeric parsing for text fields.
//!
//! Text fields accept whatever the user types. Integers are read the way C
//! `atoi` reads them (leading whitespace, optional sign, then digits; anything
//! else stops the scan) and an unparsable field reads as zero.

/// Leading integer of `text`, or 0.
pub fn atoi(text: &str) -> i32 {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = (value * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Leading decimal number of `text`, or 0.
pub fn atof(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end = 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
    }
    if end == digits_start || &s[digits_start..end] == "." {
        return 0.0;
    }
    // Exponent only counts if at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-' | b'+')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }
    s[..end].parse().unwrap_or(0.0)
}

/// Display form of a scaled integer: `stored / scale` as the shortest
/// decimal that reads back to the same value.
pub fn format_scaled(stored: i32, scale: i32) -> String {
    let value = f64::from(stored) / f64::from(scale);
    format!("{value}")
}

/// Stored form of a scaled field's text: `round(parsed * scale)`.
pub fn parse_scaled(text: &str, scale: i32) -> i32 {
    let scaled = (atof(text) * f64::from(scale)).round();
    scaled.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}
