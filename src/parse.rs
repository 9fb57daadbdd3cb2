//! Text literal parsing
//!
//! This module validates and parses the `0b…` binary and `0x…` hexadecimal
//! literals accepted by the text input paths of
//! [`Display`](crate::display::Display). Both parsers are pure functions:
//! invalid input yields `None` and is never an error the caller has to
//! handle, because the display renders a fixed error pattern instead.
//!
//! ## Accepted input
//!
//! - Space, tab, CR, LF, and underscore characters are stripped anywhere in
//!   the literal, so `"0b_0110_0110"` and `"0x 7F"` are valid.
//! - A leading `+` is accepted and dropped. A leading `-` always fails; the
//!   display has no textual negative form.
//! - The prefix (`0b`/`0B` or `0x`/`0X`) is required and must be followed by
//!   at least one digit of the matching base.
//! - Overlong input is truncated from the left: only the least-significant
//!   7 binary digits, or the least-significant `digit_count` hex digits, are
//!   kept. Truncation is a bounded-width policy, not an error.
//!
//! ## Example
//!
//! ```
//! use tm1637::parse::{parse_binary_literal, parse_hex_literal};
//!
//! assert_eq!(parse_binary_literal("0b_0110_0110"), Some(0x66));
//! assert_eq!(parse_binary_literal("-0b1010"), None);
//! assert_eq!(parse_hex_literal("0xA7F", 2), Some(0x7F));
//! assert_eq!(parse_hex_literal("0xGG", 4), None);
//! ```

/// Number of binary digits kept by [`parse_binary_literal`]
///
/// Seven bits cover segments a-g; the dot point bit is unreachable from
/// text input.
pub const BINARY_DIGIT_LIMIT: u32 = 7;

/// Parse a binary segment-mask literal
///
/// Requires the `0b`/`0B` prefix with at least one `0`/`1` digit after it.
/// Keeps only the last [`BINARY_DIGIT_LIMIT`] digits, so the result never
/// exceeds `0x7F` and can never set the dot point bit.
///
/// Returns `None` for any malformed input.
pub fn parse_binary_literal(text: &str) -> Option<u8> {
    let value = parse_prefixed(text, 'b', 2, 1 << BINARY_DIGIT_LIMIT)?;
    Some(value as u8)
}

/// Parse a hexadecimal literal bounded to `digit_count` digits
///
/// Requires the `0x`/`0X` prefix with at least one hex digit after it.
/// Keeps only the last `digit_count` digits (clamped to 1..=4, the widest
/// display this driver addresses).
///
/// Returns `None` for any malformed input.
pub fn parse_hex_literal(text: &str, digit_count: usize) -> Option<u16> {
    let width = digit_count.clamp(1, 4) as u32;
    let value = parse_prefixed(text, 'x', 16, 16u32.pow(width))?;
    Some(value as u16)
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '_')
}

/// Shared literal scanner
///
/// Keeping the last N base-B digits equals reducing modulo B^N, so the
/// digit run is folded into an accumulator reduced at every step and no
/// intermediate buffer is needed.
fn parse_prefixed(text: &str, marker: char, radix: u32, modulus: u32) -> Option<u32> {
    let mut chars = text.chars().filter(|c| !is_separator(*c)).peekable();

    match chars.peek() {
        None => return None,
        Some('-') => return None,
        Some('+') => {
            chars.next();
        }
        Some(_) => {}
    }

    if chars.next() != Some('0') {
        return None;
    }
    match chars.next() {
        Some(c) if c.eq_ignore_ascii_case(&marker) => {}
        _ => return None,
    }

    let mut value = 0u32;
    let mut seen_digit = false;
    for c in chars {
        let digit = c.to_digit(radix)?;
        value = (value * radix + digit) % modulus;
        seen_digit = true;
    }
    if !seen_digit {
        return None;
    }
    Some(value)
}
