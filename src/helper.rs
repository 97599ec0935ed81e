//! helper functions in this crate

use crate::err::ConfigErr;
use crate::Result;

// written for the empty value, an empty token would be dropped by the tokenizer
const EMPTY: &str = "\\0";

/// Escapes a value so it survives the space separated, single line format.
#[inline]
pub fn to_printable_string(value: &str) -> String {
    if value.is_empty() {
        return EMPTY.to_string();
    }
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            ' ' => escaped.push_str("\\s"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Inverse of [`to_printable_string`].
pub fn from_printable_string(value: &str) -> Result<String> {
    if value == EMPTY {
        return Ok(String::new());
    }
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => result.push('\\'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('s') => result.push(' '),
            _ => return Err(ConfigErr::InvalidEscape(value.to_string())),
        }
    }
    Ok(result)
}

/// Integer conversion with C `atoi` semantics: skips leading whitespace,
/// takes an optional sign and the longest digit prefix, yields 0 when no
/// digit is found and saturates at the `i32` bounds.
pub fn atoi(value: &str) -> i32 {
    let s = value.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let limit = i64::from(i32::MAX) + 1;
    let mut acc: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        acc = (acc * 10 + i64::from(b - b'0')).min(limit);
    }
    if negative {
        acc = -acc;
    }
    acc.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
