//! Strict JSON number validation.
//!
//! The grammar is checked byte-by-byte before any conversion happens, so
//! inputs the platform's decimal parser would happily accept (`+1`,
//! `.5`, `1.`, `inf`, `NaN`) are rejected at the grammar boundary.

use crate::error::ParseError;

fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

fn skip_digits(bytes: &[u8], mut at: usize) -> usize {
    while at < bytes.len() && is_digit(bytes[at]) {
        at += 1;
    }
    at
}

/// Validates a number span at the start of `bytes`.
///
/// Returns the length of the longest prefix that is a complete JSON
/// number. After a leading `0` the integer part ends immediately, so
/// `0123` validates as the one-byte span `0` and the caller's
/// end-of-input check reports the remainder.
pub(crate) fn scan_number(bytes: &[u8]) -> Result<usize, ParseError> {
    let mut at = 0;

    if bytes.first() == Some(&b'-') {
        at += 1;
    }

    match bytes.get(at) {
        Some(b'0') => at += 1,
        Some(b) if is_digit(*b) => at = skip_digits(bytes, at + 1),
        _ => return Err(ParseError::InvalidValue),
    }

    if bytes.get(at) == Some(&b'.') {
        at += 1;
        if !bytes.get(at).is_some_and(|b| is_digit(*b)) {
            return Err(ParseError::InvalidValue);
        }
        at = skip_digits(bytes, at);
    }

    if matches!(bytes.get(at), Some(b'e' | b'E')) {
        at += 1;
        if matches!(bytes.get(at), Some(b'+' | b'-')) {
            at += 1;
        }
        if !bytes.get(at).is_some_and(|b| is_digit(*b)) {
            return Err(ParseError::InvalidValue);
        }
        at = skip_digits(bytes, at);
    }

    Ok(at)
}
