//! String parsing: escapes, surrogate pairs, UTF-8 re-encoding.
//!
//! The scan runs byte-by-byte from just after the opening quote, pushing
//! decoded bytes onto the byte scratch stack until the closing quote pops
//! them back as one owned payload. The stack mark recorded on entry is
//! restored on every error path, including all unicode-decode failures.

use bstr::BString;

use super::ParseContext;
use crate::error::ParseError;

impl ParseContext<'_> {
    /// Parses a quoted string into an owned byte string.
    ///
    /// Used for both string values and object keys.
    pub(super) fn parse_string_payload(&mut self) -> Result<BString, ParseError> {
        let head = self.stack.top();
        let result = self.scan_string(head);
        if result.is_err() {
            self.stack.rewind(head);
        }
        result
    }

    fn scan_string(&mut self, head: usize) -> Result<BString, ParseError> {
        self.expect(b'"');
        loop {
            match self.next_byte() {
                None => return Err(ParseError::MissQuotationMark),
                Some(b'"') => {
                    let len = self.stack.top() - head;
                    return Ok(BString::from(self.stack.pop(len)));
                }
                Some(b'\\') => self.scan_escape()?,
                Some(byte) if byte < 0x20 => return Err(ParseError::InvalidStringChar),
                Some(byte) => self.stack.push_byte(byte),
            }
        }
    }

    fn scan_escape(&mut self) -> Result<(), ParseError> {
        match self.next_byte() {
            Some(b'"') => self.stack.push_byte(b'"'),
            Some(b'\\') => self.stack.push_byte(b'\\'),
            Some(b'/') => self.stack.push_byte(b'/'),
            Some(b'b') => self.stack.push_byte(0x08),
            Some(b'f') => self.stack.push_byte(0x0C),
            Some(b'n') => self.stack.push_byte(b'\n'),
            Some(b'r') => self.stack.push_byte(b'\r'),
            Some(b't') => self.stack.push_byte(b'\t'),
            Some(b'u') => {
                let unit = self.scan_hex4().ok_or(ParseError::InvalidUnicodeHex)?;
                let code_point = self.resolve_surrogate(unit)?;
                // Always a scalar value once surrogates are resolved.
                let ch =
                    char::from_u32(code_point).ok_or(ParseError::InvalidUnicodeSurrogate)?;
                let mut utf8 = [0u8; 4];
                self.stack.push_bytes(ch.encode_utf8(&mut utf8).as_bytes());
            }
            _ => return Err(ParseError::InvalidStringEscape),
        }
        Ok(())
    }

    /// Decodes exactly four hex digits into a 16-bit code unit.
    fn scan_hex4(&mut self) -> Option<u32> {
        let mut unit = 0;
        for _ in 0..4 {
            let digit = char::from(self.next_byte()?).to_digit(16)?;
            unit = (unit << 4) | digit;
        }
        Some(unit)
    }

    /// Combines surrogate halves into a supplementary-plane code point.
    ///
    /// A high surrogate must be immediately followed by an escaped low
    /// surrogate; a low surrogate on its own is never valid.
    fn resolve_surrogate(&mut self, unit: u32) -> Result<u32, ParseError> {
        match unit {
            0xD800..=0xDBFF => {
                if self.next_byte() != Some(b'\\') || self.next_byte() != Some(b'u') {
                    return Err(ParseError::InvalidUnicodeSurrogate);
                }
                let low = self
                    .scan_hex4()
                    .ok_or(ParseError::InvalidUnicodeSurrogate)?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(ParseError::InvalidUnicodeSurrogate);
                }
                Ok(0x10000 + (unit - 0xD800) * 0x400 + (low - 0xDC00))
            }
            0xDC00..=0xDFFF => Err(ParseError::InvalidUnicodeSurrogate),
            _ => Ok(unit),
        }
    }
}
