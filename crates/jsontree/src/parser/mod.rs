//! Recursive-descent JSON parser.
//!
//! One [`ParseContext`] lives for the duration of a single top-level
//! parse: a byte cursor over the input plus the scratch stacks used to
//! accumulate string bytes and container elements before they are
//! committed into owned payloads. Every push onto a scratch stack is
//! matched by a pop on success or an unwind on the error path, so the
//! entry points can assert that all marks are back at zero before
//! returning.

mod numbers;
mod stack;
mod strings;

use alloc::vec::Vec;

use stack::ByteStack;

use crate::{
    error::ParseError,
    options::ParserOptions,
    value::{Array, Member, Object, Value},
};

/// Parses a complete JSON text into an owned [`Value`] tree.
///
/// The input must contain exactly one JSON value, optionally surrounded
/// by whitespace; anything else after the root value is rejected.
///
/// # Examples
///
/// ```
/// use jsontree::{parse, ParseError};
///
/// let v = parse(r#"{"id": 7, "tags": ["a", "b"]}"#).unwrap();
/// assert_eq!(v.as_object().unwrap().len(), 2);
///
/// assert_eq!(parse("null x"), Err(ParseError::RootNotSingular));
/// ```
///
/// # Errors
///
/// Returns the [`ParseError`] raised by the first grammar violation in
/// the input. No value is exposed on failure.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parse_with_options(input, ParserOptions::default())
}

/// Parses a complete JSON text with explicit [`ParserOptions`].
///
/// # Errors
///
/// As [`parse`], plus [`ParseError::RecursionDepthExceeded`] when arrays
/// and objects nest deeper than `options.max_depth`.
pub fn parse_with_options(input: &str, options: ParserOptions) -> Result<Value, ParseError> {
    let mut ctx = ParseContext::new(input, options);
    let result = ctx.parse_document();
    debug_assert_eq!(ctx.stack.top(), 0, "byte scratch stack not unwound");
    debug_assert!(ctx.elements.is_empty(), "element scratch stack not unwound");
    debug_assert!(ctx.members.is_empty(), "member scratch stack not unwound");
    result
}

pub(crate) struct ParseContext<'src> {
    src: &'src str,
    pos: usize,
    stack: ByteStack,
    elements: Vec<Value>,
    members: Vec<Member>,
    depth: usize,
    max_depth: usize,
}

impl<'src> ParseContext<'src> {
    fn new(src: &'src str, options: ParserOptions) -> Self {
        Self {
            src,
            pos: 0,
            stack: ByteStack::new(),
            elements: Vec::new(),
            members: Vec::new(),
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consumes a byte the dispatcher already matched.
    fn expect(&mut self, byte: u8) {
        debug_assert_eq!(self.peek(), Some(byte));
        self.pos += 1;
    }

    fn rest(&self) -> &'src [u8] {
        &self.src.as_bytes()[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.advance();
        }
    }

    fn parse_document(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        let value = self.parse_value()?;
        self.skip_whitespace();
        if self.at_end() {
            Ok(value)
        } else {
            Err(ParseError::RootNotSingular)
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b'f') => self.parse_literal("false", Value::Boolean(false)),
            Some(b't') => self.parse_literal("true", Value::Boolean(true)),
            Some(b'"') => self.parse_string(),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => self.parse_number(),
            None => Err(ParseError::ExpectValue),
        }
    }

    fn parse_literal(&mut self, keyword: &'static str, value: Value) -> Result<Value, ParseError> {
        if self.rest().starts_with(keyword.as_bytes()) {
            self.pos += keyword.len();
            Ok(value)
        } else {
            Err(ParseError::InvalidValue)
        }
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let len = numbers::scan_number(self.rest())?;
        let span = &self.src[self.pos..self.pos + len];
        let number: f64 = span.parse().map_err(|_| ParseError::InvalidValue)?;
        if number.is_infinite() {
            return Err(ParseError::NumberTooBig);
        }
        self.pos += len;
        Ok(Value::Number(number))
    }

    fn parse_string(&mut self) -> Result<Value, ParseError> {
        self.parse_string_payload().map(Value::String)
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        let result = self.parse_array_elements();
        self.leave();
        result
    }

    fn parse_array_elements(&mut self) -> Result<Value, ParseError> {
        self.expect(b'[');
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.advance();
            return Ok(Value::Array(Array::new()));
        }
        let mark = self.elements.len();
        loop {
            match self.parse_value() {
                Ok(element) => self.elements.push(element),
                Err(error) => return Err(self.unwind_elements(mark, error)),
            }
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.advance();
                    self.skip_whitespace();
                }
                Some(b']') => {
                    self.advance();
                    return Ok(Value::Array(self.elements.split_off(mark)));
                }
                _ => return Err(self.unwind_elements(mark, ParseError::MissCommaOrSquareBracket)),
            }
        }
    }

    /// Drops the elements this frame pushed, freeing their payloads.
    fn unwind_elements(&mut self, mark: usize, error: ParseError) -> ParseError {
        self.elements.truncate(mark);
        error
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        let result = self.parse_object_members();
        self.leave();
        result
    }

    fn parse_object_members(&mut self) -> Result<Value, ParseError> {
        self.expect(b'{');
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.advance();
            return Ok(Value::Object(Object::new()));
        }
        let mark = self.members.len();
        loop {
            if self.peek() != Some(b'"') {
                return Err(self.unwind_members(mark, ParseError::MissKey));
            }
            let key = match self.parse_string_payload() {
                Ok(key) => key,
                Err(error) => return Err(self.unwind_members(mark, error)),
            };
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.unwind_members(mark, ParseError::MissColon));
            }
            self.advance();
            self.skip_whitespace();
            match self.parse_value() {
                Ok(value) => self.members.push(Member::new(key, value)),
                Err(error) => return Err(self.unwind_members(mark, error)),
            }
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.advance();
                    self.skip_whitespace();
                }
                Some(b'}') => {
                    self.advance();
                    return Ok(Value::Object(self.members.split_off(mark)));
                }
                _ => return Err(self.unwind_members(mark, ParseError::MissCommaOrCurlyBracket)),
            }
        }
    }

    /// Drops the members this frame pushed, freeing their payloads.
    fn unwind_members(&mut self, mark: usize, error: ParseError) -> ParseError {
        self.members.truncate(mark);
        error
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth == self.max_depth {
            return Err(ParseError::RecursionDepthExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}
