//! A strict, single-pass JSON tree parser.
//!
//! [`parse`] converts a complete UTF-8 input into an owned [`Value`] tree,
//! conforming exactly to the JSON grammar: literals, numbers, strings with
//! escapes and surrogate pairs, arrays, and objects. Malformed input is
//! rejected at the grammar boundary with a precise [`ParseError`] code; no
//! partial value is ever exposed.
//!
//! ```rust
//! use jsontree::{parse, Value};
//!
//! let v = parse(r#"[null, true, 3.25, "snow❄"]"#).unwrap();
//! let items = v.as_array().unwrap();
//! assert_eq!(items.len(), 4);
//! assert_eq!(items[2].as_number(), Some(3.25));
//! assert_eq!(items[3].as_string().unwrap(), "snow\u{2744}");
//! ```
//!
//! The whole input must be in memory before parsing begins; this is not a
//! streaming parser. Each call owns its parse state, so concurrent parses
//! on separate threads need no synchronization.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use options::ParserOptions;
pub use parser::{parse, parse_with_options};
pub use value::{Array, Member, Object, Value, ValueKind};
