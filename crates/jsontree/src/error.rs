use thiserror::Error;

/// Reasons a parse can fail.
///
/// Every error is detected synchronously and returned to the caller; a
/// failure inside a nested value is reported verbatim through the
/// recursive call chain. Parsing is a pure function of the input, so a
/// failed parse is only resolved by correcting the input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained only whitespace.
    #[error("expected a value")]
    ExpectValue,
    /// A literal, number, or other token did not match the JSON grammar.
    #[error("invalid value")]
    InvalidValue,
    /// Non-whitespace input remained after the root value.
    #[error("unexpected trailing characters after the root value")]
    RootNotSingular,
    /// A number overflowed the range of a double.
    #[error("number too big to represent")]
    NumberTooBig,
    /// The input ended inside a string.
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    /// An unrecognized character followed a backslash.
    #[error("invalid string escape")]
    InvalidStringEscape,
    /// A raw control character appeared inside a string.
    #[error("invalid character in string")]
    InvalidStringChar,
    /// A `\u` escape was not followed by four hex digits.
    #[error("invalid unicode escape hex digits")]
    InvalidUnicodeHex,
    /// A surrogate escape was unpaired or out of range.
    #[error("invalid unicode surrogate pair")]
    InvalidUnicodeSurrogate,
    /// An array element was not followed by `,` or `]`.
    #[error("missing comma or closing square bracket")]
    MissCommaOrSquareBracket,
    /// An object member did not start with a string key.
    #[error("missing object key")]
    MissKey,
    /// An object key was not followed by `:`.
    #[error("missing colon after object key")]
    MissColon,
    /// An object member was not followed by `,` or `}`.
    #[error("missing comma or closing curly bracket")]
    MissCommaOrCurlyBracket,
    /// Nesting exceeded [`ParserOptions::max_depth`](crate::ParserOptions).
    #[error("recursion depth limit exceeded")]
    RecursionDepthExceeded,
}
