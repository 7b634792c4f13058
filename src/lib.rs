//! Strict string-to-number conversion.
//!
//! Unlike `atoi`-style helpers, every conversion here either consumes the whole token and
//! returns a value, or returns a [`ParseError`] saying why it did not. A parsed `0` can never
//! be confused with a failure, and trailing garbage is never ignored.

pub mod convert;

pub use convert::{
    parse, parse_f64, parse_float, parse_i32, parse_i32_hex, parse_i64, parse_integer,
    parse_unsigned, ConversionRequest, FailureReason, Number, NumericKind, ParseError,
    ParseResult, StrictFloat, StrictInteger, StrictNumber, StrictParseExt,
};
