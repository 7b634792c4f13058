//! All-or-nothing conversion of text tokens into numbers.
//!
//! Every entry point follows the same pipeline: validate the radix, reject an empty token,
//! scan the longest prefix matching the grammar, require that prefix to be the whole token,
//! then interpret it with range checking. The first failing step decides the error.

mod error;
mod ext;
mod kind;
mod number;
mod scan;

use tracing::trace;

pub use error::{FailureReason, ParseError, ParseResult};
pub use ext::StrictParseExt;
pub use kind::{Number, NumericKind};
pub use number::{StrictFloat, StrictInteger, StrictNumber};

use number::{float_value, integer_value};
use scan::{scan_float, scan_integer};

/// A token paired with the kind it should be converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRequest<'a> {
    token: &'a str,
    kind: NumericKind,
}

impl<'a> ConversionRequest<'a> {
    pub fn new(token: &'a str, kind: NumericKind) -> Self {
        Self { token, kind }
    }

    pub fn token(&self) -> &'a str {
        self.token
    }

    pub fn kind(&self) -> NumericKind {
        self.kind
    }

    pub fn convert(self) -> ParseResult<Number> {
        let token = self.token;
        let result = match self.kind {
            NumericKind::SignedDecimal | NumericKind::SignedHex => {
                self.integer().map(Number::I32)
            }
            NumericKind::SignedWithBase(_) => self.integer().map(Number::I64),
            NumericKind::UnsignedWithBase(_) => self.integer().map(Number::U64),
            NumericKind::Float => parse_float(token).map(Number::F64),
            NumericKind::SinglePrecisionFloat => parse_float(token).map(Number::F32),
        };
        if let Err(err) = &result {
            trace!(token, kind = %self.kind, error = %err, "rejected numeric token");
        }
        result
    }

    // Float kinds have no radix; `convert` never routes them here.
    fn integer<T: StrictInteger>(self) -> ParseResult<T> {
        let radix = self
            .kind
            .radix()
            .ok_or(ParseError::InvalidConfiguration { base: 0 })?;
        parse_integer(self.token, radix)
    }
}

/// Converts `token` according to `kind`.
///
/// ```
/// use strictnum::{parse, FailureReason, Number, NumericKind};
///
/// assert_eq!(parse("0", NumericKind::SignedDecimal), Ok(Number::I32(0)));
/// let err = parse("12a", NumericKind::SignedDecimal).unwrap_err();
/// assert_eq!(err.reason(), FailureReason::PartialConsumption);
/// ```
pub fn parse(token: &str, kind: NumericKind) -> ParseResult<Number> {
    ConversionRequest::new(token, kind).convert()
}

/// Converts `token` into any primitive integer using digits of `radix` (`2..=36`).
///
/// In base 16 an optional `0x`/`0X` prefix is accepted after the sign.
pub fn parse_integer<T: StrictInteger>(token: &str, radix: u32) -> ParseResult<T> {
    if !(2..=36).contains(&radix) {
        return Err(ParseError::InvalidConfiguration { base: radix });
    }
    ensure_nonempty(token)?;
    let scan = scan_integer(token.as_bytes(), radix, T::SIGNED);
    ensure_consumed(token, scan.consumed)?;
    integer_value(&scan, radix)
}

/// Converts `token` using the decimal floating point grammar (sign, digits, optional
/// fraction, optional exponent) or one of `inf`, `infinity`, `nan`.
pub fn parse_float<T: StrictFloat>(token: &str) -> ParseResult<T> {
    ensure_nonempty(token)?;
    let scan = scan_float(token.as_bytes());
    ensure_consumed(token, scan.consumed)?;
    float_value(token, scan)
}

pub fn parse_i32(token: &str) -> ParseResult<i32> {
    parse_integer(token, 10)
}

pub fn parse_i32_hex(token: &str) -> ParseResult<i32> {
    parse_integer(token, 16)
}

pub fn parse_i64(token: &str) -> ParseResult<i64> {
    parse_integer(token, 10)
}

pub fn parse_unsigned(token: &str, base: u32) -> ParseResult<u64> {
    parse_integer(token, base)
}

pub fn parse_f64(token: &str) -> ParseResult<f64> {
    parse_float(token)
}

fn ensure_nonempty(token: &str) -> ParseResult<()> {
    if token.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(())
}

fn ensure_consumed(token: &str, consumed: usize) -> ParseResult<()> {
    if consumed == 0 {
        return Err(ParseError::NonNumericCharacter {
            found: first_char(token),
        });
    }
    if consumed < token.len() {
        // Scanners only consume ASCII, so `consumed` is a char boundary.
        return Err(ParseError::PartialConsumption {
            offset: consumed,
            found: first_char(&token[consumed..]),
        });
    }
    Ok(())
}

fn first_char(text: &str) -> char {
    text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER)
}
