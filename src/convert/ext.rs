//! Strict parsing as methods on `str`, for call sites that read better as `token.parse_strict()`.

use super::{parse, parse_integer, Number, NumericKind, ParseResult, StrictInteger, StrictNumber};

pub trait StrictParseExt {
    fn parse_strict<T: StrictNumber>(&self) -> ParseResult<T>;
    fn parse_radix<T: StrictInteger>(&self, radix: u32) -> ParseResult<T>;
    fn convert_as(&self, kind: NumericKind) -> ParseResult<Number>;
}

impl StrictParseExt for str {
    fn parse_strict<T: StrictNumber>(&self) -> ParseResult<T> {
        T::parse_strict(self)
    }

    fn parse_radix<T: StrictInteger>(&self, radix: u32) -> ParseResult<T> {
        parse_integer(self, radix)
    }

    fn convert_as(&self, kind: NumericKind) -> ParseResult<Number> {
        parse(self, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ParseError;

    #[test]
    fn parse_strict_picks_grammar_from_target() {
        assert_eq!("-12".parse_strict::<i16>(), Ok(-12));
        assert_eq!("3.5".parse_strict::<f32>(), Ok(3.5));
        assert_eq!(
            "3.5".parse_strict::<i32>(),
            Err(ParseError::PartialConsumption {
                offset: 1,
                found: '.'
            })
        );
    }

    #[test]
    fn parse_radix_checks_target_width() {
        assert_eq!("ff".parse_radix::<u8>(16), Ok(255));
        assert_eq!(
            "100".parse_radix::<u8>(16),
            Err(ParseError::OutOfRange { target: "u8" })
        );
    }

    #[test]
    fn convert_as_works_on_owned_strings() {
        let owned = String::from("101");
        assert_eq!(
            owned.convert_as(NumericKind::UnsignedWithBase(2)),
            Ok(Number::U64(5))
        );
    }
}
