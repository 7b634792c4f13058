//! Target types a token can be converted into, and the range-checked interpretation of a
//! scanned prefix for each of them.

use std::str::FromStr;

use super::error::{ParseError, ParseResult};
use super::scan::{FloatScan, IntegerScan};

mod sealed {
    pub trait Sealed {}
}

/// Primitive integers up to 64 bits wide. Signed targets accept a leading `+`/`-`.
pub trait StrictInteger: Copy + TryFrom<i128> + sealed::Sealed {
    const SIGNED: bool;
    const NAME: &'static str;
}

/// `f32` and `f64`.
pub trait StrictFloat: Copy + FromStr + sealed::Sealed {
    const NAME: &'static str;

    fn is_infinite(self) -> bool;
    fn is_zero(self) -> bool;
}

/// Any type with a default grammar: base 10 for integers, decimal float for floats.
pub trait StrictNumber: Copy + sealed::Sealed {
    fn parse_strict(token: &str) -> ParseResult<Self>;
}

macro_rules! strict_integer {
    ($($ty:ty => $signed:expr),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl StrictInteger for $ty {
                const SIGNED: bool = $signed;
                const NAME: &'static str = stringify!($ty);
            }

            impl StrictNumber for $ty {
                fn parse_strict(token: &str) -> ParseResult<Self> {
                    super::parse_integer(token, 10)
                }
            }
        )*
    };
}

macro_rules! strict_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl StrictFloat for $ty {
                const NAME: &'static str = stringify!($ty);

                fn is_infinite(self) -> bool {
                    <$ty>::is_infinite(self)
                }

                fn is_zero(self) -> bool {
                    self == 0.0
                }
            }

            impl StrictNumber for $ty {
                fn parse_strict(token: &str) -> ParseResult<Self> {
                    super::parse_float(token)
                }
            }
        )*
    };
}

strict_integer! {
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    isize => true,
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
    usize => false,
}

strict_float!(f32, f64);

/// Folds scanned digits into `T`. Accumulation is checked, so arbitrarily long tokens end in
/// `OutOfRange` instead of wrapping.
pub(super) fn integer_value<T: StrictInteger>(scan: &IntegerScan, radix: u32) -> ParseResult<T> {
    let out_of_range = ParseError::OutOfRange { target: T::NAME };
    let magnitude = scan
        .digits
        .iter()
        .try_fold(0u128, |acc, &digit| {
            acc.checked_mul(u128::from(radix))?
                .checked_add(u128::from(digit))
        })
        .ok_or_else(|| out_of_range.clone())?;
    let magnitude = i128::try_from(magnitude).map_err(|_| out_of_range.clone())?;
    let value = if scan.negative { -magnitude } else { magnitude };
    T::try_from(value).map_err(|_| out_of_range)
}

/// `text` is the full token and must equal the prefix described by `scan`.
pub(super) fn float_value<T: StrictFloat>(text: &str, scan: FloatScan) -> ParseResult<T> {
    let out_of_range = ParseError::OutOfRange { target: T::NAME };
    let value = text
        .parse::<T>()
        .map_err(|_| out_of_range.clone())?;
    if scan.special {
        return Ok(value);
    }
    if value.is_infinite() || (scan.nonzero_mantissa && value.is_zero()) {
        return Err(out_of_range);
    }
    Ok(value)
}
