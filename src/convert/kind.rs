use std::fmt;

/// Requested interpretation of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// Base 10 into `i32`.
    SignedDecimal,
    /// Base 16 into `i32`, optional `0x`/`0X` prefix.
    SignedHex,
    /// Any base in `2..=36` into `i64`.
    SignedWithBase(u32),
    /// Any base in `2..=36` into `u64`. No sign is accepted.
    UnsignedWithBase(u32),
    /// Decimal float grammar into `f64`.
    Float,
    /// Decimal float grammar into `f32`.
    SinglePrecisionFloat,
}

impl NumericKind {
    /// Radix used by integer kinds, `None` for floats.
    pub fn radix(self) -> Option<u32> {
        match self {
            NumericKind::SignedDecimal => Some(10),
            NumericKind::SignedHex => Some(16),
            NumericKind::SignedWithBase(base) | NumericKind::UnsignedWithBase(base) => Some(base),
            NumericKind::Float | NumericKind::SinglePrecisionFloat => None,
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericKind::SignedDecimal => write!(f, "signed decimal"),
            NumericKind::SignedHex => write!(f, "signed hex"),
            NumericKind::SignedWithBase(base) => write!(f, "signed base-{base}"),
            NumericKind::UnsignedWithBase(base) => write!(f, "unsigned base-{base}"),
            NumericKind::Float => write!(f, "float"),
            NumericKind::SinglePrecisionFloat => write!(f, "single-precision float"),
        }
    }
}

/// A successfully converted value. Its variant always matches the [`NumericKind`] that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I32(i32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
}

impl Number {
    /// Integer value, when it is representable as `i64`.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Number::I32(value) => Some(i64::from(value)),
            Number::I64(value) => Some(value),
            Number::U64(value) => i64::try_from(value).ok(),
            Number::F32(_) | Number::F64(_) => None,
        }
    }

    /// Lossy for 64-bit integers beyond 2^53.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::I32(value) => f64::from(value),
            Number::I64(value) => value as f64,
            Number::U64(value) => value as f64,
            Number::F32(value) => f64::from(value),
            Number::F64(value) => value,
        }
    }

    pub fn is_integer(self) -> bool {
        !matches!(self, Number::F32(_) | Number::F64(_))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I32(value) => write!(f, "{value}"),
            Number::I64(value) => write!(f, "{value}"),
            Number::U64(value) => write!(f, "{value}"),
            Number::F32(value) => write!(f, "{value}"),
            Number::F64(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_kinds_report_their_radix() {
        assert_eq!(NumericKind::SignedDecimal.radix(), Some(10));
        assert_eq!(NumericKind::SignedHex.radix(), Some(16));
        assert_eq!(NumericKind::UnsignedWithBase(8).radix(), Some(8));
        assert_eq!(NumericKind::Float.radix(), None);
    }

    #[test]
    fn number_conversions() {
        assert_eq!(Number::U64(u64::MAX).as_i64(), None);
        assert_eq!(Number::I32(-7).as_i64(), Some(-7));
        assert_eq!(Number::F64(1.5).as_i64(), None);
        assert_eq!(Number::I64(3).as_f64(), 3.0);
        assert!(Number::U64(0).is_integer());
        assert_eq!(Number::F32(0.5).to_string(), "0.5");
    }
}
