//! Maximal-prefix scanners for the integer and decimal floating point grammars.
//!
//! Scanners never fail: they report how many bytes of the token belong to the longest prefix
//! that matches the grammar. Deciding whether that prefix is acceptable is left to the caller.

use smallvec::SmallVec;

// Longest first so `infinity` is not cut short at `inf`.
const SPECIALS: [&str; 3] = ["infinity", "inf", "nan"];

/// Digit values (not ASCII bytes) in the order they appear in the token.
pub(super) type Digits = SmallVec<[u8; 32]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct IntegerScan {
    pub negative: bool,
    pub digits: Digits,
    pub consumed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct FloatScan {
    pub consumed: usize,
    /// At least one mantissa digit is non-zero.
    pub nonzero_mantissa: bool,
    /// The prefix is `inf`, `infinity` or `nan`.
    pub special: bool,
}

/// `radix` must already be validated to lie in `2..=36`.
pub(super) fn scan_integer(bytes: &[u8], radix: u32, allow_sign: bool) -> IntegerScan {
    let mut pos = 0;
    let mut negative = false;
    if allow_sign {
        match bytes.first() {
            Some(b'-') => {
                negative = true;
                pos = 1;
            }
            Some(b'+') => pos = 1,
            _ => {}
        }
    }
    if radix == 16 && has_hex_prefix(&bytes[pos..]) {
        pos += 2;
    }

    let mut digits = Digits::new();
    while let Some(value) = bytes.get(pos).and_then(|&b| digit_value(b, radix)) {
        digits.push(value);
        pos += 1;
    }

    // A lone sign or prefix is not a number.
    let consumed = if digits.is_empty() { 0 } else { pos };
    IntegerScan {
        negative,
        digits,
        consumed,
    }
}

pub(super) fn scan_float(bytes: &[u8]) -> FloatScan {
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos = 1;
    }
    if let Some(len) = special_len(&bytes[pos..]) {
        return FloatScan {
            consumed: pos + len,
            nonzero_mantissa: false,
            special: true,
        };
    }

    let (int_digits, int_nonzero) = leading_digits(&bytes[pos..]);
    pos += int_digits;
    let mut frac_digits = 0;
    let mut frac_nonzero = false;
    if bytes.get(pos) == Some(&b'.') {
        (frac_digits, frac_nonzero) = leading_digits(&bytes[pos + 1..]);
        if int_digits + frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return FloatScan {
            consumed: 0,
            nonzero_mantissa: false,
            special: false,
        };
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let (exp_digits, _) = leading_digits(&bytes[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    FloatScan {
        consumed: pos,
        nonzero_mantissa: int_nonzero || frac_nonzero,
        special: false,
    }
}

fn has_hex_prefix(bytes: &[u8]) -> bool {
    matches!(bytes, [b'0', b'x' | b'X', next, ..] if next.is_ascii_hexdigit())
}

fn digit_value(byte: u8, radix: u32) -> Option<u8> {
    char::from(byte).to_digit(radix).map(|digit| digit as u8)
}

fn leading_digits(bytes: &[u8]) -> (usize, bool) {
    let count = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let nonzero = bytes[..count].iter().any(|&b| b != b'0');
    (count, nonzero)
}

fn special_len(bytes: &[u8]) -> Option<usize> {
    SPECIALS
        .iter()
        .find(|word| {
            bytes
                .get(..word.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(word.as_bytes()))
        })
        .map(|word| word.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_scan_stops_at_first_foreign_byte() {
        let scan = scan_integer(b"12a", 10, true);
        assert_eq!(scan.consumed, 2);
        assert_eq!(scan.digits.as_slice(), &[1, 2]);
        assert!(!scan.negative);
    }

    #[test]
    fn sign_without_digits_consumes_nothing() {
        assert_eq!(scan_integer(b"-", 10, true).consumed, 0);
        assert_eq!(scan_integer(b"+x", 10, true).consumed, 0);
    }

    #[test]
    fn unsigned_scan_rejects_sign() {
        let scan = scan_integer(b"-5", 10, false);
        assert_eq!(scan.consumed, 0, "sign is not part of the unsigned grammar");
    }

    #[test]
    fn hex_prefix_requires_a_following_digit() {
        let scan = scan_integer(b"0xff", 16, true);
        assert_eq!(scan.consumed, 4);
        assert_eq!(scan.digits.as_slice(), &[15, 15]);

        let bare = scan_integer(b"0x", 16, true);
        assert_eq!(bare.consumed, 1, "only the leading zero is a hex number");

        let decimal = scan_integer(b"0x10", 10, true);
        assert_eq!(decimal.consumed, 1, "prefix is only recognised in base 16");
    }

    #[test]
    fn digits_are_limited_by_radix() {
        assert_eq!(scan_integer(b"1012", 2, false).consumed, 3);
        assert_eq!(scan_integer(b"zZ", 36, false).digits.as_slice(), &[35, 35]);
        assert_eq!(scan_integer("٣".as_bytes(), 10, false).consumed, 0);
    }

    #[test]
    fn digits_beyond_inline_capacity_are_kept() {
        let token = "7".repeat(100);
        let scan = scan_integer(token.as_bytes(), 10, false);
        assert_eq!(scan.consumed, 100);
        assert_eq!(scan.digits.len(), 100, "digit buffer should spill rather than truncate");
        assert!(scan.digits.iter().all(|&digit| digit == 7));
    }

    #[test]
    fn float_scan_covers_fraction_and_exponent() {
        assert_eq!(scan_float(b"3.14").consumed, 4);
        assert_eq!(scan_float(b"3.14.1").consumed, 4);
        assert_eq!(scan_float(b"-.5e-3").consumed, 6);
        assert_eq!(scan_float(b"7.").consumed, 2);
        assert_eq!(scan_float(b"1e").consumed, 1, "dangling exponent marker is left over");
        assert_eq!(scan_float(b"1e+").consumed, 1);
        assert_eq!(scan_float(b".").consumed, 0);
        assert_eq!(scan_float(b"-").consumed, 0);
    }

    #[test]
    fn float_scan_tracks_nonzero_mantissa() {
        assert!(!scan_float(b"0.000e-999").nonzero_mantissa);
        assert!(scan_float(b"0.001").nonzero_mantissa);
    }

    #[test]
    fn float_scan_recognises_specials() {
        let scan = scan_float(b"-Infinity");
        assert!(scan.special);
        assert_eq!(scan.consumed, 9);
        assert_eq!(scan_float(b"infx").consumed, 3);
        assert_eq!(scan_float(b"NaN").consumed, 3);
        assert!(!scan_float(b"in").special);
    }
}
