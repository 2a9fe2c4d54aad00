// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::{ErrKind, Error};
use crate::Info;

/// Scans a number.
///
/// For a negative number `i` points just past the `-` and `signed` is set;
/// otherwise `i` points at the first digit. Returns the exclusive end of the
/// number and its [`Info::SIGN`], [`Info::DOT`] and [`Info::EXPONENT`] bits.
pub(crate) fn scan(json: &[u8], mut i: usize, signed: bool) -> Result<(usize, Info), Error> {
    let mut info = Info::NONE;
    if signed {
        info |= Info::SIGN;
    }

    // Integer part: a lone zero, or a non-zero digit followed by digits
    i = match json.get(i) {
        Some(b'0') => i + 1,
        Some(b'1'..=b'9') => digits(json, i + 1),
        _ => return Error::at(ErrKind::InvalidNumber, json, i),
    };

    if json.get(i) == Some(&b'.') {
        info |= Info::DOT;
        i = require_digits(json, i + 1)?;
    }

    if let Some(b'e' | b'E') = json.get(i) {
        info |= Info::EXPONENT;
        i += 1;
        if let Some(b'+' | b'-') = json.get(i) {
            i += 1;
        }
        i = require_digits(json, i)?;
    }

    Ok((i, info))
}

/// Skips a run of digits starting at `i`.
#[inline]
fn digits(json: &[u8], i: usize) -> usize {
    let rest = json.get(i..).unwrap_or_default();
    i + rest.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Like [`digits`], but at least one digit must be present.
#[inline]
fn require_digits(json: &[u8], i: usize) -> Result<usize, Error> {
    match json.get(i) {
        Some(b) if b.is_ascii_digit() => Ok(digits(json, i + 1)),
        _ => Error::at(ErrKind::InvalidNumber, json, i),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    /// Scans `json` from offset 0 the way the value dispatcher would.
    fn number(json: &[u8]) -> Result<(usize, Info), Error> {
        match json.first() {
            Some(b'-') => scan(json, 1, true),
            _ => scan(json, 0, false),
        }
    }

    fn fails_at(json: &[u8], kind: ErrKind, position: usize) {
        let err = number(json).unwrap_err();
        assert_eq!((err.kind(), err.position()), (kind, position), "{json:?}");
    }

    #[test]
    fn test_integers() {
        assert_eq!(number(b"0"), Ok((1, Info::NONE)));
        assert_eq!(number(b"7"), Ok((1, Info::NONE)));
        assert_eq!(number(b"1234567890"), Ok((10, Info::NONE)));
        assert_eq!(number(b"-1"), Ok((2, Info::SIGN)));
        assert_eq!(number(b"-0"), Ok((2, Info::SIGN)));
    }

    #[test]
    fn test_stops_at_first_foreign_byte() {
        assert_eq!(number(b"12,"), Ok((2, Info::NONE)));
        assert_eq!(number(b"3]"), Ok((1, Info::NONE)));
        assert_eq!(number(b"-1.0 i"), Ok((4, Info::SIGN | Info::DOT)));
        // the second zero is left for the caller to reject
        assert_eq!(number(b"00"), Ok((1, Info::NONE)));
        assert_eq!(number(b"-00"), Ok((2, Info::SIGN)));
        assert_eq!(number(b"0x1"), Ok((1, Info::NONE)));
    }

    #[test]
    fn test_fractions_and_exponents() {
        assert_eq!(number(b"0.0"), Ok((3, Info::DOT)));
        assert_eq!(number(b"10.0"), Ok((4, Info::DOT)));
        assert_eq!(number(b"10e1"), Ok((4, Info::EXPONENT)));
        assert_eq!(number(b"10E123"), Ok((6, Info::EXPONENT)));
        assert_eq!(number(b"10E-0123"), Ok((8, Info::EXPONENT)));
        assert_eq!(number(b"0e+5"), Ok((4, Info::EXPONENT)));
        assert_eq!(
            number(b"-12.5e-3"),
            Ok((8, Info::SIGN | Info::DOT | Info::EXPONENT))
        );
    }

    #[test]
    fn test_sign_needs_digit() {
        fails_at(b"-", ErrKind::UnexpectedEnd, 1);
        fails_at(b"-.", ErrKind::InvalidNumber, 1);
        fails_at(b"-\n", ErrKind::InvalidNumber, 1);
        fails_at(b"-a", ErrKind::InvalidNumber, 1);
    }

    #[test]
    fn test_fraction_needs_digit() {
        fails_at(b"-1.", ErrKind::UnexpectedEnd, 3);
        fails_at(b"123.a123", ErrKind::InvalidNumber, 4);
        fails_at(b"1.e5", ErrKind::InvalidNumber, 2);
    }

    #[test]
    fn test_exponent_needs_digit() {
        fails_at(b"10EE", ErrKind::InvalidNumber, 3);
        fails_at(b"10E-", ErrKind::UnexpectedEnd, 4);
        fails_at(b"10E+", ErrKind::UnexpectedEnd, 4);
        fails_at(b"123.123e", ErrKind::UnexpectedEnd, 8);
        fails_at(b"1e+-1", ErrKind::InvalidNumber, 3);
    }
}
