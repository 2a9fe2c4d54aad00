// SPDX-License-Identifier: Apache-2.0

//! `true`, `false` and `null`.
//!
//! The dispatcher has already seen the leading letter. The remaining bytes
//! are packed little-endian into a `u32` and compared in one go.

use crate::parse_error::{ErrKind, Error};

const fn pack(bytes: &[u8]) -> u32 {
    let mut packed = 0;
    let mut n = 0;
    while n < bytes.len() {
        packed |= (bytes[n] as u32) << (8 * n);
        n += 1;
    }
    packed
}

const TRUE_TAIL: &[u8] = b"rue";
const FALSE_TAIL: &[u8] = b"alse";
const NULL_TAIL: &[u8] = b"ull";

const TRUE_PACKED: u32 = pack(TRUE_TAIL);
const FALSE_PACKED: u32 = pack(FALSE_TAIL);
const NULL_PACKED: u32 = pack(NULL_TAIL);

#[inline(always)]
fn tail(json: &[u8], i: usize, len: usize, packed: u32) -> Result<usize, Error> {
    match json.get(i..i + len) {
        Some(bytes) if pack(bytes) == packed => Ok(i + len),
        _ => Error::at(ErrKind::InvalidLiteral, json, i),
    }
}

/// `i` points just past the `t`.
pub(crate) fn expect_true(json: &[u8], i: usize) -> Result<usize, Error> {
    tail(json, i, TRUE_TAIL.len(), TRUE_PACKED)
}

/// `i` points just past the `f`.
pub(crate) fn expect_false(json: &[u8], i: usize) -> Result<usize, Error> {
    tail(json, i, FALSE_TAIL.len(), FALSE_PACKED)
}

/// `i` points just past the `n`.
pub(crate) fn expect_null(json: &[u8], i: usize) -> Result<usize, Error> {
    tail(json, i, NULL_TAIL.len(), NULL_PACKED)
}
