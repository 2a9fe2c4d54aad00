// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::{ErrKind, Error};
use crate::Info;

/// Bytes that end a run of plain string content: control characters, the
/// closing quote and the escape introducer.
const TERMINATORS: [bool; 256] = {
    let mut table = [false; 256];
    let mut byte = 0;
    while byte < 0x20 {
        table[byte] = true;
        byte += 1;
    }
    table[b'"' as usize] = true;
    table[b'\\' as usize] = true;
    table
};

/// Block size of the unrolled search.
const STRIDE: usize = 8;

#[inline(always)]
fn is_terminator(byte: u8) -> bool {
    TERMINATORS[byte as usize]
}

/// Offset of the first terminator at or after `i`, or `json.len()`.
#[inline(always)]
fn find_terminator(json: &[u8], mut i: usize) -> usize {
    let rest = json.get(i..).unwrap_or_default();
    if cfg!(feature = "unroll") {
        let mut blocks = rest.chunks_exact(STRIDE);
        for block in &mut blocks {
            if let Some(n) = block.iter().position(|&b| is_terminator(b)) {
                return i + n;
            }
            i += STRIDE;
        }
        return match blocks.remainder().iter().position(|&b| is_terminator(b)) {
            Some(n) => i + n,
            None => json.len(),
        };
    }
    match rest.iter().position(|&b| is_terminator(b)) {
        Some(n) => i + n,
        None => json.len(),
    }
}

/// Scans a string body. `i` points just past the opening quote.
///
/// Returns the offset past the closing quote and [`Info::ESCAPED`] if any
/// escape was seen.
pub(crate) fn scan(json: &[u8], mut i: usize) -> Result<(usize, Info), Error> {
    let mut info = Info::NONE;
    loop {
        i = find_terminator(json, i);
        match json.get(i) {
            Some(b'"') => return Ok((i + 1, info)),
            Some(b'\\') => {
                info |= Info::ESCAPED;
                i = escape(json, i + 1)?;
            }
            Some(&byte) => return Error::new(ErrKind::UnescapedControlCharacter, Some(byte), i),
            None => return Error::new(ErrKind::UnexpectedEnd, None, i),
        }
    }
}

/// Validates one escape sequence. `i` points just past the backslash.
fn escape(json: &[u8], i: usize) -> Result<usize, Error> {
    match json.get(i) {
        Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't') => Ok(i + 1),
        Some(b'u') => {
            for j in i + 1..i + 5 {
                match json.get(j) {
                    Some(b) if b.is_ascii_hexdigit() => {}
                    _ => return Error::at(ErrKind::InvalidUnicodeEscape, json, j),
                }
            }
            Ok(i + 5)
        }
        _ => Error::at(ErrKind::InvalidStringEscape, json, i),
    }
}
