// SPDX-License-Identifier: Apache-2.0

//! A zero-copy JSON scanner.
//!
//! `pjson` walks a complete JSON document in one pass, checks it against the
//! JSON grammar and reports every element (values, keys and punctuation) to a
//! visitor as a byte range plus an [`Info`] classification. It allocates
//! nothing and builds nothing: turning ranges into numbers or unescaped
//! strings is up to the caller.
//!
//! ```
//! use pjson::{Directive, Info};
//!
//! let json = br#"{"a":1}"#;
//! let mut seen = [Info::NONE; 5];
//! let mut n = 0;
//! let res = pjson::parse(json, |_start, _end, info| {
//!     seen[n] = info;
//!     n += 1;
//!     Directive::Continue
//! });
//! assert_eq!(res, Ok(7));
//! assert_eq!(
//!     seen,
//!     [
//!         Info::START | Info::OPEN | Info::OBJECT,
//!         Info::KEY | Info::STRING,
//!         Info::COLON,
//!         Info::VALUE | Info::NUMBER,
//!         Info::END | Info::CLOSE | Info::OBJECT,
//!     ]
//! );
//! ```
//!
//! The visitor steers the parse with a [`Directive`]: [`Directive::Stop`]
//! ends it early and [`Directive::SkipSubtree`] on an opening bracket hides
//! everything up to the matching close.

#![cfg_attr(not(test), no_std)]

mod info;
pub use info::Info;

mod parse_error;
pub use parse_error::{ErrKind, Error};

mod parser;
pub use parser::{Parser, DEFAULT_MAX_DEPTH};

mod scanner;

mod visitor;
pub use visitor::{Directive, Event, Visitor};

/// Parses `json` with the default [`Parser`], calling `callback` for every
/// element.
///
/// Returns the number of bytes consumed, which is `json.len()` unless the
/// callback returned [`Directive::Stop`]; in that case it is the end offset of
/// the element it stopped on.
pub fn parse<F>(json: &[u8], callback: F) -> Result<usize, Error>
where
    F: FnMut(usize, usize, Info) -> Directive,
{
    Parser::new().parse(json, callback)
}

/// Like [`parse`], for visitor types and trait objects.
pub fn parse_with<V>(json: &[u8], visitor: &mut V) -> Result<usize, Error>
where
    V: Visitor + ?Sized,
{
    Parser::new().parse_with(json, visitor)
}

/// Checks that `json` is exactly one valid document, surrounded by nothing
/// but whitespace.
///
/// ```
/// assert_eq!(pjson::validate(b" [true, null] "), Ok(14));
/// assert_eq!(pjson::validate(b"[1,]").unwrap_err().position(), 3);
/// ```
pub fn validate(json: &[u8]) -> Result<usize, Error> {
    Parser::new().validate(json)
}

/// Folds a parse result into a single signed code.
///
/// Positive values are successes carrying the consumed length or the stop
/// offset. Anything else is a failure whose negation is the offset of the
/// violation. An empty input gives `0`.
///
/// ```
/// use pjson::{result_code, validate};
/// assert_eq!(result_code(&validate(b" false ")), 7);
/// assert_eq!(result_code(&validate(br#" {"hel\y" : 1}"#)), -7);
/// assert_eq!(result_code(&validate(b"")), 0);
/// ```
pub fn result_code(result: &Result<usize, Error>) -> isize {
    match result {
        Ok(consumed) => *consumed as isize,
        Err(err) => err.code(),
    }
}
