// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::Error;
use crate::scanner::Scanner;
use crate::{Directive, Info, Visitor};

/// Default limit on container nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Parser configuration.
///
/// A `Parser` holds no per-document state, so one value can be shared and
/// reused across threads and calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// A parser that allows [`DEFAULT_MAX_DEPTH`] levels of nesting.
    pub const fn new() -> Self {
        Parser {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limits how many objects and arrays may be open at once.
    ///
    /// Deeper input fails with [`ErrKind::MaxDepthReached`] at the offending
    /// bracket. Nesting is scanned recursively, so very large limits trade
    /// this error for the risk of exhausting the stack.
    ///
    /// # Example
    /// ```
    /// use pjson::{ErrKind, Parser};
    /// let parser = Parser::new().with_max_depth(2);
    /// assert!(parser.validate(b"[[1]]").is_ok());
    /// let err = parser.validate(b"[[[1]]]").unwrap_err();
    /// assert_eq!(err.kind(), ErrKind::MaxDepthReached);
    /// assert_eq!(err.position(), 2);
    /// ```
    ///
    /// [`ErrKind::MaxDepthReached`]: crate::ErrKind::MaxDepthReached
    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Parser { max_depth }
    }

    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parses `json`, calling `callback` for every element.
    ///
    /// # Example
    /// ```
    /// use pjson::{Directive, Info, Parser};
    /// let json = br#"{"a": [1, 2]}"#;
    /// let mut keys = 0;
    /// let res = Parser::new().parse(json, |_start, _end, info| {
    ///     if info.contains(Info::KEY) {
    ///         keys += 1;
    ///     }
    ///     Directive::Continue
    /// });
    /// assert_eq!(res, Ok(json.len()));
    /// assert_eq!(keys, 1);
    /// ```
    pub fn parse<F>(&self, json: &[u8], mut callback: F) -> Result<usize, Error>
    where
        F: FnMut(usize, usize, Info) -> Directive,
    {
        self.parse_with(json, &mut callback)
    }

    /// Parses `json`, reporting every element to `visitor`.
    pub fn parse_with<V>(&self, json: &[u8], visitor: &mut V) -> Result<usize, Error>
    where
        V: Visitor + ?Sized,
    {
        Scanner::new(json, self.max_depth).document(Some(visitor))
    }

    /// Checks that `json` is a single valid document without reporting any
    /// elements.
    pub fn validate(&self, json: &[u8]) -> Result<usize, Error> {
        Scanner::new(json, self.max_depth).document(None::<&mut dyn Visitor>)
    }
}
