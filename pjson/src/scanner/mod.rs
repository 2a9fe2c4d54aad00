// SPDX-License-Identifier: Apache-2.0

//! The grammar engine.
//!
//! A recursive-descent walk over the whole input: the document driver calls
//! the value dispatcher once, and the object and array scanners call back into
//! the dispatcher for every member. The visitor is threaded through as an
//! `Option`; inside a skipped subtree it is `None` and only the grammar is
//! checked.

mod literal;
mod number;
mod string;

use log::{debug, trace};

use crate::parse_error::{ErrKind, Error};
use crate::{Directive, Info, Visitor};

const WHITESPACE: [bool; 256] = {
    let mut table = [false; 256];
    table[b' ' as usize] = true;
    table[b'\t' as usize] = true;
    table[b'\n' as usize] = true;
    table[b'\r' as usize] = true;
    table
};

/// Where a scan routine left the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Keep going from this offset.
    Next(usize),
    /// The visitor stopped the parse at this offset.
    Stopped(usize),
}

/// Scan state for one parse call.
pub(crate) struct Scanner<'a> {
    json: &'a [u8],
    depth: usize,
    max_depth: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(json: &'a [u8], max_depth: usize) -> Self {
        Scanner {
            json,
            depth: 0,
            max_depth,
        }
    }

    /// Scans one complete document, returning the number of bytes consumed or
    /// the offset at which the visitor stopped.
    pub(crate) fn document<V>(&mut self, mut visitor: Option<&mut V>) -> Result<usize, Error>
    where
        V: Visitor + ?Sized,
    {
        if self.json.is_empty() {
            return Error::new(ErrKind::EmptyStream, None, 0);
        }
        let end = match self.value(0, Info::START, visitor.as_deref_mut())? {
            Flow::Next(end) => end,
            Flow::Stopped(at) => {
                debug!("visitor stopped at {at}");
                return Ok(at);
            }
        };
        let rest = self.skip_whitespace(end);
        if rest < self.json.len() {
            return Error::at(ErrKind::TrailingContent, self.json, rest);
        }
        Ok(rest)
    }

    #[inline]
    fn skip_whitespace(&self, i: usize) -> usize {
        let rest = self.json.get(i..).unwrap_or_default();
        i + rest
            .iter()
            .take_while(|&&b| WHITESPACE[b as usize])
            .count()
    }

    /// Value dispatcher. `role` is [`Info::START`] for the document root and
    /// [`Info::VALUE`] for members and elements.
    fn value<V>(&mut self, i: usize, role: Info, mut visitor: Option<&mut V>) -> Result<Flow, Error>
    where
        V: Visitor + ?Sized,
    {
        let i = self.skip_whitespace(i);
        let json = self.json;
        let (end, info) = match json.get(i) {
            Some(b'"') => {
                let (end, detail) = string::scan(json, i + 1)?;
                (end, Info::STRING | detail)
            }
            Some(b'{') => return self.container(i, Info::OBJECT, role, visitor),
            Some(b'[') => return self.container(i, Info::ARRAY, role, visitor),
            Some(b'-') => {
                let (end, detail) = number::scan(json, i + 1, true)?;
                (end, Info::NUMBER | detail)
            }
            Some(b'0'..=b'9') => {
                let (end, detail) = number::scan(json, i, false)?;
                (end, Info::NUMBER | detail)
            }
            Some(b't') => (literal::expect_true(json, i + 1)?, Info::TRUE),
            Some(b'f') => (literal::expect_false(json, i + 1)?, Info::FALSE),
            Some(b'n') => (literal::expect_null(json, i + 1)?, Info::NULL),
            _ => return Error::at(ErrKind::InvalidValue, json, i),
        };
        let mut role = role;
        if role.contains(Info::START) {
            role.insert(Info::END);
        }
        Ok(emit(&mut visitor, i, end, info | role))
    }

    /// Opens an object or array at `i`, scans its members and closes it.
    fn container<V>(
        &mut self,
        i: usize,
        kind: Info,
        role: Info,
        mut visitor: Option<&mut V>,
    ) -> Result<Flow, Error>
    where
        V: Visitor + ?Sized,
    {
        if self.depth >= self.max_depth {
            debug!("nesting deeper than {} at {i}", self.max_depth);
            return Error::at(ErrKind::MaxDepthReached, self.json, i);
        }

        let directive = visit(&mut visitor, i, i + 1, kind | Info::OPEN | role);
        if directive == Directive::Stop {
            return Ok(Flow::Stopped(i + 1));
        }
        let nested = if directive == Directive::SkipSubtree {
            trace!("skipping subtree at {i}");
            None
        } else {
            visitor.as_deref_mut()
        };

        self.depth += 1;
        let flow = if kind == Info::OBJECT {
            self.object(i + 1, nested)?
        } else {
            self.array(i + 1, nested)?
        };
        self.depth -= 1;

        let end = match flow {
            Flow::Next(end) => end,
            stopped => return Ok(stopped),
        };
        let mut role = role;
        if role.contains(Info::START) {
            role.remove(Info::START);
            role.insert(Info::END);
        }
        Ok(emit(&mut visitor, end - 1, end, kind | Info::CLOSE | role))
    }

    /// Object members. `i` points just past the `{`.
    fn object<V>(&mut self, i: usize, mut visitor: Option<&mut V>) -> Result<Flow, Error>
    where
        V: Visitor + ?Sized,
    {
        let mut i = self.skip_whitespace(i);
        match self.json.get(i) {
            Some(b'}') => return Ok(Flow::Next(i + 1)),
            Some(b'"') => {}
            _ => return Error::at(ErrKind::ExpectedObjectKey, self.json, i),
        }
        loop {
            // i is at the opening quote of a key
            let (end, detail) = string::scan(self.json, i + 1)?;
            let key = Info::KEY | Info::STRING | detail;
            if let Flow::Stopped(at) = emit(&mut visitor, i, end, key) {
                return Ok(Flow::Stopped(at));
            }

            let colon = self.skip_whitespace(end);
            if self.json.get(colon) != Some(&b':') {
                return Error::at(ErrKind::ExpectedColon, self.json, colon);
            }
            if let Flow::Stopped(at) = emit(&mut visitor, colon, colon + 1, Info::COLON) {
                return Ok(Flow::Stopped(at));
            }

            let end = match self.value(colon + 1, Info::VALUE, visitor.as_deref_mut())? {
                Flow::Next(end) => end,
                stopped => return Ok(stopped),
            };

            let sep = self.skip_whitespace(end);
            match self.json.get(sep) {
                Some(b'}') => return Ok(Flow::Next(sep + 1)),
                Some(b',') => {
                    if let Flow::Stopped(at) = emit(&mut visitor, sep, sep + 1, Info::COMMA) {
                        return Ok(Flow::Stopped(at));
                    }
                }
                _ => return Error::at(ErrKind::ExpectedCommaOrEnd, self.json, sep),
            }

            i = self.skip_whitespace(sep + 1);
            match self.json.get(i) {
                Some(b'"') => {}
                Some(b'}') => return Error::at(ErrKind::TrailingComma, self.json, i),
                _ => return Error::at(ErrKind::ExpectedObjectKey, self.json, i),
            }
        }
    }

    /// Array elements. `i` points just past the `[`.
    fn array<V>(&mut self, i: usize, mut visitor: Option<&mut V>) -> Result<Flow, Error>
    where
        V: Visitor + ?Sized,
    {
        let mut i = self.skip_whitespace(i);
        if self.json.get(i) == Some(&b']') {
            return Ok(Flow::Next(i + 1));
        }
        loop {
            let end = match self.value(i, Info::VALUE, visitor.as_deref_mut())? {
                Flow::Next(end) => end,
                stopped => return Ok(stopped),
            };

            let sep = self.skip_whitespace(end);
            match self.json.get(sep) {
                Some(b']') => return Ok(Flow::Next(sep + 1)),
                Some(b',') => {
                    if let Flow::Stopped(at) = emit(&mut visitor, sep, sep + 1, Info::COMMA) {
                        return Ok(Flow::Stopped(at));
                    }
                }
                _ => return Error::at(ErrKind::ExpectedCommaOrEnd, self.json, sep),
            }

            i = self.skip_whitespace(sep + 1);
            if self.json.get(i) == Some(&b']') {
                return Error::at(ErrKind::TrailingComma, self.json, i);
            }
        }
    }
}

#[inline(always)]
fn visit<V>(visitor: &mut Option<&mut V>, start: usize, end: usize, info: Info) -> Directive
where
    V: Visitor + ?Sized,
{
    match visitor {
        Some(v) => V::visit(v, start, end, info),
        None => Directive::Continue,
    }
}

/// Delivers an event that cannot open a subtree.
#[inline(always)]
fn emit<V>(visitor: &mut Option<&mut V>, start: usize, end: usize, info: Info) -> Flow
where
    V: Visitor + ?Sized,
{
    match visit(visitor, start, end, info) {
        Directive::Stop => Flow::Stopped(end),
        Directive::Continue | Directive::SkipSubtree => Flow::Next(end),
    }
}
