// SPDX-License-Identifier: Apache-2.0

use core::ops::Range;

use crate::Info;

/// What the parser should do after delivering an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// Keep scanning.
    Continue,
    /// Abort the whole parse. The parse still succeeds, returning the end
    /// offset of the event that was stopped on.
    Stop,
    /// Only meaningful on an event with [`Info::OPEN`]: validate the
    /// container without reporting anything inside it, then deliver its
    /// closing event. Behaves like [`Directive::Continue`] anywhere else.
    SkipSubtree,
}

impl Directive {
    /// Maps the integer callback protocol: `0` stops, `-1` skips the subtree
    /// and anything else continues.
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Directive::Stop,
            -1 => Directive::SkipSubtree,
            _ => Directive::Continue,
        }
    }

    /// The integer form of this directive: `1`, `0` or `-1`.
    pub const fn code(self) -> i32 {
        match self {
            Directive::Continue => 1,
            Directive::Stop => 0,
            Directive::SkipSubtree => -1,
        }
    }
}

/// Receives every element found by the parser.
///
/// `json[start..end]` is the complete text of the element, and `info`
/// classifies it. Any `FnMut(usize, usize, Info) -> Directive` closure is a
/// visitor.
pub trait Visitor {
    fn visit(&mut self, start: usize, end: usize, info: Info) -> Directive;
}

impl<F> Visitor for F
where
    F: FnMut(usize, usize, Info) -> Directive,
{
    #[inline]
    fn visit(&mut self, start: usize, end: usize, info: Info) -> Directive {
        self(start, end, info)
    }
}

/// One delivered element, for callers that want to record what they saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    pub start: usize,
    pub end: usize,
    pub info: Info,
}

impl Event {
    pub const fn new(start: usize, end: usize, info: Info) -> Self {
        Event { start, end, info }
    }

    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The element's bytes within the parsed document.
    ///
    /// Returns `None` if `json` is not the buffer the event came from and is
    /// too short to contain the range.
    pub fn slice<'a>(&self, json: &'a [u8]) -> Option<&'a [u8]> {
        json.get(self.range())
    }
}
