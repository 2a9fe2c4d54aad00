// SPDX-License-Identifier: Apache-2.0

//! Classification bits attached to every event.
//!
//! An [`Info`] carries several independent axes in one integer: the value
//! kind, punctuation, the structural role of the element and some syntax
//! detail about strings and numbers. Sets compare equal only as a whole, so
//! `START | OPEN | OBJECT` is not equal to `OPEN | OBJECT`; use
//! [`Info::contains`] to test for a subset.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A set of classification bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Info(u32);

macro_rules! info_bits {
    ($($(#[$doc:meta])* $name:ident = $shift:expr;)*) => {
        impl Info {
            $(
                $(#[$doc])*
                pub const $name: Info = Info(1 << $shift);
            )*

            /// Every known bit.
            pub const ALL: Info = Info(0 $(| (1 << $shift))*);

            const NAMES: &'static [(Info, &'static str)] = &[
                $((Info::$name, stringify!($name)),)*
            ];
        }
    };
}

info_bits! {
    /// The element is a string.
    STRING = 1;
    /// The element is a number.
    NUMBER = 2;
    /// The element is the literal `true`.
    TRUE = 3;
    /// The element is the literal `false`.
    FALSE = 4;
    /// The element is the literal `null`.
    NULL = 5;
    /// The element is an object brace, `{` or `}`.
    OBJECT = 6;
    /// The element is an array bracket, `[` or `]`.
    ARRAY = 7;
    /// The element is a `,` separator.
    COMMA = 8;
    /// The element is a `:` separator.
    COLON = 9;
    /// The element starts the document.
    START = 10;
    /// The element ends the document.
    END = 11;
    /// The element opens a container.
    OPEN = 12;
    /// The element closes a container.
    CLOSE = 13;
    /// The element is an object key.
    KEY = 14;
    /// The element is an object member value or an array element.
    VALUE = 15;
    /// The string contains at least one backslash escape.
    ESCAPED = 16;
    /// The number has a leading `-`.
    SIGN = 17;
    /// The number has a fraction part.
    DOT = 18;
    /// The number has an exponent part.
    EXPONENT = 19;
}

impl Info {
    /// The empty set.
    pub const NONE: Info = Info(0);

    /// Raw bit value.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Builds a set from raw bits, rejecting unknown bits.
    pub const fn from_bits(bits: u32) -> Option<Info> {
        if bits & !Self::ALL.0 == 0 {
            Some(Info(bits))
        } else {
            None
        }
    }

    /// Builds a set from raw bits, dropping unknown bits.
    pub const fn from_bits_truncate(bits: u32) -> Info {
        Info(bits & Self::ALL.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Info) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any bit of `other` is set in `self`.
    #[inline]
    pub const fn intersects(self, other: Info) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub fn insert(&mut self, other: Info) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: Info) {
        self.0 &= !other.0;
    }
}

impl BitOr for Info {
    type Output = Info;

    #[inline]
    fn bitor(self, rhs: Info) -> Info {
        Info(self.0 | rhs.0)
    }
}

impl BitOrAssign for Info {
    #[inline]
    fn bitor_assign(&mut self, rhs: Info) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Info {
    type Output = Info;

    #[inline]
    fn bitand(self, rhs: Info) -> Info {
        Info(self.0 & rhs.0)
    }
}

impl BitAndAssign for Info {
    #[inline]
    fn bitand_assign(&mut self, rhs: Info) {
        self.0 &= rhs.0;
    }
}

impl Not for Info {
    type Output = Info;

    #[inline]
    fn not(self) -> Info {
        Info(!self.0 & Self::ALL.0)
    }
}

impl From<Info> for u32 {
    fn from(info: Info) -> u32 {
        info.0
    }
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        let mut first = true;
        for (bit, name) in Self::NAMES {
            if self.contains(*bit) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Info({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_values_are_stable() {
        assert_eq!(Info::STRING.bits(), 2);
        assert_eq!(Info::NUMBER.bits(), 4);
        assert_eq!(Info::OBJECT.bits(), 64);
        assert_eq!(Info::COMMA.bits(), 256);
        assert_eq!(Info::START.bits(), 1024);
        assert_eq!(Info::VALUE.bits(), 32768);
        assert_eq!(Info::EXPONENT.bits(), 524288);
        assert_eq!(Info::ALL.bits(), 0x000F_FFFE);
    }

    #[test]
    fn test_whole_value_equality() {
        let root_open = Info::START | Info::OPEN | Info::OBJECT;
        assert_eq!(root_open, Info::OBJECT | Info::OPEN | Info::START);
        assert_ne!(root_open, Info::OPEN | Info::OBJECT);
        assert!(root_open.contains(Info::OPEN | Info::OBJECT));
        assert!(!root_open.contains(Info::OPEN | Info::ARRAY));
        assert!(root_open.intersects(Info::OPEN | Info::ARRAY));
    }

    #[test]
    fn test_insert_remove() {
        let mut info = Info::START | Info::VALUE;
        info.remove(Info::START);
        info.insert(Info::END);
        assert_eq!(info, Info::END | Info::VALUE);
        assert_eq!(!Info::ALL, Info::NONE);
        assert_eq!((Info::KEY | Info::STRING) & !Info::KEY, Info::STRING);
    }

    #[test]
    fn test_from_bits() {
        assert_eq!(Info::from_bits(2 | 1024), Some(Info::STRING | Info::START));
        assert_eq!(Info::from_bits(1), None);
        assert_eq!(Info::from_bits(1 << 20), None);
        assert_eq!(Info::from_bits_truncate(1 | 4), Info::NUMBER);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", Info::START | Info::OPEN | Info::OBJECT),
            "OBJECT | START | OPEN"
        );
        assert_eq!(format!("{:?}", Info::COLON), "Info(COLON)");
        assert_eq!(format!("{}", Info::NONE), "NONE");
    }
}
