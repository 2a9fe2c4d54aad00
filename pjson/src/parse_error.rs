// SPDX-License-Identifier: Apache-2.0

use log::debug;

/// Why the input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrKind {
    /// The input buffer was empty.
    EmptyStream,
    /// The input ended where more JSON was required.
    UnexpectedEnd,
    /// A byte that cannot begin a JSON value.
    InvalidValue,
    /// A misspelled `true`, `false` or `null`.
    InvalidLiteral,
    /// Malformed number: missing digits after a sign, a `.` or an exponent.
    InvalidNumber,
    /// A raw byte below 0x20 inside a string.
    UnescapedControlCharacter,
    /// A backslash followed by an unknown escape character.
    InvalidStringEscape,
    /// A `\u` escape without four hex digits.
    InvalidUnicodeEscape,
    ExpectedObjectKey,
    ExpectedColon,
    /// Something other than `,` or the closing bracket after a container member.
    ExpectedCommaOrEnd,
    /// A `,` directly followed by the closing bracket.
    TrailingComma,
    /// Non-whitespace after the top-level value.
    TrailingContent,
    /// Containers nested deeper than the parser allows.
    MaxDepthReached,
}

impl ErrKind {
    const fn message(self) -> &'static str {
        match self {
            ErrKind::EmptyStream => "empty input",
            ErrKind::UnexpectedEnd => "unexpected end of input",
            ErrKind::InvalidValue => "invalid value",
            ErrKind::InvalidLiteral => "invalid literal",
            ErrKind::InvalidNumber => "invalid number",
            ErrKind::UnescapedControlCharacter => "unescaped control character in string",
            ErrKind::InvalidStringEscape => "invalid escape sequence",
            ErrKind::InvalidUnicodeEscape => "invalid unicode escape",
            ErrKind::ExpectedObjectKey => "expected object key",
            ErrKind::ExpectedColon => "expected ':'",
            ErrKind::ExpectedCommaOrEnd => "expected ',' or closing bracket",
            ErrKind::TrailingComma => "trailing comma",
            ErrKind::TrailingContent => "trailing content after document",
            ErrKind::MaxDepthReached => "maximum nesting depth reached",
        }
    }
}

impl core::fmt::Display for ErrKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

/// A grammar violation, located by byte offset.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Error {
    kind: ErrKind,
    character: Option<u8>,
    position: usize,
}

impl Error {
    pub(crate) fn new<T>(kind: ErrKind, character: Option<u8>, position: usize) -> Result<T, Self> {
        debug!("grammar violation: {kind:?} at {position}");
        Err(Self {
            kind,
            character,
            position,
        })
    }

    /// Builds the error for offset `position` of `json`, picking up the byte
    /// found there. Running off the end always reports [`ErrKind::UnexpectedEnd`].
    pub(crate) fn at<T>(kind: ErrKind, json: &[u8], position: usize) -> Result<T, Self> {
        match json.get(position) {
            Some(&byte) => Self::new(kind, Some(byte), position),
            None => Self::new(ErrKind::UnexpectedEnd, None, position),
        }
    }

    pub fn kind(&self) -> ErrKind {
        self.kind
    }

    /// The offending byte, or `None` if the input ended.
    pub fn character(&self) -> Option<u8> {
        self.character
    }

    /// Byte offset at which the violation was detected.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Signed result code: the negated position. An empty input, or a
    /// violation at offset 0, yields `0`.
    pub fn code(&self) -> isize {
        -(self.position as isize)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.character {
            Some(c) => write!(f, "{:?}({:?}) at {}", self.kind, c as char, self.position),
            None => write!(f, "{:?} at {}", self.kind, self.position),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.character {
            Some(c) if c.is_ascii_graphic() => {
                write!(f, "{} '{}' at offset {}", self.kind, c as char, self.position)
            }
            Some(c) => write!(f, "{} (byte 0x{c:02x}) at offset {}", self.kind, self.position),
            None => write!(f, "{} at offset {}", self.kind, self.position),
        }
    }
}

impl core::error::Error for Error {}
