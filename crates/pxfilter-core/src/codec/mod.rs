//! Module: codec
//! Responsibility: the postfix filter wire format, in both directions.
//! Does not own: deciding what gets encoded (see `filter`).
//! Boundary: `FilterWriter` is the only producer of filter text;
//! `decode`/`FilterTree` read it back for inspection and tests.

mod decode;
mod tree;
mod writer;

#[cfg(test)]
mod tests;

pub use decode::{DecodeError, Token, decode};
pub use tree::{FilterOperand, FilterTree, TreeError};
pub use writer::FilterWriter;

/// Constant text marking SQL NULL.
pub const NULL_VALUE: &str = "NULL";

/// Canonical boolean constant texts.
pub const TRUE_VALUE: &str = "true";
pub const FALSE_VALUE: &str = "false";

///
/// Tag
///
/// Single-byte prefix introducing each wire element.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Tag {
    Attribute = b'a',
    ScalarConst = b'c',
    ListConst = b'm',
    Size = b's',
    Data = b'd',
    Operator = b'o',
    Logical = b'l',
}

impl Tag {
    #[must_use]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }

    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'a' => Some(Self::Attribute),
            b'c' => Some(Self::ScalarConst),
            b'm' => Some(Self::ListConst),
            b's' => Some(Self::Size),
            b'd' => Some(Self::Data),
            b'o' => Some(Self::Operator),
            b'l' => Some(Self::Logical),
            _ => None,
        }
    }
}
