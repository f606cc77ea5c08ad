use crate::{codec::Tag, expr::BoolOp, operator::PushdownOp};
use pxfilter_primitives::Oid;
use serde::Serialize;
use thiserror::Error as ThisError;

///
/// Token
///
/// One decoded wire element, in postfix order.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "token", rename_all = "snake_case")]
pub enum Token {
    /// Zero-based column index.
    Attribute { index: usize },
    ScalarConst { type_oid: Oid, value: String },
    ListConst { type_oid: Oid, values: Vec<String> },
    Operator { op: PushdownOp },
    Logical { op: BoolOp },
}

///
/// DecodeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DecodeError {
    #[error("filter is empty")]
    Empty,

    #[error("unexpected end of filter at byte {at}, expected {expected}")]
    UnexpectedEnd { at: usize, expected: &'static str },

    #[error("unexpected byte {found:?} at {at}, expected {expected}")]
    UnexpectedByte {
        at: usize,
        found: char,
        expected: &'static str,
    },

    #[error("number at byte {at} is out of range")]
    NumberOutOfRange { at: usize },

    #[error("constant data at byte {at} is not valid UTF-8")]
    InvalidUtf8 { at: usize },

    #[error("unknown operator code {code} at byte {at}")]
    UnknownOperator { at: usize, code: u64 },

    #[error("unknown logical operator code {code} at byte {at}")]
    UnknownLogical { at: usize, code: u64 },
}

/// Split filter text into tokens without checking postfix balance.
pub fn decode(filter: &str) -> Result<Vec<Token>, DecodeError> {
    if filter.is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut cursor = Cursor::new(filter.as_bytes());
    let mut tokens = Vec::new();
    while !cursor.is_done() {
        tokens.push(cursor.token()?);
    }

    Ok(tokens)
}

///
/// Cursor
///

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    const fn is_done(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn token(&mut self) -> Result<Token, DecodeError> {
        let at = self.pos;
        let Some(byte) = self.peek() else {
            return Err(DecodeError::UnexpectedEnd {
                at,
                expected: "a tag",
            });
        };
        let tag = Tag::from_byte(byte).ok_or(DecodeError::UnexpectedByte {
            at,
            found: char::from(byte),
            expected: "one of a, c, m, o, l",
        })?;
        self.pos += 1;

        match tag {
            Tag::Attribute => Ok(Token::Attribute {
                index: self.number()?,
            }),
            Tag::ScalarConst => {
                let type_oid = self.number()?;
                self.expect(Tag::Size)?;
                let value = self.sized()?;

                Ok(Token::ScalarConst { type_oid, value })
            }
            Tag::ListConst => {
                let type_oid = self.number()?;
                let mut values = Vec::new();
                while self.peek() == Some(Tag::Size as u8) {
                    self.pos += 1;
                    values.push(self.sized()?);
                }

                Ok(Token::ListConst { type_oid, values })
            }
            Tag::Operator => {
                let code: u64 = self.number()?;
                let op = u8::try_from(code)
                    .ok()
                    .and_then(PushdownOp::from_code)
                    .ok_or(DecodeError::UnknownOperator { at, code })?;

                Ok(Token::Operator { op })
            }
            Tag::Logical => {
                let code: u64 = self.number()?;
                let op = u8::try_from(code)
                    .ok()
                    .and_then(BoolOp::from_code)
                    .ok_or(DecodeError::UnknownLogical { at, code })?;

                Ok(Token::Logical { op })
            }
            Tag::Size | Tag::Data => Err(DecodeError::UnexpectedByte {
                at,
                found: char::from(byte),
                expected: "one of a, c, m, o, l",
            }),
        }
    }

    fn expect(&mut self, tag: Tag) -> Result<(), DecodeError> {
        let expected = match tag {
            Tag::Size => "'s'",
            Tag::Data => "'d'",
            _ => "a tag",
        };
        match self.peek() {
            Some(byte) if byte == tag as u8 => {
                self.pos += 1;
                Ok(())
            }
            Some(byte) => Err(DecodeError::UnexpectedByte {
                at: self.pos,
                found: char::from(byte),
                expected,
            }),
            None => Err(DecodeError::UnexpectedEnd {
                at: self.pos,
                expected,
            }),
        }
    }

    /// `<len>d<bytes>` after an already consumed `s`.
    fn sized(&mut self) -> Result<String, DecodeError> {
        let len: usize = self.number()?;
        self.expect(Tag::Data)?;

        let start = self.pos;
        let end = start
            .checked_add(len)
            .filter(|end| *end <= self.bytes.len())
            .ok_or(DecodeError::UnexpectedEnd {
                at: self.bytes.len(),
                expected: "constant data",
            })?;
        let text = std::str::from_utf8(&self.bytes[start..end])
            .map_err(|_| DecodeError::InvalidUtf8 { at: start })?;
        self.pos = end;

        Ok(text.to_string())
    }

    fn number<N: TryFrom<u64>>(&mut self) -> Result<N, DecodeError> {
        let at = self.pos;
        let digits = self.bytes[at..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count();

        if digits == 0 {
            return match self.peek() {
                Some(byte) => Err(DecodeError::UnexpectedByte {
                    at,
                    found: char::from(byte),
                    expected: "a digit",
                }),
                None => Err(DecodeError::UnexpectedEnd {
                    at,
                    expected: "a digit",
                }),
            };
        }

        let mut value: u64 = 0;
        for byte in &self.bytes[at..at + digits] {
            value = value
                .checked_mul(10)
                .and_then(|value| value.checked_add(u64::from(byte - b'0')))
                .ok_or(DecodeError::NumberOutOfRange { at })?;
        }
        self.pos += digits;

        N::try_from(value).map_err(|_| DecodeError::NumberOutOfRange { at })
    }
}
