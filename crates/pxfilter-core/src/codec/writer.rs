use crate::{
    codec::Tag,
    expr::{AttrNumber, BoolOp},
    operator::PushdownOp,
};
use pxfilter_primitives::Oid;

///
/// FilterWriter
///
/// Append-only builder for filter text. Sized values are measured in
/// bytes, so multi-byte UTF-8 text round-trips.
///

#[derive(Clone, Debug, Default)]
pub struct FilterWriter {
    buf: String,
}

impl FilterWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: String::new() }
    }

    /// `a<attno - 1>`: columns go on the wire zero-based.
    pub fn attribute(&mut self, attno: AttrNumber) {
        self.push_number(Tag::Attribute, i32::from(attno) - 1);
    }

    /// `c<type>s<len>d<text>`
    pub fn scalar(&mut self, type_oid: Oid, text: &str) {
        self.push_number(Tag::ScalarConst, type_oid);
        self.sized(text);
    }

    /// `m<type>` followed by pre-rendered `s<len>d<text>` elements.
    pub fn list(&mut self, type_oid: Oid, elements: &str) {
        self.push_number(Tag::ListConst, type_oid);
        self.buf.push_str(elements);
    }

    /// `s<len>d<text>`
    pub fn sized(&mut self, text: &str) {
        self.push_number(Tag::Size, text.len());
        self.buf.push(Tag::Data.as_char());
        self.buf.push_str(text);
    }

    /// `o<code>`
    pub fn operator(&mut self, op: PushdownOp) {
        self.push_number(Tag::Operator, op.code());
    }

    /// `l<code>`
    pub fn logical(&mut self, op: BoolOp) {
        self.push_number(Tag::Logical, op.code());
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }

    fn push_number(&mut self, tag: Tag, number: impl ToString) {
        self.buf.push(tag.as_char());
        self.buf.push_str(&number.to_string());
    }
}
