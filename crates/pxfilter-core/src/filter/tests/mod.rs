mod linearize;
mod serialize;

use crate::{
    catalog::BuiltinCatalog,
    error::InternalError,
    expr::{ArrayDatum, Datum, Node},
    filter::serialize_filter_quals,
    obs::{PushdownEvent, PushdownSink},
};
use pxfilter_primitives::Oid;
use std::cell::RefCell;

pub(super) const BOOL: Oid = 16;
pub(super) const INT4: Oid = 23;
pub(super) const TEXT: Oid = 25;
pub(super) const JSON: Oid = 114;
pub(super) const POINT: Oid = 600;
pub(super) const INT4_ARRAY: Oid = 1007;
pub(super) const TEXT_ARRAY: Oid = 1009;
pub(super) const JSON_ARRAY: Oid = 199;

pub(super) const INT4_EQ: Oid = 96;
pub(super) const INT4_LT: Oid = 97;
pub(super) const INT4_GT: Oid = 521;
pub(super) const INT4_NE: Oid = 518;
pub(super) const TEXT_EQ: Oid = 98;
pub(super) const TEXT_LIKE: Oid = 1209;
pub(super) const TEXT_NOT_LIKE: Oid = 1210;
pub(super) const ARRAY_EQ: Oid = 1070;

pub(super) const fn int4_col(attno: i16) -> Node {
    Node::var(attno, INT4)
}

pub(super) const fn text_col(attno: i16) -> Node {
    Node::var(attno, TEXT)
}

pub(super) const fn int4(value: i32) -> Node {
    Node::constant(INT4, Datum::Int4(value))
}

pub(super) fn text(value: &str) -> Node {
    Node::constant(TEXT, Datum::text(value))
}

pub(super) fn int4_list(values: &[i32]) -> Node {
    Node::constant(
        INT4_ARRAY,
        Datum::Array(ArrayDatum::from_values(
            INT4,
            values.iter().copied().map(Datum::Int4),
        )),
    )
}

/// `col<attno> <op> <value>` over int4.
pub(super) fn int4_cmp(opno: Oid, attno: i16, value: i32) -> Node {
    Node::op(opno, int4_col(attno), int4(value))
}

pub(super) fn compile(quals: &[Node]) -> Result<Option<String>, InternalError> {
    serialize_filter_quals(quals, &BuiltinCatalog)
}

///
/// RecordingSink
///

#[derive(Default)]
pub(super) struct RecordingSink {
    pub(super) events: RefCell<Vec<String>>,
}

impl PushdownSink for RecordingSink {
    fn record(&self, event: PushdownEvent<'_>) {
        let label = match event {
            PushdownEvent::FilterCompiled { filter, .. } => format!("compiled:{filter}"),
            PushdownEvent::FilterRejected { rejection } => format!("rejected:{rejection}"),
            PushdownEvent::ProjectionSent { columns } => format!("projection:{columns}"),
            PushdownEvent::ProjectionSkipped { reason } => format!("projection-skipped:{reason}"),
        };
        self.events.borrow_mut().push(label);
    }
}
